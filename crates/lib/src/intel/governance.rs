//! National and state governance briefings.

use crate::{
    errors::IntelError,
    executor::GroundedQueryExecutor,
    intel::IntelReport,
    prompts::intel::{NATIONAL_INTELLIGENCE_PROMPT, STATE_INTELLIGENCE_PROMPT},
    schema::Schema,
    types::QueryRequest,
};
use serde::{Deserialize, Serialize};
use tracing::info;

// --- National ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scheme {
    pub title: String,
    pub status: String,
    pub impact: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParliamentEvent {
    pub event: String,
    pub description: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NationalProject {
    pub project: String,
    pub progress: f64,
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CabinetDecision {
    pub ministry: String,
    pub decision: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactSummary {
    pub summary: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NationalIntel {
    pub schemes: Vec<Scheme>,
    pub parliament: Vec<ParliamentEvent>,
    pub infrastructure: Vec<NationalProject>,
    pub decisions: Vec<CabinetDecision>,
    pub impact: ImpactSummary,
}

pub fn national_schema() -> Schema {
    Schema::object(
        [
            (
                "schemes",
                Schema::array(Schema::object(
                    [
                        ("title", Schema::string()),
                        ("status", Schema::string()),
                        ("impact", Schema::string()),
                    ],
                    &["title", "status", "impact"],
                )),
            ),
            (
                "parliament",
                Schema::array(Schema::object(
                    [
                        ("event", Schema::string()),
                        ("description", Schema::string()),
                        ("date", Schema::string()),
                    ],
                    &["event", "description", "date"],
                )),
            ),
            (
                "infrastructure",
                Schema::array(Schema::object(
                    [
                        ("project", Schema::string()),
                        ("progress", Schema::number()),
                        ("details", Schema::string()),
                    ],
                    &["project", "progress", "details"],
                )),
            ),
            (
                "decisions",
                Schema::array(Schema::object(
                    [
                        ("ministry", Schema::string()),
                        ("decision", Schema::string()),
                    ],
                    &["ministry", "decision"],
                )),
            ),
            (
                "impact",
                Schema::object(
                    [
                        ("summary", Schema::string()),
                        ("highlights", Schema::array(Schema::string())),
                    ],
                    &["summary", "highlights"],
                ),
            ),
        ],
        &[
            "schemes",
            "parliament",
            "infrastructure",
            "decisions",
            "impact",
        ],
    )
}

/// Fetches today's Central Government briefing.
pub async fn fetch_national_intelligence(
    executor: &GroundedQueryExecutor,
) -> Result<IntelReport<Option<NationalIntel>>, IntelError> {
    info!("Fetching national intelligence.");
    let request = QueryRequest::new(NATIONAL_INTELLIGENCE_PROMPT)
        .with_schema(national_schema())
        .grounded();
    let result = executor.execute(&request).await?;
    Ok(IntelReport::from_result(result.decode(), result))
}

// --- State ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Initiative {
    pub title: String,
    pub status: String,
    pub citizen_impact: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentPerformance {
    pub department: String,
    pub score: f64,
    pub status: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateProject {
    pub project: String,
    pub progress: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_reason: Option<String>,
    pub impact: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyOverview {
    pub overview: String,
    pub alerts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalIssue {
    pub issue: String,
    pub ward: String,
    pub urgency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateIntel {
    pub initiatives: Vec<Initiative>,
    pub performance: DepartmentPerformance,
    pub infrastructure: Vec<StateProject>,
    pub safety: SafetyOverview,
    pub local_issues: Vec<LocalIssue>,
}

pub fn state_schema() -> Schema {
    Schema::object(
        [
            (
                "initiatives",
                Schema::array(Schema::object(
                    [
                        ("title", Schema::string()),
                        ("status", Schema::string()),
                        ("citizenImpact", Schema::string()),
                    ],
                    &["title", "status", "citizenImpact"],
                )),
            ),
            (
                "performance",
                Schema::object(
                    [
                        ("department", Schema::string()),
                        ("score", Schema::number()),
                        ("status", Schema::string()),
                        ("summary", Schema::string()),
                    ],
                    &["department", "score", "status", "summary"],
                ),
            ),
            (
                "infrastructure",
                Schema::array(Schema::object(
                    [
                        ("project", Schema::string()),
                        ("progress", Schema::number()),
                        ("delayReason", Schema::string()),
                        ("impact", Schema::string()),
                    ],
                    &["project", "progress", "impact"],
                )),
            ),
            (
                "safety",
                Schema::object(
                    [
                        ("overview", Schema::string()),
                        ("alerts", Schema::array(Schema::string())),
                    ],
                    &["overview", "alerts"],
                ),
            ),
            (
                "localIssues",
                Schema::array(Schema::object(
                    [
                        ("issue", Schema::string()),
                        ("ward", Schema::string()),
                        ("urgency", Schema::string()),
                    ],
                    &["issue", "ward", "urgency"],
                )),
            ),
        ],
        &[
            "initiatives",
            "performance",
            "infrastructure",
            "safety",
            "localIssues",
        ],
    )
}

/// Fetches today's governance briefing for one state.
pub async fn fetch_state_intelligence(
    executor: &GroundedQueryExecutor,
    state_name: &str,
) -> Result<IntelReport<Option<StateIntel>>, IntelError> {
    info!(state = state_name, "Fetching state intelligence.");
    let request = QueryRequest::new(STATE_INTELLIGENCE_PROMPT.replace("{state}", state_name))
        .with_schema(state_schema())
        .grounded();
    let result = executor.execute(&request).await?;
    Ok(IntelReport::from_result(result.decode(), result))
}
