//! Leader discovery, profiles and legal-standing checks.

use crate::{
    errors::IntelError,
    executor::GroundedQueryExecutor,
    intel::TextAnswer,
    prompts::{
        intel::{
            COMPARE_LEADERS_PROMPT, DISCOVER_BATCH_LEADERS_PROMPT, LEADER_LEGAL_STANDING_PROMPT,
            LEADER_PROFILE_PROMPT,
        },
        render,
    },
    schema::Schema,
    types::{Citation, QueryRequest},
};
use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderLegalStanding {
    pub total_cases: f64,
    pub serious_criminal_cases: f64,
    pub jail_history: String,
    pub corruption_allegations: Vec<String>,
    pub justification: String,
    /// Stamped locally when the report is fetched.
    #[serde(default)]
    pub last_updated: String,
    #[serde(default)]
    pub verification_sources: Vec<Citation>,
}

pub fn legal_standing_schema() -> Schema {
    Schema::object(
        [
            ("totalCases", Schema::number()),
            ("seriousCriminalCases", Schema::number()),
            ("jailHistory", Schema::string()),
            ("corruptionAllegations", Schema::array(Schema::string())),
            ("justification", Schema::string()),
        ],
        &[
            "totalCases",
            "seriousCriminalCases",
            "jailHistory",
            "corruptionAllegations",
            "justification",
        ],
    )
}

/// Researches a leader's criminal cases and corruption allegations.
///
/// Returns `None` when the backend produced no usable data.
pub async fn fetch_leader_legal_standing(
    executor: &GroundedQueryExecutor,
    name: &str,
    constituency: &str,
) -> Result<Option<LeaderLegalStanding>, IntelError> {
    info!(leader = name, "Fetching leader legal standing.");
    let prompt = render(
        LEADER_LEGAL_STANDING_PROMPT,
        &[("name", name), ("constituency", constituency)],
    );
    let request = QueryRequest::new(prompt)
        .with_schema(legal_standing_schema())
        .grounded();
    let result = executor.execute(&request).await?;

    Ok(result
        .decode::<LeaderLegalStanding>()
        .map(|standing| LeaderLegalStanding {
            last_updated: Local::now().format("%-d/%-m/%Y").to_string(),
            verification_sources: result.sources.clone(),
            ..standing
        }))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveredLeader {
    pub name: String,
    pub role: String,
    pub party: String,
    pub constituency: String,
    pub state: String,
    pub since_year: f64,
}

pub fn discovered_leaders_schema() -> Schema {
    Schema::array(Schema::object(
        [
            ("name", Schema::string()),
            ("role", Schema::string()),
            ("party", Schema::string()),
            ("constituency", Schema::string()),
            ("state", Schema::string()),
            ("sinceYear", Schema::number()),
        ],
        &[
            "name",
            "role",
            "party",
            "constituency",
            "state",
            "sinceYear",
        ],
    ))
}

/// Finds prominent MPs or MLAs that are not already in `excluded`.
pub async fn discover_batch_leaders(
    executor: &GroundedQueryExecutor,
    excluded: &[String],
) -> Result<Vec<DiscoveredLeader>, IntelError> {
    info!(excluded = excluded.len(), "Discovering new leaders.");
    let prompt = DISCOVER_BATCH_LEADERS_PROMPT.replace("{excluded}", &excluded.join(", "));
    let request = QueryRequest::new(prompt)
        .with_schema(discovered_leaders_schema())
        .grounded();
    let result = executor.execute(&request).await?;
    Ok(result.decode_list())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderProfile {
    pub name: String,
    pub role: String,
    pub party: String,
    pub constituency: String,
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bills: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debates: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub questions: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub since_year: Option<f64>,
}

pub fn leader_profile_schema() -> Schema {
    Schema::object(
        [
            ("name", Schema::string()),
            ("role", Schema::string()),
            ("party", Schema::string()),
            ("constituency", Schema::string()),
            ("state", Schema::string()),
            ("attendance", Schema::number()),
            ("bills", Schema::number()),
            ("debates", Schema::number()),
            ("questions", Schema::number()),
            ("sinceYear", Schema::number()),
        ],
        &["name", "role", "party", "constituency", "state"],
    )
}

/// Looks up the official political profile of a named leader.
pub async fn discover_leader_profile(
    executor: &GroundedQueryExecutor,
    name: &str,
) -> Result<Option<LeaderProfile>, IntelError> {
    info!(leader = name, "Discovering leader profile.");
    let request = QueryRequest::new(LEADER_PROFILE_PROMPT.replace("{name}", name))
        .with_schema(leader_profile_schema())
        .grounded();
    let result = executor.execute(&request).await?;
    Ok(result.decode())
}

/// Answers a free-form question about leaders with web grounding.
pub async fn search_leader_info(
    executor: &GroundedQueryExecutor,
    query: &str,
) -> Result<TextAnswer, IntelError> {
    let request = QueryRequest::new(query).grounded();
    Ok(executor.execute(&request).await?.into())
}

/// Produces a grounded side-by-side comparison of two leaders.
pub async fn compare_leaders(
    executor: &GroundedQueryExecutor,
    first: &str,
    second: &str,
) -> Result<TextAnswer, IntelError> {
    info!(first, second, "Comparing leaders.");
    let prompt = render(COMPARE_LEADERS_PROMPT, &[("first", first), ("second", second)]);
    let request = QueryRequest::new(prompt).grounded();
    Ok(executor.execute(&request).await?.into())
}
