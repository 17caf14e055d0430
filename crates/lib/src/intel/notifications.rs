//! Civic notifications and dashboard insights.

use crate::{
    errors::IntelError,
    executor::GroundedQueryExecutor,
    prompts::{
        intel::{CIVIC_NOTIFICATIONS_PROMPT, DASHBOARD_INSIGHTS_PROMPT, FOLLOWED_LEADERS_CLAUSE},
        render,
    },
    schema::Schema,
    types::QueryRequest,
};
use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CivicNotification {
    /// Assigned locally; the backend never supplies it.
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub message: String,
    pub category: String,
    pub urgency: Urgency,
    pub source: String,
    pub timestamp: String,
    #[serde(default)]
    pub read: bool,
}

/// Who the notifications are for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationContext {
    /// Defaults to all of India when unset.
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub followed_leaders: Vec<String>,
}

pub fn notifications_schema() -> Schema {
    Schema::array(Schema::object(
        [
            ("title", Schema::string()),
            ("message", Schema::string()),
            ("category", Schema::string()),
            ("urgency", Schema::string_enum(&["low", "medium", "high"])),
            ("source", Schema::string()),
            ("timestamp", Schema::string()),
        ],
        &[
            "title",
            "message",
            "category",
            "urgency",
            "source",
            "timestamp",
        ],
    ))
}

pub(crate) fn notifications_prompt(context: &NotificationContext, date: &str) -> String {
    let region = context
        .state
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or("India");
    let mut prompt = render(
        CIVIC_NOTIFICATIONS_PROMPT,
        &[("region", region), ("date", date)],
    );
    if !context.followed_leaders.is_empty() {
        prompt.push_str(
            &FOLLOWED_LEADERS_CLAUSE.replace("{leaders}", &context.followed_leaders.join(", ")),
        );
    }
    prompt
}

/// Generates current civic notifications. Each one gets a fresh id and
/// starts unread.
pub async fn fetch_civic_notifications(
    executor: &GroundedQueryExecutor,
    context: &NotificationContext,
) -> Result<Vec<CivicNotification>, IntelError> {
    let date = Local::now().format("%-d/%-m/%Y").to_string();
    let request = QueryRequest::new(notifications_prompt(context, &date))
        .with_schema(notifications_schema())
        .grounded();
    info!(state = ?context.state, "Fetching civic notifications.");
    let result = executor.execute(&request).await?;

    let notifications: Vec<CivicNotification> = result.decode_list();
    Ok(notifications
        .into_iter()
        .map(|n| CivicNotification {
            id: Uuid::new_v4().simple().to_string(),
            read: false,
            ..n
        })
        .collect())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub topic: String,
    pub summary: String,
}

pub fn insights_schema() -> Schema {
    Schema::array(Schema::object(
        [("topic", Schema::string()), ("summary", Schema::string())],
        &["topic", "summary"],
    ))
}

/// Short civic service insights for the dashboard greeting.
///
/// This call is not grounded, so a primary failure is returned to the caller.
pub async fn dashboard_insights(
    executor: &GroundedQueryExecutor,
    user_name: &str,
) -> Result<Vec<Insight>, IntelError> {
    let request = QueryRequest::new(DASHBOARD_INSIGHTS_PROMPT.replace("{user}", user_name))
        .with_schema(insights_schema());
    let result = executor.execute(&request).await?;
    Ok(result.decode_list())
}
