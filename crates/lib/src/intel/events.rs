use crate::{
    errors::IntelError,
    executor::GroundedQueryExecutor,
    intel::IntelReport,
    prompts::intel::LIVE_EVENTS_PROMPT,
    schema::Schema,
    types::QueryRequest,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveEvent {
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    /// One of `Live`, `Upcoming`, `Completed` or `Ongoing`, as reported.
    pub status: String,
    pub date: String,
    pub time: String,
    #[serde(default)]
    pub views: f64,
    pub highlights: Vec<String>,
}

pub fn live_events_schema() -> Schema {
    Schema::array(Schema::object(
        [
            ("id", Schema::string()),
            ("title", Schema::string()),
            ("description", Schema::string()),
            ("category", Schema::string()),
            ("status", Schema::string()),
            ("date", Schema::string()),
            ("time", Schema::string()),
            ("views", Schema::number()),
            ("highlights", Schema::array(Schema::string())),
        ],
        &[
            "title",
            "description",
            "category",
            "status",
            "date",
            "time",
            "highlights",
        ],
    ))
}

/// Lists today's significant political events. Events without an id get one.
pub async fn fetch_live_events(
    executor: &GroundedQueryExecutor,
) -> Result<IntelReport<Vec<LiveEvent>>, IntelError> {
    info!("Fetching live political events.");
    let request = QueryRequest::new(LIVE_EVENTS_PROMPT)
        .with_schema(live_events_schema())
        .grounded();
    let result = executor.execute(&request).await?;

    let events: Vec<LiveEvent> = result.decode_list();
    let events = events
        .into_iter()
        .map(|mut event| {
            if event.id.trim().is_empty() {
                event.id = Uuid::new_v4().simple().to_string();
            }
            event
        })
        .collect();
    Ok(IntelReport::from_result(events, result))
}
