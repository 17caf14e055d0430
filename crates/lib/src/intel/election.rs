use crate::{
    errors::IntelError,
    executor::GroundedQueryExecutor,
    intel::IntelReport,
    prompts::intel::ELECTION_INTELLIGENCE_PROMPT,
    schema::Schema,
    types::QueryRequest,
};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElectionStatus {
    Upcoming,
    Ongoing,
    Past,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatResult {
    pub party: String,
    pub seats: f64,
    pub total_seats: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectionRecord {
    pub id: String,
    pub title: String,
    pub status: ElectionStatus,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub results: Vec<SeatResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectionTrend {
    pub party: String,
    pub current_sentiment: f64,
    pub predicted_seats: f64,
    pub past_seats: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectionIntelligence {
    pub records: Vec<ElectionRecord>,
    pub trends: Vec<ElectionTrend>,
}

pub fn election_schema() -> Schema {
    let seat_result = Schema::object(
        [
            ("party", Schema::string()),
            ("seats", Schema::number()),
            ("totalSeats", Schema::number()),
            ("color", Schema::string()),
        ],
        &["party", "seats", "totalSeats", "color"],
    );
    let record = Schema::object(
        [
            ("id", Schema::string()),
            ("title", Schema::string()),
            (
                "status",
                Schema::string_enum(&["Upcoming", "Ongoing", "Past"]),
            ),
            ("date", Schema::string()),
            ("type", Schema::string()),
            ("location", Schema::string()),
            ("description", Schema::string()),
            ("results", Schema::array(seat_result)),
        ],
        &[
            "id",
            "title",
            "status",
            "date",
            "type",
            "location",
            "description",
        ],
    );
    let trend = Schema::object(
        [
            ("party", Schema::string()),
            ("currentSentiment", Schema::number()),
            ("predictedSeats", Schema::number()),
            ("pastSeats", Schema::number()),
        ],
        &["party", "currentSentiment", "predictedSeats", "pastSeats"],
    );
    Schema::object(
        [
            ("records", Schema::array(record)),
            ("trends", Schema::array(trend)),
        ],
        &["records", "trends"],
    )
}

/// Fetches live election records and party seat trends.
pub async fn fetch_election_intelligence(
    executor: &GroundedQueryExecutor,
) -> Result<IntelReport<Option<ElectionIntelligence>>, IntelError> {
    info!("Fetching election intelligence.");
    let request = QueryRequest::new(ELECTION_INTELLIGENCE_PROMPT)
        .with_schema(election_schema())
        .grounded();
    let result = executor.execute(&request).await?;
    Ok(IntelReport::from_result(result.decode(), result))
}
