use crate::{
    errors::IntelError,
    executor::GroundedQueryExecutor,
    intel::IntelReport,
    prompts::intel::{DEFAULT_PROMISE_QUERY, PROMISE_VERIFICATION_PROMPT},
    schema::Schema,
    types::QueryRequest,
};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifiedPromise {
    pub title: String,
    pub description: String,
    pub authority: String,
    pub party: String,
    pub status: String,
    pub category: String,
    pub source_url: String,
}

pub fn promises_schema() -> Schema {
    Schema::array(Schema::object(
        [
            ("title", Schema::string()),
            ("description", Schema::string()),
            ("authority", Schema::string()),
            ("party", Schema::string()),
            ("status", Schema::string()),
            ("category", Schema::string()),
            ("sourceUrl", Schema::string()),
        ],
        &[
            "title",
            "description",
            "authority",
            "party",
            "status",
            "category",
            "sourceUrl",
        ],
    ))
}

/// Searches for political promises and their verification sources.
///
/// `query` defaults to the latest manifestos when `None` or blank.
pub async fn fetch_and_verify_promises(
    executor: &GroundedQueryExecutor,
    query: Option<&str>,
) -> Result<IntelReport<Vec<VerifiedPromise>>, IntelError> {
    let query = query
        .filter(|q| !q.trim().is_empty())
        .unwrap_or(DEFAULT_PROMISE_QUERY);
    info!(query, "Verifying political promises.");
    let request = QueryRequest::new(PROMISE_VERIFICATION_PROMPT.replace("{query}", query))
        .with_schema(promises_schema())
        .grounded();
    let result = executor.execute(&request).await?;
    Ok(IntelReport::from_result(result.decode_list(), result))
}
