//! Maps-grounded location lookups.
//!
//! These never fail: a backend error degrades to a placeholder answer, since
//! they only decorate complaint and dashboard views.

use crate::{
    executor::GroundedQueryExecutor,
    prompts::intel::{NEARBY_CIVIC_SERVICES_PROMPT, PLACE_SEARCH_PROMPT},
    providers::ai::LatLng,
    types::Citation,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Text shown when a place lookup could not be served.
pub const PLACE_LOOKUP_UNAVAILABLE: &str = "Location lookup limited.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceLookup {
    pub text: String,
    pub links: Vec<Citation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyService {
    pub name: String,
    pub link: String,
}

/// Finds official map details for a free-text place query.
pub async fn search_place(
    executor: &GroundedQueryExecutor,
    query: &str,
    location: Option<LatLng>,
) -> PlaceLookup {
    let prompt = PLACE_SEARCH_PROMPT.replace("{query}", query);
    match executor.generate_with_maps(&prompt, location, "Location").await {
        Ok(result) => PlaceLookup {
            text: result.raw_text,
            links: result.sources,
        },
        Err(e) => {
            warn!("Place lookup failed: {e}");
            PlaceLookup {
                text: PLACE_LOOKUP_UNAVAILABLE.to_string(),
                links: Vec::new(),
            }
        }
    }
}

/// Lists civic services near `location`; empty on failure.
pub async fn find_nearby_civic_services(
    executor: &GroundedQueryExecutor,
    location: LatLng,
) -> Vec<NearbyService> {
    match executor
        .generate_with_maps(NEARBY_CIVIC_SERVICES_PROMPT, Some(location), "Service")
        .await
    {
        Ok(result) => result
            .sources
            .into_iter()
            .map(|c| NearbyService {
                name: c.title,
                link: c.uri,
            })
            .collect(),
        Err(e) => {
            warn!("Nearby services lookup failed: {e}");
            Vec::new()
        }
    }
}
