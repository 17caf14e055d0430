//! # Citation Adapters
//!
//! Each backend reports its sources in its own shape. These adapters map them
//! onto the shared `Citation` type so backend-specific fields never leak into
//! `QueryResult`.

use crate::{
    providers::{ai::GroundingChunk, search::OrganicResult},
    types::Citation,
};

/// Web citations from grounding metadata.
///
/// Chunks without a web reference, or whose reference lacks a non-empty
/// title or URI, are dropped. The order of the remaining chunks is kept.
pub fn from_grounding_chunks(chunks: &[GroundingChunk]) -> Vec<Citation> {
    chunks
        .iter()
        .filter_map(|chunk| chunk.web.as_ref())
        .filter_map(|web| {
            let uri = web.uri.as_deref().filter(|u| !u.is_empty())?;
            let title = web.title.as_deref().filter(|t| !t.is_empty())?;
            Some(Citation {
                title: title.to_string(),
                uri: uri.to_string(),
            })
        })
        .collect()
}

/// Map-place citations from grounding metadata.
///
/// Only the URI is mandatory; a missing title is replaced by `default_title`.
pub fn from_map_chunks(chunks: &[GroundingChunk], default_title: &str) -> Vec<Citation> {
    chunks
        .iter()
        .filter_map(|chunk| chunk.maps.as_ref())
        .filter_map(|maps| {
            let uri = maps.uri.as_deref().filter(|u| !u.is_empty())?;
            let title = maps
                .title
                .as_deref()
                .filter(|t| !t.is_empty())
                .unwrap_or(default_title);
            Some(Citation {
                title: title.to_string(),
                uri: uri.to_string(),
            })
        })
        .collect()
}

/// One citation per organic search result, title and link taken verbatim.
pub fn from_organic_results(results: &[OrganicResult]) -> Vec<Citation> {
    results
        .iter()
        .map(|r| Citation {
            title: r.title.clone(),
            uri: r.link.clone(),
        })
        .collect()
}
