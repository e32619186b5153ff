//! The remote search collaborator interface.
//!
//! The widget never talks to the network itself; it is handed an
//! implementation of [`SearchClient`] at construction. Tests substitute a
//! fake through the same parameter.

use async_trait::async_trait;
use docbar_hits::Hit;
use serde::Deserialize;

use crate::{config::SearchOptions, error::SearchError};

/// A raw response from the search backend.
///
/// Unknown response fields are ignored; only the hit list matters to the
/// formatting pipeline. The metadata fields are carried for observation
/// callbacks.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// The raw hits, in backend ranking order.
    #[serde(default)]
    pub hits: Vec<Hit>,
    /// The query the backend actually evaluated.
    #[serde(default)]
    pub query: String,
    /// Backend-side processing time, in milliseconds.
    #[serde(default)]
    pub processing_time_ms: u64,
    /// Estimated total number of matching documents, when reported.
    #[serde(default)]
    pub estimated_total_hits: Option<u64>,
}

/// An opaque asynchronous search backend.
///
/// One request per call; retry, timeout and cancellation are the
/// implementation's concern, never this crate's. Errors propagate to the
/// caller untouched.
#[async_trait]
pub trait SearchClient: Send + Sync {
    /// Runs `query` against `index_uid` with the given options.
    async fn search(
        &self,
        index_uid: &str,
        query: &str,
        options: &SearchOptions,
    ) -> Result<SearchResponse, SearchError>;
}
