//! The query source adapter.
//!
//! Wraps the remote search call for the autocomplete layer: applies the
//! optional query rewrite hook, issues exactly one request, hands the raw
//! response to the observation callback, applies the optional result
//! transform, and feeds the hits through the formatting pipeline. Debouncing
//! belongs to the external autocomplete layer, not here.

use std::sync::Arc;

use docbar_hits::{DisplayHit, Hit, format_hits};

use crate::{
    client::{SearchClient, SearchResponse},
    config::SearchOptions,
    error::SourceError,
};

/// Rewrites the query before it is sent. A `None` or empty return keeps the
/// original query.
pub type QueryHook = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Post-processes the raw hit list. A `None` return keeps the original list;
/// any returned list (even an empty one) replaces it.
pub type TransformHook = Box<dyn Fn(&[Hit]) -> Option<Vec<Hit>> + Send + Sync>;

/// Observes the raw response before any transform is applied.
pub type ResponseCallback = Box<dyn Fn(&SearchResponse) + Send + Sync>;

/// Optional hooks threaded through the query source.
#[derive(Default)]
pub struct SourceHooks {
    /// Query rewriter.
    pub query_hook: Option<QueryHook>,
    /// Hit-list post-processor.
    pub transform: Option<TransformHook>,
    /// Raw-response observer.
    pub response_callback: Option<ResponseCallback>,
}

/// Produces display-ready suggestions for a query.
pub struct QuerySource {
    /// The injected search backend.
    client: Arc<dyn SearchClient>,
    /// Index the source queries.
    index_uid: String,
    /// Fully merged search parameters sent with every request.
    options: SearchOptions,
    /// Caller hooks.
    hooks: SourceHooks,
}

impl QuerySource {
    /// Creates a source querying `index_uid` through `client`.
    pub fn new(
        client: Arc<dyn SearchClient>,
        index_uid: impl Into<String>,
        options: SearchOptions,
        hooks: SourceHooks,
    ) -> Self {
        Self {
            client,
            index_uid: index_uid.into(),
            options,
            hooks,
        }
    }

    /// The merged search parameters this source sends.
    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Runs one search and returns the formatted suggestion sequence.
    ///
    /// Search failures and formatter errors propagate; there is no retry or
    /// fallback in this layer.
    pub async fn suggestions(&self, query: &str) -> Result<Vec<DisplayHit>, SourceError> {
        let rewritten = self
            .hooks
            .query_hook
            .as_ref()
            .and_then(|hook| hook(query))
            .filter(|rewritten| !rewritten.is_empty());
        let query = rewritten.as_deref().unwrap_or(query);

        let response = self
            .client
            .search(&self.index_uid, query, &self.options)
            .await?;

        if let Some(callback) = &self.hooks.response_callback {
            callback(&response);
        }

        let hits = match &self.hooks.transform {
            Some(transform) => transform(&response.hits).unwrap_or(response.hits),
            None => response.hits,
        };

        Ok(format_hits(&hits)?)
    }
}
