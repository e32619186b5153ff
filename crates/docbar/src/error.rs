//! Error types for the docbar crate.

use docbar_hits::FormatError;
use thiserror::Error;

/// Errors raised by eager configuration validation at construction time.
///
/// These are programmer errors in the embedding page, not recoverable at
/// runtime, so the widget fails fast instead of degrading.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required configuration field is missing or empty.
    #[error("required field '{field}' is missing or empty")]
    MissingField {
        /// Name of the offending field.
        field: &'static str,
    },

    /// The input selector is empty.
    #[error("inputSelector must be a non-empty CSS selector")]
    EmptySelector,

    /// No input element on the page matches the configured selector.
    #[error("no input element matches selector '{selector}'")]
    NoMatchingInput {
        /// The selector that matched nothing.
        selector: String,
    },
}

/// Errors from the remote search collaborator.
///
/// The query source never catches these; transient network handling is the
/// remote client's responsibility and failures propagate to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The backend request failed.
    #[error("search request failed: {0}")]
    Backend(String),
}

/// Errors surfaced by the query source adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The underlying search call failed.
    #[error(transparent)]
    Search(#[from] SearchError),

    /// The hit formatter rejected the response.
    #[error(transparent)]
    Format(#[from] FormatError),
}
