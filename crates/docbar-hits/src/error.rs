//! Error types for the docbar-hits crate.

use thiserror::Error;

/// Errors that can occur while formatting search hits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A hit lacked a key the grouping step requires.
    ///
    /// This indicates a backend/schema contract violation: every hit is
    /// expected to carry the full `hierarchy_lvl0..lvl6` set, even if some
    /// levels are null.
    #[error("hit has no key '{key}'")]
    MissingKey {
        /// The grouping key that was absent.
        key: String,
    },
}
