//! Hit formatting pipeline for the docbar search widget.
//!
//! The search backend returns a flat list of hits, each annotated with up to
//! seven hierarchy levels (`hierarchy_lvl0` broadest, `hierarchy_lvl6`
//! narrowest) and an optional `_formatted` sub-record carrying highlight
//! markup. This crate turns that list into a hierarchically grouped,
//! header-flagged, display-ready sequence of [`DisplayHit`] records:
//!
//! - normalization: `"null"` sentinels become true absence, hierarchy keys
//!   are renamed to `lvlN`
//! - grouping: hits sharing a case-folded `lvl0` are coalesced into one run,
//!   sub-grouped by `lvl1`, and the first hit of each run is header-flagged
//! - derivation: category, subcategory, title (with fallback chain), snippet
//!   text and an anchored url per hit
//!
//! Everything here is pure data transformation with no DOM and no I/O, so
//! two concurrent searches can format independently with no shared state.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//!
//! let hits = vec![
//!     json!({
//!         "hierarchy_lvl0": "Ruby",
//!         "hierarchy_lvl1": "API",
//!         "url": "https://example.com/ruby",
//!         "anchor": "api",
//!     })
//!     .as_object()
//!     .unwrap()
//!     .clone(),
//! ];
//!
//! let formatted = docbar_hits::format_hits(&hits).unwrap();
//! assert_eq!(formatted[0].category.as_deref(), Some("Ruby"));
//! assert_eq!(formatted[0].url.as_deref(), Some("https://example.com/ruby#api"));
//! assert!(formatted[0].is_category_header);
//! ```

#![warn(missing_docs)]

mod error;
mod format;
mod text;

pub use error::FormatError;
pub use format::{DisplayHit, TITLE_SEPARATOR, format_hits, format_url};
pub use text::{
    HIGHLIGHT_CLOSE, HIGHLIGHT_OPEN, compact, flatten_and_flag_first, group_by, highlighted_value,
    rename_keys_with_levels, replace_null_string, rewrite_highlight_tags, snippeted_value,
};

/// A raw hit as returned by the search backend: an open JSON record.
///
/// Hits carry `objectID`, optional `url` and `anchor`, `content`, the
/// `hierarchy_lvl0..lvl6` fields and arbitrary extra keys, so they are kept
/// as JSON maps rather than a closed struct.
pub type Hit = serde_json::Map<String, serde_json::Value>;
