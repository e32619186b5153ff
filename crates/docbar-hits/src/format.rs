//! The hit formatter: normalization, grouping, header flagging and display
//! derivation.
//!
//! [`format_hits`] is the heart of the crate. It takes the flat hit list the
//! search backend returned and produces the hierarchically grouped,
//! header-flagged, display-ready sequence the dropdown renders. The whole
//! pipeline is pure: input is cloned up front and every stage builds new
//! records.

use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::{
    Hit,
    error::FormatError,
    text::{
        compact, flatten_and_flag_first, group_by, highlighted_value, rename_keys_with_levels,
        replace_null_string, snippeted_value,
    },
};

/// Visual separator inserted between title segments.
pub const TITLE_SEPARATOR: &str =
    r#"<span class="aa-suggestion-title-separator" aria-hidden="true"> › </span>"#;

/// Prefix carried by hierarchy fields on raw hits.
const HIERARCHY_PREFIX: &str = "hierarchy_";

/// A display-ready suggestion record.
///
/// Constructed fresh per search response and never mutated afterwards. The
/// serialized field names match what a suggestion template expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayHit {
    /// Display label derived from `lvl0`, with highlight markup.
    pub category: Option<String>,
    /// Display label derived from `lvl1`; falls back to the category when
    /// the level is absent or empty.
    pub subcategory: Option<String>,
    /// Joined labels of `lvl2..lvl6`; collapses to the subcategory when the
    /// hierarchy below `lvl1` is entirely empty.
    pub title: Option<String>,
    /// Content snippet with highlight markup and ellipsis decoration.
    pub text: Option<String>,
    /// Navigation target, already anchored. Absent when the hit carried
    /// neither url nor anchor.
    pub url: Option<String>,
    /// The hit is no more specific than its category.
    pub is_lvl0: bool,
    /// The hit is subcategory-specific but has no deeper title.
    pub is_lvl1: bool,
    /// The hit carries a title below the subcategory.
    pub is_lvl2: bool,
    /// The subcategory is empty or repeats the category.
    pub is_lvl1_empty_or_duplicate: bool,
    /// First hit of its category run; the renderer draws a section divider.
    pub is_category_header: bool,
    /// First hit of its subcategory run within the category run.
    pub is_sub_category_header: bool,
    /// At least one of subcategory or title is non-empty.
    pub is_text_or_subcategory_non_empty: bool,
}

/// Formats raw backend hits into display-ready suggestions.
///
/// The input is cloned, normalized (null sentinels removed, hierarchy keys
/// renamed to `lvlN`, the `_formatted` sub-record treated likewise), grouped
/// by case-folded `lvl0` then `lvl1` with header flags on each run's first
/// hit, and mapped to [`DisplayHit`] records. The caller's hits are never
/// mutated.
///
/// Fails with [`FormatError::MissingKey`] when a hit lacks a grouping level
/// entirely, which indicates a backend schema violation.
pub fn format_hits(raw_hits: &[Hit]) -> Result<Vec<DisplayHit>, FormatError> {
    let normalized: Vec<Hit> = raw_hits.iter().cloned().map(normalize_hit).collect();

    let mut categories = Vec::new();
    for (key, members) in group_by(normalized, "lvl0")? {
        let subgroups = group_by(members, "lvl1")?;
        let flattened = flatten_and_flag_first(subgroups, "isSubCategoryHeader");
        categories.push((key, flattened));
    }
    let grouped = flatten_and_flag_first(categories, "isCategoryHeader");

    Ok(grouped.iter().map(to_display_hit).collect())
}

/// Builds the navigation url for a hit.
///
/// An url that already contains a fragment is returned unchanged, which
/// makes this idempotent: applying it to its own output never appends a
/// second anchor. A hit with neither url nor anchor yields `None` after a
/// diagnostic; the suggestion simply has no navigable target.
pub fn format_url(hit: &Hit) -> Option<String> {
    let url = string_field(hit, "url");
    let anchor = string_field(hit, "anchor");
    match (url, anchor) {
        (Some(url), _) if url.contains('#') => Some(url),
        (Some(url), Some(anchor)) => Some(format!("{url}#{anchor}")),
        (Some(url), None) => Some(url),
        (None, Some(anchor)) => Some(format!("#{anchor}")),
        (None, None) => {
            warn!(hit = %serde_json::Value::Object(hit.clone()), "hit has neither url nor anchor");
            None
        }
    }
}

/// Replaces null sentinels and renames hierarchy keys on a hit and on its
/// `_formatted` sub-record.
fn normalize_hit(mut hit: Hit) -> Hit {
    if let Some(Value::Object(formatted)) = hit.get("_formatted") {
        let cleaned =
            rename_keys_with_levels(replace_null_string(formatted.clone()), HIERARCHY_PREFIX);
        hit.insert("_formatted".to_string(), Value::Object(cleaned));
    }
    rename_keys_with_levels(replace_null_string(hit), HIERARCHY_PREFIX)
}

/// Derives the display record for one grouped hit.
fn to_display_hit(hit: &Hit) -> DisplayHit {
    let url = format_url(hit);
    let category = highlighted_value(hit, "lvl0");
    let subcategory = non_empty(highlighted_value(hit, "lvl1")).or_else(|| category.clone());
    let segments = compact(vec![
        non_empty(highlighted_value(hit, "lvl2")).or_else(|| subcategory.clone()),
        highlighted_value(hit, "lvl3"),
        highlighted_value(hit, "lvl4"),
        highlighted_value(hit, "lvl5"),
        highlighted_value(hit, "lvl6"),
    ]);
    let title = (!segments.is_empty()).then(|| segments.join(TITLE_SEPARATOR));
    let text = snippeted_value(hit, "content");

    let has_subcategory = subcategory.as_deref().is_some_and(|label| !label.is_empty());
    let is_lvl2 = title.is_some() && title != subcategory;
    let is_lvl1 = !is_lvl2 && has_subcategory && subcategory != category;

    DisplayHit {
        is_lvl0: !is_lvl1 && !is_lvl2,
        is_lvl1,
        is_lvl2,
        is_lvl1_empty_or_duplicate: !has_subcategory || subcategory == category,
        is_category_header: flag(hit, "isCategoryHeader"),
        is_sub_category_header: flag(hit, "isSubCategoryHeader"),
        is_text_or_subcategory_non_empty: has_subcategory || title.is_some(),
        category,
        subcategory,
        title,
        text,
        url,
    }
}

/// Drops empty strings, so fallback chains treat them like absence.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.is_empty())
}

/// A string field, with empty strings treated as absent.
fn string_field(hit: &Hit, key: &str) -> Option<String> {
    match hit.get(key) {
        Some(Value::String(text)) if !text.is_empty() => Some(text.clone()),
        _ => None,
    }
}

/// Reads a boolean flag set during grouping.
fn flag(hit: &Hit, key: &str) -> bool {
    matches!(hit.get(key), Some(Value::Bool(true)))
}
