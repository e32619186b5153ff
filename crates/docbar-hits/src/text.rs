//! Small pure helpers over JSON hit records.
//!
//! These operate on open [`Hit`] maps because the search backend returns
//! records with arbitrary extra keys alongside the hierarchy fields. All
//! helpers take their input by value or shared borrow and build new values;
//! none mutate caller state.

use serde_json::Value;

use crate::{Hit, error::FormatError};

/// Markup substituted for the first opening `<em>` highlight tag.
pub const HIGHLIGHT_OPEN: &str = r#"<span class="docs-search-bar-suggestion--highlight">"#;

/// Markup substituted for the first closing `</em>` highlight tag.
pub const HIGHLIGHT_CLOSE: &str = "</span>";

/// Ellipsis appended or prepended to snippets cut mid-sentence.
const ELLIPSIS: char = '…';

/// Partitions `hits` into groups keyed by the value of `key`.
///
/// String keys are compared case-insensitively (the group key is the folded
/// form); other present values, including null, group under their JSON
/// rendering. Group order is first-seen order and hits keep their relative
/// order within each group.
///
/// Fails with [`FormatError::MissingKey`] when any hit lacks `key` entirely.
pub fn group_by(hits: Vec<Hit>, key: &str) -> Result<Vec<(String, Vec<Hit>)>, FormatError> {
    let mut groups: Vec<(String, Vec<Hit>)> = Vec::new();
    for hit in hits {
        let value = hit.get(key).ok_or_else(|| FormatError::MissingKey {
            key: key.to_string(),
        })?;
        let group_key = fold_key(value);
        match groups.iter_mut().find(|(existing, _)| *existing == group_key) {
            Some((_, members)) => members.push(hit),
            None => groups.push((group_key, vec![hit])),
        }
    }
    Ok(groups)
}

/// Case-folds a grouping value. Non-string values use their JSON rendering,
/// so a null level groups under `"null"`.
fn fold_key(value: &Value) -> String {
    match value {
        Value::String(text) => text.to_lowercase(),
        other => other.to_string(),
    }
}

/// Flattens grouped hits back into one sequence, setting `flag` to true on
/// the first element of each group and false on the rest.
pub fn flatten_and_flag_first(groups: Vec<(String, Vec<Hit>)>, flag: &str) -> Vec<Hit> {
    let mut flat = Vec::new();
    for (_, members) in groups {
        for (index, mut hit) in members.into_iter().enumerate() {
            hit.insert(flag.to_string(), Value::Bool(index == 0));
            flat.push(hit);
        }
    }
    flat
}

/// Replaces every field whose value is exactly the string `"null"` with a
/// JSON null. The backend uses the string as an absence sentinel.
pub fn replace_null_string(hit: Hit) -> Hit {
    hit.into_iter()
        .map(|(key, value)| {
            let value = match value {
                Value::String(text) if text == "null" => Value::Null,
                other => other,
            };
            (key, value)
        })
        .collect()
}

/// Renames every key starting with `prefix` to the substring from its
/// embedded `lvl` marker onward, e.g. `hierarchy_lvl2` becomes `lvl2`.
/// Keys without the prefix (or without a `lvl` marker) pass through.
pub fn rename_keys_with_levels(hit: Hit, prefix: &str) -> Hit {
    hit.into_iter()
        .map(|(key, value)| {
            match key.starts_with(prefix).then(|| key.find("lvl")).flatten() {
                Some(position) => (key[position..].to_string(), value),
                None => (key, value),
            }
        })
        .collect()
}

/// Rewrites backend emphasis markup to the host highlight markup.
///
/// Only the first `<em>` and the first `</em>` are rewritten; strings with
/// multiple highlighted spans keep the later tags literal. This mirrors the
/// behavior downstream consumers already depend on, so it is deliberately
/// not extended to every pair.
pub fn rewrite_highlight_tags(text: &str) -> String {
    text.replacen("<em>", HIGHLIGHT_OPEN, 1)
        .replacen("</em>", HIGHLIGHT_CLOSE, 1)
}

/// Returns the highlighted value of `property`.
///
/// Prefers `_formatted[property]` (with highlight tags rewritten) when it is
/// a non-empty string, and falls back to the raw field otherwise. Absent or
/// null fields yield `None`.
pub fn highlighted_value(hit: &Hit, property: &str) -> Option<String> {
    if let Some(text) = formatted_string(hit, property) {
        return Some(rewrite_highlight_tags(text));
    }
    raw_string(hit, property)
}

/// Returns the snippeted value of `property`.
///
/// Like [`highlighted_value`], but decorates the formatted value with
/// ellipses when it looks cut mid-sentence: a leading `…` when the first
/// character is lowercase, a trailing `…` when the last character is not
/// sentence-ending punctuation. The raw-field fallback is returned verbatim.
pub fn snippeted_value(hit: &Hit, property: &str) -> Option<String> {
    let Some(text) = formatted_string(hit, property) else {
        return raw_string(hit, property);
    };
    let mut snippet = rewrite_highlight_tags(text);
    if snippet.chars().next().is_some_and(char::is_lowercase) {
        snippet.insert(0, ELLIPSIS);
    }
    if !snippet.ends_with(['.', '!', '?']) {
        snippet.push(ELLIPSIS);
    }
    Some(snippet)
}

/// Removes `None` and empty-string entries, preserving order.
pub fn compact(values: Vec<Option<String>>) -> Vec<String> {
    values
        .into_iter()
        .flatten()
        .filter(|value| !value.is_empty())
        .collect()
}

/// The `_formatted[property]` value, when present and a non-empty string.
fn formatted_string<'hit>(hit: &'hit Hit, property: &str) -> Option<&'hit str> {
    if let Some(Value::Object(formatted)) = hit.get("_formatted")
        && let Some(Value::String(text)) = formatted.get(property)
        && !text.is_empty()
    {
        return Some(text);
    }
    None
}

/// The raw string value of `property`, when present.
fn raw_string(hit: &Hit, property: &str) -> Option<String> {
    match hit.get(property) {
        Some(Value::String(text)) => Some(text.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn hit(value: Value) -> Hit {
        value.as_object().expect("test hit must be an object").clone()
    }

    #[test]
    fn group_by_preserves_first_seen_order() {
        let hits = vec![
            hit(json!({"name": "Tim", "category": "dev"})),
            hit(json!({"name": "Ben", "category": "sales"})),
            hit(json!({"name": "Vincent", "category": "dev"})),
        ];

        let groups = group_by(hits, "category").unwrap();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "dev");
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].0, "sales");
        assert_eq!(groups[1].1[0]["name"], "Ben");
    }

    #[test]
    fn group_by_folds_string_case() {
        let hits = vec![
            hit(json!({"category": "Dev"})),
            hit(json!({"category": "dev"})),
            hit(json!({"category": "DEV"})),
        ];

        let groups = group_by(hits, "category").unwrap();

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0, "dev");
        assert_eq!(groups[0].1.len(), 3);
    }

    #[test]
    fn group_by_groups_null_under_its_rendering() {
        let hits = vec![hit(json!({"category": null})), hit(json!({"category": null}))];

        let groups = group_by(hits, "category").unwrap();

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0, "null");
    }

    #[test]
    fn group_by_fails_on_missing_key() {
        let hits = vec![hit(json!({"name": "Tim"}))];

        let result = group_by(hits, "category");

        assert_eq!(
            result,
            Err(FormatError::MissingKey {
                key: "category".to_string()
            })
        );
    }

    #[test]
    fn flatten_and_flag_first_marks_group_heads() {
        let groups = vec![
            (
                "dev".to_string(),
                vec![hit(json!({"name": "Tim"})), hit(json!({"name": "Vincent"}))],
            ),
            ("sales".to_string(), vec![hit(json!({"name": "Ben"}))]),
        ];

        let flat = flatten_and_flag_first(groups, "isTop");

        assert_eq!(flat.len(), 3);
        assert_eq!(flat[0]["isTop"], true);
        assert_eq!(flat[1]["isTop"], false);
        assert_eq!(flat[2]["isTop"], true);
        assert_eq!(flat[2]["name"], "Ben");
    }

    #[test]
    fn replace_null_string_maps_sentinel_only() {
        let cleaned = replace_null_string(hit(json!({
            "lvl0": "Ruby",
            "lvl1": "null",
            "count": 3,
        })));

        assert_eq!(cleaned["lvl0"], "Ruby");
        assert_eq!(cleaned["lvl1"], Value::Null);
        assert_eq!(cleaned["count"], 3);
    }

    #[test]
    fn rename_keys_with_levels_strips_prefix() {
        let renamed = rename_keys_with_levels(
            hit(json!({
                "name": "My name",
                "hierarchy_lvl0": "Foo",
                "hierarchy_lvl1": "Bar",
            })),
            "hierarchy_",
        );

        assert_eq!(renamed["name"], "My name");
        assert_eq!(renamed["lvl0"], "Foo");
        assert_eq!(renamed["lvl1"], "Bar");
        assert!(!renamed.contains_key("hierarchy_lvl0"));
    }

    #[test]
    fn rewrite_highlight_tags_replaces_only_first_pair() {
        let rewritten = rewrite_highlight_tags("<em>foo</em> and <em>bar</em>");

        assert_eq!(
            rewritten,
            format!("{HIGHLIGHT_OPEN}foo{HIGHLIGHT_CLOSE} and <em>bar</em>")
        );
    }

    #[test]
    fn highlighted_value_prefers_formatted() {
        let record = hit(json!({
            "text": "foo",
            "_formatted": {"text": "<em>foo</em>"},
        }));

        assert_eq!(
            highlighted_value(&record, "text"),
            Some(format!("{HIGHLIGHT_OPEN}foo{HIGHLIGHT_CLOSE}"))
        );
    }

    #[test]
    fn highlighted_value_passes_foreign_markup_through() {
        let record = hit(json!({
            "text": "foo",
            "_formatted": {"text": "<mark>foo</mark>"},
        }));

        assert_eq!(
            highlighted_value(&record, "text"),
            Some("<mark>foo</mark>".to_string())
        );
    }

    #[test]
    fn highlighted_value_falls_back_to_raw_field() {
        let record = hit(json!({"text": "foo"}));
        assert_eq!(highlighted_value(&record, "text"), Some("foo".to_string()));

        let record = hit(json!({"text": null}));
        assert_eq!(highlighted_value(&record, "text"), None);

        let record = hit(json!({}));
        assert_eq!(highlighted_value(&record, "text"), None);
    }

    #[test]
    fn snippeted_value_decorates_incomplete_sentences() {
        let record = hit(json!({
            "text": "foo",
            "_formatted": {"text": "lorem foo bar"},
        }));

        assert_eq!(
            snippeted_value(&record, "text"),
            Some("…lorem foo bar…".to_string())
        );
    }

    #[test]
    fn snippeted_value_keeps_complete_sentences() {
        let record = hit(json!({
            "text": "foo",
            "_formatted": {"text": "Lorem foo bar."},
        }));

        assert_eq!(
            snippeted_value(&record, "text"),
            Some("Lorem foo bar.".to_string())
        );
    }

    #[test]
    fn snippeted_value_falls_back_without_decoration() {
        let record = hit(json!({"text": "lorem foo bar"}));

        assert_eq!(
            snippeted_value(&record, "text"),
            Some("lorem foo bar".to_string())
        );
    }

    #[test]
    fn compact_drops_absent_and_empty() {
        let values = vec![
            Some("foo".to_string()),
            None,
            Some(String::new()),
            Some("bar".to_string()),
        ];

        assert_eq!(compact(values), vec!["foo".to_string(), "bar".to_string()]);
    }
}
