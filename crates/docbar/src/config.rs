//! Widget configuration with eager validation.
//!
//! The original option bag becomes explicit structs with named fields and
//! documented defaults. Hard violations fail synchronously at construction
//! with a typed [`ConfigError`]; softer issues surface as [`ConfigWarning`]
//! values the embedder can log.

use std::fmt;

use serde::Serialize;

use crate::error::ConfigError;

/// Key code the autocomplete layer uses for the `/` key.
const SLASH_KEY_CODE: u32 = 191;

/// Configuration for a search bar instance.
#[derive(Debug, Clone)]
pub struct SearchBarConfig {
    /// URL where the search backend is hosted.
    pub host_url: String,
    /// Read-only API key for the backend.
    pub api_key: String,
    /// Identifier of the index to query.
    pub index_uid: String,
    /// CSS selector targeting the search input.
    pub input_selector: String,
    /// Enables verbose dropdown behavior (the dropdown stays open on blur).
    pub debug: bool,
    /// Per-query search parameter overrides, merged field by field over the
    /// defaults.
    pub search_options: SearchOptionsOverrides,
    /// Dropdown rendering mode.
    pub layout: Layout,
    /// Replaces the target input with a themed search box wrapper.
    pub enhanced_search_input: bool,
    /// Dark-mode behavior of the themed wrapper.
    pub dark_mode: DarkMode,
    /// Keyboard shortcuts focusing the input; `None` keeps the defaults.
    pub keyboard_shortcuts: Option<Vec<Hotkey>>,
    /// Passthrough configuration for the external dropdown widget.
    pub autocomplete_options: AutocompleteOptions,
}

impl SearchBarConfig {
    /// Creates a configuration from the required fields, with every optional
    /// field at its documented default.
    pub fn new(
        host_url: impl Into<String>,
        api_key: impl Into<String>,
        index_uid: impl Into<String>,
        input_selector: impl Into<String>,
    ) -> Self {
        Self {
            host_url: host_url.into(),
            api_key: api_key.into(),
            index_uid: index_uid.into(),
            input_selector: input_selector.into(),
            debug: false,
            search_options: SearchOptionsOverrides::default(),
            layout: Layout::default(),
            enhanced_search_input: false,
            dark_mode: DarkMode::default(),
            keyboard_shortcuts: None,
            autocomplete_options: AutocompleteOptions::default(),
        }
    }

    /// Checks the hard requirements, failing on the first violation.
    ///
    /// Selector resolution against the page happens separately, at widget
    /// construction, because it needs the injected DOM adapter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("hostUrl", &self.host_url),
            ("apiKey", &self.api_key),
            ("indexUid", &self.index_uid),
        ];
        for (field, value) in required {
            if value.is_empty() {
                return Err(ConfigError::MissingField { field });
            }
        }
        if self.input_selector.is_empty() {
            return Err(ConfigError::EmptySelector);
        }
        Ok(())
    }

    /// Returns non-fatal warnings about suspicious option values.
    pub fn lint(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();
        if self.search_options.limit == Some(0) {
            warnings.push(ConfigWarning::ZeroLimit);
        }
        if self.search_options.crop_length == Some(0) {
            warnings.push(ConfigWarning::ZeroCropLength);
        }
        warnings
    }
}

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigWarning {
    /// The result limit is zero; the dropdown will never show anything.
    ZeroLimit,
    /// The crop length is zero; snippets will be empty.
    ZeroCropLength,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroLimit => write!(f, "search limit is 0, no suggestions will be shown"),
            Self::ZeroCropLength => write!(f, "crop length is 0, snippets will be empty"),
        }
    }
}

/// Search parameters sent with every query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOptions {
    /// Maximum number of hits per query.
    pub limit: usize,
    /// Fields to annotate with highlight markup.
    pub attributes_to_highlight: Vec<String>,
    /// Fields to crop to an excerpt.
    pub attributes_to_crop: Vec<String>,
    /// Crop length, in backend units.
    pub crop_length: usize,
}

impl Default for SearchOptions {
    /// The fixed default set: 5 hits, highlight everything, crop `content`
    /// at 30 units.
    fn default() -> Self {
        Self {
            limit: 5,
            attributes_to_highlight: vec!["*".to_string()],
            attributes_to_crop: vec!["content".to_string()],
            crop_length: 30,
        }
    }
}

/// Caller overrides for [`SearchOptions`].
///
/// Each set field replaces the corresponding default; unset fields keep it.
/// The override is field-by-field, never wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptionsOverrides {
    /// Overrides [`SearchOptions::limit`].
    pub limit: Option<usize>,
    /// Overrides [`SearchOptions::attributes_to_highlight`].
    pub attributes_to_highlight: Option<Vec<String>>,
    /// Overrides [`SearchOptions::attributes_to_crop`].
    pub attributes_to_crop: Option<Vec<String>>,
    /// Overrides [`SearchOptions::crop_length`].
    pub crop_length: Option<usize>,
}

impl SearchOptionsOverrides {
    /// Applies these overrides on top of `defaults`, field by field.
    pub fn merge_over(self, defaults: SearchOptions) -> SearchOptions {
        SearchOptions {
            limit: self.limit.unwrap_or(defaults.limit),
            attributes_to_highlight: self
                .attributes_to_highlight
                .unwrap_or(defaults.attributes_to_highlight),
            attributes_to_crop: self.attributes_to_crop.unwrap_or(defaults.attributes_to_crop),
            crop_length: self.crop_length.unwrap_or(defaults.crop_length),
        }
    }
}

/// Options handed through to the external dropdown widget.
///
/// The widget core does not interpret these beyond resolving defaults; the
/// dropdown layer consumes them as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutocompleteOptions {
    /// Show the inline completion hint.
    pub hint: bool,
    /// Pre-select the first suggestion.
    pub autoselect: bool,
    /// Keep the dropdown open on blur. Overwritten by
    /// [`SearchBarConfig::debug`] when the widget resolves these options.
    pub debug: bool,
    /// Accessible label for the input; `None` resolves to `"search input"`.
    pub aria_label: Option<String>,
    /// CSS class prefix for dropdown elements.
    pub css_prefix: String,
    /// CSS class of the dropdown root element.
    pub root_class: String,
}

impl Default for AutocompleteOptions {
    fn default() -> Self {
        Self {
            hint: false,
            autoselect: true,
            debug: false,
            aria_label: None,
            css_prefix: "dsb".to_string(),
            root_class: "docbar-autocomplete".to_string(),
        }
    }
}

/// Dropdown rendering mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Layout {
    /// Single-column list.
    Simple,
    /// Category column beside the suggestion column.
    #[default]
    Columns,
}

/// Dark-mode behavior of the themed search box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DarkMode {
    /// Always light.
    #[default]
    Off,
    /// Always dark.
    On,
    /// Follow the host page's preference.
    Auto,
}

/// A keyboard shortcut that focuses the search input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hotkey {
    /// A printable key.
    Key(char),
    /// A raw key code.
    Code(u32),
}

/// Normalizes hotkey bindings for the autocomplete layer.
///
/// The `/` key cannot be passed through as a character and maps to key code
/// 191. Absent input yields the default bindings: `s` and `/`.
pub fn normalize_hotkeys(hotkeys: Option<Vec<Hotkey>>) -> Vec<Hotkey> {
    match hotkeys {
        None => vec![Hotkey::Key('s'), Hotkey::Code(SLASH_KEY_CODE)],
        Some(hotkeys) => hotkeys
            .into_iter()
            .map(|hotkey| match hotkey {
                Hotkey::Key('/') => Hotkey::Code(SLASH_KEY_CODE),
                other => other,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> SearchBarConfig {
        SearchBarConfig::new("https://search.example.com", "key", "docs", "#search")
    }

    #[test]
    fn validate_accepts_complete_config() {
        assert_eq!(valid_config().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_empty_required_fields() {
        let mut config = valid_config();
        config.host_url = String::new();
        assert_eq!(
            config.validate(),
            Err(ConfigError::MissingField { field: "hostUrl" })
        );

        let mut config = valid_config();
        config.api_key = String::new();
        assert_eq!(
            config.validate(),
            Err(ConfigError::MissingField { field: "apiKey" })
        );

        let mut config = valid_config();
        config.index_uid = String::new();
        assert_eq!(
            config.validate(),
            Err(ConfigError::MissingField { field: "indexUid" })
        );
    }

    #[test]
    fn validate_rejects_empty_selector() {
        let mut config = valid_config();
        config.input_selector = String::new();
        assert_eq!(config.validate(), Err(ConfigError::EmptySelector));
    }

    #[test]
    fn overrides_keep_unnamed_defaults() {
        let options = SearchOptionsOverrides {
            crop_length: Some(40),
            ..Default::default()
        }
        .merge_over(SearchOptions::default());

        assert_eq!(options.crop_length, 40);
        assert_eq!(options.limit, 5);
        assert_eq!(options.attributes_to_highlight, vec!["*".to_string()]);
        assert_eq!(options.attributes_to_crop, vec!["content".to_string()]);
    }

    #[test]
    fn limit_override_replaces_default_limit_only() {
        let options = SearchOptionsOverrides {
            limit: Some(10),
            ..Default::default()
        }
        .merge_over(SearchOptions::default());

        assert_eq!(options.limit, 10);
        assert_eq!(options.crop_length, 30);
    }

    #[test]
    fn hotkeys_default_to_s_and_slash() {
        assert_eq!(
            normalize_hotkeys(None),
            vec![Hotkey::Key('s'), Hotkey::Code(191)]
        );
    }

    #[test]
    fn hotkeys_map_slash_to_its_key_code() {
        assert_eq!(
            normalize_hotkeys(Some(vec![Hotkey::Key('/'), Hotkey::Key('k')])),
            vec![Hotkey::Code(191), Hotkey::Key('k')]
        );
    }

    #[test]
    fn lint_flags_zero_values() {
        let mut config = valid_config();
        config.search_options.limit = Some(0);
        config.search_options.crop_length = Some(0);

        let warnings = config.lint();

        assert!(warnings.contains(&ConfigWarning::ZeroLimit));
        assert!(warnings.contains(&ConfigWarning::ZeroCropLength));
        assert_eq!(
            warnings[0].to_string(),
            "search limit is 0, no suggestions will be shown"
        );
    }

    #[test]
    fn lint_is_quiet_on_defaults() {
        assert!(valid_config().lint().is_empty());
    }
}
