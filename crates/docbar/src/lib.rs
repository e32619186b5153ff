//! docbar: documentation search-bar core.
//!
//! Binds a text input to a remote search index and produces grouped,
//! highlighted suggestions for an autocomplete dropdown. The crate owns the
//! logic between keystroke and rendering:
//!
//! - [`SearchBarConfig`]: explicit configuration with eager, typed
//!   validation at construction
//! - [`QuerySource`]: wraps the injected [`SearchClient`], applies the
//!   caller's query/result hooks and feeds the hit formatter
//! - selection handling: navigate on keyboard selection, defer to the
//!   anchor on click
//!
//! The DOM, the dropdown widget, template rendering and the search wire
//! protocol stay outside, behind the [`DomAdapter`], [`Navigator`] and
//! [`SearchClient`] traits; tests substitute fakes through the same
//! constructor parameters. The formatting pipeline itself lives in
//! [`docbar_hits`] and is re-exported here.

#![warn(missing_docs)]

mod client;
mod config;
mod dom;
mod error;
mod select;
mod source;

use std::sync::Arc;

pub use client::{SearchClient, SearchResponse};
pub use config::{
    AutocompleteOptions, ConfigWarning, DarkMode, Hotkey, Layout, SearchBarConfig,
    SearchOptions, SearchOptionsOverrides, normalize_hotkeys,
};
pub use docbar_hits::{DisplayHit, FormatError, Hit, format_hits};
pub use dom::{DomAdapter, InputHandle, Navigator};
pub use error::{ConfigError, SearchError, SourceError};
pub use select::{
    SelectionContext, SelectionEvent, SelectionHandler, SelectionMethod, handle_selected,
};
pub use source::{QueryHook, QuerySource, ResponseCallback, SourceHooks, TransformHook};

/// Caller hooks and behavior overrides for a [`SearchBar`].
#[derive(Default)]
pub struct SearchBarHooks {
    /// Query rewriter, invoked before each search.
    pub query_hook: Option<QueryHook>,
    /// Hit-list post-processor, invoked on each raw response.
    pub transform: Option<TransformHook>,
    /// Raw-response observer, invoked before the transform.
    pub response_callback: Option<ResponseCallback>,
    /// Full replacement for the default selection behavior.
    pub handle_selected: Option<SelectionHandler>,
}

/// A search bar bound to one input and one remote index.
pub struct SearchBar {
    /// The validated configuration.
    config: SearchBarConfig,
    /// Handle to the bound input (possibly the themed replacement).
    input: Box<dyn InputHandle>,
    /// The query source feeding the dropdown.
    query_source: QuerySource,
    /// Navigation collaborator for selections.
    navigator: Arc<dyn Navigator>,
    /// Caller override for selection handling.
    handle_selected: Option<SelectionHandler>,
    /// Normalized focus shortcuts for the autocomplete layer.
    hotkeys: Vec<Hotkey>,
    /// Resolved passthrough options for the dropdown widget.
    autocomplete_options: AutocompleteOptions,
}

impl std::fmt::Debug for SearchBar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchBar")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl SearchBar {
    /// Builds a search bar from its configuration and collaborators.
    ///
    /// Validation is eager: required fields must be non-empty and the input
    /// selector must match an input on the page, otherwise construction
    /// fails with a typed [`ConfigError`] before any search is issued. When
    /// `enhanced_search_input` is set, the target input is swapped for the
    /// themed search box through [`InputHandle::insert_before`].
    pub fn new(
        config: SearchBarConfig,
        hooks: SearchBarHooks,
        client: Arc<dyn SearchClient>,
        dom: &dyn DomAdapter,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let input =
            dom.query_input(&config.input_selector)
                .ok_or_else(|| ConfigError::NoMatchingInput {
                    selector: config.input_selector.clone(),
                })?;
        let input = if config.enhanced_search_input {
            match input.insert_before(&search_box_markup(config.dark_mode)) {
                Some(replacement) => replacement,
                None => input,
            }
        } else {
            input
        };

        let options = config
            .search_options
            .clone()
            .merge_over(SearchOptions::default());
        let query_source = QuerySource::new(
            client,
            &config.index_uid,
            options,
            SourceHooks {
                query_hook: hooks.query_hook,
                transform: hooks.transform,
                response_callback: hooks.response_callback,
            },
        );
        let hotkeys = normalize_hotkeys(config.keyboard_shortcuts.clone());

        let mut autocomplete_options = config.autocomplete_options.clone();
        autocomplete_options.debug = config.debug;
        if autocomplete_options.aria_label.is_none() {
            autocomplete_options.aria_label = Some("search input".to_string());
        }

        Ok(Self {
            config,
            input,
            query_source,
            navigator,
            handle_selected: hooks.handle_selected,
            hotkeys,
            autocomplete_options,
        })
    }

    /// The suggestion source for the autocomplete layer: one search per
    /// call, hooks applied, hits formatted. Failures propagate.
    pub async fn source(&self, query: &str) -> Result<Vec<DisplayHit>, SourceError> {
        self.query_source.suggestions(query).await
    }

    /// Handles the dropdown's selected event.
    ///
    /// Dispatches to the caller's replacement handler when one was supplied,
    /// otherwise applies the default behavior: no-op on click, clear the
    /// input and navigate otherwise.
    pub fn select(
        &self,
        event: &SelectionEvent,
        suggestion: &DisplayHit,
        dataset_index: usize,
        context: &SelectionContext,
    ) {
        match &self.handle_selected {
            Some(handler) => handler(self.input.as_ref(), event, suggestion, dataset_index, context),
            None => select::handle_selected(
                self.input.as_ref(),
                event,
                suggestion,
                dataset_index,
                context,
                self.navigator.as_ref(),
            ),
        }
    }

    /// The validated configuration.
    pub fn config(&self) -> &SearchBarConfig {
        &self.config
    }

    /// The merged search parameters sent with every query.
    pub fn search_options(&self) -> &SearchOptions {
        self.query_source.options()
    }

    /// The bound input handle.
    pub fn input(&self) -> &dyn InputHandle {
        self.input.as_ref()
    }

    /// Normalized focus shortcuts for the autocomplete layer.
    pub fn hotkeys(&self) -> &[Hotkey] {
        &self.hotkeys
    }

    /// Resolved passthrough options for the dropdown widget: the top-level
    /// debug flag folded in, the accessible label defaulted.
    pub fn autocomplete_options(&self) -> &AutocompleteOptions {
        &self.autocomplete_options
    }
}

/// Markup for the themed search box injected when `enhanced_search_input`
/// is set.
fn search_box_markup(dark_mode: DarkMode) -> String {
    let mode_class = match dark_mode {
        DarkMode::Off => "",
        DarkMode::On => " dark-mode",
        DarkMode::Auto => " dark-mode-auto",
    };
    format!(
        r#"<form class="searchbox{mode_class}" novalidate="novalidate" onsubmit="return false;" role="search"><input id="docs-searchbar" type="search" class="searchbox-input" placeholder="Search the docs" autocomplete="off" spellcheck="false"></form>"#
    )
}
