//! Selection handling for the dropdown.

use docbar_hits::DisplayHit;

use crate::dom::{InputHandle, Navigator};

/// How the user picked a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMethod {
    /// Pointer click on the suggestion anchor.
    Click,
    /// Enter key on the highlighted suggestion.
    EnterKey,
    /// Tab key on the highlighted suggestion.
    TabKey,
    /// Input lost focus with a suggestion highlighted.
    Blur,
}

/// Context the dropdown passes alongside a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionContext {
    /// How the selection happened.
    pub selection_method: SelectionMethod,
}

/// The dropdown event that triggered the selection.
///
/// Opaque to the core; it exists so replacement handlers receive the same
/// arguments the default handler does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionEvent;

/// A caller-supplied replacement for the default selection behavior.
///
/// Receives the input handle, the triggering event, the selected suggestion,
/// the dataset index and the selection context, and fully overrides
/// [`handle_selected`].
pub type SelectionHandler =
    Box<dyn Fn(&dyn InputHandle, &SelectionEvent, &DisplayHit, usize, &SelectionContext) + Send + Sync>;

/// Default selection behavior.
///
/// A click is a no-op: the suggestion anchor's native navigation already
/// happens, and navigating here as well would redirect the main window on
/// modifier clicks such as open-in-new-tab. Every other method clears the
/// input and navigates to the suggestion's url.
pub fn handle_selected(
    input: &dyn InputHandle,
    _event: &SelectionEvent,
    suggestion: &DisplayHit,
    _dataset_index: usize,
    context: &SelectionContext,
    navigator: &dyn Navigator,
) {
    if context.selection_method == SelectionMethod::Click {
        return;
    }

    input.set_value("");
    if let Some(url) = &suggestion.url {
        navigator.assign(url);
    }
}
