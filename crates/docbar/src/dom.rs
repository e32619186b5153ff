//! Narrow DOM access interfaces injected into the widget core.
//!
//! The formatting pipeline is DOM-free; everything the widget needs from the
//! page goes through these traits, so a browser binding, a test fake or a
//! headless shell can all drive it the same way.

/// Locates inputs on the host page.
pub trait DomAdapter {
    /// Returns a handle to the first input matching `selector`, if any.
    fn query_input(&self, selector: &str) -> Option<Box<dyn InputHandle>>;
}

/// A handle to a text input on the host page.
///
/// Handles use interior mutability the way DOM nodes do; setting the value
/// takes a shared borrow.
pub trait InputHandle {
    /// Current value of the input.
    fn value(&self) -> String;

    /// Replaces the value of the input.
    fn set_value(&self, value: &str);

    /// Inserts `markup` before this input and returns a handle to the input
    /// inside the inserted markup, when the host supports it. Used to swap
    /// the target input for the themed search box.
    fn insert_before(&self, markup: &str) -> Option<Box<dyn InputHandle>>;
}

/// Performs the navigation side effect of a selection.
pub trait Navigator {
    /// Navigates the host page to `url`.
    fn assign(&self, url: &str);
}
