//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::document::Document;
use crate::core::navigation::NavigationState;
use crate::core::state::App;

/// A document of `n` lines reading `line 1`, `line 2`, ...
pub fn numbered_document(n: usize) -> Document {
    Document::from_lines((1..=n).map(|i| format!("line {i}")))
}

/// A fresh state that has seen one resync at `width` x `height`.
pub fn synced_state(doc: &Document, width: u16, height: u16) -> NavigationState {
    let mut nav = NavigationState::new();
    nav.resync(doc, width, height);
    nav
}

/// Creates a test App over a numbered document named `test.txt`.
pub fn test_app(lines: usize) -> App {
    App::new(numbered_document(lines), "test.txt")
}
