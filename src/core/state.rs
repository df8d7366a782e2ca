//! # Application State
//!
//! Everything the viewer knows, owned in one place.
//!
//! ```text
//! App
//! ├── document: Document          // immutable file contents
//! ├── file_name: String           // shown in the status line
//! └── nav: NavigationState        // viewport, cursor, screen size, chord
//! ```
//!
//! State changes only happen through `update(app, action)` in action.rs.
//! The renderer only ever sees `&App`.

use crate::core::document::Document;
use crate::core::navigation::NavigationState;

#[derive(Debug)]
pub struct App {
    pub document: Document,
    pub file_name: String,
    pub nav: NavigationState,
}

impl App {
    pub fn new(document: Document, file_name: impl Into<String>) -> Self {
        Self {
            document,
            file_name: file_name.into(),
            nav: NavigationState::new(),
        }
    }

    /// Status line text, before truncation to the screen width.
    ///
    /// Line and column are shown 1-based.
    pub fn status_text(&self) -> String {
        format!(
            " {} | Line: {}/{} | Col: {} ",
            self.file_name,
            self.nav.current_line + 1,
            self.document.len(),
            self.nav.current_col + 1,
        )
    }
}
