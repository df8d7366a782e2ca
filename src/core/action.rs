//! # Actions
//!
//! Everything that can happen in the viewer becomes an `Action`.
//! User presses `j`? That's `Action::MoveCursor { d_line: 1, d_col: 0 }`.
//! Frame about to be drawn? That's `Action::Resync { width, height }`.
//!
//! The `update()` function applies an action to the `App` in place and tells
//! the caller whether anything beyond a redraw is needed. No I/O happens here.
//!
//! ```text
//! App + Action  →  update()  →  App' + Effect
//! ```

use log::debug;

use crate::core::navigation::PageStep;
use crate::core::state::App;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Store the screen size and restore invariants; sent once per frame.
    Resync { width: u16, height: u16 },
    MoveCursor { d_line: isize, d_col: isize },
    /// Viewport-only vertical scroll (mouse wheel).
    ScrollLines(isize),
    /// Viewport-only horizontal scroll (horizontal wheel).
    ScrollColumns(isize),
    PageScroll(PageStep),
    /// `g`: arms the chord, or jumps to the top if already armed.
    ChordTop,
    JumpToBottom,
    /// Primary button press at a screen cell.
    ClickAt { x: u16, y: u16 },
    Quit,
}

/// What the event loop must do after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    let App { document, nav, .. } = app;

    match action {
        Action::Resync { width, height } => nav.resync(document, width, height),
        Action::MoveCursor { d_line, d_col } => nav.move_cursor(document, d_line, d_col),
        Action::ScrollLines(delta) => nav.scroll_lines(document, delta),
        Action::ScrollColumns(delta) => nav.scroll_columns(document, delta),
        Action::PageScroll(step) => nav.page_scroll(document, step),
        Action::ChordTop => nav.toggle_chord_or_jump_top(),
        Action::JumpToBottom => nav.jump_to_bottom(document),
        Action::ClickAt { x, y } => nav.click_at(document, x, y),
        Action::Quit => {
            debug!("Quit requested");
            return Effect::Quit;
        }
    }

    if !matches!(action, Action::Resync { .. }) {
        debug!(
            "{:?} -> cursor {}:{}, view {}:{}, chord {}",
            action, nav.current_line, nav.current_col, nav.start_line, nav.start_col, nav.pending_chord
        );
    }
    Effect::None
}
