//! # Navigation State
//!
//! Viewport origin, cursor, screen size and the pending `gg` chord.
//!
//! ```text
//!  col 0                                 screen_width-1
//!  ┌────────────────────────────────────┐  row 0
//!  │ Document[start_line]   from        │  row 1
//!  │ Document[start_line+1] start_col   │
//!  │ ...                                │  content_height = screen_height - 3
//!  └────────────────────────────────────┘  row screen_height-2
//!   status line                            row screen_height-1
//! ```
//!
//! All methods accept the `&Document` explicitly. The document is owned by
//! `App`, keeping the dependency visible. Nothing here fails: out-of-range
//! input is clamped or ignored.
//!
//! Vertically the viewport follows the cursor on every `resync`. Horizontally
//! it never does; a cursor moved right of the viewport is simply not drawn.

use crate::core::document::Document;

/// Rows taken by the top border, bottom border and status line.
pub const CHROME_ROWS: u16 = 3;
/// Columns taken by the left and right border.
pub const CHROME_COLS: u16 = 2;

/// Page scroll amounts, in multiples of the content height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStep {
    FullDown,
    FullUp,
    HalfDown,
    HalfUp,
}

impl PageStep {
    /// Signed line delta for a content region of `content_height` rows.
    /// Half pages truncate toward zero.
    pub fn delta(self, content_height: usize) -> isize {
        let full = content_height as isize;
        match self {
            PageStep::FullDown => full,
            PageStep::FullUp => -full,
            PageStep::HalfDown => full / 2,
            PageStep::HalfUp => -(full / 2),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigationState {
    pub start_line: usize,
    pub start_col: usize,
    pub current_line: usize,
    pub current_col: usize,
    pub screen_width: u16,
    pub screen_height: u16,
    /// Set between the first and second `g`.
    pub pending_chord: bool,
}

/// `value + delta` clamped to `[0, max]`.
fn clamp_offset(value: usize, delta: isize, max: usize) -> usize {
    value.saturating_add_signed(delta).min(max)
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content_height(&self) -> usize {
        usize::from(self.screen_height.saturating_sub(CHROME_ROWS))
    }

    pub fn content_width(&self) -> usize {
        usize::from(self.screen_width.saturating_sub(CHROME_COLS))
    }

    pub fn max_start_line(&self, doc: &Document) -> usize {
        doc.len().saturating_sub(self.content_height())
    }

    /// Store the screen size and restore every invariant before a render.
    ///
    /// Called once per frame whether or not the terminal was resized.
    pub fn resync(&mut self, doc: &Document, width: u16, height: u16) {
        self.screen_width = width;
        self.screen_height = height;

        // A taller screen lowers the bound.
        self.start_line = self.start_line.min(self.max_start_line(doc));

        let content_height = self.content_height();
        if content_height > 0 {
            if self.current_line < self.start_line {
                self.start_line = self.current_line;
            } else if self.current_line >= self.start_line + content_height {
                self.start_line = self.current_line + 1 - content_height;
            }
        }

        self.current_col = self.current_col.min(doc.line_len(self.current_line));
    }

    /// Move the cursor by `(d_line, d_col)`.
    ///
    /// Each axis is independent: a move that would leave the document (or the
    /// line, for columns) is dropped rather than clamped. The column bound uses
    /// the line reached after the vertical move.
    pub fn move_cursor(&mut self, doc: &Document, d_line: isize, d_col: isize) {
        if d_line != 0
            && let Some(line) = self.current_line.checked_add_signed(d_line)
            && line < doc.len()
        {
            self.current_line = line;
        }

        if d_col != 0
            && let Some(col) = self.current_col.checked_add_signed(d_col)
            && col <= doc.line_len(self.current_line)
        {
            self.current_col = col;
        }
    }

    /// Move the viewport by `delta` lines. The cursor stays put.
    pub fn scroll_lines(&mut self, doc: &Document, delta: isize) {
        self.start_line = clamp_offset(self.start_line, delta, self.max_start_line(doc));
    }

    /// Move the viewport horizontally by `delta` columns, bounded by the
    /// longest line. The cursor stays put.
    pub fn scroll_columns(&mut self, doc: &Document, delta: isize) {
        self.start_col = clamp_offset(self.start_col, delta, doc.max_line_len());
    }

    pub fn page_scroll(&mut self, doc: &Document, step: PageStep) {
        let delta = step.delta(self.content_height());
        self.scroll_lines(doc, delta);
    }

    pub fn jump_to_top(&mut self) {
        self.current_line = 0;
        self.pending_chord = false;
    }

    pub fn jump_to_bottom(&mut self, doc: &Document) {
        self.current_line = doc.len() - 1;
        self.pending_chord = false;
    }

    /// First `g` arms the chord, second `g` jumps to the top.
    ///
    /// Other commands in between leave the chord armed, so `g j g` still
    /// jumps. There is no timeout.
    pub fn toggle_chord_or_jump_top(&mut self) {
        if self.pending_chord {
            self.jump_to_top();
        } else {
            self.pending_chord = true;
        }
    }

    /// Place the cursor at the document position under screen cell `(x, y)`.
    ///
    /// Clicks outside the content rows or below the last line are ignored.
    /// A click on the left border with no horizontal scroll keeps the column.
    pub fn click_at(&mut self, doc: &Document, x: u16, y: u16) {
        let row = usize::from(y);
        if row < 1 || row > self.content_height() {
            return;
        }
        let line = self.start_line + row - 1;
        if line >= doc.len() {
            return;
        }
        self.current_line = line;

        if let Some(col) = (self.start_col + usize::from(x)).checked_sub(1) {
            self.current_col = col.min(doc.line_len(line));
        }
    }

    /// Cursor position relative to the content region's top-left cell, or
    /// `None` when it falls outside the visible rectangle.
    pub fn cursor_screen_offset(&self) -> Option<(usize, usize)> {
        let rel_y = self.current_line.checked_sub(self.start_line)?;
        let rel_x = self.current_col.checked_sub(self.start_col)?;
        (rel_y < self.content_height() && rel_x < self.content_width()).then_some((rel_x, rel_y))
    }
}
