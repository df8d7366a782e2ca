//! Projects `&App` onto a cell buffer. Never mutates state.
//!
//! ```text
//! row 0        ┌──────────────┐
//! rows 1..h-2  │ content      │   content_height = h - 3
//! row h-2      └──────────────┘
//! row h-1       status line
//! ```

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Widget};

use crate::core::state::App;

pub fn draw_ui(frame: &mut Frame, app: &App) {
    let area = frame.area();
    if let Some(cursor) = render(app, area, frame.buffer_mut()) {
        frame.set_cursor_position(cursor);
    }
}

/// Draw border, visible text and status line into `buf`.
///
/// Returns the terminal cursor cell, or `None` when the cursor is outside the
/// visible content rectangle and should be hidden.
pub fn render(app: &App, area: Rect, buf: &mut Buffer) -> Option<Position> {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Min(0), Length(1)]);
    let [frame_area, status_area] = layout.areas(area);

    let block = Block::bordered();
    let inner = block.inner(frame_area);
    block.render(frame_area, buf);

    let nav = &app.nav;
    let content_height = nav.content_height();
    let content_width = nav.content_width();

    for row in 0..content_height {
        let Some(line) = app.document.line(nav.start_line + row) else {
            break;
        };
        let visible: String = line
            .slice(nav.start_col, content_width)
            .map(displayable)
            .collect();
        draw_text(buf, inner, 0, row, &visible);
    }

    let status: String = app
        .status_text()
        .chars()
        .take(content_width)
        .map(displayable)
        .collect();
    draw_text(buf, status_area, 1, 0, &status);

    let (rel_x, rel_y) = nav.cursor_screen_offset()?;
    let x = u16::try_from(rel_x + 1).ok()?;
    let y = u16::try_from(rel_y + 1).ok()?;
    Some(Position::new(area.x + x, area.y + y))
}

/// Control characters would not occupy a cell; draw them as blanks so one
/// code point is always one column.
fn displayable(c: char) -> char {
    if c.is_control() { ' ' } else { c }
}

/// Write `text` at offset `(x, y)` inside `area`, clipped to the area and the
/// buffer.
fn draw_text(buf: &mut Buffer, area: Rect, x: usize, y: usize, text: &str) {
    let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) else {
        return;
    };
    let target = Rect::new(
        area.x.saturating_add(x),
        area.y.saturating_add(y),
        area.width.saturating_sub(x),
        1,
    )
    .intersection(area)
    .intersection(buf.area);
    if target.is_empty() {
        return;
    }
    buf.set_stringn(
        target.x,
        target.y,
        text,
        usize::from(target.width),
        Style::default(),
    );
}
