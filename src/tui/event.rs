//! Translates crossterm input into core `Action`s.
//!
//! The mapping is stateless: the `gg` chord is tracked by the navigation state,
//! not here. Unrecognized input maps to `None` and is dropped by the caller.

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use crate::core::action::Action;
use crate::core::navigation::PageStep;

const DOWN: Action = Action::MoveCursor { d_line: 1, d_col: 0 };
const UP: Action = Action::MoveCursor { d_line: -1, d_col: 0 };
const RIGHT: Action = Action::MoveCursor { d_line: 0, d_col: 1 };
const LEFT: Action = Action::MoveCursor { d_line: 0, d_col: -1 };

/// Block until the terminal produces the next event.
///
/// This is the event loop's only suspension point.
pub fn next_event() -> std::io::Result<Event> {
    event::read()
}

/// Map one terminal event to an action. `wheel_lines` is the scroll step per
/// wheel notch.
pub fn map_event(event: &Event, wheel_lines: usize) -> Option<Action> {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) => map_mouse(mouse, wheel_lines),
        _ => None,
    }
}

fn map_key(key: &KeyEvent) -> Option<Action> {
    // Release/repeat events arrive on terminals with keyboard enhancement
    if key.kind != KeyEventKind::Press {
        return None;
    }

    log::debug!("Key event: {:?} with modifiers {:?}", key.code, key.modifiers);

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('f') => Some(Action::PageScroll(PageStep::FullDown)),
            KeyCode::Char('b') => Some(Action::PageScroll(PageStep::FullUp)),
            KeyCode::Char('d') => Some(Action::PageScroll(PageStep::HalfDown)),
            KeyCode::Char('u') => Some(Action::PageScroll(PageStep::HalfUp)),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Down | KeyCode::Char('j') => Some(DOWN),
        KeyCode::Up | KeyCode::Char('k') => Some(UP),
        KeyCode::Right | KeyCode::Char('l') => Some(RIGHT),
        KeyCode::Left | KeyCode::Char('h') => Some(LEFT),
        KeyCode::Char('g') => Some(Action::ChordTop),
        KeyCode::Char('G') => Some(Action::JumpToBottom),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

fn map_mouse(mouse: &MouseEvent, wheel_lines: usize) -> Option<Action> {
    let step = isize::try_from(wheel_lines).unwrap_or(isize::MAX);
    match mouse.kind {
        MouseEventKind::ScrollUp => Some(Action::ScrollLines(-step)),
        MouseEventKind::ScrollDown => Some(Action::ScrollLines(step)),
        MouseEventKind::ScrollLeft => Some(Action::ScrollColumns(-step)),
        MouseEventKind::ScrollRight => Some(Action::ScrollColumns(step)),
        MouseEventKind::Down(MouseButton::Left) => Some(Action::ClickAt {
            x: mouse.column,
            y: mouse.row,
        }),
        _ => None,
    }
}
