//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the document,
//! and translates keyboard and mouse events into `core::action::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Loop
//!
//! ```text
//! ┌─► Resync(size) ─► draw ─► read event (blocks) ─► map ─► update ─┐
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Redraws happen only after an event, so the terminal's own cursor blink is
//! never reset by a redraw and a blinking block cursor is used.

pub mod event;
pub mod ui;

use log::{debug, info};
use std::io::stdout;

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, SetCursorStyle::BlinkingBlock)?;
        info!("Terminal modes enabled (mouse, blinking block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            SetCursorStyle::DefaultUserShape,
            Show // Leave the shell with a visible cursor
        );
    }
}

pub fn run(mut app: App, config: &ResolvedConfig) -> std::io::Result<()> {
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut app, config);
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    config: &ResolvedConfig,
) -> std::io::Result<()> {
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    loop {
        let size = terminal.size()?;
        update(
            app,
            Action::Resync {
                width: size.width,
                height: size.height,
            },
        );
        terminal.draw(|f| ui::draw_ui(f, app))?;

        let event = event::next_event()?;
        if let crossterm::event::Event::Resize(width, height) = event {
            debug!("Resized to {}x{}", width, height);
            continue;
        }

        let Some(action) = event::map_event(&event, config.wheel_lines) else {
            continue;
        };
        if update(app, action) == Effect::Quit {
            info!("Exiting");
            return Ok(());
        }
    }
}
