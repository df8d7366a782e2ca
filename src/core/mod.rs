//! # Core Viewer Logic
//!
//! Document, navigation and the action reducer.
//! Knows nothing about terminals, ratatui or crossterm.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Document (lines)     │
//!                    │  • NavigationState      │
//!                    │  • Action + update()    │
//!                    │                         │
//!                    │  No terminal. No draw.  │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`document`]: The `Document` — immutable lines loaded from disk
//! - [`navigation`]: The `NavigationState` — viewport, cursor and chord logic
//! - [`state`]: The `App` struct — all viewer state in one place
//! - [`action`]: The `Action` enum — everything that can happen in the viewer
//! - [`config`]: Sparse TOML config and its resolution

pub mod action;
pub mod config;
pub mod document;
pub mod navigation;
pub mod state;
