use glance::core::action::{Action, Effect, update};
use glance::core::document::Document;
use glance::core::navigation::PageStep;
use glance::core::state::App;
use proptest::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

fn app_from(lines: Vec<String>) -> App {
    App::new(Document::from_lines(lines), "prop.txt")
}

fn resync(app: &mut App, width: u16, height: u16) {
    update(app, Action::Resync { width, height });
}

/// Checks the viewport/cursor invariants. With `rendered`, also checks the
/// column and cursor-visibility invariants that only hold right after a resync.
fn assert_invariants(app: &App, rendered: bool) {
    let nav = &app.nav;
    let doc = &app.document;
    assert!(nav.current_line < doc.len(), "cursor line out of document");
    assert!(
        nav.start_line <= nav.max_start_line(doc),
        "start_line {} above max {}",
        nav.start_line,
        nav.max_start_line(doc)
    );
    if !rendered {
        return;
    }
    // A line change keeps the old column until the next resync clamps it.
    assert!(
        nav.current_col <= doc.line_len(nav.current_line),
        "cursor column past append point"
    );
    let content_height = nav.content_height();
    if content_height > 0 {
        assert!(nav.start_line <= nav.current_line);
        assert!(nav.current_line < nav.start_line + content_height);
    }
}

// ============================================================================
// Strategies
// ============================================================================

fn lines_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z \t]{0,40}", 1..120)
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        (-3isize..=3, -3isize..=3).prop_map(|(d_line, d_col)| Action::MoveCursor { d_line, d_col }),
        (-10isize..=10).prop_map(Action::ScrollLines),
        (-10isize..=10).prop_map(Action::ScrollColumns),
        prop_oneof![
            Just(PageStep::FullDown),
            Just(PageStep::FullUp),
            Just(PageStep::HalfDown),
            Just(PageStep::HalfUp),
        ]
        .prop_map(Action::PageScroll),
        Just(Action::ChordTop),
        Just(Action::JumpToBottom),
        (0u16..100, 0u16..60).prop_map(|(x, y)| Action::ClickAt { x, y }),
        (1u16..200, 0u16..60).prop_map(|(width, height)| Action::Resync { width, height }),
    ]
}

proptest! {
    #[test]
    fn invariants_hold_after_every_command(
        lines in lines_strategy(),
        width in 1u16..200,
        height in 0u16..60,
        actions in prop::collection::vec(action_strategy(), 0..80),
    ) {
        let mut app = app_from(lines);
        resync(&mut app, width, height);
        assert_invariants(&app, true);

        let (mut w, mut h) = (width, height);
        for action in actions {
            if let Action::Resync { width, height } = action {
                w = width;
                h = height;
            }
            prop_assert_eq!(update(&mut app, action), Effect::None);
            assert_invariants(&app, false);

            // The event loop resyncs before every frame.
            resync(&mut app, w, h);
            assert_invariants(&app, true);
        }
    }

    #[test]
    fn page_scroll_stays_within_bounds(
        lines in lines_strategy(),
        height in 0u16..60,
        presses in 1usize..60,
    ) {
        let mut app = app_from(lines);
        resync(&mut app, 80, height);
        let max = app.nav.max_start_line(&app.document);

        for _ in 0..presses {
            update(&mut app, Action::PageScroll(PageStep::FullDown));
            prop_assert!(app.nav.start_line <= max);
        }
        for _ in 0..presses {
            update(&mut app, Action::PageScroll(PageStep::FullUp));
            prop_assert!(app.nav.start_line <= max);
        }
        // Enough full pages up always reaches the top.
        for _ in 0..(app.document.len() + 1) {
            update(&mut app, Action::PageScroll(PageStep::FullUp));
        }
        if app.nav.content_height() > 0 {
            prop_assert_eq!(app.nav.start_line, 0);
        }
    }

    #[test]
    fn render_never_panics(
        lines in lines_strategy(),
        width in 0u16..120,
        height in 0u16..50,
        actions in prop::collection::vec(action_strategy(), 0..30),
    ) {
        use ratatui::buffer::Buffer;
        use ratatui::layout::Rect;

        let mut app = app_from(lines);
        for action in actions {
            update(&mut app, action);
        }
        resync(&mut app, width, height);

        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        let before = app.nav.clone();
        let cursor = glance::tui::ui::render(&app, area, &mut buf);
        prop_assert_eq!(&app.nav, &before);
        if let Some(pos) = cursor {
            prop_assert!(pos.x >= 1 && pos.x + 1 < width.max(1));
            prop_assert!(pos.y >= 1 && u32::from(pos.y) < u32::from(height).saturating_sub(2));
        }
    }
}

// ============================================================================
// Fixed Scenarios
// ============================================================================

#[test]
fn test_viewport_tracks_cursor_line_50() {
    let mut app = app_from((0..100).map(|i| i.to_string()).collect());
    resync(&mut app, 80, 10);
    for _ in 0..50 {
        update(&mut app, Action::MoveCursor { d_line: 1, d_col: 0 });
    }
    resync(&mut app, 80, 10);
    assert_eq!(app.nav.start_line, 44);

    update(&mut app, Action::ChordTop);
    update(&mut app, Action::ChordTop);
    resync(&mut app, 80, 10);
    assert_eq!(app.nav.current_line, 0);
    assert_eq!(app.nav.start_line, 0);
}

/// `g`, `j`, `g` still jumps: the chord flag is not cleared by other commands.
#[test]
fn test_chord_quirk_g_j_g_jumps_to_top() {
    let mut app = app_from((0..20).map(|i| i.to_string()).collect());
    resync(&mut app, 80, 10);
    update(&mut app, Action::JumpToBottom);
    update(&mut app, Action::ChordTop);
    update(&mut app, Action::MoveCursor { d_line: -1, d_col: 0 });
    assert_eq!(app.nav.current_line, 18);
    assert!(app.nav.pending_chord);
    update(&mut app, Action::ChordTop);
    assert_eq!(app.nav.current_line, 0);
    assert!(!app.nav.pending_chord);
}

#[test]
fn test_clamp_idempotence_at_edges() {
    let mut app = app_from(vec!["a".into(), "b".into(), "c".into()]);
    resync(&mut app, 80, 10);

    let before = app.nav.clone();
    update(&mut app, Action::MoveCursor { d_line: -1, d_col: 0 });
    assert_eq!(app.nav, before);

    update(&mut app, Action::JumpToBottom);
    let before = app.nav.clone();
    update(&mut app, Action::MoveCursor { d_line: 1, d_col: 0 });
    assert_eq!(app.nav, before);
}

#[test]
fn test_click_mapping_with_scrolled_viewport() {
    let mut app = app_from((0..30).map(|_| "abcdefghij".to_string()).collect());
    resync(&mut app, 80, 10);
    app.nav.start_line = 5;
    app.nav.start_col = 2;
    update(&mut app, Action::ClickAt { x: 4, y: 3 });
    assert_eq!(app.nav.current_line, 7);
    assert_eq!(app.nav.current_col, 5);
}
