//! Tests for handler module

use super::*;
use crate::config::Settings;
use crate::input_key::{InputKey, WheelDirection};
use crate::message::Message;
use crate::state::{AppPhase, AppState};
use tailview_core::{ConnectionState, TransportEvent, Window};

/// State with `MAX_ITEMS = 100` and a configured URL
fn test_state(auto_scroll: bool) -> AppState {
    let mut settings = Settings::default();
    settings.stream.url = Some("ws://localhost:9000/logs".into());
    settings.viewport.max_scrollable_height_px = 32 * 100;
    settings.viewport.auto_scroll = auto_scroll;
    AppState::with_settings(&settings).unwrap()
}

/// Run a message and every follow-up message it produces
fn run(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = update(state, m);
        actions.extend(result.action);
        msg = result.message;
    }
    actions
}

fn open(state: &mut AppState) {
    run(state, Message::Transport(TransportEvent::Opened));
}

fn stream_lines(state: &mut AppState, range: std::ops::Range<usize>) {
    for i in range {
        run(
            state,
            Message::Transport(TransportEvent::Message(format!("line-{}", i))),
        );
    }
}

// ─────────────────────────────────────────────────────────
// Quit
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting_phase() {
    let mut state = AppState::new();
    assert_ne!(state.phase, AppPhase::Quitting);

    update(&mut state, Message::Quit);

    assert_eq!(state.phase, AppPhase::Quitting);
    assert!(state.should_quit());
}

#[test]
fn test_quit_keys() {
    let state = AppState::new();
    for key in [InputKey::Char('q'), InputKey::Esc, InputKey::CharCtrl('c')] {
        assert_eq!(handle_key(&state, key), Some(Message::Quit));
    }
}

#[test]
fn test_unmapped_key_is_ignored() {
    let mut state = AppState::new();
    assert_eq!(handle_key(&state, InputKey::Char('z')), None);
    let result = update(&mut state, Message::Key(InputKey::Char('z')));
    assert!(result.message.is_none());
    assert!(result.action.is_none());
}

// ─────────────────────────────────────────────────────────
// Key mapping
// ─────────────────────────────────────────────────────────

#[test]
fn test_navigation_keys() {
    let state = AppState::new();
    assert_eq!(handle_key(&state, InputKey::Up), Some(Message::ScrollUp));
    assert_eq!(handle_key(&state, InputKey::Down), Some(Message::ScrollDown));
    assert_eq!(handle_key(&state, InputKey::PageUp), Some(Message::PageUp));
    assert_eq!(handle_key(&state, InputKey::PageDown), Some(Message::PageDown));
    assert_eq!(handle_key(&state, InputKey::Home), Some(Message::ScrollToTop));
    assert_eq!(
        handle_key(&state, InputKey::End),
        Some(Message::ScrollToBottom)
    );
    assert_eq!(
        handle_key(&state, InputKey::Char('a')),
        Some(Message::ToggleAutoScroll)
    );
}

#[test]
fn test_wheel_scrolls_three_rows() {
    let mut state = test_state(false);
    open(&mut state);
    stream_lines(&mut state, 0..50);
    state.viewport.update_viewport_size(10);

    run(&mut state, Message::Wheel(WheelDirection::Down));
    assert_eq!(state.viewport.visible_range(), (3, 13));

    run(&mut state, Message::Wheel(WheelDirection::Up));
    assert_eq!(state.viewport.visible_range(), (0, 10));
}

#[test]
fn test_wheel_steps_rows_beyond_max_items() {
    let mut state = test_state(false);
    open(&mut state);
    stream_lines(&mut state, 0..500);
    state.viewport.update_viewport_size(10);
    assert_eq!(state.viewport.visible_range(), (0, 10));

    run(&mut state, Message::Key(InputKey::Down));
    assert_eq!(state.viewport.visible_range(), (1, 11));

    run(&mut state, Message::Wheel(WheelDirection::Down));
    assert_eq!(state.viewport.visible_range(), (4, 14));

    run(&mut state, Message::Wheel(WheelDirection::Up));
    assert_eq!(state.viewport.visible_range(), (1, 11));
}

#[test]
fn test_up_after_held_growth_moves_one_row() {
    let mut state = test_state(true);
    open(&mut state);
    stream_lines(&mut state, 0..300);
    state.viewport.update_viewport_size(10);
    assert_eq!(state.viewport.visible_range(), (290, 300));

    run(&mut state, Message::Key(InputKey::Char('a')));
    stream_lines(&mut state, 300..1_000);
    state.viewport.update_viewport_size(10);
    assert_eq!(state.viewport.visible_range(), (290, 300));

    run(&mut state, Message::Key(InputKey::Up));
    assert_eq!(state.viewport.visible_range(), (289, 299));
}

// ─────────────────────────────────────────────────────────
// Transport lifecycle
// ─────────────────────────────────────────────────────────

#[test]
fn test_connect_returns_start_action_once() {
    let mut state = test_state(true);

    let actions = run(&mut state, Message::Connect);
    assert_eq!(actions.len(), 1);
    assert!(matches!(
        &actions[0],
        UpdateAction::StartTransport { config } if config.url == "ws://localhost:9000/logs"
    ));
    assert!(state.transport_started);

    assert!(run(&mut state, Message::Connect).is_empty());
}

#[test]
fn test_connect_without_url_does_nothing() {
    let mut state = AppState::new();
    assert!(run(&mut state, Message::Connect).is_empty());
    assert!(!state.transport_started);
}

#[test]
fn test_disconnect_stops_running_transport() {
    let mut state = test_state(true);
    run(&mut state, Message::Connect);
    open(&mut state);

    assert_eq!(
        run(&mut state, Message::Disconnect),
        vec![UpdateAction::StopTransport]
    );

    run(
        &mut state,
        Message::Transport(TransportEvent::Closed { reason: None }),
    );
    assert!(run(&mut state, Message::Disconnect).is_empty());
}

#[test]
fn test_close_event_freezes_buffer() {
    let mut state = test_state(true);
    open(&mut state);
    stream_lines(&mut state, 0..5);

    run(
        &mut state,
        Message::Transport(TransportEvent::closed_with("connection reset")),
    );
    stream_lines(&mut state, 5..10);

    assert_eq!(state.buffer().len(), 5);
    assert_eq!(state.buffer().get(4).unwrap().text(), "line-4");
    assert_eq!(
        state.connection_state(),
        &ConnectionState::Closed {
            reason: Some("connection reset".into())
        }
    );
}

// ─────────────────────────────────────────────────────────
// Windowing scenarios
// ─────────────────────────────────────────────────────────

#[test]
fn test_auto_scroll_window_after_250_lines() {
    let mut state = test_state(true);
    open(&mut state);
    stream_lines(&mut state, 0..250);

    let window = state.viewport.window();
    assert_eq!(window, Window::new(150, 100));

    state.viewport.update_viewport_size(20);
    let (_, end) = state.viewport.visible_range();
    assert_eq!(end, 250);
    assert_eq!(state.buffer().get(end - 1).unwrap().text(), "line-249");
}

#[test]
fn test_auto_scroll_last_index_after_every_append() {
    let mut state = test_state(true);
    open(&mut state);
    for i in 0..180 {
        stream_lines(&mut state, i..i + 1);
        assert_eq!(state.viewport.window().last(), Some(i));
    }
}

#[test]
fn test_manual_scroll_maps_offset_to_start() {
    let mut state = test_state(false);
    open(&mut state);
    stream_lines(&mut state, 0..500);
    state.viewport.update_viewport_size(10);

    run(&mut state, Message::ScrollToTop);
    assert_eq!(state.viewport.window().start, 0);

    let range = state.viewport.scrollable_range_px();
    state.viewport.on_scroll(range);
    assert_eq!(state.viewport.window().start, 400);
}

#[test]
fn test_empty_stream_has_empty_window() {
    let mut state = test_state(true);
    open(&mut state);
    state.viewport.update_viewport_size(10);

    run(&mut state, Message::ScrollDown);
    run(&mut state, Message::PageDown);
    run(&mut state, Message::ScrollToBottom);

    assert_eq!(state.viewport.window(), Window::new(0, 0));
    assert_eq!(state.viewport.visible_range(), (0, 0));
}

#[test]
fn test_toggle_holds_window_then_reanchors() {
    let mut state = test_state(true);
    open(&mut state);
    stream_lines(&mut state, 0..300);
    assert_eq!(state.viewport.window(), Window::new(200, 100));

    run(&mut state, Message::Key(InputKey::Char('a')));
    assert!(!state.auto_scroll.is_enabled());

    stream_lines(&mut state, 300..450);
    assert_eq!(state.viewport.window(), Window::new(200, 100));

    run(&mut state, Message::Key(InputKey::Char('a')));
    assert!(state.auto_scroll.is_enabled());
    assert_eq!(state.viewport.window(), Window::new(350, 100));
}

#[test]
fn test_manual_scroll_keeps_auto_scroll_setting() {
    let mut state = test_state(true);
    open(&mut state);
    stream_lines(&mut state, 0..50);
    state.viewport.update_viewport_size(10);

    run(&mut state, Message::ScrollToTop);
    assert!(state.auto_scroll.is_enabled());

    stream_lines(&mut state, 50..51);
    state.viewport.update_viewport_size(10);
    assert_eq!(state.viewport.visible_range(), (41, 51));
}
