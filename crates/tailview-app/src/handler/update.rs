//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppPhase, AppState};

use super::{keys, scroll, transport, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match keys::handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Wheel(direction) => UpdateResult::message(keys::handle_wheel(direction)),

        // ─────────────────────────────────────────────────────────
        // Transport Messages
        // ─────────────────────────────────────────────────────────
        Message::Connect => transport::handle_connect(state),
        Message::Disconnect => transport::handle_disconnect(state),
        Message::Transport(event) => transport::handle_transport_event(state, event),

        // ─────────────────────────────────────────────────────────
        // Scroll Messages
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp => scroll::handle_scroll_up(state, 1),
        Message::ScrollDown => scroll::handle_scroll_down(state, 1),
        Message::ScrollUpBy(n) => scroll::handle_scroll_up(state, n),
        Message::ScrollDownBy(n) => scroll::handle_scroll_down(state, n),
        Message::PageUp => scroll::handle_page_up(state),
        Message::PageDown => scroll::handle_page_down(state),
        Message::ScrollToTop => scroll::handle_scroll_to_top(state),
        Message::ScrollToBottom => scroll::handle_scroll_to_bottom(state),
        Message::ToggleAutoScroll => scroll::handle_toggle_auto_scroll(state),

        Message::Tick => UpdateResult::none(),
    }
}
