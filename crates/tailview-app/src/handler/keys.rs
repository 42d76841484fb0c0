//! Key and mouse wheel mapping

use crate::input_key::{InputKey, WheelDirection};
use crate::message::Message;
use crate::state::AppState;

/// Rows moved per mouse wheel notch
pub const WHEEL_SCROLL_ROWS: usize = 3;

/// Convert a key press to a message
pub fn handle_key(_state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Char('a') => Some(Message::ToggleAutoScroll),

        // ─────────────────────────────────────────────────────────
        // Scrolling
        // ─────────────────────────────────────────────────────────
        InputKey::Up | InputKey::Char('k') => Some(Message::ScrollUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::ScrollDown),
        InputKey::PageUp | InputKey::CharCtrl('b') => Some(Message::PageUp),
        InputKey::PageDown | InputKey::CharCtrl('f') => Some(Message::PageDown),
        InputKey::Home | InputKey::Char('g') => Some(Message::ScrollToTop),
        InputKey::End | InputKey::Char('G') => Some(Message::ScrollToBottom),

        _ => None,
    }
}

/// Convert a wheel notch to a message
pub fn handle_wheel(direction: WheelDirection) -> Message {
    match direction {
        WheelDirection::Up => Message::ScrollUpBy(WHEEL_SCROLL_ROWS),
        WheelDirection::Down => Message::ScrollDownBy(WHEEL_SCROLL_ROWS),
    }
}
