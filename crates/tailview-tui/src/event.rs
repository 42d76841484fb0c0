//! Terminal event polling

use crossterm::event::{self, Event, KeyCode, KeyModifiers, MouseEvent, MouseEventKind};
use std::time::Duration;
use tailview_app::message::Message;
use tailview_app::{InputKey, WheelDirection};
use tailview_core::prelude::*;

/// How long `poll` waits before producing a tick
pub const POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        KeyCode::PageUp => Some(InputKey::PageUp),
        KeyCode::PageDown => Some(InputKey::PageDown),
        _ => None,
    }
}

/// Convert a crossterm mouse event to a wheel direction
pub fn mouse_event_to_wheel(mouse: MouseEvent) -> Option<WheelDirection> {
    match mouse.kind {
        MouseEventKind::ScrollUp => Some(WheelDirection::Up),
        MouseEventKind::ScrollDown => Some(WheelDirection::Down),
        _ => None,
    }
}

/// Translate one terminal event
pub fn event_to_message(event: Event) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind == event::KeyEventKind::Press => {
            key_event_to_input(key).map(Message::Key)
        }
        Event::Mouse(mouse) => mouse_event_to_wheel(mouse).map(Message::Wheel),
        _ => None,
    }
}

/// Poll for terminal events with timeout
pub fn poll() -> Result<Option<Message>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(event_to_message(event::read()?))
    } else {
        // Tick on timeout so the loop redraws
        Ok(Some(Message::Tick))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventKind, KeyEventState};

    fn mouse(kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_char_conversion() {
        let key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), Some(InputKey::Char('a')));
    }

    #[test]
    fn test_char_with_ctrl_conversion() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_event_to_input(key), Some(InputKey::CharCtrl('c')));
    }

    #[test]
    fn test_navigation_keys() {
        let cases = [
            (KeyCode::Up, InputKey::Up),
            (KeyCode::Down, InputKey::Down),
            (KeyCode::PageUp, InputKey::PageUp),
            (KeyCode::PageDown, InputKey::PageDown),
            (KeyCode::Home, InputKey::Home),
            (KeyCode::End, InputKey::End),
        ];
        for (code, expected) in cases {
            assert_eq!(
                key_event_to_input(KeyEvent::new(code, KeyModifiers::NONE)),
                Some(expected)
            );
        }
    }

    #[test]
    fn test_uppercase_letters() {
        let key = KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT);
        assert_eq!(key_event_to_input(key), Some(InputKey::Char('G')));
    }

    #[test]
    fn test_unsupported_key_returns_none() {
        let key = KeyEvent::new(KeyCode::Insert, KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), None);
    }

    #[test]
    fn test_wheel_events() {
        assert_eq!(
            event_to_message(Event::Mouse(mouse(MouseEventKind::ScrollUp))),
            Some(Message::Wheel(WheelDirection::Up))
        );
        assert_eq!(
            event_to_message(Event::Mouse(mouse(MouseEventKind::ScrollDown))),
            Some(Message::Wheel(WheelDirection::Down))
        );
        assert_eq!(
            event_to_message(Event::Mouse(mouse(MouseEventKind::Moved))),
            None
        );
    }

    #[test]
    fn test_key_release_is_ignored() {
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(event_to_message(Event::Key(release)), None);

        let press = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(
            event_to_message(Event::Key(press)),
            Some(Message::Key(InputKey::Char('q')))
        );
    }

    #[test]
    fn test_resize_produces_nothing() {
        assert_eq!(event_to_message(Event::Resize(80, 24)), None);
    }
}
