//! Message types for the application (TEA pattern)

use crate::input_key::{InputKey, WheelDirection};
use tailview_core::TransportEvent;

/// All possible messages in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from the terminal
    Key(InputKey),

    /// Mouse wheel event from the terminal
    Wheel(WheelDirection),

    /// Event from the stream transport
    Transport(TransportEvent),

    /// Start the stream transport
    Connect,

    /// Stop the stream transport; buffered lines stay visible
    Disconnect,

    /// Tick event for periodic updates
    Tick,

    /// Quit the viewer (key press, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Scroll Messages
    // ─────────────────────────────────────────────────────────
    /// Scroll up one row
    ScrollUp,
    /// Scroll down one row
    ScrollDown,
    /// Scroll up by `n` rows
    ScrollUpBy(usize),
    /// Scroll down by `n` rows
    ScrollDownBy(usize),
    PageUp,
    PageDown,
    ScrollToTop,
    /// Bottom-anchor the window
    ScrollToBottom,

    /// Flip auto-scroll; enabling it also scrolls to the bottom
    ToggleAutoScroll,
}
