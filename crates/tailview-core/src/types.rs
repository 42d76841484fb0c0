//! Core domain types

use chrono::{DateTime, Local};

/// A single received line of the stream.
///
/// The logical index is not stored: it is the line's position in the
/// [`LogBuffer`](crate::LogBuffer), assigned once on append.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    text: Box<str>,
    received_at: DateTime<Local>,
}

impl LogLine {
    /// Create a line stamped with the current local time
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into().into_boxed_str(),
            received_at: Local::now(),
        }
    }

    /// Create a line with an explicit receive time
    pub fn with_timestamp(text: impl Into<String>, received_at: DateTime<Local>) -> Self {
        Self {
            text: text.into().into_boxed_str(),
            received_at,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn received_at(&self) -> DateTime<Local> {
        self.received_at
    }

    /// Size of the line in UTF-8 bytes
    pub fn byte_len(&self) -> usize {
        self.text.len()
    }

    /// Format receive time for display
    pub fn formatted_time(&self) -> String {
        self.received_at.format("%H:%M:%S").to_string()
    }
}

/// Lifecycle of the stream connection as observed by the viewer.
///
/// `Connecting → Open → Receiving → Closed`. There is no transition out of
/// `Closed`; a new connection means a new viewer session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConnectionState {
    /// Transport started, handshake not finished
    #[default]
    Connecting,
    /// Handshake done, nothing received yet
    Open,
    /// At least one message received
    Receiving,
    /// Connection ended; `reason` is absent for a clean close
    Closed { reason: Option<String> },
}

impl ConnectionState {
    pub fn is_closed(&self) -> bool {
        matches!(self, ConnectionState::Closed { .. })
    }

    /// Whether messages may still be ingested in this state
    pub fn accepts_messages(&self) -> bool {
        matches!(self, ConnectionState::Open | ConnectionState::Receiving)
    }

    /// Short label for the status bar
    pub fn label(&self) -> &'static str {
        match self {
            ConnectionState::Connecting => "Connecting",
            ConnectionState::Open => "Open",
            ConnectionState::Receiving => "Receiving",
            ConnectionState::Closed { .. } => "Closed",
        }
    }
}
