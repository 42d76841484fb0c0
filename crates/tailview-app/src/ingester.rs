//! Stream ingestion - transport events into the line buffer.
//!
//! The ingester owns the [`LogBuffer`] and the [`ByteCounter`] and tracks the
//! connection state reported by the transport. It accepts messages only while
//! the connection is open; after `Closed` the buffer is frozen but stays
//! readable.

use tailview_core::prelude::*;
use tailview_core::{ByteCounter, ConnectionState, LogBuffer, LogLine, Progress, TransportEvent};

/// What a transport event did to the ingester
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestOutcome {
    /// A line was appended; carries the new logical length
    Appended(usize),
    /// The connection state changed
    StateChanged,
    /// The event was dropped
    Ignored,
}

/// Consumes transport events, appends lines and counts bytes
#[derive(Debug)]
pub struct StreamIngester {
    buffer: LogBuffer,
    bytes: ByteCounter,
    state: ConnectionState,
    target_bytes: u64,
    dropped: u64,
}

impl StreamIngester {
    /// Create an ingester with an unbounded buffer
    pub fn new(target_bytes: u64) -> Self {
        Self::with_buffer(LogBuffer::new(), target_bytes)
    }

    pub fn with_buffer(buffer: LogBuffer, target_bytes: u64) -> Self {
        Self {
            buffer,
            bytes: ByteCounter::new(),
            state: ConnectionState::Connecting,
            target_bytes,
            dropped: 0,
        }
    }

    /// Route one transport event
    pub fn on_event(&mut self, event: TransportEvent) -> IngestOutcome {
        match event {
            TransportEvent::Opened => self.on_open(),
            TransportEvent::Message(text) => match self.on_message(text) {
                Some(len) => IngestOutcome::Appended(len),
                None => IngestOutcome::Ignored,
            },
            TransportEvent::Closed { reason } => self.on_close(reason),
        }
    }

    /// Append `text` as a new line and count its bytes.
    ///
    /// Returns the new logical length, or `None` when the connection is not
    /// open and the message was dropped.
    pub fn on_message(&mut self, text: impl Into<String>) -> Option<usize> {
        if !self.state.accepts_messages() {
            self.dropped += 1;
            warn!(
                "Dropping message received while {}",
                self.state.label().to_lowercase()
            );
            return None;
        }

        let text = text.into();
        self.bytes.record(&text);
        let len = self.buffer.append(LogLine::new(text));

        if self.state == ConnectionState::Open {
            self.state = ConnectionState::Receiving;
        }
        Some(len)
    }

    fn on_open(&mut self) -> IngestOutcome {
        if self.state != ConnectionState::Connecting {
            warn!("Ignoring open event while {}", self.state.label().to_lowercase());
            return IngestOutcome::Ignored;
        }
        info!("Stream connected");
        self.state = ConnectionState::Open;
        IngestOutcome::StateChanged
    }

    fn on_close(&mut self, reason: Option<String>) -> IngestOutcome {
        if self.state.is_closed() {
            return IngestOutcome::Ignored;
        }
        match &reason {
            Some(reason) => warn!("Stream closed: {}", reason),
            None => info!("Stream closed"),
        }
        self.state = ConnectionState::Closed { reason };
        IngestOutcome::StateChanged
    }

    /// Stop accepting messages without waiting for the transport
    pub fn close(&mut self) {
        self.on_close(None);
    }

    pub fn buffer(&self) -> &LogBuffer {
        &self.buffer
    }

    pub fn connection_state(&self) -> &ConnectionState {
        &self.state
    }

    pub fn bytes(&self) -> u64 {
        self.bytes.bytes()
    }

    /// Messages dropped because the connection was not open
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    pub fn target_bytes(&self) -> u64 {
        self.target_bytes
    }

    /// Bytes received against the configured target
    pub fn progress(&self) -> Progress {
        self.bytes.progress(self.target_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_ingester() -> StreamIngester {
        let mut ingester = StreamIngester::new(1_000);
        assert_eq!(
            ingester.on_event(TransportEvent::Opened),
            IngestOutcome::StateChanged
        );
        ingester
    }

    #[test]
    fn test_starts_connecting() {
        let ingester = StreamIngester::new(1_000);
        assert_eq!(ingester.connection_state(), &ConnectionState::Connecting);
        assert!(ingester.buffer().is_empty());
    }

    #[test]
    fn test_messages_append_in_order() {
        let mut ingester = open_ingester();
        assert_eq!(ingester.on_message("first"), Some(1));
        assert_eq!(ingester.on_message("second"), Some(2));

        assert_eq!(ingester.buffer().get(0).unwrap().text(), "first");
        assert_eq!(ingester.buffer().get(1).unwrap().text(), "second");
        assert_eq!(ingester.connection_state(), &ConnectionState::Receiving);
    }

    #[test]
    fn test_bytes_are_counted() {
        let mut ingester = open_ingester();
        ingester.on_message("héllo");
        ingester.on_message("abc");
        assert_eq!(ingester.bytes(), 6 + 3);

        let progress = ingester.progress();
        assert_eq!(progress.bytes, 9);
        assert!((progress.percent - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_messages_before_open_are_dropped() {
        let mut ingester = StreamIngester::new(1_000);
        assert_eq!(ingester.on_message("early"), None);
        assert!(ingester.buffer().is_empty());
        assert_eq!(ingester.bytes(), 0);
        assert_eq!(ingester.dropped(), 1);
    }

    #[test]
    fn test_closed_stops_ingestion_but_keeps_lines() {
        let mut ingester = open_ingester();
        ingester.on_message("kept");

        let outcome = ingester.on_event(TransportEvent::closed_with("server went away"));
        assert_eq!(outcome, IngestOutcome::StateChanged);
        assert_eq!(
            ingester.connection_state(),
            &ConnectionState::Closed {
                reason: Some("server went away".into())
            }
        );

        assert_eq!(
            ingester.on_event(TransportEvent::Message("late".into())),
            IngestOutcome::Ignored
        );
        assert_eq!(ingester.buffer().len(), 1);
        assert_eq!(ingester.buffer().get(0).unwrap().text(), "kept");
        assert_eq!(ingester.bytes(), 4);
    }

    #[test]
    fn test_second_close_is_ignored() {
        let mut ingester = open_ingester();
        ingester.close();
        assert_eq!(
            ingester.on_event(TransportEvent::closed_with("again")),
            IngestOutcome::Ignored
        );
        assert_eq!(
            ingester.connection_state(),
            &ConnectionState::Closed { reason: None }
        );
    }

    #[test]
    fn test_open_after_close_is_ignored() {
        let mut ingester = open_ingester();
        ingester.close();
        assert_eq!(
            ingester.on_event(TransportEvent::Opened),
            IngestOutcome::Ignored
        );
        assert!(ingester.connection_state().is_closed());
    }

    #[test]
    fn test_zero_target_progress() {
        let mut ingester = StreamIngester::new(0);
        ingester.on_event(TransportEvent::Opened);
        ingester.on_message("x");
        assert_eq!(ingester.progress().percent, 0.0);
    }

    #[test]
    fn test_retention_keeps_the_open_chunk() {
        let mut ingester = StreamIngester::with_buffer(LogBuffer::with_retention(10), 1_000);
        ingester.on_event(TransportEvent::Opened);
        for i in 0..20 {
            ingester.on_message(format!("line-{}", i));
        }
        assert_eq!(ingester.buffer().len(), 20);
        assert_eq!(ingester.buffer().retained(), 20);
    }
}
