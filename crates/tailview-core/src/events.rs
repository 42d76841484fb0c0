//! Domain event definitions

/// Events delivered by the stream transport, in arrival order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportEvent {
    /// Connection handshake finished
    Opened,

    /// One received message, treated as an opaque text line
    Message(String),

    /// Connection ended (clean close, remote close, read error or failed connect)
    Closed { reason: Option<String> },
}

impl TransportEvent {
    /// Convenience constructor for a failure-driven close
    pub fn closed_with(reason: impl Into<String>) -> Self {
        Self::Closed {
            reason: Some(reason.into()),
        }
    }
}
