//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key and mouse wheel mapping
//! - `scroll`: Scroll handlers
//! - `transport`: Transport lifecycle and stream events

pub(crate) mod keys;
pub(crate) mod scroll;
pub(crate) mod transport;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use crate::message::Message;
use tailview_transport::TransportConfig;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Spawn the stream transport and forward its events as messages
    StartTransport { config: TransportConfig },

    /// Ask the running transport to close
    StopTransport,
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
