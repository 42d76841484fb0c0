//! tailview-app - Application state and orchestration for tailview
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: transport events and input become [`Message`]s, `update()`
//! applies them to [`AppState`], and side effects come back as
//! [`UpdateAction`]s. It also holds the windowed viewport state, the
//! auto-scroll policy, stream ingestion, settings loading and the
//! [`Engine`] that ties them together.

pub mod actions;
pub mod auto_scroll;
pub mod config;
pub mod engine;
pub mod handler;
pub mod ingester;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;
pub mod viewport_state;

// Re-export primary types
pub use auto_scroll::AutoScrollController;
pub use engine::Engine;
pub use handler::{UpdateAction, UpdateResult};
pub use ingester::{IngestOutcome, StreamIngester};
pub use input_key::{InputKey, WheelDirection};
pub use message::Message;
pub use state::{AppPhase, AppState};
pub use viewport_state::{Align, ScrollCommand, ViewportState};
