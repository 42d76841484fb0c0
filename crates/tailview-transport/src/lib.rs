//! # tailview-transport - WebSocket Stream Transport
//!
//! Connects to a remote log stream over WebSocket and delivers each
//! received message as a [`TransportEvent`](tailview_core::TransportEvent).
//!
//! Depends on [`tailview_core`] for events, connection state and errors.
//!
//! ## Public API
//!
//! ### Connection
//! - [`WsTransport`] - Spawns the background connection task
//! - [`TransportHandle`] - Stops the task and observes its [`ConnectionState`](tailview_core::ConnectionState)
//! - [`TransportConfig`] - URL and optional greeting
//!
//! ### URL Handling
//! - [`validate_url()`] - Accept only `ws://` and `wss://` endpoints
//!
//! `wss://` endpoints need the `tls` feature.

pub mod client;
pub mod endpoint;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use client::{TransportConfig, TransportHandle, WsTransport, EVENT_CHANNEL_CAPACITY};
pub use endpoint::{requires_tls, validate_url};

/// Greeting sent after the handshake unless configured otherwise
pub const DEFAULT_GREETING: &str = "Hello Server!";
