//! Async WebSocket transport for the log stream.
//!
//! [`WsTransport::spawn`] starts a background Tokio task that owns the
//! WebSocket connection and forwards every received frame, in order, as a
//! [`TransportEvent`] on an mpsc channel. The returned [`TransportHandle`]
//! observes the connection state and stops the task.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                       WsTransport                          │
//! │                                                            │
//! │  ┌────────────────┐        ┌────────────────────────────┐  │
//! │  │ TransportHandle│        │  Background Task            │  │
//! │  │                │        │                             │  │
//! │  │  stop() ───────┼──cmd──▶│  connect, send greeting     │  │
//! │  │                │  chan  │  WebSocket read loop        │  │
//! │  │  state() ◀─────┼─shared─│  text/binary → Message      │  │
//! │  └────────────────┘        │  close/error → Closed       │  │
//! │                            └─────────────┬──────────────┘  │
//! │                                          │ event chan       │
//! └──────────────────────────────────────────┼─────────────────┘
//!                                            ▼
//!                                  TransportEvent consumer
//! ```
//!
//! The connection lifecycle is `Connecting → Open → Receiving → Closed`.
//! The task never reconnects: once `Closed` is emitted it exits.

use std::sync::{Arc, RwLock};

use futures_util::stream::SplitSink;
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::protocol::Message as WsMessage;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};
use tracing::{debug, info, warn};

use tailview_core::prelude::*;
use tailview_core::{ConnectionState, TransportEvent};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Capacity of the command channel
const CMD_CHANNEL_CAPACITY: usize = 4;

/// Capacity callers should use for the event channel. Sends apply
/// backpressure instead of dropping, so lines are never lost.
pub const EVENT_CHANNEL_CAPACITY: usize = 1024;

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// Where to connect and what to say first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    /// `ws://` or `wss://` URL of the log stream
    pub url: String,
    /// Text sent once right after the handshake; `None` sends nothing
    pub greeting: Option<String>,
}

impl TransportConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            greeting: None,
        }
    }

    pub fn with_greeting(mut self, greeting: impl Into<String>) -> Self {
        let greeting = greeting.into();
        self.greeting = if greeting.is_empty() {
            None
        } else {
            Some(greeting)
        };
        self
    }
}

/// Internal messages sent from the handle to the background task.
enum TransportCommand {
    /// Send a Close frame and stop the task.
    Stop,
}

type WsStream = WebSocketStream<MaybeTlsStream<tokio::net::TcpStream>>;

type SharedState = Arc<RwLock<ConnectionState>>;

// ---------------------------------------------------------------------------
// TransportHandle
// ---------------------------------------------------------------------------

/// A clonable handle to a running transport task.
#[derive(Clone)]
pub struct TransportHandle {
    cmd_tx: mpsc::Sender<TransportCommand>,
    state: SharedState,
}

impl std::fmt::Debug for TransportHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransportHandle")
            .field("connection_state", &self.connection_state())
            .finish()
    }
}

impl TransportHandle {
    /// Ask the task to close the connection.
    ///
    /// Returns immediately; the task emits `TransportEvent::Closed` when the
    /// close completes. Stopping an already-closed transport is a no-op.
    pub async fn stop(&self) {
        // A closed channel means the task already exited.
        let _ = self.cmd_tx.send(TransportCommand::Stop).await;
    }

    /// Non-async variant of [`stop`](Self::stop) for teardown paths
    pub fn try_stop(&self) {
        let _ = self.cmd_tx.try_send(TransportCommand::Stop);
    }

    /// Current connection state as seen by the task
    pub fn connection_state(&self) -> ConnectionState {
        self.state.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn is_closed(&self) -> bool {
        self.connection_state().is_closed()
    }

    /// Handle with no task behind it, already closed.
    #[cfg(any(test, feature = "test-helpers"))]
    pub fn new_for_test() -> Self {
        let (cmd_tx, _cmd_rx) = mpsc::channel(1);
        Self {
            cmd_tx,
            state: Arc::new(RwLock::new(ConnectionState::Closed { reason: None })),
        }
    }
}

// ---------------------------------------------------------------------------
// WsTransport
// ---------------------------------------------------------------------------

/// WebSocket implementation of the stream transport
pub struct WsTransport;

impl WsTransport {
    /// Start the transport: spawn the connection task and return its handle.
    ///
    /// Connection failures are not returned here; they arrive as
    /// `TransportEvent::Closed { reason: Some(..) }` so the viewer treats
    /// them like any other closure.
    pub fn spawn(config: TransportConfig, event_tx: mpsc::Sender<TransportEvent>) -> TransportHandle {
        let (cmd_tx, cmd_rx) = mpsc::channel::<TransportCommand>(CMD_CHANNEL_CAPACITY);
        let state: SharedState = Arc::new(RwLock::new(ConnectionState::Connecting));

        tokio::spawn(run_transport_task(
            config,
            cmd_rx,
            event_tx,
            Arc::clone(&state),
        ));

        TransportHandle { cmd_tx, state }
    }
}

// ---------------------------------------------------------------------------
// Background task
// ---------------------------------------------------------------------------

async fn run_transport_task(
    config: TransportConfig,
    mut cmd_rx: mpsc::Receiver<TransportCommand>,
    event_tx: mpsc::Sender<TransportEvent>,
    state: SharedState,
) {
    info!("Connecting to log stream at {}", config.url);

    let ws_stream = tokio::select! {
        result = connect_ws(&config.url) => match result {
            Ok(ws_stream) => ws_stream,
            Err(err) => {
                warn!("Log stream connection failed: {}", err);
                close(&state, &event_tx, Some(err.to_string())).await;
                return;
            }
        },
        _ = cmd_rx.recv() => {
            debug!("Transport stopped before the connection was established");
            close(&state, &event_tx, None).await;
            return;
        }
    };

    set_state(&state, ConnectionState::Open);
    if event_tx.send(TransportEvent::Opened).await.is_err() {
        debug!("Transport event receiver dropped, exiting");
        return;
    }
    info!("Log stream connected");

    let reason = run_io_loop(ws_stream, &config, &mut cmd_rx, &event_tx, &state).await;
    close(&state, &event_tx, reason).await;

    debug!("Transport task exiting");
}

/// Run the read loop for one connection.
///
/// Returns the close reason: `None` for a clean close (Stop command or a
/// Close frame without reason), `Some(..)` otherwise.
async fn run_io_loop(
    ws_stream: WsStream,
    config: &TransportConfig,
    cmd_rx: &mut mpsc::Receiver<TransportCommand>,
    event_tx: &mpsc::Sender<TransportEvent>,
    state: &SharedState,
) -> Option<String> {
    let (mut ws_sink, mut ws_stream) = ws_stream.split();

    if let Some(greeting) = &config.greeting {
        if let Err(err) = ws_sink.send(WsMessage::Text(greeting.clone().into())).await {
            warn!("Failed to send greeting: {}", err);
            return Some(format!("failed to send greeting: {err}"));
        }
        debug!("Sent greeting ({} bytes)", greeting.len());
    }

    loop {
        tokio::select! {
            // ── Incoming WebSocket frame ─────────────────────────────────
            frame = ws_stream.next() => {
                let text = match frame {
                    Some(Ok(WsMessage::Text(text))) => text.as_str().to_owned(),
                    Some(Ok(WsMessage::Binary(bytes))) => {
                        // Non-text payloads are kept as a literal line.
                        String::from_utf8_lossy(&bytes).into_owned()
                    }
                    Some(Ok(WsMessage::Close(frame))) => {
                        debug!("Log stream: received Close frame");
                        return frame
                            .map(|f| f.reason.as_str().to_owned())
                            .filter(|reason| !reason.is_empty());
                    }
                    Some(Ok(_)) => {
                        // Ping/Pong/raw frames
                        continue;
                    }
                    Some(Err(err)) => {
                        warn!("Log stream: WebSocket read error: {}", err);
                        return Some(err.to_string());
                    }
                    None => {
                        debug!("Log stream: WebSocket stream ended");
                        return Some("stream ended without close frame".to_string());
                    }
                };

                set_state(state, ConnectionState::Receiving);
                if event_tx.send(TransportEvent::Message(text)).await.is_err() {
                    debug!("Transport event receiver dropped, closing");
                    send_close(&mut ws_sink).await;
                    return None;
                }
            }

            // ── Command from the handle ──────────────────────────────────
            cmd = cmd_rx.recv() => {
                match cmd {
                    Some(TransportCommand::Stop) => {
                        debug!("Log stream: stop requested");
                    }
                    None => {
                        debug!("Log stream: all handles dropped, shutting down");
                    }
                }
                send_close(&mut ws_sink).await;
                return None;
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Helper functions
// ---------------------------------------------------------------------------

/// Establish a new WebSocket connection to `url`.
async fn connect_ws(url: &str) -> Result<WsStream> {
    let (ws_stream, _response) = connect_async(url)
        .await
        .map_err(|err| Error::transport(format!("Failed to connect to {url}: {err}")))?;
    Ok(ws_stream)
}

fn set_state(state: &SharedState, next: ConnectionState) {
    let mut guard = state.write().unwrap_or_else(|e| e.into_inner());
    if *guard != next {
        *guard = next;
    }
}

async fn close(state: &SharedState, event_tx: &mpsc::Sender<TransportEvent>, reason: Option<String>) {
    set_state(
        state,
        ConnectionState::Closed {
            reason: reason.clone(),
        },
    );
    let _ = event_tx.send(TransportEvent::Closed { reason }).await;
}

/// Send a WebSocket Close frame, ignoring any write errors.
async fn send_close(ws_sink: &mut SplitSink<WsStream, WsMessage>) {
    let _ = ws_sink.send(WsMessage::Close(None)).await;
    let _ = ws_sink.close().await;
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::test_utils::{MockStreamServer, ServerFrame};

    const TIMEOUT: Duration = Duration::from_secs(5);

    async fn next_event(rx: &mut mpsc::Receiver<TransportEvent>) -> TransportEvent {
        tokio::time::timeout(TIMEOUT, rx.recv())
            .await
            .expect("timed out waiting for transport event")
            .expect("event channel closed")
    }

    #[test]
    fn test_config_empty_greeting_is_none() {
        let config = TransportConfig::new("ws://localhost:1").with_greeting("");
        assert_eq!(config.greeting, None);

        let config = TransportConfig::new("ws://localhost:1").with_greeting("Hello Server!");
        assert_eq!(config.greeting.as_deref(), Some("Hello Server!"));
    }

    #[tokio::test]
    async fn test_delivers_messages_in_order_then_closes() {
        let mut server = MockStreamServer::start(vec![
            ServerFrame::Text("first".into()),
            ServerFrame::Text("second".into()),
            ServerFrame::Text("third".into()),
            ServerFrame::Close,
        ])
        .await
        .unwrap();

        let (event_tx, mut event_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
        let handle = WsTransport::spawn(
            TransportConfig::new(server.url()).with_greeting("Hello Server!"),
            event_tx,
        );

        assert_eq!(next_event(&mut event_rx).await, TransportEvent::Opened);
        assert_eq!(
            next_event(&mut event_rx).await,
            TransportEvent::Message("first".into())
        );
        assert_eq!(
            next_event(&mut event_rx).await,
            TransportEvent::Message("second".into())
        );
        assert_eq!(
            next_event(&mut event_rx).await,
            TransportEvent::Message("third".into())
        );
        assert!(matches!(
            next_event(&mut event_rx).await,
            TransportEvent::Closed { .. }
        ));

        assert!(handle.is_closed());
        assert_eq!(
            server.next_received(TIMEOUT).await.as_deref(),
            Some("Hello Server!")
        );
    }

    #[tokio::test]
    async fn test_binary_frames_are_coerced_to_text() {
        let server = MockStreamServer::start(vec![
            ServerFrame::Binary(vec![b'o', b'k', 0xFF]),
            ServerFrame::Close,
        ])
        .await
        .unwrap();

        let (event_tx, mut event_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
        let _handle = WsTransport::spawn(TransportConfig::new(server.url()), event_tx);

        assert_eq!(next_event(&mut event_rx).await, TransportEvent::Opened);
        assert_eq!(
            next_event(&mut event_rx).await,
            TransportEvent::Message("ok\u{FFFD}".into())
        );
    }

    #[tokio::test]
    async fn test_stop_closes_cleanly() {
        let server = MockStreamServer::start(vec![ServerFrame::Text("only".into()), ServerFrame::Hold])
            .await
            .unwrap();

        let (event_tx, mut event_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
        let handle = WsTransport::spawn(TransportConfig::new(server.url()), event_tx);

        assert_eq!(next_event(&mut event_rx).await, TransportEvent::Opened);
        assert_eq!(
            next_event(&mut event_rx).await,
            TransportEvent::Message("only".into())
        );
        assert_eq!(handle.connection_state(), ConnectionState::Receiving);

        handle.stop().await;
        assert_eq!(
            next_event(&mut event_rx).await,
            TransportEvent::Closed { reason: None }
        );
        assert_eq!(
            handle.connection_state(),
            ConnectionState::Closed { reason: None }
        );
    }

    #[tokio::test]
    async fn test_connect_failure_reports_closed_with_reason() {
        let url = MockStreamServer::unused_url().await.unwrap();

        let (event_tx, mut event_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
        let handle = WsTransport::spawn(TransportConfig::new(url), event_tx);

        match next_event(&mut event_rx).await {
            TransportEvent::Closed { reason } => assert!(reason.is_some()),
            other => panic!("expected Closed, got {:?}", other),
        }
        assert!(handle.is_closed());
    }

    #[tokio::test]
    async fn test_no_greeting_sends_nothing() {
        let mut server = MockStreamServer::start(vec![ServerFrame::Close]).await.unwrap();

        let (event_tx, mut event_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
        let _handle = WsTransport::spawn(TransportConfig::new(server.url()), event_tx);

        assert_eq!(next_event(&mut event_rx).await, TransportEvent::Opened);
        assert!(matches!(
            next_event(&mut event_rx).await,
            TransportEvent::Closed { .. }
        ));
        assert_eq!(server.next_received(Duration::from_millis(200)).await, None);
    }

    #[tokio::test]
    async fn test_stop_on_test_handle_is_noop() {
        let handle = TransportHandle::new_for_test();
        handle.stop().await;
        handle.try_stop();
        assert!(handle.is_closed());
    }
}
