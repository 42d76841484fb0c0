//! Engine - the viewer's context object
//!
//! The Engine owns the TEA state, the message channel and the transport. Its
//! lifecycle is explicit: [`Engine::new`] initializes, [`Engine::start`]
//! connects, [`Engine::shutdown`] tears everything down.

use tokio::sync::mpsc;
use tracing::info;

use tailview_core::prelude::*;
use tailview_core::ConnectionState;

use crate::actions::TransportSlot;
use crate::config::Settings;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;

/// Capacity of the unified message channel
const MESSAGE_CHANNEL_CAPACITY: usize = 256;

/// Orchestration engine for tailview.
///
/// Encapsulates:
/// - TEA state (buffer, viewport, connection state)
/// - The message channel fed by the transport and signal handler
/// - The running transport
pub struct Engine {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources.
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    /// The frontend event loop drains messages from here.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Loaded settings
    pub settings: Settings,

    transport: TransportSlot,
}

impl Engine {
    /// Create an engine for `settings`.
    ///
    /// Validates the settings, builds the state, creates the message channel
    /// and spawns the signal handler. Must run inside a Tokio runtime.
    pub fn new(settings: Settings) -> Result<Self> {
        settings.validate()?;
        let state = AppState::with_settings(&settings)?;

        let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_CAPACITY);

        signals::spawn_signal_handler(msg_tx.clone());

        Ok(Self {
            state,
            msg_tx,
            msg_rx,
            settings,
            transport: TransportSlot::default(),
        })
    }

    /// Connect to the stream
    pub fn start(&mut self) {
        info!("Starting stream for {}", self.state.stream_url);
        self.process_message(Message::Connect);
    }

    /// Process a single message through the TEA update cycle
    pub fn process_message(&mut self, msg: Message) {
        process::process_message(&mut self.state, msg, &self.msg_tx, &mut self.transport);
    }

    /// Drain and process up to `max` pending messages.
    ///
    /// Returns the number processed. The cap keeps a flood of stream
    /// messages from starving the render loop.
    pub fn drain_pending_messages(&mut self, max: usize) -> usize {
        let mut count = 0;
        while count < max {
            let Ok(msg) = self.msg_rx.try_recv() else {
                break;
            };
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Connection state as reported by the transport task itself
    pub fn transport_state(&self) -> Option<ConnectionState> {
        self.transport.connection_state()
    }

    /// Stop the transport and wait for its tasks.
    ///
    /// Lines already buffered stay in `state`.
    pub async fn shutdown(&mut self) {
        info!("Shutting down");
        self.transport.shutdown().await;
        self.state.ingester.close();
    }
}
