//! Action handlers: UpdateAction dispatch and transport task spawning

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::message::Message;
use crate::UpdateAction;
use tailview_core::{ConnectionState, TransportEvent};
use tailview_transport::{TransportConfig, TransportHandle, WsTransport, EVENT_CHANNEL_CAPACITY};

/// How long shutdown waits for the event forwarder to finish
const FORWARDER_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(2);

/// The running transport and the task bridging its events into messages
#[derive(Debug, Default)]
pub struct TransportSlot {
    handle: Option<TransportHandle>,
    forwarder: Option<JoinHandle<()>>,
}

impl TransportSlot {
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|handle| !handle.is_closed())
    }

    /// Connection state as seen by the transport task
    pub fn connection_state(&self) -> Option<ConnectionState> {
        self.handle.as_ref().map(TransportHandle::connection_state)
    }

    /// Stop the transport and wait for the forwarder to drain
    pub async fn shutdown(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.stop().await;
        }

        if let Some(forwarder) = self.forwarder.take() {
            match tokio::time::timeout(FORWARDER_SHUTDOWN_TIMEOUT, forwarder).await {
                Ok(Ok(())) => debug!("Transport event forwarder finished"),
                Ok(Err(e)) => warn!("Transport event forwarder panicked: {}", e),
                Err(_) => warn!("Transport event forwarder shutdown timed out"),
            }
        }
    }
}

/// Execute an action
pub fn handle_action(action: UpdateAction, msg_tx: mpsc::Sender<Message>, slot: &mut TransportSlot) {
    match action {
        UpdateAction::StartTransport { config } => {
            if slot.handle.is_some() {
                warn!("Transport already running, ignoring start");
                return;
            }
            start_transport(config, msg_tx, slot);
        }

        UpdateAction::StopTransport => match &slot.handle {
            Some(handle) => {
                info!("Stopping stream transport");
                handle.try_stop();
            }
            None => debug!("No transport to stop"),
        },
    }
}

fn start_transport(config: TransportConfig, msg_tx: mpsc::Sender<Message>, slot: &mut TransportSlot) {
    info!("Starting stream transport for {}", config.url);
    let (event_tx, event_rx) = mpsc::channel::<TransportEvent>(EVENT_CHANNEL_CAPACITY);
    slot.handle = Some(WsTransport::spawn(config, event_tx));
    slot.forwarder = Some(spawn_event_forwarder(event_rx, msg_tx));
}

/// Forward transport events as messages until `Closed` or the channel ends
fn spawn_event_forwarder(
    mut event_rx: mpsc::Receiver<TransportEvent>,
    msg_tx: mpsc::Sender<Message>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            let closed = matches!(event, TransportEvent::Closed { .. });
            if msg_tx.send(Message::Transport(event)).await.is_err() {
                debug!("Message channel closed, stopping event forwarder");
                break;
            }
            if closed {
                break;
            }
        }
    })
}
