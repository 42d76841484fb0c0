//! Message processing
//!
//! Runs a message through `handler::update`, follows up any chained
//! messages and dispatches the resulting actions.

use tokio::sync::mpsc;

use crate::actions::{handle_action, TransportSlot};
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    transport: &mut TransportSlot,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), transport);
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
