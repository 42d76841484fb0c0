//! Transport lifecycle and stream event handlers

use tailview_core::prelude::*;
use tailview_core::TransportEvent;

use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Start the transport once, if a valid URL is configured
pub fn handle_connect(state: &mut AppState) -> UpdateResult {
    if state.transport_started {
        debug!("Transport already started, ignoring connect");
        return UpdateResult::none();
    }

    let Some(config) = state.transport_config.clone() else {
        warn!("No valid stream URL configured, not connecting");
        return UpdateResult::none();
    };

    state.transport_started = true;
    UpdateResult::action(UpdateAction::StartTransport { config })
}

/// Ask the transport to close; its `Closed` event finishes the job
pub fn handle_disconnect(state: &mut AppState) -> UpdateResult {
    if !state.transport_started || state.connection_state().is_closed() {
        return UpdateResult::none();
    }
    UpdateResult::action(UpdateAction::StopTransport)
}

/// Feed a transport event through the ingester and update the window
pub fn handle_transport_event(state: &mut AppState, event: TransportEvent) -> UpdateResult {
    let outcome = state.ingester.on_event(event);
    state.apply_outcome(&outcome);
    UpdateResult::none()
}
