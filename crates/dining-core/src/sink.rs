//! # Notification Seam
//!
//! The protocol reports every state transition to a [`NotificationSink`]
//! and awaits the call before proceeding. The sink is the presentation
//! layer's side of the contract (a canvas, a log file) and has no bearing
//! on correctness.
//!
//! Implementations must return promptly: a slow sink stalls the emitting
//! agent (an accepted coupling, since the intended sink is a local
//! display, not a remote service). Calls arrive concurrently from all
//! agents, so implementations must be safe to invoke from any task.

use async_trait::async_trait;
use tracing::info;

use crate::state::StateChange;

/// Receives every agent state transition.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn on_state_change(&self, change: StateChange);
}

/// Sink that emits each transition as a structured tracing event.
///
/// The default presentation for headless runs; pair with
/// [`setup_tracing`](crate::tracing_setup::setup_tracing).
#[derive(Debug, Default)]
pub struct TracingSink;

#[async_trait]
impl NotificationSink for TracingSink {
    async fn on_state_change(&self, change: StateChange) {
        info!(agent = %change.agent, state = %change.state, "State changed");
    }
}
