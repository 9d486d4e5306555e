//! Console presentation for agent state changes.

use async_trait::async_trait;
use dining_core::{NotificationSink, StateChange};

/// Prints one line per transition, e.g. `agent 3 is eating`.
///
/// Stdout writes are line-buffered and quick, which is all the
/// notification contract asks of a sink.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NotificationSink for ConsoleSink {
    async fn on_state_change(&self, change: StateChange) {
        println!("agent {} is {}", change.agent, change.state);
    }
}
