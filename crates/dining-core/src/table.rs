//! # Table Orchestration
//!
//! The [`Table`] wires the whole system: `N` ring resources, one admission
//! gate sized `N - 1`, and `N` agents, with agent `i` seated at resources
//! `i` and `(i + 1) % N`. Starting a table spawns every agent; the table
//! then only holds the stop token and the join handles.
//!
//! ## Lifecycle
//!
//! 1. **Validate** the configuration.
//! 2. **Build** resources and gate, **wire** each agent to its seat.
//! 3. **Spawn** all agents concurrently.
//! 4. On [`request_stop`](Table::request_stop), agents finish their
//!    current cycle and exit; [`shutdown`](Table::shutdown) awaits them.
//!
//! Shutdown is cooperative: total latency is bounded by the slowest
//! in-flight cycle. There is no mechanism to interrupt a blocked
//! acquisition mid-cycle.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::agent::Agent;
use crate::config::TableConfig;
use crate::error::TableError;
use crate::gate::AdmissionGate;
use crate::resource::{AcquireOrder, Resource, SeatResources};
use crate::sink::NotificationSink;
use crate::state::AgentId;

/// A running ring of agents.
pub struct Table {
    agents: Vec<JoinHandle<()>>,
    stop: CancellationToken,
    agent_count: usize,
}

impl Table {
    /// Validates the configuration, builds the ring, and spawns all agents.
    ///
    /// Every transition any agent makes is reported to `sink`.
    pub fn start(
        config: TableConfig,
        sink: Arc<dyn NotificationSink>,
    ) -> Result<Self, TableError> {
        config.validate()?;
        let n = config.agents;

        let resources: Vec<Resource> = (0..n).map(Resource::new).collect();
        let gate = AdmissionGate::new(n - 1);
        let stop = CancellationToken::new();

        info!(agents = n, permits = n - 1, "Starting table");

        let agents = (0..n)
            .map(|i| {
                let id = AgentId(i);
                let seat = SeatResources::new(
                    resources[i].clone(),
                    resources[(i + 1) % n].clone(),
                    AcquireOrder::for_agent(id),
                );
                let agent = Agent::new(
                    id,
                    seat,
                    gate.clone(),
                    sink.clone(),
                    stop.clone(),
                    &config,
                );
                tokio::spawn(agent.run())
            })
            .collect();

        Ok(Self {
            agents,
            stop,
            agent_count: n,
        })
    }

    /// Number of agents at this table.
    pub fn agent_count(&self) -> usize {
        self.agent_count
    }

    /// Requests a cooperative stop.
    ///
    /// Idempotent and callable from any task or thread. Each agent
    /// observes the request at the top of its next cycle; an agent inside
    /// a cycle finishes it first.
    pub fn request_stop(&self) {
        self.stop.cancel();
    }

    /// Stops the table and waits for every agent to exit.
    pub async fn shutdown(self) -> Result<(), TableError> {
        self.request_stop();
        for handle in self.agents {
            handle.await?;
        }
        info!("Table stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TableError;
    use crate::mock::RecordingSink;

    #[tokio::test]
    async fn start_rejects_invalid_configs() {
        let sink = Arc::new(RecordingSink::new());

        let too_few = TableConfig {
            agents: 0,
            ..TableConfig::default()
        };
        assert!(matches!(
            Table::start(too_few, sink.clone()).map(|_| ()),
            Err(TableError::TooFewAgents(0))
        ));

        let inverted = TableConfig {
            think_ms: (10, 1),
            ..TableConfig::default()
        };
        assert!(matches!(
            Table::start(inverted, sink).map(|_| ()),
            Err(TableError::InvalidRange { which: "think", .. })
        ));
    }

    #[tokio::test]
    async fn started_table_shuts_down_cleanly() {
        let sink = RecordingSink::new();
        let config = TableConfig {
            agents: 3,
            think_ms: (0, 0),
            eat_ms: (0, 0),
            seed: Some(1),
        };
        let table = Table::start(config, Arc::new(sink.clone())).unwrap();
        assert_eq!(table.agent_count(), 3);

        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        table.shutdown().await.unwrap();
        assert!(!sink.is_empty());
    }
}
