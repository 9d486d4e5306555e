//! # Agent State Machine
//!
//! One [`Agent`] per ring seat, each running the cycle
//!
//! ```text
//! thinking --(think duration elapses)--> hungry
//! hungry   --(gate permit, then both resources)--> eating
//! eating   --(eat duration elapses, everything released)--> thinking
//! ```
//!
//! as an independent task. All shared state an agent touches (its ring
//! tokens, the admission gate, the sink) is reached through its own
//! synchronized handle; agents never see each other's internals.
//!
//! ## Concurrency model
//!
//! Each agent runs in its own Tokio task. `gate.admit()` and
//! `seat.acquire()` suspend the agent until the permit/tokens are free;
//! duration waits are plain sleeps. No fairness is promised across agents:
//! which blocked agent is served when a token frees is up to the runtime
//! (tokio's primitives wake waiters in FIFO order in practice, but the
//! contract here does not rely on it).
//!
//! ## Shutdown
//!
//! Cooperative only. The stop token is checked once per cycle, at the top
//! of the loop, and nowhere else: an agent already past the check finishes
//! its cycle, including any blocked acquisition, before it notices. Stop
//! latency is therefore bounded by one full cycle, not instantaneous.
//!
//! ## Timing
//!
//! Think and eat durations are sampled per cycle, uniformly from the
//! configured inclusive millisecond ranges, from a per-agent [`SmallRng`].
//! Seeded configs give each agent a distinct stream derived from the base
//! seed, so runs are reproducible without any cross-agent RNG sharing.

use std::sync::Arc;
use std::time::Duration;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::config::TableConfig;
use crate::gate::AdmissionGate;
use crate::resource::SeatResources;
use crate::sink::NotificationSink;
use crate::state::{AgentId, AgentState, StateChange};

/// One agent's think → attempt → eat cycle.
///
/// Normally constructed and spawned by [`Table`](crate::table::Table);
/// building one directly is useful for driving a single seat in tests.
pub struct Agent {
    id: AgentId,
    seat: SeatResources,
    gate: AdmissionGate,
    sink: Arc<dyn NotificationSink>,
    stop: CancellationToken,
    think_ms: (u64, u64),
    eat_ms: (u64, u64),
    rng: SmallRng,
}

impl Agent {
    pub fn new(
        id: AgentId,
        seat: SeatResources,
        gate: AdmissionGate,
        sink: Arc<dyn NotificationSink>,
        stop: CancellationToken,
        config: &TableConfig,
    ) -> Self {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed.wrapping_add(id.0 as u64)),
            None => SmallRng::from_entropy(),
        };
        Self {
            id,
            seat,
            gate,
            sink,
            stop,
            think_ms: config.think_ms,
            eat_ms: config.eat_ms,
            rng,
        }
    }

    /// Runs the cycle until the stop token is observed at the top of a loop
    /// iteration.
    pub async fn run(mut self) {
        info!(agent = %self.id, order = ?self.seat.order(), "Agent started");

        loop {
            if self.stop.is_cancelled() {
                break;
            }

            self.transition(AgentState::Thinking).await;
            let pause = self.sample(self.think_ms);
            sleep(pause).await;

            self.transition(AgentState::Hungry).await;
            let _admission = self.gate.admit().await;
            let _held = self.seat.acquire().await;

            self.transition(AgentState::Eating).await;
            let pause = self.sample(self.eat_ms);
            sleep(pause).await;

            // _held drops before _admission: both tokens free up, then the
            // gate slot returns to the pool.
        }

        info!(agent = %self.id, "Agent stopped");
    }

    async fn transition(&self, state: AgentState) {
        debug!(agent = %self.id, state = %state, "Transition");
        self.sink
            .on_state_change(StateChange {
                agent: self.id,
                state,
            })
            .await;
    }

    fn sample(&mut self, (min, max): (u64, u64)) -> Duration {
        Duration::from_millis(self.rng.gen_range(min..=max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::RecordingSink;
    use crate::resource::{AcquireOrder, Resource};

    fn zero_latency_config() -> TableConfig {
        TableConfig {
            agents: 2,
            think_ms: (0, 0),
            eat_ms: (0, 0),
            seed: Some(7),
        }
    }

    #[tokio::test]
    async fn uncontended_agent_walks_the_cycle() {
        let sink = RecordingSink::new();
        let stop = CancellationToken::new();
        let seat = SeatResources::new(Resource::new(0), Resource::new(1), AcquireOrder::LeftFirst);
        let agent = Agent::new(
            AgentId(0),
            seat,
            AdmissionGate::new(1),
            Arc::new(sink.clone()),
            stop.clone(),
            &zero_latency_config(),
        );

        let handle = tokio::spawn(agent.run());
        tokio::time::sleep(Duration::from_millis(5)).await;
        stop.cancel();
        handle.await.unwrap();

        let events = sink.snapshot();
        assert!(!events.is_empty());
        assert_eq!(events[0].state, AgentState::Thinking);
        for pair in events.windows(2) {
            assert!(
                pair[1].state.can_follow(pair[0].state),
                "illegal step {} -> {}",
                pair[0].state,
                pair[1].state
            );
        }
    }

    #[tokio::test]
    async fn stopped_agent_emits_nothing() {
        let sink = RecordingSink::new();
        let stop = CancellationToken::new();
        stop.cancel();
        let seat = SeatResources::new(Resource::new(0), Resource::new(1), AcquireOrder::LeftFirst);
        let agent = Agent::new(
            AgentId(0),
            seat,
            AdmissionGate::new(1),
            Arc::new(sink.clone()),
            stop,
            &zero_latency_config(),
        );

        agent.run().await;
        assert!(sink.is_empty());
    }
}
