//! # Test Sinks & Transition Analysis
//!
//! Test doubles for the [`NotificationSink`](crate::sink::NotificationSink)
//! seam, plus derived views over a recorded transition stream.
//!
//! [`RecordingSink`] captures every notification in arrival order. The
//! capture is synchronous (a `std::sync::Mutex` push, no await points),
//! so on a current-thread runtime the log is a faithful linearization of
//! the system's transitions: nothing can interleave between an agent
//! releasing its resources and its next recorded transition. Tests that
//! assert cross-agent interleaving properties (who eats concurrently with
//! whom) rely on this and must run on the current-thread flavor; per-agent
//! ordering holds on any flavor.
//!
//! [`TransitionLog`] answers the questions those tests ask: is every
//! per-agent sequence a legal walk, how many eating cycles has each agent
//! completed, how many agents eat at once, and do ring-adjacent agents
//! ever eat together.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::sink::NotificationSink;
use crate::state::{AgentId, AgentState, StateChange};

/// Records every notification in arrival order.
///
/// Clones share the same log, so a test can keep one handle while the
/// table owns another.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<StateChange>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far.
    pub fn snapshot(&self) -> Vec<StateChange> {
        self.events.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl NotificationSink for RecordingSink {
    async fn on_state_change(&self, change: StateChange) {
        self.events.lock().unwrap().push(change);
    }
}

/// Derived views over a recorded transition stream.
pub struct TransitionLog {
    events: Vec<StateChange>,
    agents: usize,
}

impl TransitionLog {
    /// Wraps a snapshot taken from a table with `agents` seats.
    pub fn new(events: Vec<StateChange>, agents: usize) -> Self {
        Self { events, agents }
    }

    /// The sequence of states one agent reported, in order.
    pub fn per_agent(&self, id: AgentId) -> Vec<AgentState> {
        self.events
            .iter()
            .filter(|change| change.agent == id)
            .map(|change| change.state)
            .collect()
    }

    /// Checks that every agent's sequence is a walk on the cycle graph,
    /// starting from the initial thinking phase.
    pub fn check_walks(&self) -> Result<(), String> {
        for i in 0..self.agents {
            let seq = self.per_agent(AgentId(i));
            if let Some(first) = seq.first() {
                if *first != AgentState::Thinking {
                    return Err(format!("agent {i} started in {first}"));
                }
            }
            for (step, pair) in seq.windows(2).enumerate() {
                if !pair[1].can_follow(pair[0]) {
                    return Err(format!(
                        "agent {i} step {step}: illegal transition {} -> {}",
                        pair[0], pair[1]
                    ));
                }
            }
        }
        Ok(())
    }

    /// Completed eating phases per agent.
    pub fn eating_cycles(&self) -> Vec<usize> {
        let mut cycles = vec![0usize; self.agents];
        for change in &self.events {
            if change.state == AgentState::Eating {
                cycles[change.agent.0] += 1;
            }
        }
        cycles
    }

    /// The largest number of agents simultaneously eating at any point in
    /// the log.
    pub fn max_concurrent_eating(&self) -> usize {
        let mut eating = vec![false; self.agents];
        let mut peak = 0;
        for change in &self.events {
            eating[change.agent.0] = change.state == AgentState::Eating;
            peak = peak.max(eating.iter().filter(|&&e| e).count());
        }
        peak
    }

    /// Whether two specific agents were ever eating at once.
    pub fn concurrently_eating(&self, a: AgentId, b: AgentId) -> bool {
        let mut eating = vec![false; self.agents];
        for change in &self.events {
            eating[change.agent.0] = change.state == AgentState::Eating;
            if eating[a.0] && eating[b.0] {
                return true;
            }
        }
        false
    }

    /// The first ring-adjacent pair ever simultaneously eating, if any.
    ///
    /// Adjacent agents share a resource, so any hit here is a mutual-
    /// exclusion violation, not a scheduling curiosity.
    pub fn adjacent_overlap(&self) -> Option<(usize, usize)> {
        let mut eating = vec![false; self.agents];
        for change in &self.events {
            eating[change.agent.0] = change.state == AgentState::Eating;
            if change.state == AgentState::Eating {
                let i = change.agent.0;
                let next = (i + 1) % self.agents;
                let prev = (i + self.agents - 1) % self.agents;
                if eating[next] {
                    return Some((i, next));
                }
                if eating[prev] {
                    return Some((prev, i));
                }
            }
        }
        None
    }
}
