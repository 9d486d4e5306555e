//! # Agent Identity & Observable States
//!
//! The shared vocabulary of the protocol: who an agent is, which of the
//! three states it is in, and the notification payload every sink receives.
//!
//! The state graph is a fixed cycle:
//!
//! ```text
//! thinking --> hungry --> eating --> thinking
//! ```
//!
//! [`AgentState::can_follow`] encodes exactly these edges; anything else in
//! an observed transition stream is a bug in the protocol, not in the sink.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one agent by its ring position (`0..N-1`).
///
/// Agent `i` is seated between ring resources `i` and `(i + 1) % N`, so the
/// identity doubles as the adjacency key: agents `i` and `(i + 1) % N` share
/// a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AgentId(pub usize);

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The three observable states of an agent's cycle.
///
/// `Eating` implies the agent holds both of its seat's resources; `Thinking`
/// and `Hungry` imply it holds neither. There is no observable state for
/// partial acquisition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentState {
    Thinking,
    Hungry,
    Eating,
}

impl AgentState {
    /// Whether `self` may directly follow `prev` on the cycle graph.
    pub fn can_follow(self, prev: AgentState) -> bool {
        matches!(
            (prev, self),
            (AgentState::Thinking, AgentState::Hungry)
                | (AgentState::Hungry, AgentState::Eating)
                | (AgentState::Eating, AgentState::Thinking)
        )
    }
}

impl fmt::Display for AgentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AgentState::Thinking => "thinking",
            AgentState::Hungry => "hungry",
            AgentState::Eating => "eating",
        };
        f.write_str(name)
    }
}

/// A single state-change notification: `(agent, new state)`.
///
/// Emitted to the [`NotificationSink`](crate::sink::NotificationSink) on
/// every transition, before the agent proceeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateChange {
    pub agent: AgentId,
    pub state: AgentState,
}
