//! # Dining Core
//!
//! A concurrency-control exercise made concrete: `N` agents around a ring
//! of `N` exclusive resources, each agent cycling think → hungry → eat and
//! needing **both** of its neighboring resources to eat. This crate is the
//! arbitration protocol that keeps that ring deadlock-free, plus the seam
//! through which a presentation layer watches it happen.
//!
//! ## Why this can deadlock, and why it doesn't here
//!
//! With every agent grabbing one resource and waiting on the second, the
//! ring closes into a circular wait: nobody can proceed, nobody will ever
//! release. Two independent mechanisms prevent it:
//!
//! 1. **Bounded admission** ([`AdmissionGate`]): at most `N - 1` agents
//!    may be past the gate (attempting or eating) at once. Any waiting
//!    cycle would need all `N`; with one agent always excluded, some
//!    admitted agent can always finish and release.
//! 2. **Asymmetric acquisition order** ([`AcquireOrder`]): even agents
//!    lock left-then-right, odd agents right-then-left, so adjacent agents
//!    approach their shared resource in opposite roles. Defense in depth;
//!    the gate alone already suffices.
//!
//! ## Architecture
//!
//! - [`Resource`] / [`SeatResources`]: exclusive ring tokens and the
//!   both-or-nothing acquisition handle ([`HeldResources`]).
//! - [`AdmissionGate`]: the `N - 1` permit pool.
//! - [`Agent`]: one state machine per seat, running as its own task.
//! - [`Table`]: builds the ring, spawns the agents, owns the stop token.
//! - [`NotificationSink`]: the external collaborator interface. Every
//!   transition `(agent, state)` is reported and awaited before the agent
//!   proceeds; [`TracingSink`] logs it, the mock module records it for
//!   tests, and a GUI would draw it.
//!
//! ## Concurrency model
//!
//! Agents are Tokio tasks. All blocking is awaiting: resource acquisition,
//! gate admission, duration sleeps. The only shared mutable state is the
//! resources and the gate, each behind its own synchronization; agents
//! never reach into one another. No cross-agent fairness or ordering is
//! promised: when a resource frees, which waiter runs next is up to the
//! runtime, so long-run starvation of an individual agent is theoretically
//! possible. That matches the modeled protocol and is left as a future
//! refinement rather than papered over.
//!
//! ## Shutdown
//!
//! Cooperative. [`Table::request_stop`] cancels a token each agent checks
//! once per cycle, at the top of its loop; in-flight cycles run to
//! completion. Worst-case stop latency is one full cycle.
//!
//! ## Quick start
//!
//! ```no_run
//! use std::sync::Arc;
//! use dining_core::{Table, TableConfig, TracingSink};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), dining_core::TableError> {
//!     let table = Table::start(TableConfig::default(), Arc::new(TracingSink))?;
//!     tokio::time::sleep(std::time::Duration::from_secs(10)).await;
//!     table.shutdown().await
//! }
//! ```
//!
//! ## Testing
//!
//! The [`mock`] module ships a [`RecordingSink`](mock::RecordingSink) and
//! a [`TransitionLog`](mock::TransitionLog) for asserting the protocol's
//! observable properties: legal per-agent walks, no adjacent agents eating
//! together, bounded concurrent eaters, bounded shutdown tails.

pub mod agent;
pub mod config;
pub mod error;
pub mod gate;
pub mod mock;
pub mod resource;
pub mod sink;
pub mod state;
pub mod table;
pub mod tracing_setup;

// Re-export core types for convenience
pub use agent::Agent;
pub use config::TableConfig;
pub use error::TableError;
pub use gate::{AdmissionGate, AdmissionPermit};
pub use resource::{AcquireOrder, HeldResources, Resource, SeatResources};
pub use sink::{NotificationSink, TracingSink};
pub use state::{AgentId, AgentState, StateChange};
pub use table::Table;
pub use tracing_setup::setup_tracing;
