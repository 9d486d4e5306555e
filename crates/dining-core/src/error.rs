//! # Table Errors
//!
//! The protocol itself has no recoverable errors: acquisition is blocking
//! and always eventually succeeds while holders keep releasing. What can
//! fail is constructing a table from a bad configuration, and joining an
//! agent task that panicked during shutdown.

/// Errors surfaced by [`Table`](crate::table::Table).
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("ring needs at least 2 agents, got {0}")]
    TooFewAgents(usize),
    #[error("{which} duration range is empty: min {min}ms > max {max}ms")]
    InvalidRange {
        which: &'static str,
        min: u64,
        max: u64,
    },
    #[error("agent task failed: {0}")]
    AgentTaskFailed(#[from] tokio::task::JoinError),
}
