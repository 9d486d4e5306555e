//! # Observability Setup
//!
//! Initializes structured logging for binaries and examples built on this
//! crate. The subscriber uses a compact format with the module-path target
//! suppressed (agent and state fields carry the context instead) and the
//! usual `RUST_LOG` environment filter:
//!
//! ```bash
//! RUST_LOG=info cargo run     # lifecycle events
//! RUST_LOG=debug cargo run    # every state transition
//! ```

/// Installs the global tracing subscriber. Call once, at startup.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
