//! # Admission Gate
//!
//! A counting permit pool that bounds how many agents may be past the gate
//! (attempting acquisition or eating) at once. Sized to `N - 1` for `N`
//! agents by [`Table`](crate::table::Table): with every agent needing both
//! of its neighbors' tokens, admitting all `N` at once is the one
//! configuration that can close a circular wait. Keeping one agent out
//! means any wait chain is missing a link, so some admitted agent can
//! always complete and release.

use std::sync::Arc;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

/// Counting permit pool shared by all agents.
///
/// Cloneable handle; clones draw from the same pool.
#[derive(Debug, Clone)]
pub struct AdmissionGate {
    permits: Arc<Semaphore>,
}

impl AdmissionGate {
    /// Creates a gate with the given number of permits.
    pub fn new(capacity: usize) -> Self {
        Self {
            permits: Arc::new(Semaphore::new(capacity)),
        }
    }

    /// Suspends the caller until a permit is free, then takes one.
    ///
    /// The permit returns to the pool when the [`AdmissionPermit`] drops.
    pub async fn admit(&self) -> AdmissionPermit {
        let permit = self
            .permits
            .clone()
            .acquire_owned()
            .await
            .expect("admission gate semaphore is never closed");
        AdmissionPermit { _permit: permit }
    }

    /// Permits currently unclaimed.
    pub fn available(&self) -> usize {
        self.permits.available_permits()
    }
}

/// A held admission slot; dropping it returns the permit to the pool.
#[derive(Debug)]
pub struct AdmissionPermit {
    _permit: OwnedSemaphorePermit,
}
