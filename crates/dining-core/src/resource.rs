//! # Ring Resources & Two-Phase Acquisition
//!
//! A [`Resource`] is one exclusive-ownership token in the fixed ring. Each
//! is shared by exactly its two ring neighbors and lives for the whole run;
//! nothing is created or destroyed after startup.
//!
//! Agents never touch a `Resource` directly. A [`SeatResources`] binds an
//! agent's left/right pair together with its [`AcquireOrder`], and
//! [`SeatResources::acquire`] hands back a single [`HeldResources`] value
//! only once **both** tokens are held. Partial acquisition exists inside
//! that one function and nowhere else, and release happens exclusively by
//! dropping the handle, so a release by a non-holder is unrepresentable.
//!
//! ## Acquisition order
//!
//! Even-numbered agents lock left-then-right, odd-numbered agents
//! right-then-left. Adjacent agents therefore approach their shared token
//! in opposite roles, which removes the symmetric all-lock-left pattern
//! that can close a full waiting cycle. The
//! [`AdmissionGate`](crate::gate::AdmissionGate) is what guarantees the
//! cycle can never close; the ordering is the second, independent line of
//! defense.

use std::fmt;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::state::AgentId;

/// One exclusive-ownership token in the ring.
///
/// Cheap to clone: clones share the same underlying slot, so the two
/// neighbors of ring position `i` contend on the same token.
#[derive(Clone)]
pub struct Resource {
    index: usize,
    slot: Arc<Mutex<()>>,
}

impl Resource {
    /// Creates the token for ring position `index`.
    pub fn new(index: usize) -> Self {
        Self {
            index,
            slot: Arc::new(Mutex::new(())),
        }
    }

    /// Ring position of this token (`0..N-1`).
    pub fn index(&self) -> usize {
        self.index
    }

    /// Suspends the caller until the token is free, then holds it.
    ///
    /// The guard is owned so it can live inside [`HeldResources`] across
    /// await points without borrowing the `Resource`.
    pub(crate) async fn acquire(&self) -> OwnedMutexGuard<()> {
        self.slot.clone().lock_owned().await
    }
}

impl fmt::Debug for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resource").field("index", &self.index).finish()
    }
}

/// Which of its two neighbors an agent locks first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcquireOrder {
    LeftFirst,
    RightFirst,
}

impl AcquireOrder {
    /// Parity policy: even agents lock left first, odd agents right first.
    pub fn for_agent(id: AgentId) -> Self {
        if id.0 % 2 == 0 {
            AcquireOrder::LeftFirst
        } else {
            AcquireOrder::RightFirst
        }
    }
}

/// An agent's two adjacent resources plus its acquisition order.
#[derive(Debug)]
pub struct SeatResources {
    left: Resource,
    right: Resource,
    order: AcquireOrder,
}

impl SeatResources {
    pub fn new(left: Resource, right: Resource, order: AcquireOrder) -> Self {
        Self { left, right, order }
    }

    pub fn order(&self) -> AcquireOrder {
        self.order
    }

    /// Acquires both resources in this seat's order.
    ///
    /// Returns only once both are held; dropping the result releases both.
    pub async fn acquire(&self) -> HeldResources {
        let (first, second) = match self.order {
            AcquireOrder::LeftFirst => (&self.left, &self.right),
            AcquireOrder::RightFirst => (&self.right, &self.left),
        };
        let first_held = first.acquire().await;
        let second_held = second.acquire().await;
        HeldResources {
            _first: first_held,
            _second: second_held,
        }
    }
}

/// Proof that both of a seat's resources are held.
///
/// The only way to obtain one is [`SeatResources::acquire`]; the only way
/// to release is to drop it.
#[derive(Debug)]
pub struct HeldResources {
    _first: OwnedMutexGuard<()>,
    _second: OwnedMutexGuard<()>,
}
