use std::sync::mpsc::Receiver;

use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::bet::Bet;

/// Trait abstraction for the durable persistence backend.
///
/// The ledger core only mirrors the backend's collection in memory; the
/// backend is the owner of record across sessions. A remote document-database
/// client implements this trait outside the core; [`crate::store::memory::MemoryStore`]
/// is the in-crate implementation used by the no-backend variant and tests.
/// Records are scoped to a single authenticated user by the implementation.
pub trait BetStore: Send + Sync {
    /// Human-readable name of this backend (for logs/errors).
    fn name(&self) -> &str;

    /// Persist a new record. Returns the id now durably stored.
    fn create(&self, bet: &Bet) -> Result<Uuid, CoreError>;

    /// Persist several records as one logical batch, all-or-nothing:
    /// either every record is stored or none are, and subscribers see a
    /// single snapshot change for the whole batch.
    fn create_batch(&self, bets: &[Bet]) -> Result<Vec<Uuid>, CoreError>;

    /// Replace the stored record with this id.
    fn update(&self, id: Uuid, bet: &Bet) -> Result<(), CoreError>;

    /// Remove the stored record with this id.
    fn delete(&self, id: Uuid) -> Result<(), CoreError>;

    /// Open a snapshot stream over the full collection. The current snapshot
    /// is delivered immediately, then one snapshot per committed change.
    fn subscribe(&self) -> Result<Subscription, CoreError>;
}

/// A cancellable subscription yielding immutable full-collection snapshots.
///
/// Dropping the subscription unsubscribes — the caller owns cancellation.
/// There is no partial or per-record delta delivery: every message is the
/// complete collection after a committed change, so the consumer can always
/// recompute its views from the latest snapshot alone.
pub struct Subscription {
    rx: Receiver<Vec<Bet>>,
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    pub fn new(rx: Receiver<Vec<Bet>>, cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            rx,
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Block until the next snapshot, or `None` if the store is gone.
    pub fn next_snapshot(&self) -> Option<Vec<Bet>> {
        self.rx.recv().ok()
    }

    /// Non-blocking poll for a pending snapshot.
    pub fn try_next_snapshot(&self) -> Option<Vec<Bet>> {
        self.rx.try_recv().ok()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}
