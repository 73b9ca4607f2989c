use std::collections::HashMap;
use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::bet::Bet;

use super::traits::{BetStore, Subscription};

/// In-memory implementation of [`BetStore`].
///
/// Backs the no-backend variant of the app and every test that needs a store.
/// All mutations notify subscribers with a fresh copy of the full collection,
/// mirroring the snapshot-per-change contract of the remote backends.
#[derive(Clone)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

struct Inner {
    bets: Vec<Bet>,
    subscribers: HashMap<u64, Sender<Vec<Bet>>>,
    next_subscriber_id: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                bets: Vec::new(),
                subscribers: HashMap::new(),
                next_subscriber_id: 0,
            })),
        }
    }

    /// Seed the store with existing records (no subscriber notification).
    pub fn with_bets(bets: Vec<Bet>) -> Self {
        let store = Self::new();
        store.lock().bets = bets;
        store
    }

    /// Current number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().bets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().bets.is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A poisoned lock only means another thread panicked mid-mutation;
        // the data itself is still a valid Vec, so keep serving it.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn notify(inner: &mut Inner) {
        let snapshot = inner.bets.clone();
        inner
            .subscribers
            .retain(|_, tx| tx.send(snapshot.clone()).is_ok());
    }
}

impl BetStore for MemoryStore {
    fn name(&self) -> &str {
        "MemoryStore"
    }

    fn create(&self, bet: &Bet) -> Result<Uuid, CoreError> {
        let mut inner = self.lock();
        if inner.bets.iter().any(|b| b.id == bet.id) {
            return Err(CoreError::Store(format!(
                "record {} already exists",
                bet.id
            )));
        }
        inner.bets.push(bet.clone());
        Self::notify(&mut inner);
        Ok(bet.id)
    }

    fn create_batch(&self, bets: &[Bet]) -> Result<Vec<Uuid>, CoreError> {
        let mut inner = self.lock();

        // All-or-nothing: verify the whole batch before touching the data.
        for (i, bet) in bets.iter().enumerate() {
            if inner.bets.iter().any(|b| b.id == bet.id)
                || bets[..i].iter().any(|b| b.id == bet.id)
            {
                return Err(CoreError::Store(format!(
                    "batch aborted: record {} already exists",
                    bet.id
                )));
            }
        }

        inner.bets.extend_from_slice(bets);
        // One snapshot for the whole batch.
        Self::notify(&mut inner);
        Ok(bets.iter().map(|b| b.id).collect())
    }

    fn update(&self, id: Uuid, bet: &Bet) -> Result<(), CoreError> {
        let mut inner = self.lock();
        let slot = inner
            .bets
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| CoreError::BetNotFound(id.to_string()))?;
        *slot = Bet {
            id,
            ..bet.clone()
        };
        Self::notify(&mut inner);
        Ok(())
    }

    fn delete(&self, id: Uuid) -> Result<(), CoreError> {
        let mut inner = self.lock();
        let idx = inner
            .bets
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| CoreError::BetNotFound(id.to_string()))?;
        inner.bets.remove(idx);
        Self::notify(&mut inner);
        Ok(())
    }

    fn subscribe(&self) -> Result<Subscription, CoreError> {
        let (tx, rx) = mpsc::channel();
        let subscriber_id;
        {
            let mut inner = self.lock();
            subscriber_id = inner.next_subscriber_id;
            inner.next_subscriber_id += 1;
            // Deliver the current snapshot right away, then stream changes.
            tx.send(inner.bets.clone())
                .map_err(|e| CoreError::Store(format!("subscription channel closed: {e}")))?;
            inner.subscribers.insert(subscriber_id, tx);
        }

        let store = Arc::clone(&self.inner);
        Ok(Subscription::new(rx, move || {
            let mut inner = store.lock().unwrap_or_else(PoisonError::into_inner);
            inner.subscribers.remove(&subscriber_id);
        }))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}
