// ═══════════════════════════════════════════════════════════════════
// Store Tests — MemoryStore and the snapshot subscription contract
// ═══════════════════════════════════════════════════════════════════

use chrono::NaiveDate;
use uuid::Uuid;

use bet_ledger_core::errors::CoreError;
use bet_ledger_core::models::bet::{Bet, BetDraft, BetResult};
use bet_ledger_core::store::memory::MemoryStore;
use bet_ledger_core::store::traits::BetStore;

fn bet(day: u32, stake: f64) -> Bet {
    Bet::new(BetDraft {
        date: NaiveDate::from_ymd_opt(2025, 6, day).unwrap(),
        sport: "NBA".into(),
        details: "Lakers ML".into(),
        stake,
        odds: 1.91,
        result: BetResult::Pending,
        notes: String::new(),
    })
}

// ═══════════════════════════════════════════════════════════════════
// CRUD
// ═══════════════════════════════════════════════════════════════════

mod crud {
    use super::*;

    #[test]
    fn create_stores_and_returns_the_id() {
        let store = MemoryStore::new();
        let b = bet(1, 50.0);
        let id = store.create(&b).unwrap();
        assert_eq!(id, b.id);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn duplicate_create_is_a_store_error() {
        let store = MemoryStore::new();
        let b = bet(1, 50.0);
        store.create(&b).unwrap();
        let err = store.create(&b).unwrap_err();
        assert!(matches!(err, CoreError::Store(_)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn update_replaces_every_field_but_the_id() {
        let store = MemoryStore::new();
        let b = bet(1, 50.0);
        store.create(&b).unwrap();

        let mut edited = bet(2, 75.0);
        edited.result = BetResult::Won;
        store.update(b.id, &edited).unwrap();

        let sub = store.subscribe().unwrap();
        let snapshot = sub.next_snapshot().unwrap();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].id, b.id);
        assert_eq!(snapshot[0].stake, 75.0);
        assert_eq!(snapshot[0].result, BetResult::Won);
    }

    #[test]
    fn update_of_an_unknown_id_is_not_found() {
        let store = MemoryStore::new();
        let err = store.update(Uuid::new_v4(), &bet(1, 50.0)).unwrap_err();
        assert!(matches!(err, CoreError::BetNotFound(_)));
    }

    #[test]
    fn delete_removes_the_record() {
        let store = MemoryStore::new();
        let b = bet(1, 50.0);
        store.create(&b).unwrap();
        store.delete(b.id).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn delete_of_an_unknown_id_is_not_found() {
        let store = MemoryStore::new();
        let err = store.delete(Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, CoreError::BetNotFound(_)));
    }

    #[test]
    fn with_bets_seeds_the_collection() {
        let store = MemoryStore::with_bets(vec![bet(1, 10.0), bet(2, 20.0)]);
        assert_eq!(store.len(), 2);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Batches
// ═══════════════════════════════════════════════════════════════════

mod batches {
    use super::*;

    #[test]
    fn create_batch_stores_everything() {
        let store = MemoryStore::new();
        let bets = vec![bet(1, 10.0), bet(2, 20.0), bet(3, 30.0)];
        let ids = store.create_batch(&bets).unwrap();
        assert_eq!(ids, bets.iter().map(|b| b.id).collect::<Vec<_>>());
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn a_colliding_batch_stores_nothing() {
        let store = MemoryStore::new();
        let existing = bet(1, 10.0);
        store.create(&existing).unwrap();

        let batch = vec![bet(2, 20.0), existing.clone(), bet(3, 30.0)];
        assert!(store.create_batch(&batch).is_err());
        // All-or-nothing: the non-colliding members were not admitted either.
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn intra_batch_duplicates_abort_the_batch() {
        let store = MemoryStore::new();
        let b = bet(1, 10.0);
        assert!(store.create_batch(&[b.clone(), b]).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn a_batch_produces_a_single_snapshot() {
        let store = MemoryStore::new();
        let sub = store.subscribe().unwrap();
        assert_eq!(sub.next_snapshot().unwrap().len(), 0); // initial

        store.create_batch(&[bet(1, 10.0), bet(2, 20.0)]).unwrap();
        assert_eq!(sub.next_snapshot().unwrap().len(), 2);
        // No further snapshots queued.
        assert!(sub.try_next_snapshot().is_none());
    }
}

// ═══════════════════════════════════════════════════════════════════
// Subscriptions
// ═══════════════════════════════════════════════════════════════════

mod subscriptions {
    use super::*;

    #[test]
    fn subscribing_delivers_the_current_snapshot_immediately() {
        let store = MemoryStore::with_bets(vec![bet(1, 10.0)]);
        let sub = store.subscribe().unwrap();
        let snapshot = sub.try_next_snapshot().unwrap();
        assert_eq!(snapshot.len(), 1);
    }

    #[test]
    fn each_committed_change_yields_one_full_snapshot() {
        let store = MemoryStore::new();
        let sub = store.subscribe().unwrap();
        sub.next_snapshot().unwrap(); // initial (empty)

        let a = bet(1, 10.0);
        let b = bet(2, 20.0);
        store.create(&a).unwrap();
        store.create(&b).unwrap();
        store.delete(a.id).unwrap();

        assert_eq!(sub.next_snapshot().unwrap().len(), 1);
        assert_eq!(sub.next_snapshot().unwrap().len(), 2);
        let last = sub.next_snapshot().unwrap();
        assert_eq!(last.len(), 1);
        assert_eq!(last[0].id, b.id);
    }

    #[test]
    fn failed_operations_do_not_notify() {
        let store = MemoryStore::new();
        let sub = store.subscribe().unwrap();
        sub.next_snapshot().unwrap(); // initial

        let _ = store.delete(Uuid::new_v4());
        let b = bet(1, 10.0);
        store.create(&b).unwrap();
        let _ = store.create(&b); // duplicate, rejected

        // Only the successful create produced a snapshot.
        assert_eq!(sub.next_snapshot().unwrap().len(), 1);
        assert!(sub.try_next_snapshot().is_none());
    }

    #[test]
    fn multiple_subscribers_each_get_every_snapshot() {
        let store = MemoryStore::new();
        let first = store.subscribe().unwrap();
        let second = store.subscribe().unwrap();
        first.next_snapshot().unwrap();
        second.next_snapshot().unwrap();

        store.create(&bet(1, 10.0)).unwrap();
        assert_eq!(first.next_snapshot().unwrap().len(), 1);
        assert_eq!(second.next_snapshot().unwrap().len(), 1);
    }

    #[test]
    fn dropping_a_subscription_unsubscribes() {
        let store = MemoryStore::new();
        let kept = store.subscribe().unwrap();
        kept.next_snapshot().unwrap();

        {
            let dropped = store.subscribe().unwrap();
            dropped.next_snapshot().unwrap();
        }

        // Notifying after the drop must not fail, and the kept
        // subscriber still receives the change.
        store.create(&bet(1, 10.0)).unwrap();
        assert_eq!(kept.next_snapshot().unwrap().len(), 1);
    }

    #[test]
    fn snapshots_are_copies_not_views() {
        let store = MemoryStore::new();
        let sub = store.subscribe().unwrap();
        let mut snapshot = sub.next_snapshot().unwrap();
        snapshot.push(bet(1, 10.0));
        // Mutating the received snapshot never touches the store.
        assert!(store.is_empty());
    }
}

// ═══════════════════════════════════════════════════════════════════
// Trait object use
// ═══════════════════════════════════════════════════════════════════

mod trait_object {
    use super::*;

    #[test]
    fn the_store_works_behind_dyn() {
        let store: Box<dyn BetStore> = Box::new(MemoryStore::new());
        assert_eq!(store.name(), "MemoryStore");
        let b = bet(1, 10.0);
        store.create(&b).unwrap();
        let sub = store.subscribe().unwrap();
        assert_eq!(sub.next_snapshot().unwrap().len(), 1);
    }
}
