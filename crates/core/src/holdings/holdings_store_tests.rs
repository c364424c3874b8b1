//! Tests for the in-memory holding store and its event emission.

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use rust_decimal_macros::dec;

    use crate::errors::{Result, StorageError};
    use crate::events::{DomainEvent, MockEventSink, PersistingEventSink};
    use crate::holdings::{
        Holding, HoldingDraft, HoldingInput, HoldingStore, HoldingStoreTrait,
        SnapshotRepositoryTrait,
    };

    fn draft(ticker: &str, name: &str) -> HoldingDraft {
        HoldingDraft {
            ticker: ticker.to_string(),
            name: name.to_string(),
            quantity: dec!(10),
            purchase_price: dec!(150),
        }
    }

    // --- Mock SnapshotRepository ---
    #[derive(Default)]
    struct MockSnapshotRepository {
        snapshot: Mutex<Vec<Holding>>,
        saves: Mutex<Vec<Vec<Holding>>>,
        fail_load: bool,
        fail_save: bool,
    }

    impl MockSnapshotRepository {
        fn with_snapshot(snapshot: Vec<Holding>) -> Self {
            Self {
                snapshot: Mutex::new(snapshot),
                ..Self::default()
            }
        }

        fn saves(&self) -> Vec<Vec<Holding>> {
            self.saves.lock().unwrap().clone()
        }
    }

    impl SnapshotRepositoryTrait for MockSnapshotRepository {
        fn load(&self) -> Result<Vec<Holding>> {
            if self.fail_load {
                return Err(StorageError::ReadFailed("mock failure".to_string()).into());
            }
            Ok(self.snapshot.lock().unwrap().clone())
        }

        fn save(&self, holdings: &[Holding]) -> Result<()> {
            if self.fail_save {
                return Err(StorageError::WriteFailed("mock failure".to_string()).into());
            }
            self.saves.lock().unwrap().push(holdings.to_vec());
            *self.snapshot.lock().unwrap() = holdings.to_vec();
            Ok(())
        }
    }

    // ==================== Add Tests ====================

    #[test]
    fn test_add_appends_with_fresh_id() {
        let mut store = HoldingStore::detached();
        let first = store.add(draft("AAPL", "Apple Inc."));
        let second = store.add(draft("MSFT", "Microsoft"));

        assert_eq!(store.len(), 2);
        assert!(!first.id.is_empty());
        assert_ne!(first.id, second.id);
        assert_eq!(store.list()[0], first);
        assert_eq!(store.list()[1], second);
    }

    #[test]
    fn test_add_preserves_existing_holdings() {
        let mut store = HoldingStore::detached();
        let first = store.add(draft("AAPL", "Apple Inc."));
        store.add(draft("MSFT", "Microsoft"));

        assert_eq!(store.list()[0], first);
    }

    #[test]
    fn test_validated_input_flows_into_add() {
        let input = HoldingInput {
            ticker: "MSFT".to_string(),
            name: "Microsoft".to_string(),
            quantity: "5".to_string(),
            purchase_price: "300".to_string(),
        };
        let mut store = HoldingStore::detached();
        let holding = store.add(input.validate().unwrap());

        assert_eq!(holding.ticker, "MSFT");
        assert_eq!(holding.name, "Microsoft");
        assert_eq!(holding.quantity, dec!(5));
        assert_eq!(holding.purchase_price, dec!(300));
        assert_eq!(store.get(&holding.id), Some(&holding));
    }

    // ==================== Update Tests ====================

    #[test]
    fn test_update_replaces_fields_in_place() {
        let mut store = HoldingStore::detached();
        let first = store.add(draft("AAPL", "Apple Inc."));
        let second = store.add(draft("MSFT", "Microsoft"));

        let updated = store
            .update(&first.id, draft("GOOG", "Alphabet"))
            .expect("holding exists");

        assert_eq!(updated.id, first.id);
        assert_eq!(updated.ticker, "GOOG");
        // Position preserved, neighbors untouched
        assert_eq!(store.list()[0], updated);
        assert_eq!(store.list()[1], second);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut store = HoldingStore::detached();
        let holding = store.add(draft("AAPL", "Apple Inc."));

        assert!(store.update("missing", draft("GOOG", "Alphabet")).is_none());
        assert_eq!(store.list(), &[holding]);
    }

    // ==================== Delete Tests ====================

    #[test]
    fn test_delete_removes_only_matching_holding() {
        let mut store = HoldingStore::detached();
        let first = store.add(draft("AAPL", "Apple Inc."));
        let second = store.add(draft("MSFT", "Microsoft"));
        let third = store.add(draft("GOOG", "Alphabet"));

        assert!(store.delete(&second.id));
        assert_eq!(store.list(), &[first, third]);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut store = HoldingStore::detached();
        store.add(draft("AAPL", "Apple Inc."));

        assert!(!store.delete("missing"));
        assert_eq!(store.len(), 1);
    }

    // ==================== Event Tests ====================

    #[test]
    fn test_mutations_emit_events_with_snapshot() {
        let sink = MockEventSink::new();
        let mut store = HoldingStore::new(Arc::new(sink.clone()));

        let holding = store.add(draft("AAPL", "Apple Inc."));
        store.update(&holding.id, draft("AAPL", "Apple"));
        store.delete(&holding.id);

        let events = sink.events();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].0, DomainEvent::holding_added(&holding.id));
        assert_eq!(events[0].1.len(), 1);
        assert_eq!(events[1].0, DomainEvent::holding_updated(&holding.id));
        assert_eq!(events[1].1[0].name, "Apple");
        assert_eq!(events[2].0, DomainEvent::holding_deleted(&holding.id));
        assert!(events[2].1.is_empty());
    }

    #[test]
    fn test_noop_mutations_emit_nothing() {
        let sink = MockEventSink::new();
        let mut store = HoldingStore::new(Arc::new(sink.clone()));

        store.update("missing", draft("AAPL", "Apple Inc."));
        store.delete("missing");

        assert!(sink.is_empty());
    }

    // ==================== Load / Persistence Tests ====================

    #[test]
    fn test_load_restores_snapshot_in_order() {
        let holdings = vec![
            Holding {
                id: "1".to_string(),
                ticker: "AAPL".to_string(),
                name: "Apple Inc.".to_string(),
                quantity: dec!(10),
                purchase_price: dec!(150),
            },
            Holding {
                id: "2".to_string(),
                ticker: "MSFT".to_string(),
                name: "Microsoft".to_string(),
                quantity: dec!(5),
                purchase_price: dec!(300),
            },
        ];
        let repository = MockSnapshotRepository::with_snapshot(holdings.clone());
        let store = HoldingStore::load(&repository, Arc::new(MockEventSink::new()));

        assert_eq!(store.list(), holdings.as_slice());
    }

    #[test]
    fn test_load_failure_yields_empty_store() {
        let repository = MockSnapshotRepository {
            fail_load: true,
            ..MockSnapshotRepository::default()
        };
        let store = HoldingStore::load(&repository, Arc::new(MockEventSink::new()));

        assert!(store.is_empty());
    }

    #[test]
    fn test_persisting_sink_saves_after_every_mutation() {
        let repository = Arc::new(MockSnapshotRepository::default());
        let sink = PersistingEventSink::new(repository.clone());
        let mut store = HoldingStore::new(Arc::new(sink));

        let holding = store.add(draft("AAPL", "Apple Inc."));
        store.update(&holding.id, draft("AAPL", "Apple"));
        store.delete(&holding.id);

        let saves = repository.saves();
        assert_eq!(saves.len(), 3);
        assert_eq!(saves[0][0].name, "Apple Inc.");
        assert_eq!(saves[1][0].name, "Apple");
        assert!(saves[2].is_empty());
    }

    #[test]
    fn test_save_failure_leaves_memory_state_authoritative() {
        let repository = Arc::new(MockSnapshotRepository {
            fail_save: true,
            ..MockSnapshotRepository::default()
        });
        let sink = PersistingEventSink::new(repository.clone());
        let mut store = HoldingStore::new(Arc::new(sink));

        let holding = store.add(draft("AAPL", "Apple Inc."));

        assert!(repository.saves().is_empty());
        assert_eq!(store.get(&holding.id), Some(&holding));
    }
}
