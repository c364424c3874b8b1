//! In-memory holding store.

use std::sync::Arc;

use log::{debug, error};
use uuid::Uuid;

use super::holdings_model::{Holding, HoldingDraft};
use super::holdings_traits::{HoldingStoreTrait, SnapshotRepositoryTrait};
use crate::events::{DomainEvent, EventSink, NoOpEventSink};

/// Ordered, unique-by-id collection of holdings.
///
/// The store owns the canonical list for its lifetime and is the only write
/// surface for it. Insertion order is preserved across all operations and
/// is the display/iteration order; it carries no other meaning.
///
/// After every successful mutation the store emits a [`DomainEvent`] with
/// the post-mutation snapshot to its sink. Wiring a
/// [`PersistingEventSink`](crate::events::PersistingEventSink) there gives
/// the classic save-after-every-change behavior; tests wire a
/// [`MockEventSink`](crate::events::MockEventSink) or none at all.
pub struct HoldingStore {
    holdings: Vec<Holding>,
    event_sink: Arc<dyn EventSink>,
}

impl HoldingStore {
    /// Creates an empty store with the given event sink.
    pub fn new(event_sink: Arc<dyn EventSink>) -> Self {
        Self {
            holdings: Vec::new(),
            event_sink,
        }
    }

    /// Creates an empty store that emits no events.
    pub fn detached() -> Self {
        Self::new(Arc::new(NoOpEventSink))
    }

    /// Creates a store initialized from a persisted snapshot.
    ///
    /// A load failure is logged and yields an empty store; the session
    /// stays usable regardless of the state of the backend.
    pub fn load(repository: &dyn SnapshotRepositoryTrait, event_sink: Arc<dyn EventSink>) -> Self {
        let holdings = match repository.load() {
            Ok(holdings) => holdings,
            Err(e) => {
                error!("Failed to load holdings snapshot, starting empty: {}", e);
                Vec::new()
            }
        };
        debug!("Loaded {} holding(s) from snapshot", holdings.len());
        Self {
            holdings,
            event_sink,
        }
    }

    /// Creates a store over an existing list, e.g. in tests.
    pub fn with_holdings(holdings: Vec<Holding>, event_sink: Arc<dyn EventSink>) -> Self {
        Self {
            holdings,
            event_sink,
        }
    }

    /// Looks up a holding by id.
    pub fn get(&self, id: &str) -> Option<&Holding> {
        self.holdings.iter().find(|h| h.id == id)
    }

    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    fn emit(&self, event: DomainEvent) {
        self.event_sink.emit(&event, &self.holdings);
    }
}

impl HoldingStoreTrait for HoldingStore {
    fn add(&mut self, draft: HoldingDraft) -> Holding {
        let holding = draft.into_holding(Uuid::new_v4().to_string());
        self.holdings.push(holding.clone());
        self.emit(DomainEvent::holding_added(holding.id.clone()));
        holding
    }

    fn update(&mut self, id: &str, draft: HoldingDraft) -> Option<Holding> {
        let slot = self.holdings.iter_mut().find(|h| h.id == id)?;
        *slot = draft.into_holding(id.to_string());
        let updated = slot.clone();
        self.emit(DomainEvent::holding_updated(id));
        Some(updated)
    }

    fn delete(&mut self, id: &str) -> bool {
        let before = self.holdings.len();
        self.holdings.retain(|h| h.id != id);
        let removed = self.holdings.len() < before;
        if removed {
            self.emit(DomainEvent::holding_deleted(id));
        }
        removed
    }

    fn list(&self) -> &[Holding] {
        &self.holdings
    }
}
