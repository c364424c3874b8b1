//! Domain event sink trait and implementations.

use std::sync::{Arc, Mutex};

use log::error;

use super::DomainEvent;
use crate::holdings::{Holding, SnapshotRepositoryTrait};

/// Trait for receiving domain events.
///
/// The holding store emits an event through this trait after every
/// successful mutation, together with the post-mutation snapshot, so
/// observers that mirror the full list (persistence, re-rendering) never
/// have to query the store back.
///
/// # Design Rules
///
/// - `emit()` must not block the single thread of control for long
/// - Failure to handle an event must not affect domain operations
///   (best-effort); the in-memory state stays authoritative
pub trait EventSink: Send + Sync {
    /// Handle a single domain event and the snapshot it produced.
    fn emit(&self, event: &DomainEvent, snapshot: &[Holding]);
}

/// No-op implementation for tests or contexts that don't need events.
#[derive(Clone, Default)]
pub struct NoOpEventSink;

impl EventSink for NoOpEventSink {
    fn emit(&self, _event: &DomainEvent, _snapshot: &[Holding]) {
        // Intentionally empty - events are discarded
    }
}

/// Mock sink for testing - collects emitted events and snapshots.
#[derive(Clone, Default)]
pub struct MockEventSink {
    #[allow(clippy::type_complexity)]
    events: Arc<Mutex<Vec<(DomainEvent, Vec<Holding>)>>>,
}

impl MockEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all collected events with their snapshots.
    pub fn events(&self) -> Vec<(DomainEvent, Vec<Holding>)> {
        self.events.lock().unwrap().clone()
    }

    /// Clears collected events.
    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    /// Returns the number of collected events.
    pub fn len(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    /// Returns true if no events have been collected.
    pub fn is_empty(&self) -> bool {
        self.events.lock().unwrap().is_empty()
    }
}

impl EventSink for MockEventSink {
    fn emit(&self, event: &DomainEvent, snapshot: &[Holding]) {
        self.events
            .lock()
            .unwrap()
            .push((event.clone(), snapshot.to_vec()));
    }
}

/// Sink that persists each emitted snapshot through a repository.
///
/// Saving is best-effort: a failed write is logged and otherwise ignored,
/// leaving the in-memory state authoritative for the rest of the session.
pub struct PersistingEventSink {
    repository: Arc<dyn SnapshotRepositoryTrait>,
}

impl PersistingEventSink {
    pub fn new(repository: Arc<dyn SnapshotRepositoryTrait>) -> Self {
        Self { repository }
    }
}

impl EventSink for PersistingEventSink {
    fn emit(&self, event: &DomainEvent, snapshot: &[Holding]) {
        if let Err(e) = self.repository.save(snapshot) {
            error!(
                "Failed to persist holdings snapshot after {:?} for holding {}: {}",
                event,
                event.holding_id(),
                e
            );
        }
    }
}
