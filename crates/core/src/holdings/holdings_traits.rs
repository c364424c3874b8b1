//! Holding persistence and store traits.
//!
//! These traits define the contract for snapshot persistence and store
//! operations without any backend-specific types, allowing for different
//! storage implementations.

use super::holdings_model::{Holding, HoldingDraft};
use crate::errors::Result;

/// Trait defining the contract for snapshot persistence.
///
/// A snapshot is the full ordered list of holdings at a point in time.
/// Implementations own a single durable slot and are backend-agnostic from
/// the core's point of view.
pub trait SnapshotRepositoryTrait: Send + Sync {
    /// Loads the persisted snapshot.
    ///
    /// An absent or malformed payload yields an empty list (with a
    /// diagnostic log from the implementation), not an error; `Err` is
    /// reserved for failures to reach the backend at all.
    fn load(&self) -> Result<Vec<Holding>>;

    /// Persists the full snapshot, replacing the previous one.
    fn save(&self, holdings: &[Holding]) -> Result<()>;
}

/// Trait defining the contract for holding store operations.
///
/// The store owns the canonical ordered list for its lifetime; mutations
/// take `&mut self` since the core is single-threaded by design.
pub trait HoldingStoreTrait {
    /// Appends a new holding built from a validated draft and returns it.
    ///
    /// Assigns a fresh unique id; never fails for a pre-validated draft.
    fn add(&mut self, draft: HoldingDraft) -> Holding;

    /// Replaces the fields of the holding with the given id, preserving its
    /// id and position. Returns `None` when no holding matches.
    fn update(&mut self, id: &str, draft: HoldingDraft) -> Option<Holding>;

    /// Removes the holding with the given id, if present.
    ///
    /// Returns whether a holding was removed.
    fn delete(&mut self, id: &str) -> bool;

    /// The current holdings in insertion order.
    fn list(&self) -> &[Holding];
}
