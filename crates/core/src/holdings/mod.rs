//! Holdings module - domain models, validation, store, and traits.

mod holdings_constants;
mod holdings_model;
mod holdings_store;
mod holdings_traits;


#[cfg(test)]
mod holdings_store_tests;

// Re-export the public interface
pub use holdings_constants::*;
pub use holdings_model::{FieldErrors, Holding, HoldingDraft, HoldingField, HoldingInput};
pub use holdings_store::HoldingStore;
pub use holdings_traits::{HoldingStoreTrait, SnapshotRepositoryTrait};
