//! Domain events module.
//!
//! Provides domain event types and the sink trait for emitting events after
//! successful store mutations. The persistence side effect is modelled as
//! one such sink rather than a hard-wired call, which keeps the store
//! testable without a storage dependency.

mod domain_event;
mod sink;

pub use domain_event::*;
pub use sink::*;
