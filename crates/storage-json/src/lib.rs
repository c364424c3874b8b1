//! JSON file storage implementation for Stockfolio.
//!
//! This crate persists the holdings snapshot as a JSON array in a single
//! file - the durable key-value slot the core treats as its persistence
//! adapter. It implements the repository traits defined in
//! `stockfolio-core` and contains:
//! - The file-backed snapshot repository
//! - Storage-specific error types and conversions
//!
//! # Architecture
//!
//! This crate is the only place in the application where the filesystem is
//! touched. The core crate is storage-agnostic and works with traits.
//!
//! ```text
//!          core (domain)
//!                │
//!                ▼
//!        storage-json (this crate)
//!                │
//!                ▼
//!          snapshot file
//! ```

pub mod errors;
pub mod snapshot;

// Re-export the repository
pub use snapshot::JsonSnapshotRepository;

// Re-export storage errors and conversion helpers
pub use errors::FileStorageError;

// Re-export from stockfolio-core for convenience
pub use stockfolio_core::errors::{Error, Result, StorageError};
