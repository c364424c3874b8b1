//! Snapshot persistence - the JSON file repository.

mod repository;

pub use repository::{JsonSnapshotRepository, DEFAULT_SNAPSHOT_FILE};
