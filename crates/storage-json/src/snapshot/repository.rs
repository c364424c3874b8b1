//! File-backed snapshot repository.

use std::fs;
use std::path::{Path, PathBuf};

use log::warn;
use serde_json::Value;

use crate::errors::FileStorageError;
use stockfolio_core::errors::Result;
use stockfolio_core::holdings::{Holding, SnapshotRepositoryTrait};

/// Default file name for the holdings snapshot slot.
pub const DEFAULT_SNAPSHOT_FILE: &str = "stockfolio.holdings.json";

/// Stores the holdings snapshot as a JSON array in a single file.
///
/// The payload is an ordered array of holding records with camelCase field
/// names, so a snapshot written by any previous version of the app (or
/// edited by hand) loads as long as it is a well-formed array. Anything
/// else - missing file, unparseable JSON, a non-array payload, records with
/// missing or mistyped fields - loads as an empty list with a diagnostic,
/// never as an error shown to the user.
pub struct JsonSnapshotRepository {
    path: PathBuf,
}

impl JsonSnapshotRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Repository over [`DEFAULT_SNAPSHOT_FILE`] in the given directory.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(DEFAULT_SNAPSHOT_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotRepositoryTrait for JsonSnapshotRepository {
    fn load(&self) -> Result<Vec<Holding>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let raw = fs::read_to_string(&self.path).map_err(FileStorageError::ReadFailed)?;

        let value: Value = match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!(
                    "Snapshot at {} is not valid JSON, starting empty: {}",
                    self.path.display(),
                    e
                );
                return Ok(Vec::new());
            }
        };

        if !value.is_array() {
            warn!(
                "Snapshot at {} is not an array, starting empty",
                self.path.display()
            );
            return Ok(Vec::new());
        }

        match serde_json::from_value::<Vec<Holding>>(value) {
            Ok(holdings) => Ok(holdings),
            Err(e) => {
                warn!(
                    "Snapshot at {} contains malformed records, starting empty: {}",
                    self.path.display(),
                    e
                );
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, holdings: &[Holding]) -> Result<()> {
        let payload =
            serde_json::to_string(holdings).map_err(FileStorageError::SerializationFailed)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(FileStorageError::WriteFailed)?;
            }
        }

        fs::write(&self.path, payload).map_err(FileStorageError::WriteFailed)?;
        Ok(())
    }
}
