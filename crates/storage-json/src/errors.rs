//! Storage-specific error types for JSON file operations.
//!
//! This module provides error types that wrap filesystem and serialization
//! errors and convert them to the storage-agnostic error types defined in
//! `stockfolio_core`.

use thiserror::Error;

use stockfolio_core::errors::{Error, StorageError};

/// Storage-specific errors that wrap I/O and JSON types.
///
/// These errors are internal to the storage layer and are converted to
/// `stockfolio_core::Error` before being returned to callers.
#[derive(Error, Debug)]
pub enum FileStorageError {
    #[error("Failed to read snapshot file: {0}")]
    ReadFailed(#[from] std::io::Error),

    #[error("Failed to serialize snapshot: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Failed to write snapshot file: {0}")]
    WriteFailed(std::io::Error),
}

impl From<FileStorageError> for Error {
    fn from(err: FileStorageError) -> Self {
        match err {
            FileStorageError::ReadFailed(e) => {
                Error::Storage(StorageError::ReadFailed(e.to_string()))
            }
            FileStorageError::SerializationFailed(e) => {
                Error::Storage(StorageError::Malformed(e.to_string()))
            }
            FileStorageError::WriteFailed(e) => {
                Error::Storage(StorageError::WriteFailed(e.to_string()))
            }
        }
    }
}
