//! Core error types for the Stockfolio application.
//!
//! This module defines storage-agnostic error types. Storage-specific errors
//! (filesystem, serialization, etc.) are converted to these types by the
//! storage layer.

use thiserror::Error;

use crate::holdings::FieldErrors;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the portfolio application.
///
/// Storage-specific errors are wrapped in string form to keep this type
/// storage-agnostic. Note that validation failures and persistence failures
/// never abort a session: validation errors are surfaced per field to the
/// caller, and persistence failures are logged while the in-memory state
/// remains authoritative.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Storage operation failed: {0}")]
    Storage(#[from] StorageError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] FieldErrors),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Storage-agnostic error type for snapshot persistence operations.
///
/// This enum uses `String` for all error details, allowing the storage layer
/// to convert backend-specific errors (I/O, JSON, etc.) into this format.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The persisted snapshot could not be read.
    #[error("Failed to read snapshot: {0}")]
    ReadFailed(String),

    /// The snapshot could not be written.
    #[error("Failed to write snapshot: {0}")]
    WriteFailed(String),

    /// The persisted payload is not a well-formed snapshot.
    #[error("Snapshot payload is malformed: {0}")]
    Malformed(String),
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
