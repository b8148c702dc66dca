//! Persisted storage errors.
//!
//! Absent keys are not errors - they read as defaults. These variants
//! cover the backend itself failing or a value refusing to encode.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),

    #[error("failed to encode value for key {key}: {reason}")]
    Encode { key: String, reason: String },
}
