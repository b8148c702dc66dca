//! Handler execution errors.

use thiserror::Error;

use super::{HostError, StorageError};

/// Errors a handler can raise while serving a request.
///
/// The dispatcher folds these into an in-band error response; they are
/// never fatal.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("invalid payload: {0}")]
    BadPayload(String),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("host error: {0}")]
    Host(#[from] HostError),
}
