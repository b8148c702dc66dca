//! Background context errors.

use thiserror::Error;

use pagelight_protocols::error::{HostError, RelayError, StorageError};

#[derive(Debug, Error)]
pub enum BackgroundError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("host error: {0}")]
    Host(#[from] HostError),

    #[error("relay error: {0}")]
    Relay(#[from] RelayError),
}
