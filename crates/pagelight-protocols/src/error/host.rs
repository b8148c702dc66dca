//! Host service errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("host call failed: {0}")]
    CallFailed(String),

    #[error("menu item already registered: {0}")]
    DuplicateMenuItem(String),
}
