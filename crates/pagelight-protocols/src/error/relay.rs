//! Relay delivery and registration errors.

use thiserror::Error;

use crate::message::TabId;

/// Errors raised by the relay itself, as opposed to the in-band
/// `{"error": ...}` responses handlers produce.
///
/// `NoListener` and `NoBackground` are delivery failures: the target
/// context exists but nothing is listening there. Callers surface these
/// to the user instead of treating them like application errors.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The tab has no document-context listener (content script not
    /// loaded).
    #[error("no listener in tab {0}")]
    NoListener(TabId),

    /// No background dispatcher has been installed.
    #[error("no background listener installed")]
    NoBackground,

    /// There is no active tab to deliver to.
    #[error("no active tab")]
    NoActiveTab,

    /// A handler for this action is already registered.
    #[error("handler already registered for action: {0}")]
    AlreadyRegistered(String),

    /// No handler is registered for this action.
    #[error("no handler registered for action: {0}")]
    NotRegistered(String),
}
