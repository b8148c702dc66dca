//! Action-keyed request dispatch for one context.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::warn;

use pagelight_protocols::error::RelayError;
use pagelight_protocols::handler::Handler;
use pagelight_protocols::message::{Request, Response, Sender};

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;

/// Registry of handlers keyed by action name.
///
/// One dispatcher backs each context. Dispatching an action with no
/// registered handler yields the in-band unknown-action response rather
/// than an `Err` - that is an application-level outcome the caller can
/// render, not a delivery failure.
pub struct Dispatcher {
    handlers: DashMap<String, Arc<dyn Handler>>,
}

impl Dispatcher {
    /// Create an empty dispatcher.
    pub fn new() -> Self {
        Self {
            handlers: DashMap::new(),
        }
    }

    /// Register a handler under its action name.
    ///
    /// Returns an error if a handler for that action is already
    /// registered.
    pub fn register(&self, handler: Arc<dyn Handler>) -> Result<(), RelayError> {
        let action = handler.action().to_string();
        if self.handlers.contains_key(&action) {
            return Err(RelayError::AlreadyRegistered(action));
        }
        self.handlers.insert(action, handler);
        Ok(())
    }

    /// Unregister the handler for an action.
    pub fn unregister(&self, action: &str) -> Result<(), RelayError> {
        self.handlers
            .remove(action)
            .ok_or_else(|| RelayError::NotRegistered(action.to_string()))?;
        Ok(())
    }

    /// Whether a handler is registered for `action`.
    pub fn contains(&self, action: &str) -> bool {
        self.handlers.contains_key(action)
    }

    /// All registered action names.
    pub fn actions(&self) -> Vec<String> {
        self.handlers.iter().map(|entry| entry.key().clone()).collect()
    }

    /// Dispatch one request, producing exactly one response.
    ///
    /// Handler errors degrade to an in-band error response; no state the
    /// handler did not already touch is mutated.
    pub async fn dispatch(&self, request: Request, sender: Sender) -> Response {
        let handler = {
            let entry = self.handlers.get(&request.action);
            match entry {
                Some(entry) => entry.value().clone(),
                None => {
                    warn!(action = %request.action, "unknown action");
                    return Response::unknown_action();
                }
            }
        };

        match handler.handle(request, sender).await {
            Ok(response) => response,
            Err(error) => {
                warn!(action = %handler.action(), %error, "handler failed");
                Response::error(error.to_string())
            }
        }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}
