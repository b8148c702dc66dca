//! Cross-context request routing.

use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::RwLock;
use tracing::debug;

use pagelight_protocols::error::RelayError;
use pagelight_protocols::message::{Request, Response, Sender, TabId};

use crate::dispatch::Dispatcher;

#[cfg(test)]
#[path = "router_tests.rs"]
mod tests;

/// Routes requests between contexts.
///
/// The background context installs one dispatcher for the process; each
/// loaded page attaches a document-context dispatcher under its tab ID
/// and detaches it on navigation. Sending to a tab with nothing attached
/// is a delivery failure ([`RelayError::NoListener`]) - distinct from the
/// in-band error responses handlers produce.
pub struct ContextRouter {
    background: RwLock<Option<Arc<Dispatcher>>>,
    tabs: DashMap<TabId, Arc<Dispatcher>>,
}

impl ContextRouter {
    pub fn new() -> Self {
        Self {
            background: RwLock::new(None),
            tabs: DashMap::new(),
        }
    }

    /// Install the background-context dispatcher.
    pub fn install_background(&self, dispatcher: Arc<Dispatcher>) {
        *self.background.write() = Some(dispatcher);
    }

    /// Attach a document-context dispatcher for a tab.
    ///
    /// A fresh page load replaces whatever was attached before.
    pub fn attach_tab(&self, tab: TabId, dispatcher: Arc<Dispatcher>) {
        debug!(tab, "document context attached");
        self.tabs.insert(tab, dispatcher);
    }

    /// Detach a tab's document context, as navigation or tab close does.
    pub fn detach_tab(&self, tab: TabId) {
        debug!(tab, "document context detached");
        self.tabs.remove(&tab);
    }

    /// Whether a document context is attached for `tab`.
    pub fn has_tab(&self, tab: TabId) -> bool {
        self.tabs.contains_key(&tab)
    }

    /// Deliver a request to the background context.
    pub async fn send_to_background(
        &self,
        request: Request,
        sender: Sender,
    ) -> Result<Response, RelayError> {
        let dispatcher = self
            .background
            .read()
            .clone()
            .ok_or(RelayError::NoBackground)?;
        Ok(dispatcher.dispatch(request, sender).await)
    }

    /// Deliver a request to the document context of `tab`.
    pub async fn send_to_tab(&self, tab: TabId, request: Request) -> Result<Response, RelayError> {
        let dispatcher = {
            let entry = self.tabs.get(&tab);
            entry
                .map(|d| d.value().clone())
                .ok_or(RelayError::NoListener(tab))?
        };
        Ok(dispatcher.dispatch(request, Sender::background()).await)
    }
}

impl Default for ContextRouter {
    fn default() -> Self {
        Self::new()
    }
}
