//! Background-context handlers installed on the relay.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::info;

use pagelight_core::Dispatcher;
use pagelight_protocols::error::{HandlerError, RelayError};
use pagelight_protocols::handler::Handler;
use pagelight_protocols::host::{KeyValueStore, TabQuery};
use pagelight_protocols::message::{Action, Request, Response, Sender};
use pagelight_protocols::time::Clock;

use crate::activity::ActivityLog;

#[cfg(test)]
#[path = "handlers_tests.rs"]
mod tests;

/// The background side of the relay.
pub struct BackgroundContext;

impl BackgroundContext {
    /// Build the background dispatcher with the `getTabInfo` and
    /// `logActivity` handlers registered.
    pub fn install(
        store: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
        tabs: Arc<dyn TabQuery>,
    ) -> Result<Arc<Dispatcher>, RelayError> {
        let log = Arc::new(ActivityLog::new(store, clock));

        let dispatcher = Dispatcher::new();
        dispatcher.register(Arc::new(GetTabInfoHandler { tabs }))?;
        dispatcher.register(Arc::new(LogActivityHandler { log }))?;

        info!("background context installed");
        Ok(Arc::new(dispatcher))
    }
}

struct GetTabInfoHandler {
    tabs: Arc<dyn TabQuery>,
}

#[async_trait]
impl Handler for GetTabInfoHandler {
    fn action(&self) -> &str {
        Action::GetTabInfo.as_str()
    }

    async fn handle(&self, _request: Request, _sender: Sender) -> Result<Response, HandlerError> {
        let tab = self.tabs.active_tab().await?;
        Ok(Response::success(json!({"tab": tab})))
    }
}

struct LogActivityHandler {
    log: Arc<ActivityLog>,
}

#[async_trait]
impl Handler for LogActivityHandler {
    fn action(&self) -> &str {
        Action::LogActivity.as_str()
    }

    async fn handle(&self, request: Request, sender: Sender) -> Result<Response, HandlerError> {
        let action = request
            .data
            .as_ref()
            .and_then(|data| data.get("action"))
            .and_then(|value| value.as_str())
            .ok_or_else(|| HandlerError::BadPayload("missing action field".to_string()))?
            .to_string();

        self.log.append(&action, sender.source_url()).await?;
        info!(action, source = sender.source_url(), "activity logged");
        Ok(Response::success(json!({"status": "logged"})))
    }
}
