//! Document-context handlers installed on the relay.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::info;

use pagelight_core::Dispatcher;
use pagelight_protocols::error::{HandlerError, RelayError};
use pagelight_protocols::handler::Handler;
use pagelight_protocols::message::{Action, Request, Response, Sender};
use pagelight_protocols::time::Scheduler;

use crate::annotator::Annotator;
use crate::dom::{PageDocument, StyleFragment};
use crate::metrics::count_words;

#[cfg(test)]
#[path = "handlers_tests.rs"]
mod tests;

const BASE_STYLE_ID: &str = "pagelight-base-style";

const BASE_CSS: &str = "\
.pagelight-highlight {
    transition: all 0.3s ease;
}
";

/// The document side of the relay: builds the dispatcher a loaded page
/// attaches under its tab ID.
pub struct ContentScript;

impl ContentScript {
    /// Install the page handlers and the base stylesheet, returning the
    /// document-context dispatcher.
    pub fn install(
        document: Arc<PageDocument>,
        scheduler: Arc<dyn Scheduler>,
    ) -> Result<Arc<Dispatcher>, RelayError> {
        Self::install_with_stagger(document, scheduler, crate::annotator::DEFAULT_STAGGER)
    }

    /// As [`ContentScript::install`], with an explicit highlight stagger.
    pub fn install_with_stagger(
        document: Arc<PageDocument>,
        scheduler: Arc<dyn Scheduler>,
        stagger: std::time::Duration,
    ) -> Result<Arc<Dispatcher>, RelayError> {
        document.insert_stylesheet(StyleFragment::new(BASE_STYLE_ID, BASE_CSS));

        let annotator = Arc::new(Annotator::new(document.clone(), scheduler).with_stagger(stagger));
        let dispatcher = Dispatcher::new();
        dispatcher.register(Arc::new(HighlightHandler {
            annotator: annotator.clone(),
        }))?;
        dispatcher.register(Arc::new(CountWordsHandler {
            document: document.clone(),
        }))?;
        dispatcher.register(Arc::new(ClearHandler { annotator }))?;

        info!(elements = document.element_count(), "content script installed");
        Ok(Arc::new(dispatcher))
    }
}

struct HighlightHandler {
    annotator: Arc<Annotator>,
}

#[async_trait]
impl Handler for HighlightHandler {
    fn action(&self) -> &str {
        Action::Highlight.as_str()
    }

    async fn handle(&self, _request: Request, _sender: Sender) -> Result<Response, HandlerError> {
        self.annotator.apply().await;
        Ok(Response::success(json!({"status": "success"})))
    }
}

struct CountWordsHandler {
    document: Arc<PageDocument>,
}

#[async_trait]
impl Handler for CountWordsHandler {
    fn action(&self) -> &str {
        Action::CountWords.as_str()
    }

    async fn handle(&self, _request: Request, _sender: Sender) -> Result<Response, HandlerError> {
        let count = count_words(&self.document.visible_text());
        Ok(Response::success(json!({"wordCount": count})))
    }
}

struct ClearHandler {
    annotator: Arc<Annotator>,
}

#[async_trait]
impl Handler for ClearHandler {
    fn action(&self) -> &str {
        Action::Clear.as_str()
    }

    async fn handle(&self, _request: Request, _sender: Sender) -> Result<Response, HandlerError> {
        self.annotator.clear();
        Ok(Response::success(json!({"status": "success"})))
    }
}
