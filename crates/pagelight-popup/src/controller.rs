//! Popup controller: drives the document context through the relay.

use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::Value;
use tracing::warn;

use pagelight_core::{ContextRouter, StoredState};
use pagelight_protocols::error::RelayError;
use pagelight_protocols::host::{KeyValueStore, TabQuery};
use pagelight_protocols::message::{Action, Request, Response};

use crate::view::{PopupView, ResultCard};

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;

/// Drives the three popup buttons against the active tab.
///
/// Every button press increments the persisted click counter, whether or
/// not the underlying action succeeded - the counter records presses,
/// not outcomes.
pub struct PopupController {
    router: Arc<ContextRouter>,
    state: StoredState,
    tabs: Arc<dyn TabQuery>,
    view: Mutex<PopupView>,
}

impl PopupController {
    pub fn new(
        router: Arc<ContextRouter>,
        store: Arc<dyn KeyValueStore>,
        tabs: Arc<dyn TabQuery>,
    ) -> Self {
        Self {
            router,
            state: StoredState::new(store),
            tabs,
            view: Mutex::new(PopupView::default()),
        }
    }

    /// Populate tab info and the click count, as the popup does when it
    /// opens.
    pub async fn open(&self) -> PopupView {
        let click_count = match self.state.click_count().await {
            Ok(count) => count,
            Err(error) => {
                warn!(%error, "click count unavailable, showing zero");
                0
            }
        };
        let tab = self.tabs.active_tab().await.ok().flatten();

        let mut view = self.view.lock();
        view.click_count = click_count;
        if let Some(tab) = tab {
            view.current_url = tab.url;
            view.page_title = tab.title;
        }
        view.clone()
    }

    /// The highlight button.
    pub async fn highlight(&self) -> PopupView {
        let card = match self.send_to_active_tab(Action::Highlight).await {
            Ok(response) if !response.is_error() => {
                ResultCard::new("Success", "Page highlighted successfully!")
            }
            _ => ResultCard::new(
                "Error",
                "Could not highlight page. Make sure the content script is loaded.",
            ),
        };
        self.finish_press(card).await
    }

    /// The count-words button.
    pub async fn count_words(&self) -> PopupView {
        let card = match self.send_to_active_tab(Action::CountWords).await {
            Ok(response) => match response.get("wordCount").and_then(Value::as_u64) {
                Some(count) => ResultCard::new(
                    "Word Count",
                    format!("This page contains {count} words."),
                ),
                None => ResultCard::new(
                    "Error",
                    "Could not count words. Make sure the content script is loaded.",
                ),
            },
            Err(_) => ResultCard::new(
                "Error",
                "Could not count words. Make sure the content script is loaded.",
            ),
        };
        self.finish_press(card).await
    }

    /// The clear button.
    pub async fn clear(&self) -> PopupView {
        let card = match self.send_to_active_tab(Action::Clear).await {
            Ok(response) if !response.is_error() => {
                ResultCard::new("Success", "Highlights cleared!")
            }
            _ => ResultCard::new("Error", "Could not clear highlights."),
        };
        self.finish_press(card).await
    }

    /// Snapshot of the current view.
    pub fn view(&self) -> PopupView {
        self.view.lock().clone()
    }

    async fn send_to_active_tab(&self, action: Action) -> Result<Response, RelayError> {
        let tab = self
            .tabs
            .active_tab()
            .await
            .ok()
            .flatten()
            .ok_or(RelayError::NoActiveTab)?;
        self.router.send_to_tab(tab.id, Request::new(action)).await
    }

    async fn finish_press(&self, card: ResultCard) -> PopupView {
        let click_count = match self.state.increment_click_count().await {
            Ok(count) => count,
            Err(error) => {
                warn!(%error, "click count update failed");
                self.view.lock().click_count
            }
        };

        let mut view = self.view.lock();
        view.click_count = click_count;
        view.result = Some(card);
        view.clone()
    }
}
