//! Context-menu wiring.

use std::sync::Arc;

use serde_json::Value;
use tracing::warn;

use pagelight_core::ContextRouter;
use pagelight_protocols::error::HostError;
use pagelight_protocols::host::{MenuHost, MenuItem, NotificationSurface};
use pagelight_protocols::message::{Action, Request, TabInfo};

use crate::error::BackgroundError;

#[cfg(test)]
#[path = "menus_tests.rs"]
mod tests;

/// Menu item that highlights the clicked page.
pub const MENU_HIGHLIGHT: &str = "pagelight-highlight";

/// Menu item that counts words on the clicked page.
pub const MENU_COUNT_WORDS: &str = "pagelight-count-words";

/// Registers the Pagelight menu items and routes their clicks back
/// through the relay.
pub struct MenuRouter {
    host: Arc<dyn MenuHost>,
    router: Arc<ContextRouter>,
    notifications: Arc<dyn NotificationSurface>,
}

impl MenuRouter {
    pub fn new(
        host: Arc<dyn MenuHost>,
        router: Arc<ContextRouter>,
        notifications: Arc<dyn NotificationSurface>,
    ) -> Self {
        Self {
            host,
            router,
            notifications,
        }
    }

    /// Register the Pagelight menu items with the host.
    pub async fn install_items(&self) -> Result<(), HostError> {
        self.host
            .register(MenuItem::page(MENU_HIGHLIGHT, "Highlight with Pagelight"))
            .await?;
        self.host
            .register(MenuItem::page(MENU_COUNT_WORDS, "Count words on page"))
            .await?;
        Ok(())
    }

    /// Entry point for menu clicks delivered by the host.
    ///
    /// A click on a tab whose content script never loaded degrades to a
    /// warning; menus never surface delivery failures to the user.
    pub async fn handle_click(&self, menu_id: &str, tab: &TabInfo) -> Result<(), BackgroundError> {
        match menu_id {
            MENU_HIGHLIGHT => {
                if let Err(error) = self
                    .router
                    .send_to_tab(tab.id, Request::new(Action::Highlight))
                    .await
                {
                    warn!(tab = tab.id, %error, "highlight via menu failed");
                }
            }
            MENU_COUNT_WORDS => match self
                .router
                .send_to_tab(tab.id, Request::new(Action::CountWords))
                .await
            {
                Ok(response) => {
                    if let Some(count) = response.get("wordCount").and_then(Value::as_u64) {
                        self.notifications
                            .show("Word Count", &format!("This page contains {count} words."))
                            .await?;
                    }
                }
                Err(error) => {
                    warn!(tab = tab.id, %error, "word count via menu failed");
                }
            },
            other => {
                warn!(menu = other, "click on unrecognized menu item");
            }
        }
        Ok(())
    }
}
