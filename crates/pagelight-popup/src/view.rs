//! Popup view model.
//!
//! Plain data the popup renders from, so tests assert the rendering
//! without a UI host.

use serde::Serialize;

/// Everything the popup shows.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopupView {
    pub current_url: String,
    pub page_title: String,
    pub click_count: u64,
    /// Outcome of the most recent button press, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ResultCard>,
}

/// The result card shown after a button press.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultCard {
    pub title: String,
    pub message: String,
}

impl ResultCard {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}
