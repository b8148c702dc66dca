//! Message types exchanged between contexts.
//!
//! A request names an action and carries an optional JSON payload; every
//! delivered request produces exactly one response. Requests are
//! transient - they exist only for the duration of one relay round-trip.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[cfg(test)]
#[path = "message_tests.rs"]
mod tests;

/// Tab identifier type.
pub type TabId = u32;

/// Error text carried by the response to an unrecognized action.
pub const UNKNOWN_ACTION: &str = "Unknown action";

/// The closed set of actions the relay knows about.
///
/// The wire field is a plain string so that unrecognized action names can
/// be expressed (and rejected); this enum covers the recognized ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    /// Mark all text-bearing elements of the active page.
    Highlight,
    /// Count whitespace-delimited words in the page's visible text.
    CountWords,
    /// Remove all highlight marks from the active page.
    Clear,
    /// Look up the active tab (background-side).
    GetTabInfo,
    /// Append an entry to the activity log (background-side).
    LogActivity,
}

impl Action {
    /// All recognized actions.
    pub const ALL: [Action; 5] = [
        Action::Highlight,
        Action::CountWords,
        Action::Clear,
        Action::GetTabInfo,
        Action::LogActivity,
    ];

    /// Wire name of the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Highlight => "highlight",
            Action::CountWords => "countWords",
            Action::Clear => "clear",
            Action::GetTabInfo => "getTabInfo",
            Action::LogActivity => "logActivity",
        }
    }

    /// Parse a wire name into a recognized action.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|a| a.as_str() == name)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single relay request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    /// Unique request ID.
    pub id: String,

    /// Action name. Recognized names are listed by [`Action`].
    pub action: String,

    /// Optional action payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl Request {
    /// Create a request for a recognized action.
    pub fn new(action: Action) -> Self {
        Self::named(action.as_str())
    }

    /// Create a request for an arbitrary action name.
    pub fn named(action: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            action: action.into(),
            data: None,
        }
    }

    /// Attach a payload to the request.
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    /// The recognized action this request names, if any.
    pub fn action(&self) -> Option<Action> {
        Action::parse(&self.action)
    }
}

/// Response to a relay request: a result payload or an error marker.
///
/// The error marker serializes to `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Response {
    /// Application-level failure, e.g. an unrecognized action.
    Failure {
        /// Human-readable error text.
        error: String,
    },
    /// Successful result payload.
    Success(Value),
}

impl Response {
    /// Create a successful response with a JSON payload.
    pub fn success(payload: Value) -> Self {
        Response::Success(payload)
    }

    /// Create an error response.
    pub fn error(message: impl Into<String>) -> Self {
        Response::Failure {
            error: message.into(),
        }
    }

    /// The response sent for unrecognized action names.
    pub fn unknown_action() -> Self {
        Self::error(UNKNOWN_ACTION)
    }

    /// Whether this response is an error marker.
    pub fn is_error(&self) -> bool {
        matches!(self, Response::Failure { .. })
    }

    /// Look up a field in a successful payload.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Response::Success(payload) => payload.get(key),
            Response::Failure { .. } => None,
        }
    }
}

/// Information about a browser tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabInfo {
    pub id: TabId,
    pub url: String,
    pub title: String,
}

impl TabInfo {
    pub fn new(id: TabId, url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id,
            url: url.into(),
            title: title.into(),
        }
    }
}

/// Identity of the context a request originated from.
///
/// Requests from the background or popup carry no tab.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sender {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab: Option<TabInfo>,
}

impl Sender {
    /// A sender with no associated tab (background or popup context).
    pub fn background() -> Self {
        Self { tab: None }
    }

    /// A sender running in the given tab's document context.
    pub fn from_tab(tab: TabInfo) -> Self {
        Self { tab: Some(tab) }
    }

    /// URL to attribute to this sender; `"background"` when there is no
    /// tab.
    pub fn source_url(&self) -> &str {
        self.tab.as_ref().map(|t| t.url.as_str()).unwrap_or("background")
    }
}
