//! Host service protocol definitions.
//!
//! Every side effect the contexts perform against their host - persisted
//! storage, active-tab lookup, notifications, context menus - goes
//! through one of these traits, so the whole system runs against
//! in-memory implementations in tests and the demo binary.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{HostError, StorageError};
use crate::message::TabInfo;

/// Keys of the persisted state layout.
pub mod keys {
    /// Monotonic popup click counter.
    pub const CLICK_COUNT: &str = "clickCount";
    /// RFC 3339 timestamp written when the extension was installed.
    pub const INSTALL_DATE: &str = "installDate";
    /// Bounded sequence of recent activity entries.
    pub const ACTIVITIES: &str = "activities";
}

/// Persisted key-value storage shared by all contexts.
///
/// Reads and writes are individually serialized by the host, but
/// read-modify-write sequences built on top of them are not: two contexts
/// updating the same key concurrently race, last writer wins.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Fetch the requested keys. Absent keys are omitted from the result.
    async fn get(&self, keys: &[&str]) -> Result<HashMap<String, Value>, StorageError>;

    /// Merge `entries` into the store.
    async fn set(&self, entries: HashMap<String, Value>) -> Result<(), StorageError>;
}

/// Active-tab lookup.
#[async_trait]
pub trait TabQuery: Send + Sync {
    /// The currently focused tab, if any.
    async fn active_tab(&self) -> Result<Option<TabInfo>, HostError>;
}

/// Fire-and-forget notification surface.
#[async_trait]
pub trait NotificationSurface: Send + Sync {
    /// Show a notification. There is no delivery feedback.
    async fn show(&self, title: &str, message: &str) -> Result<(), HostError>;
}

/// Where a context-menu item may appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuContext {
    Page,
    Selection,
    Link,
}

/// A context-menu item to register with the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub title: String,
    pub contexts: Vec<MenuContext>,
}

impl MenuItem {
    /// Create a page-context menu item.
    pub fn page(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            contexts: vec![MenuContext::Page],
        }
    }
}

/// Context-menu registration.
///
/// Click events travel the other way: the host hands them to whatever
/// click router the background context installed.
#[async_trait]
pub trait MenuHost: Send + Sync {
    /// Register a menu item. Registering an ID twice is an error.
    async fn register(&self, item: MenuItem) -> Result<(), HostError>;
}
