//! Bounded activity log over the persisted store.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use tracing::warn;

use pagelight_protocols::error::StorageError;
use pagelight_protocols::host::{KeyValueStore, keys};
use pagelight_protocols::time::Clock;

#[cfg(test)]
#[path = "activity_tests.rs"]
mod tests;

/// Cap on retained activity entries.
pub const MAX_ENTRIES: usize = 50;

/// One recorded user action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    pub action: String,
    /// RFC 3339 timestamp.
    pub timestamp: String,
    /// Originating page URL, or `"background"`.
    pub url: String,
}

/// Append-only log of recent actions, oldest evicted first past
/// [`MAX_ENTRIES`].
pub struct ActivityLog {
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
}

impl ActivityLog {
    pub fn new(store: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Append one entry.
    ///
    /// Read-modify-write over the store: concurrent appends from two
    /// contexts can race and lose an entry (last writer wins). The host
    /// storage contract offers no transaction to close that window.
    pub async fn append(&self, action: &str, source_url: &str) -> Result<(), StorageError> {
        let mut entries = self.recent().await?;
        entries.push(ActivityEntry {
            action: action.to_string(),
            timestamp: self
                .clock
                .now()
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            url: source_url.to_string(),
        });
        while entries.len() > MAX_ENTRIES {
            entries.remove(0);
        }

        let value = serde_json::to_value(&entries).map_err(|e| StorageError::Encode {
            key: keys::ACTIVITIES.to_string(),
            reason: e.to_string(),
        })?;
        self.store
            .set(HashMap::from([(keys::ACTIVITIES.to_string(), value)]))
            .await
    }

    /// Current entries, oldest first; empty when unseeded.
    pub async fn recent(&self) -> Result<Vec<ActivityEntry>, StorageError> {
        let mut found = self.store.get(&[keys::ACTIVITIES]).await?;
        let Some(value) = found.remove(keys::ACTIVITIES) else {
            return Ok(Vec::new());
        };
        match serde_json::from_value(value) {
            Ok(entries) => Ok(entries),
            Err(error) => {
                warn!(%error, "discarding undecodable activity log");
                Ok(Vec::new())
            }
        }
    }
}
