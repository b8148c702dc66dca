//! Typed view over the persisted key-value state.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Value, json};

use pagelight_protocols::error::StorageError;
use pagelight_protocols::host::{KeyValueStore, keys};

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;

/// Click counter and install bookkeeping over the key-value store.
///
/// Absent or malformed keys read as defaults (zero, `None`); they are
/// never an error.
#[derive(Clone)]
pub struct StoredState {
    store: Arc<dyn KeyValueStore>,
}

impl StoredState {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Current popup click count, zero when unseeded.
    pub async fn click_count(&self) -> Result<u64, StorageError> {
        let found = self.store.get(&[keys::CLICK_COUNT]).await?;
        Ok(found
            .get(keys::CLICK_COUNT)
            .and_then(Value::as_u64)
            .unwrap_or(0))
    }

    /// Bump the click count by one and return the new value.
    ///
    /// Read-modify-write: concurrent increments from another context can
    /// lose an update (last writer wins). That matches the host storage
    /// contract, which offers no transaction.
    pub async fn increment_click_count(&self) -> Result<u64, StorageError> {
        let next = self.click_count().await? + 1;
        self.store
            .set(HashMap::from([(keys::CLICK_COUNT.to_string(), json!(next))]))
            .await?;
        Ok(next)
    }

    /// RFC 3339 install timestamp, if seeded.
    pub async fn install_date(&self) -> Result<Option<String>, StorageError> {
        let found = self.store.get(&[keys::INSTALL_DATE]).await?;
        Ok(found
            .get(keys::INSTALL_DATE)
            .and_then(Value::as_str)
            .map(str::to_string))
    }

    /// Write the initial persisted layout: zero clicks, the install
    /// timestamp, and an empty activity sequence.
    pub async fn seed(&self, installed_at: DateTime<Utc>) -> Result<(), StorageError> {
        let entries = HashMap::from([
            (keys::CLICK_COUNT.to_string(), json!(0)),
            (
                keys::INSTALL_DATE.to_string(),
                json!(installed_at.to_rfc3339_opts(SecondsFormat::Millis, true)),
            ),
            (keys::ACTIVITIES.to_string(), json!([])),
        ]);
        self.store.set(entries).await
    }
}
