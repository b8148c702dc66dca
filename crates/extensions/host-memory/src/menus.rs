//! In-memory context-menu host.

use async_trait::async_trait;
use parking_lot::Mutex;

use pagelight_protocols::error::HostError;
use pagelight_protocols::host::{MenuHost, MenuItem};

/// Menu host that records registered items.
#[derive(Default)]
pub struct MemoryMenus {
    items: Mutex<Vec<MenuItem>>,
}

impl MemoryMenus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registered items, in registration order.
    pub fn items(&self) -> Vec<MenuItem> {
        self.items.lock().clone()
    }
}

#[async_trait]
impl MenuHost for MemoryMenus {
    async fn register(&self, item: MenuItem) -> Result<(), HostError> {
        let mut items = self.items.lock();
        if items.iter().any(|existing| existing.id == item.id) {
            return Err(HostError::DuplicateMenuItem(item.id));
        }
        items.push(item);
        Ok(())
    }
}
