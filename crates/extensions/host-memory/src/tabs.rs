//! Fixed-tab implementation of the active-tab query.

use async_trait::async_trait;
use parking_lot::RwLock;

use pagelight_protocols::error::HostError;
use pagelight_protocols::host::TabQuery;
use pagelight_protocols::message::TabInfo;

/// Active-tab query answering with a settable tab.
#[derive(Default)]
pub struct StaticTabs {
    active: RwLock<Option<TabInfo>>,
}

impl StaticTabs {
    /// No active tab.
    pub fn none() -> Self {
        Self::default()
    }

    /// A single active tab.
    pub fn with_active(tab: TabInfo) -> Self {
        Self {
            active: RwLock::new(Some(tab)),
        }
    }

    /// Change the active tab, as a focus change does.
    pub fn set_active(&self, tab: Option<TabInfo>) {
        *self.active.write() = tab;
    }
}

#[async_trait]
impl TabQuery for StaticTabs {
    async fn active_tab(&self) -> Result<Option<TabInfo>, HostError> {
        Ok(self.active.read().clone())
    }
}
