//! Install and startup lifecycle.

use std::sync::Arc;

use tracing::info;

use pagelight_core::StoredState;
use pagelight_protocols::host::NotificationSurface;
use pagelight_protocols::time::Clock;

use crate::error::BackgroundError;
use crate::menus::MenuRouter;

#[cfg(test)]
#[path = "install_tests.rs"]
mod tests;

/// Why the install hook fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallReason {
    /// First install on this profile.
    Install,
    /// Upgrade of an existing install.
    Update,
}

/// One-shot lifecycle hooks fired by the host.
pub struct Lifecycle {
    state: StoredState,
    menus: Arc<MenuRouter>,
    notifications: Arc<dyn NotificationSurface>,
    clock: Arc<dyn Clock>,
}

impl Lifecycle {
    pub fn new(
        state: StoredState,
        menus: Arc<MenuRouter>,
        notifications: Arc<dyn NotificationSurface>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            state,
            menus,
            notifications,
            clock,
        }
    }

    /// Fired once per install or update: seed the persisted layout and
    /// register the context menus. The welcome notification shows on
    /// fresh installs only.
    ///
    /// Seeding runs on updates too, resetting the counter and install
    /// date - the historical behavior, kept deliberately.
    pub async fn on_installed(&self, reason: InstallReason) -> Result<(), BackgroundError> {
        info!(?reason, "pagelight installed");

        self.state.seed(self.clock.now()).await?;
        self.menus.install_items().await?;

        if reason == InstallReason::Install {
            self.notifications
                .show(
                    "Pagelight installed!",
                    "Pagelight is ready to use. Open the toolbar popup to get started!",
                )
                .await?;
        }
        Ok(())
    }

    /// Fired once per host process start.
    pub async fn on_startup(&self) {
        info!("pagelight background started");
    }
}
