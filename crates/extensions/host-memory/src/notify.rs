//! Recording notification surface.

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::info;

use pagelight_protocols::error::HostError;
use pagelight_protocols::host::NotificationSurface;

/// A shown notification: title and message.
pub type ShownNotification = (String, String);

/// Notification surface that logs and records everything shown.
#[derive(Default)]
pub struct RecordingNotifications {
    shown: Mutex<Vec<ShownNotification>>,
}

impl RecordingNotifications {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything shown so far, in order.
    pub fn shown(&self) -> Vec<ShownNotification> {
        self.shown.lock().clone()
    }
}

#[async_trait]
impl NotificationSurface for RecordingNotifications {
    async fn show(&self, title: &str, message: &str) -> Result<(), HostError> {
        info!(title, message, "notification");
        self.shown.lock().push((title.to_string(), message.to_string()));
        Ok(())
    }
}
