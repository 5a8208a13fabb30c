//! Notification display abstract Trait

use crate::types::Notification;

/// Notification display surface
///
/// Platform implementation:
/// - Desktop: toast widget in the editor window
/// - Headless: `LogNotificationSink` (hosts-switcher-app)
pub trait NotificationSink: Send + Sync {
    /// Show a notification
    fn notify(&self, notification: Notification);
}
