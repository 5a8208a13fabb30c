//! 日志通知
//!
//! 没有显示层（后台运行、测试）时把通知写进日志

use hosts_switcher_core::traits::NotificationSink;
use hosts_switcher_core::types::{Notification, NotificationLevel};

/// Writes every notification to the `log` facade.
#[derive(Debug, Default)]
pub struct LogNotificationSink;

impl LogNotificationSink {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl NotificationSink for LogNotificationSink {
    fn notify(&self, notification: Notification) {
        let Notification {
            title,
            message,
            level,
            ..
        } = notification;
        match level {
            NotificationLevel::Error => log::error!("[notification] {title}: {message}"),
            NotificationLevel::Warning => log::warn!("[notification] {title}: {message}"),
            NotificationLevel::Success | NotificationLevel::Info => {
                log::info!("[notification] {title}: {message}");
            }
        }
    }
}
