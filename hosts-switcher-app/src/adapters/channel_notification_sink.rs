//! 通道通知
//!
//! 把通知转发给显示层的接收端

use hosts_switcher_core::traits::NotificationSink;
use hosts_switcher_core::types::Notification;
use tokio::sync::mpsc;

/// Forwards notifications to the rendering layer over an unbounded channel.
#[derive(Debug, Clone)]
pub struct ChannelNotificationSink {
    tx: mpsc::UnboundedSender<Notification>,
}

impl ChannelNotificationSink {
    /// Create a sink and the receiver the rendering layer drains.
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl NotificationSink for ChannelNotificationSink {
    fn notify(&self, notification: Notification) {
        if self.tx.send(notification).is_err() {
            log::debug!("Notification dropped, display layer is gone");
        }
    }
}
