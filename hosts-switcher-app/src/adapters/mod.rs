//! Notification sinks for frontends without their own toast layer.

mod channel_notification_sink;
mod log_notification_sink;

pub use channel_notification_sink::ChannelNotificationSink;
pub use log_notification_sink::LogNotificationSink;
