//! Agent error → user notification

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use crate::traits::NotificationSink;
use crate::types::{AgentErrorReport, Notification, NotificationLevel, NotificationPosition};

/// Forwards agent-reported errors to the display surface.
///
/// Always severity `error`, fixed auto-dismiss. No retry and no duplicate
/// suppression.
pub struct NotificationRelay {
    sink: Arc<dyn NotificationSink>,
    auto_dismiss: Duration,
}

impl NotificationRelay {
    #[must_use]
    pub fn new(sink: Arc<dyn NotificationSink>, auto_dismiss: Duration) -> Self {
        Self { sink, auto_dismiss }
    }

    pub fn relay(&self, report: AgentErrorReport) {
        log::warn!("Agent error: {} - {}", report.title, report.content);
        self.sink.notify(Notification {
            title: report.title,
            message: report.content,
            level: NotificationLevel::Error,
            position: NotificationPosition::TopRight,
            auto_dismiss: self.auto_dismiss,
            raised_at: Utc::now(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::RecordingNotificationSink;

    #[test]
    fn relays_with_error_level_and_timeout() {
        let sink = Arc::new(RecordingNotificationSink::new());
        let relay = NotificationRelay::new(sink.clone(), Duration::from_secs(10));

        relay.relay(AgentErrorReport::new("Save failed", "permission denied"));
        relay.relay(AgentErrorReport::new("Save failed", "permission denied"));

        let shown = sink.notifications();
        assert_eq!(shown.len(), 2);
        assert_eq!(shown[0].title, "Save failed");
        assert_eq!(shown[0].message, "permission denied");
        assert_eq!(shown[0].level, NotificationLevel::Error);
        assert_eq!(shown[0].position, NotificationPosition::TopRight);
        assert_eq!(shown[0].auto_dismiss, Duration::from_secs(10));
    }
}
