//! Coordinator timing configuration

use std::time::Duration;

use crate::error::{CoreError, CoreResult};

/// Debounce delay before an edit burst is persisted
pub const DEFAULT_SAVE_DEBOUNCE: Duration = Duration::from_millis(1000);
/// Period of the remote-refresh check
pub const DEFAULT_REMOTE_REFRESH_INTERVAL: Duration = Duration::from_secs(60);
/// Upper bound for any single agent request
pub const DEFAULT_AGENT_TIMEOUT: Duration = Duration::from_secs(30);
/// Auto-dismiss delay of error notifications
pub const DEFAULT_NOTIFICATION_AUTO_DISMISS: Duration = Duration::from_secs(10);
/// Language used when the user has not picked one
pub const DEFAULT_LANGUAGE: &str = "en";

/// Coordinator configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoordinatorConfig {
    pub save_debounce: Duration,
    /// Force a save once the oldest unsaved edit is this old (disabled by default)
    pub max_save_latency: Option<Duration>,
    pub remote_refresh_interval: Duration,
    pub agent_timeout: Duration,
    pub notification_auto_dismiss: Duration,
    pub default_language: String,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            save_debounce: DEFAULT_SAVE_DEBOUNCE,
            max_save_latency: None,
            remote_refresh_interval: DEFAULT_REMOTE_REFRESH_INTERVAL,
            agent_timeout: DEFAULT_AGENT_TIMEOUT,
            notification_auto_dismiss: DEFAULT_NOTIFICATION_AUTO_DISMISS,
            default_language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl CoordinatorConfig {
    /// Reject values the event loop cannot run with.
    pub fn validate(&self) -> CoreResult<()> {
        if self.remote_refresh_interval.is_zero() {
            return Err(CoreError::ValidationError(
                "remote refresh interval must be greater than zero".to_string(),
            ));
        }
        if self.agent_timeout.is_zero() {
            return Err(CoreError::ValidationError(
                "agent timeout must be greater than zero".to_string(),
            ));
        }
        if let Some(max) = self.max_save_latency {
            if max < self.save_debounce {
                return Err(CoreError::ValidationError(format!(
                    "max save latency ({} ms) cannot be shorter than the save debounce ({} ms)",
                    max.as_millis(),
                    self.save_debounce.as_millis()
                )));
            }
        }
        if self.default_language.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "default language cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = CoordinatorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.save_debounce, Duration::from_millis(1000));
        assert_eq!(config.remote_refresh_interval, Duration::from_secs(60));
        assert_eq!(config.notification_auto_dismiss, Duration::from_secs(10));
    }

    #[test]
    fn rejects_zero_refresh_interval() {
        let config = CoordinatorConfig {
            remote_refresh_interval: Duration::ZERO,
            ..CoordinatorConfig::default()
        };
        assert!(matches!(config.validate(), Err(CoreError::ValidationError(_))));
    }

    #[test]
    fn rejects_cap_below_debounce() {
        let config = CoordinatorConfig {
            max_save_latency: Some(Duration::from_millis(500)),
            ..CoordinatorConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
