//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

use crate::types::HostsId;

/// Core layer error type
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Hosts entry not found
    #[error("Hosts entry not found: {0}")]
    EntryNotFound(HostsId),

    /// Attempted to edit a read-only entry (system hosts, remote or group)
    #[error("Hosts entry is read-only: {0}")]
    ReadOnlyEntry(HostsId),

    /// Agent did not answer in time
    #[error("Agent request timed out: {request} after {timeout_ms} ms")]
    AgentTimeout { request: String, timeout_ms: u64 },

    /// Agent answered with an error
    #[error("Agent error: {request} - {message}")]
    AgentError { request: String, message: String },

    /// Agent channel closed (process gone)
    #[error("Agent unavailable: {0}")]
    AgentUnavailable(String),

    /// Coordinator task has stopped
    #[error("Coordinator stopped")]
    CoordinatorStopped,

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Storage layer error
    #[error("Storage error: {0}")]
    StorageError(String),
}

impl CoreError {
    /// Whether it is expected behavior (stale references, flaky agent, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::EntryNotFound(_)
            | Self::AgentTimeout { .. }
            | Self::AgentUnavailable(_)
            | Self::ValidationError(_) => true,
            Self::ReadOnlyEntry(_)
            | Self::AgentError { .. }
            | Self::CoordinatorStopped
            | Self::SerializationError(_)
            | Self::StorageError(_) => false,
        }
    }

    /// Log this error at the level matching [`Self::is_expected`].
    pub fn log(&self, context: &str) {
        if self.is_expected() {
            log::warn!("{context}: {self}");
        } else {
            log::error!("{context}: {self}");
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::SerializationError(e.to_string())
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
