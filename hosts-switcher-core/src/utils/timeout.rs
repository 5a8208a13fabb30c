//! Bounded agent calls.
//!
//! A hung agent call would otherwise stall the dependent path forever; every
//! request goes through [`with_timeout`] and comes back as value, timeout or
//! agent error.

use std::future::Future;
use std::time::Duration;

use crate::error::{CoreError, CoreResult};

/// Await `fut`, failing with [`CoreError::AgentTimeout`] after `timeout`.
pub async fn with_timeout<T, F>(request: &str, timeout: Duration, fut: F) -> CoreResult<T>
where
    F: Future<Output = CoreResult<T>>,
{
    match tokio::time::timeout(timeout, fut).await {
        Ok(result) => result,
        Err(_) => Err(CoreError::AgentTimeout {
            request: request.to_string(),
            timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
        }),
    }
}
