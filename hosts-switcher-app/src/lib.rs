//! Platform-agnostic application bootstrap for Hosts Switcher.
//!
//! Provides `AppState` (coordinator container), `AppStateBuilder` (adapter
//! injection) and `AppConfig` (on-disk timing configuration).

pub mod adapters;
pub mod config;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use hosts_switcher_core::error::{CoreError, CoreResult};
use hosts_switcher_core::traits::{HostsAgent, NotificationSink};
use hosts_switcher_core::{CoordinatorConfig, CoordinatorHandle, HostsCoordinator};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

pub use adapters::{ChannelNotificationSink, LogNotificationSink};
pub use config::AppConfig;

/// Platform-agnostic application state.
///
/// Every frontend constructs this once at startup via `AppStateBuilder`.
pub struct AppState {
    /// Handle to the running coordinator
    pub coordinator: CoordinatorHandle,
    /// Configuration the coordinator was started with
    pub config: CoordinatorConfig,
    /// Whether the startup sequence has completed
    pub startup_completed: AtomicBool,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl AppState {
    /// Run the full startup sequence: hosts load → language load.
    ///
    /// A failed hosts load is returned; a failed language load only falls back
    /// to raw keys and is logged.
    pub async fn run_startup(&self) -> CoreResult<()> {
        let result = self.run_hosts_load().await;
        self.run_language_load().await;
        self.startup_completed.store(true, Ordering::SeqCst);
        result
    }

    /// Load the hosts list and system hosts from the agent.
    pub async fn run_hosts_load(&self) -> CoreResult<()> {
        self.coordinator.load().await?;
        let view = self.coordinator.snapshot().await?;
        log::info!("Startup load complete: {} hosts entries", view.list.len());
        Ok(())
    }

    /// Load the language table. Failures are logged, not returned.
    pub async fn run_language_load(&self) {
        match self.coordinator.load_language().await {
            Ok(()) => log::info!("Language table loaded"),
            Err(e) => e.log("Failed to load language table"),
        }
    }

    /// Flush any pending save and wait for the coordinator task to exit.
    pub async fn shutdown(&self) -> CoreResult<()> {
        match self.coordinator.shutdown().await {
            Ok(()) | Err(CoreError::CoordinatorStopped) => {}
            Err(e) => return Err(e),
        }

        if let Some(task) = self.task.lock().await.take() {
            if let Err(e) = task.await {
                log::error!("Coordinator task ended abnormally: {e}");
                return Err(CoreError::CoordinatorStopped);
            }
        }
        log::info!("Application state shut down");
        Ok(())
    }
}

/// Builder for constructing `AppState` with platform-specific adapters.
///
/// # Required adapters
/// - `agent`: the privileged process owning the hosts data
///
/// # Optional
/// - `notification_sink`: defaults to `LogNotificationSink`
/// - `config`: defaults to `CoordinatorConfig::default()`
pub struct AppStateBuilder {
    agent: Option<Arc<dyn HostsAgent>>,
    notification_sink: Option<Arc<dyn NotificationSink>>,
    config: Option<CoordinatorConfig>,
}

impl AppStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            agent: None,
            notification_sink: None,
            config: None,
        }
    }

    #[must_use]
    pub fn agent(mut self, agent: Arc<dyn HostsAgent>) -> Self {
        self.agent = Some(agent);
        self
    }

    #[must_use]
    pub fn notification_sink(mut self, sink: Arc<dyn NotificationSink>) -> Self {
        self.notification_sink = Some(sink);
        self
    }

    #[must_use]
    pub fn config(mut self, config: CoordinatorConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the `AppState` and start the coordinator.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    /// Returns `CoreError::ValidationError` if the agent is missing or the
    /// configuration is invalid.
    pub fn build(self) -> CoreResult<AppState> {
        let agent = self
            .agent
            .ok_or_else(|| CoreError::ValidationError("agent is required".to_string()))?;
        let notification_sink = self
            .notification_sink
            .unwrap_or_else(|| Arc::new(LogNotificationSink::new()));
        let config = self.config.unwrap_or_default();

        let (coordinator, task) =
            HostsCoordinator::spawn(agent, notification_sink, config.clone())?;

        Ok(AppState {
            coordinator,
            config,
            startup_completed: AtomicBool::new(false),
            task: Mutex::new(Some(task)),
        })
    }
}

impl Default for AppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
