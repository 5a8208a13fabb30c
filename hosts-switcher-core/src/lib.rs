//! Hosts Switcher Core Library
//!
//! State synchronization between a hosts-file editor UI and the privileged
//! agent that owns the hosts data, including:
//! - The hosts collection and the current selection
//! - Debounced persistence of edits
//! - Periodic remote refresh checks, suppressed while dragging
//! - Agent error notifications and language bootstrap
//!
//! The agent is abstracted behind [`HostsAgent`], so the same coordinator can
//! sit behind a desktop bridge, a test double, or any other transport.

pub mod config;
pub mod coordinator;
pub mod error;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use config::CoordinatorConfig;
pub use coordinator::{CoordinatorHandle, HostsCoordinator};
pub use error::{CoreError, CoreResult};
pub use services::AgentContext;
pub use traits::{HostsAgent, NotificationSink};
