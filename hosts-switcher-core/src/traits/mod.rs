//! Collaborator abstraction trait definition

mod agent;
mod notification_sink;

pub use agent::HostsAgent;
pub use notification_sink::NotificationSink;
