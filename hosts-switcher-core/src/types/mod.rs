//! 类型定义模块

mod event;
mod hosts;
mod notification;
mod preference;
mod view;

pub use event::{AgentEvent, AgentSignal};
pub use hosts::{HostsEntry, HostsId, HostsState, HostsWhere};
pub use notification::{AgentErrorReport, Notification, NotificationLevel, NotificationPosition};
pub use preference::{LangTable, Preferences};
pub use view::HostsView;
