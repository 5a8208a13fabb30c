//! 业务逻辑服务层

mod collection;
mod interaction_guard;
mod localization;
mod notification_relay;
mod refresh_scheduler;
mod save_debouncer;
mod selection;

pub use collection::{ContentChange, HostsCollection};
pub use interaction_guard::InteractionGuard;
pub use localization::load_language;
pub use notification_relay::NotificationRelay;
pub use refresh_scheduler::{RefreshSkip, RemoteRefreshScheduler};
pub use save_debouncer::SaveDebouncer;
pub use selection::{is_read_only, Selection};

use std::sync::Arc;
use std::time::Duration;

use crate::error::CoreResult;
use crate::traits::HostsAgent;
use crate::types::{AgentEvent, HostsEntry, HostsState, LangTable, Preferences};
use crate::utils::with_timeout;

/// 服务上下文 - 持有 Agent 连接
///
/// 所有 Agent 请求都经过这里，统一加上超时。可廉价克隆，交给后台任务使用。
#[derive(Clone)]
pub struct AgentContext {
    agent: Arc<dyn HostsAgent>,
    timeout: Duration,
}

impl AgentContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(agent: Arc<dyn HostsAgent>, timeout: Duration) -> Self {
        Self { agent, timeout }
    }

    pub async fn get_hosts(&self) -> CoreResult<HostsState> {
        with_timeout("getHosts", self.timeout, self.agent.get_hosts()).await
    }

    pub async fn get_sys_hosts(&self) -> CoreResult<HostsEntry> {
        with_timeout("getSysHosts", self.timeout, self.agent.get_sys_hosts()).await
    }

    pub async fn get_pref(&self) -> CoreResult<Preferences> {
        with_timeout("getPref", self.timeout, self.agent.get_pref()).await
    }

    pub async fn get_lang(&self, code: &str) -> CoreResult<LangTable> {
        with_timeout("getLang", self.timeout, self.agent.get_lang(code)).await
    }

    pub async fn check_need_remote_refresh(
        &self,
        list: &[HostsEntry],
    ) -> CoreResult<Option<Vec<HostsEntry>>> {
        with_timeout(
            "checkNeedRemoteRefresh",
            self.timeout,
            self.agent.check_need_remote_refresh(list),
        )
        .await
    }

    /// 发送事件（不等待）
    pub fn emit(&self, event: AgentEvent) {
        log::debug!("emit {}", event.name());
        self.agent.emit(event);
    }
}
