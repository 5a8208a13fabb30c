//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::config::CoordinatorConfig;
use crate::coordinator::{CoordinatorHandle, HostsCoordinator};
use crate::error::{CoreError, CoreResult};
use crate::traits::{HostsAgent, NotificationSink};
use crate::types::{
    AgentEvent, HostsEntry, HostsState, LangTable, Notification, Preferences,
};

// ===== MockAgent =====

/// Scriptable agent. Records every request and every emitted event.
pub struct MockAgent {
    state: RwLock<HostsState>,
    pref: RwLock<Preferences>,
    refresh_result: RwLock<CoreResult<Option<Vec<HostsEntry>>>>,
    /// 如果 Some，请求前等待这么久（用于测试超时和迟到的响应）
    delay: RwLock<Option<Duration>>,
    sys_fetches: AtomicUsize,
    requests: RwLock<Vec<String>>,
    events: Mutex<Vec<AgentEvent>>,
}

impl MockAgent {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(HostsState {
                list: Vec::new(),
                sys_hosts: HostsEntry::system("127.0.0.1 localhost"),
            }),
            pref: RwLock::new(Preferences::default()),
            refresh_result: RwLock::new(Ok(None)),
            delay: RwLock::new(None),
            sys_fetches: AtomicUsize::new(0),
            requests: RwLock::new(Vec::new()),
            events: Mutex::new(Vec::new()),
        }
    }

    pub fn with_list(list: Vec<HostsEntry>) -> Self {
        let agent = Self::new();
        agent.state.try_write().unwrap().list = list;
        agent
    }

    pub async fn set_list(&self, list: Vec<HostsEntry>) {
        self.state.write().await.list = list;
    }

    pub async fn set_pref(&self, pref: Preferences) {
        *self.pref.write().await = pref;
    }

    pub async fn set_refresh_result(&self, result: CoreResult<Option<Vec<HostsEntry>>>) {
        *self.refresh_result.write().await = result;
    }

    pub async fn set_delay(&self, delay: Option<Duration>) {
        *self.delay.write().await = delay;
    }

    pub async fn requests(&self) -> Vec<String> {
        self.requests.read().await.clone()
    }

    pub async fn request_count(&self, name: &str) -> usize {
        self.requests
            .read()
            .await
            .iter()
            .filter(|r| r.as_str() == name)
            .count()
    }

    pub fn events(&self) -> Vec<AgentEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn saves(&self) -> Vec<Vec<HostsEntry>> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                AgentEvent::Save(list) => Some(list),
                _ => None,
            })
            .collect()
    }

    async fn record(&self, request: impl Into<String>) {
        self.requests.write().await.push(request.into());
        let delay = *self.delay.read().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl HostsAgent for MockAgent {
    async fn get_hosts(&self) -> CoreResult<HostsState> {
        self.record("getHosts").await;
        Ok(self.state.read().await.clone())
    }

    async fn get_sys_hosts(&self) -> CoreResult<HostsEntry> {
        self.record("getSysHosts").await;
        let n = self.sys_fetches.fetch_add(1, Ordering::SeqCst) + 1;
        let mut sys_hosts = self.state.read().await.sys_hosts.clone();
        sys_hosts.content = format!("# fetch {n}\n{}", sys_hosts.content);
        Ok(sys_hosts)
    }

    async fn get_pref(&self) -> CoreResult<Preferences> {
        self.record("getPref").await;
        Ok(self.pref.read().await.clone())
    }

    async fn get_lang(&self, code: &str) -> CoreResult<LangTable> {
        self.record(format!("getLang:{code}")).await;
        let mut table = serde_json::Map::new();
        table.insert("lang".to_string(), Value::String(code.to_string()));
        Ok(LangTable(table))
    }

    async fn check_need_remote_refresh(
        &self,
        _list: &[HostsEntry],
    ) -> CoreResult<Option<Vec<HostsEntry>>> {
        self.record("checkNeedRemoteRefresh").await;
        self.refresh_result.read().await.clone()
    }

    fn emit(&self, event: AgentEvent) {
        self.events.lock().unwrap().push(event);
    }
}

// ===== RecordingNotificationSink =====

pub struct RecordingNotificationSink {
    shown: Mutex<Vec<Notification>>,
}

impl RecordingNotificationSink {
    pub fn new() -> Self {
        Self {
            shown: Mutex::new(Vec::new()),
        }
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.shown.lock().unwrap().clone()
    }
}

impl NotificationSink for RecordingNotificationSink {
    fn notify(&self, notification: Notification) {
        self.shown.lock().unwrap().push(notification);
    }
}

// ===== 工厂方法 =====

/// 启动一个测试用 coordinator
pub fn spawn_test_coordinator(
    agent: &Arc<MockAgent>,
    config: CoordinatorConfig,
) -> (CoordinatorHandle, Arc<RecordingNotificationSink>) {
    let sink = Arc::new(RecordingNotificationSink::new());
    let (handle, _task) = HostsCoordinator::spawn(agent.clone(), sink.clone(), config)
        .unwrap_or_else(|e: CoreError| panic!("invalid test config: {e}"));
    (handle, sink)
}
