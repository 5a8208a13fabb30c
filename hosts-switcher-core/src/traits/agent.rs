//! Background agent abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{AgentEvent, HostsEntry, HostsState, LangTable, Preferences};

/// Background agent Trait
///
/// The agent owns disk and system I/O, localization bundles and remote-source
/// polling. The coordinator only sees this narrow request surface plus the
/// fire-and-forget [`AgentEvent`] sink.
///
/// Every request is a suspension point. The coordinator wraps each call in a
/// timeout, so implementations do not need their own.
#[async_trait]
pub trait HostsAgent: Send + Sync {
    /// Fetch the full state (`getHosts`)
    async fn get_hosts(&self) -> CoreResult<HostsState>;

    /// Fetch a fresh system hosts entry (`getSysHosts`)
    async fn get_sys_hosts(&self) -> CoreResult<HostsEntry>;

    /// Fetch preferences (`getPref`)
    async fn get_pref(&self) -> CoreResult<Preferences>;

    /// Fetch a localized string table (`getLang`)
    ///
    /// # Arguments
    /// * `code` - Language code, e.g. `en`
    async fn get_lang(&self, code: &str) -> CoreResult<LangTable>;

    /// Ask whether any remote entry needs refreshing (`checkNeedRemoteRefresh`)
    ///
    /// Returns `None` when nothing changed.
    ///
    /// # Arguments
    /// * `list` - Current hosts list
    async fn check_need_remote_refresh(
        &self,
        list: &[HostsEntry],
    ) -> CoreResult<Option<Vec<HostsEntry>>>;

    /// Publish an event to the agent
    fn emit(&self, event: AgentEvent);
}
