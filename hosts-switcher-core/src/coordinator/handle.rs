//! Cloneable front door to the coordinator task

use tokio::sync::{mpsc, oneshot, watch};

use super::command::Command;
use crate::error::{CoreError, CoreResult};
use crate::types::{AgentSignal, HostsEntry, HostsId, HostsView};

/// Handle used by the rendering layer and the agent bridge.
///
/// Fire-and-forget methods only fail when the coordinator has stopped.
#[derive(Clone)]
pub struct CoordinatorHandle {
    tx: mpsc::UnboundedSender<Command>,
    view: watch::Receiver<HostsView>,
}

impl CoordinatorHandle {
    pub(crate) fn new(tx: mpsc::UnboundedSender<Command>, view: watch::Receiver<HostsView>) -> Self {
        Self { tx, view }
    }

    fn send(&self, command: Command) -> CoreResult<()> {
        self.tx
            .send(command)
            .map_err(|_| CoreError::CoordinatorStopped)
    }

    async fn request<T>(
        &self,
        make: impl FnOnce(oneshot::Sender<CoreResult<T>>) -> Command,
    ) -> CoreResult<T> {
        let (reply, rx) = oneshot::channel();
        self.send(make(reply))?;
        rx.await.map_err(|_| CoreError::CoordinatorStopped)?
    }

    /// Reload list and system hosts from the agent; resolves once adopted.
    pub async fn load(&self) -> CoreResult<()> {
        self.request(|reply| Command::Load(reply)).await
    }

    /// Load the language table for the preferred language.
    pub async fn load_language(&self) -> CoreResult<()> {
        self.request(|reply| Command::LoadLanguage(reply)).await
    }

    /// Make `entry` current. System hosts are always re-fetched.
    pub fn set_current(&self, entry: HostsEntry) -> CoreResult<()> {
        self.send(Command::SetCurrent(entry))
    }

    /// Replace the content of entry `id`.
    pub fn replace_content(&self, id: impl Into<HostsId>, content: impl Into<String>) -> CoreResult<()> {
        self.send(Command::ReplaceContent {
            id: id.into(),
            content: content.into(),
        })
    }

    /// Content editor change on the current entry.
    pub fn set_current_content(&self, content: Option<String>) -> CoreResult<()> {
        self.send(Command::SetCurrentContent(content))
    }

    pub fn just_added(&self, id: impl Into<HostsId>) -> CoreResult<()> {
        self.send(Command::JustAdded(id.into()))
    }

    /// Forward an event received from the agent.
    pub fn dispatch(&self, signal: AgentSignal) -> CoreResult<()> {
        self.send(Command::Signal(signal))
    }

    /// Window-level pointer release.
    pub fn pointer_released(&self) -> CoreResult<()> {
        self.send(Command::PointerReleased)
    }

    /// Window-level Escape key.
    pub fn escape(&self) -> CoreResult<()> {
        self.send(Command::Escape)
    }

    /// Current view, after every command sent before this call was handled.
    pub async fn snapshot(&self) -> CoreResult<HostsView> {
        let (reply, rx) = oneshot::channel();
        self.send(Command::Snapshot(reply))?;
        rx.await.map_err(|_| CoreError::CoordinatorStopped)
    }

    /// Receiver of view snapshots, updated after every change.
    pub fn subscribe(&self) -> watch::Receiver<HostsView> {
        self.view.clone()
    }

    /// Flush any pending save and stop the coordinator.
    pub async fn shutdown(&self) -> CoreResult<()> {
        let (done, rx) = oneshot::channel();
        self.send(Command::Shutdown(done))?;
        rx.await.map_err(|_| CoreError::CoordinatorStopped)
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}
