//! Messages consumed by the coordinator loop

use tokio::sync::oneshot;

use crate::error::CoreResult;
use crate::types::{AgentSignal, HostsEntry, HostsId, HostsState, HostsView, LangTable};

pub(crate) type Reply<T> = oneshot::Sender<CoreResult<T>>;

/// Requests from the rendering layer and the agent event stream
#[derive(Debug)]
pub(crate) enum Command {
    /// Fetch the full state from the agent
    Load(Reply<()>),
    /// `getPref` then `getLang`
    LoadLanguage(Reply<()>),
    SetCurrent(HostsEntry),
    ReplaceContent { id: HostsId, content: String },
    SetCurrentContent(Option<String>),
    JustAdded(HostsId),
    Signal(AgentSignal),
    PointerReleased,
    Escape,
    Snapshot(oneshot::Sender<HostsView>),
    Shutdown(oneshot::Sender<()>),
}

/// Agent answers, delivered back into the loop
#[derive(Debug)]
pub(crate) enum Internal {
    HostsLoaded {
        epoch: u64,
        result: CoreResult<HostsState>,
        reply: Reply<()>,
    },
    SysHostsLoaded {
        selection_epoch: u64,
        result: CoreResult<HostsEntry>,
    },
    LanguageLoaded {
        result: CoreResult<LangTable>,
        reply: Reply<()>,
    },
    RefreshChecked(CoreResult<Option<Vec<HostsEntry>>>),
}
