//! Hosts state coordinator
//!
//! One tokio task owns every piece of mutable session state: the collection,
//! the selection, the drag guard, the save timer and the refresh timer. The
//! rendering layer and the agent bridge talk to it through
//! [`CoordinatorHandle`] and read state from a watch channel of
//! [`HostsView`] snapshots.
//!
//! Agent requests are spawned off the loop and their answers come back as
//! internal messages, so a slow agent never blocks edits or drag signals.
//! Anything that must be decided "at tick time" (drag guard, empty list) is
//! evaluated synchronously inside the loop before the request is spawned.

mod command;
mod handle;

pub use handle::CoordinatorHandle;

use std::ops::ControlFlow;
use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use self::command::{Command, Internal, Reply};
use crate::config::CoordinatorConfig;
use crate::error::CoreResult;
use crate::services::{
    load_language, AgentContext, ContentChange, HostsCollection, InteractionGuard,
    NotificationRelay, RemoteRefreshScheduler, SaveDebouncer, Selection,
};
use crate::traits::{HostsAgent, NotificationSink};
use crate::types::{AgentEvent, AgentSignal, HostsEntry, HostsView, LangTable};

/// Coordinator state, moved into its task by [`HostsCoordinator::spawn`].
pub struct HostsCoordinator {
    ctx: AgentContext,
    config: CoordinatorConfig,
    collection: HostsCollection,
    guard: InteractionGuard,
    debouncer: SaveDebouncer,
    refresh: RemoteRefreshScheduler,
    relay: NotificationRelay,
    lang: LangTable,
    load_epoch: u64,
    selection_epoch: u64,
    commands: mpsc::UnboundedReceiver<Command>,
    internal_tx: mpsc::UnboundedSender<Internal>,
    internal_rx: mpsc::UnboundedReceiver<Internal>,
    view_tx: watch::Sender<HostsView>,
}

impl HostsCoordinator {
    /// Start the coordinator task on the current tokio runtime.
    ///
    /// Nothing is loaded yet; call [`CoordinatorHandle::load`] and
    /// [`CoordinatorHandle::load_language`] to bootstrap.
    pub fn spawn(
        agent: Arc<dyn HostsAgent>,
        sink: Arc<dyn NotificationSink>,
        config: CoordinatorConfig,
    ) -> CoreResult<(CoordinatorHandle, JoinHandle<()>)> {
        config.validate()?;

        let (tx, commands) = mpsc::unbounded_channel();
        let (internal_tx, internal_rx) = mpsc::unbounded_channel();
        let collection = HostsCollection::new();
        let (view_tx, view_rx) = watch::channel(HostsView {
            current: collection.current().clone(),
            sys_hosts: collection.sys_hosts().clone(),
            read_only: true,
            ..HostsView::default()
        });

        let coordinator = Self {
            ctx: AgentContext::new(agent, config.agent_timeout),
            debouncer: SaveDebouncer::new(config.save_debounce, config.max_save_latency),
            refresh: RemoteRefreshScheduler::new(config.remote_refresh_interval),
            relay: NotificationRelay::new(sink, config.notification_auto_dismiss),
            config,
            collection,
            guard: InteractionGuard::new(),
            lang: LangTable::default(),
            load_epoch: 0,
            selection_epoch: 0,
            commands,
            internal_tx,
            internal_rx,
            view_tx,
        };

        let task = tokio::spawn(coordinator.run());
        Ok((CoordinatorHandle::new(tx, view_rx), task))
    }

    async fn run(mut self) {
        let period = self.refresh.interval();
        let mut refresh_tick = tokio::time::interval_at(Instant::now() + period, period);
        refresh_tick.set_missed_tick_behavior(MissedTickBehavior::Delay);

        log::info!("Hosts coordinator started");

        loop {
            let save_deadline = self.debouncer.deadline();

            tokio::select! {
                command = self.commands.recv() => {
                    let Some(command) = command else {
                        // Every handle dropped
                        self.flush_pending_save();
                        break;
                    };
                    if self.handle_command(command).is_break() {
                        break;
                    }
                }
                Some(message) = self.internal_rx.recv() => self.handle_internal(message),
                () = save_timer(save_deadline) => self.fire_save(),
                _ = refresh_tick.tick() => self.check_need_remote_refresh(),
            }

            self.publish_view();
        }

        log::info!("Hosts coordinator stopped");
    }

    // ===== Commands =====

    fn handle_command(&mut self, command: Command) -> ControlFlow<()> {
        match command {
            Command::Load(reply) => self.load(reply),
            Command::LoadLanguage(reply) => self.load_language(reply),
            Command::SetCurrent(entry) => self.set_current(entry),
            Command::ReplaceContent { id, content } => {
                let result = self.collection.replace_content(&id, &content);
                self.after_edit(result);
            }
            Command::SetCurrentContent(content) => {
                let result = self.collection.set_current_content(content.as_deref());
                self.after_edit(result);
            }
            Command::JustAdded(id) => self.collection.mark_just_added(id),
            Command::Signal(signal) => self.handle_signal(signal),
            Command::PointerReleased => {
                self.guard.pointer_released();
                self.ctx.emit(AgentEvent::DragEnd);
            }
            Command::Escape => self.ctx.emit(AgentEvent::Esc),
            Command::Snapshot(reply) => {
                let _ = reply.send(self.view());
            }
            Command::Shutdown(done) => {
                self.flush_pending_save();
                let _ = done.send(());
                return ControlFlow::Break(());
            }
        }
        ControlFlow::Continue(())
    }

    fn handle_signal(&mut self, signal: AgentSignal) {
        match signal {
            AgentSignal::DragStart => self.guard.drag_start(),
            AgentSignal::DragEnd => self.guard.drag_end(),
            AgentSignal::Err(report) => self.relay.relay(report),
            AgentSignal::ListUpdated(list) => self.collection.adopt_list(list),
        }
    }

    fn load(&mut self, reply: Reply<()>) {
        self.load_epoch += 1;
        let epoch = self.load_epoch;
        let ctx = self.ctx.clone();
        let tx = self.internal_tx.clone();
        tokio::spawn(async move {
            let result = ctx.get_hosts().await;
            let _ = tx.send(Internal::HostsLoaded {
                epoch,
                result,
                reply,
            });
        });
    }

    fn load_language(&mut self, reply: Reply<()>) {
        let ctx = self.ctx.clone();
        let default_language = self.config.default_language.clone();
        let tx = self.internal_tx.clone();
        tokio::spawn(async move {
            let result = load_language(&ctx, &default_language).await;
            let _ = tx.send(Internal::LanguageLoaded { result, reply });
        });
    }

    fn set_current(&mut self, entry: HostsEntry) {
        match Selection::of(&entry) {
            Selection::System => {
                self.selection_epoch += 1;
                // System hosts can change outside the app, always fetch a fresh copy
                let selection_epoch = self.selection_epoch;
                let ctx = self.ctx.clone();
                let tx = self.internal_tx.clone();
                tokio::spawn(async move {
                    let result = ctx.get_sys_hosts().await;
                    let _ = tx.send(Internal::SysHostsLoaded {
                        selection_epoch,
                        result,
                    });
                });
            }
            selection => {
                // A stale reference must not cancel a pending system hosts fetch
                if self.collection.select(selection) {
                    self.selection_epoch += 1;
                }
            }
        }
    }

    fn after_edit(&mut self, result: CoreResult<ContentChange>) {
        match result {
            Ok(ContentChange::Updated) => self.debouncer.schedule(Instant::now()),
            Ok(ContentChange::Unchanged | ContentChange::Stale) => {}
            Err(e) => e.log("Content edit refused"),
        }
    }

    // ===== Agent answers =====

    fn handle_internal(&mut self, message: Internal) {
        match message {
            Internal::HostsLoaded {
                epoch,
                result,
                reply,
            } => {
                let outcome = match result {
                    Ok(state) => {
                        if epoch == self.load_epoch {
                            log::info!("Loaded {} hosts entries", state.list.len());
                            self.collection.load(state);
                        } else {
                            log::debug!("Discarding superseded hosts load #{epoch}");
                        }
                        Ok(())
                    }
                    Err(e) => {
                        e.log("Failed to load hosts");
                        Err(e)
                    }
                };
                let _ = reply.send(outcome);
            }
            Internal::SysHostsLoaded {
                selection_epoch,
                result,
            } => match result {
                Ok(sys_hosts) => {
                    self.collection.set_sys_hosts(sys_hosts);
                    if selection_epoch == self.selection_epoch {
                        self.collection.select(Selection::System);
                    } else {
                        log::debug!("Selection changed while fetching system hosts");
                    }
                }
                Err(e) => e.log("Failed to fetch system hosts"),
            },
            Internal::LanguageLoaded { result, reply } => {
                let outcome = match result {
                    Ok(lang) => {
                        self.lang = lang;
                        Ok(())
                    }
                    Err(e) => {
                        e.log("Failed to load language table");
                        Err(e)
                    }
                };
                let _ = reply.send(outcome);
            }
            Internal::RefreshChecked(result) => {
                self.refresh.finish();
                match result {
                    Ok(Some(list)) => {
                        log::info!("Remote refresh updated {} entries", list.len());
                        self.ctx.emit(AgentEvent::ListUpdated(list.clone()));
                        self.collection.adopt_list(list);
                    }
                    Ok(None) => {}
                    // Best effort, retried on the next tick
                    Err(e) => log::warn!("Remote refresh check failed: {e}"),
                }
            }
        }
    }

    // ===== Timers =====

    fn fire_save(&mut self) {
        if self.debouncer.fire(Instant::now()) {
            self.emit_save();
        }
    }

    fn flush_pending_save(&mut self) {
        if self.debouncer.take() {
            log::info!("Flushing pending save");
            self.emit_save();
        }
    }

    fn emit_save(&self) {
        self.ctx
            .emit(AgentEvent::Save(self.collection.list().to_vec()));
    }

    fn check_need_remote_refresh(&mut self) {
        if let Err(skip) = self.refresh.begin(&self.guard, self.collection.list()) {
            log::debug!("Remote refresh check skipped: {skip:?}");
            return;
        }

        log::debug!("checkNeedRemoteRefresh");
        let list = self.collection.list().to_vec();
        let ctx = self.ctx.clone();
        let tx = self.internal_tx.clone();
        tokio::spawn(async move {
            let result = ctx.check_need_remote_refresh(&list).await;
            let _ = tx.send(Internal::RefreshChecked(result));
        });
    }

    // ===== View =====

    fn view(&self) -> HostsView {
        HostsView {
            list: self.collection.list().to_vec(),
            sys_hosts: self.collection.sys_hosts().clone(),
            current: self.collection.current().clone(),
            read_only: self.collection.current_is_read_only(),
            lang: self.lang.clone(),
            just_added_id: self.collection.just_added_id().cloned(),
            is_dragging: self.guard.is_dragging(),
        }
    }

    fn publish_view(&self) {
        let view = self.view();
        self.view_tx.send_if_modified(|current| {
            if *current == view {
                false
            } else {
                *current = view;
                true
            }
        });
    }
}

/// Sleep until `deadline`, or forever when there is none.
async fn save_timer(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
