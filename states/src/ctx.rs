use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use flume::{Receiver, Sender};
use log::{debug, error, warn};
use tokio_util::sync::CancellationToken;

use crate::updater::Update;
use crate::{
    Command, CommandSnapshot, Compute, LatestOnlyUpdater, State, StateError, TaskHandle, TaskId,
    Updater,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SlotKind {
    State,
    Compute,
}

impl SlotKind {
    fn name(self) -> &'static str {
        match self {
            Self::State => "state",
            Self::Compute => "compute",
        }
    }
}

struct Slot {
    kind: SlotKind,
    type_name: &'static str,
    value: Box<dyn Any + Send>,
}

struct CommandEntry {
    name: &'static str,
    lane: TypeId,
    command: Arc<dyn Command>,
    /// Generation of the most recent dispatch in the lane; shared with every
    /// command of the lane and every updater handed out.
    latest: Arc<AtomicU64>,
}

/// Owner of every state, compute and command of the application.
pub struct StateCtx {
    slots: HashMap<TypeId, Slot>,
    commands: HashMap<TypeId, CommandEntry>,
    command_queue: Vec<TypeId>,
    /// Generation counters keyed by [`Command::lane`].
    lanes: HashMap<TypeId, Arc<AtomicU64>>,
    /// Latest task of each lane.
    running: HashMap<TypeId, TaskHandle>,

    send: Sender<Update>,
    recv: Receiver<Update>,

    #[cfg(not(target_arch = "wasm32"))]
    tasks: tokio::task::JoinSet<()>,
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StateCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&str> = self.slots.values().map(|slot| slot.type_name).collect();
        names.sort_unstable();
        let mut commands: Vec<&str> = self.commands.values().map(|entry| entry.name).collect();
        commands.sort_unstable();

        f.debug_struct("StateCtx")
            .field("slots", &names)
            .field("commands", &commands)
            .field("queued", &self.command_queue.len())
            .field("tasks", &self.task_count())
            .finish()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();

        Self {
            slots: HashMap::new(),
            commands: HashMap::new(),
            command_queue: Vec::new(),
            lanes: HashMap::new(),
            running: HashMap::new(),
            send,
            recv,
            #[cfg(not(target_arch = "wasm32"))]
            tasks: tokio::task::JoinSet::new(),
        }
    }

    pub fn add_state<T: State>(&mut self, state: T) {
        self.insert(SlotKind::State, state);
    }

    pub fn record_compute<T: Compute>(&mut self, compute: T) {
        self.insert(SlotKind::Compute, compute);
    }

    /// Commands sharing a [`Command::lane`] share one generation counter, so a
    /// dispatch of any of them supersedes the others.
    pub fn record_command<C: Command>(&mut self, command: C) {
        let lane = command.lane();
        let latest = Arc::clone(self.lanes.entry(lane).or_default());
        self.commands.insert(
            TypeId::of::<C>(),
            CommandEntry {
                name: type_name::<C>(),
                lane,
                command: Arc::new(command),
                latest,
            },
        );
    }

    fn insert<T: State>(&mut self, kind: SlotKind, value: T) {
        let slot = Slot {
            kind,
            type_name: type_name::<T>(),
            value: Box::new(value),
        };
        if self.slots.insert(TypeId::of::<T>(), slot).is_some() {
            debug!("Replaced registered {} {}", kind.name(), type_name::<T>());
        }
    }

    fn slot<T: State>(&self, expected: SlotKind) -> Result<&Slot, StateError> {
        let slot = self
            .slots
            .get(&TypeId::of::<T>())
            .ok_or_else(|| StateError::not_registered(expected.name(), type_name::<T>()))?;
        if slot.kind != expected {
            return Err(StateError::wrong_kind(
                slot.type_name,
                expected.name(),
                slot.kind.name(),
            ));
        }
        Ok(slot)
    }

    fn downcast<T: State>(slot: &Slot, kind: SlotKind) -> Result<&T, StateError> {
        slot.value
            .downcast_ref::<T>()
            .ok_or_else(|| StateError::not_registered(kind.name(), type_name::<T>()))
    }

    pub fn try_state<T: State>(&self) -> Result<&T, StateError> {
        Self::downcast::<T>(self.slot::<T>(SlotKind::State)?, SlotKind::State)
    }

    pub fn try_state_mut<T: State>(&mut self) -> Result<&mut T, StateError> {
        let slot = self
            .slots
            .get_mut(&TypeId::of::<T>())
            .ok_or_else(|| StateError::not_registered("state", type_name::<T>()))?;
        if slot.kind != SlotKind::State {
            return Err(StateError::wrong_kind(slot.type_name, "state", slot.kind.name()));
        }
        slot.value
            .downcast_mut::<T>()
            .ok_or_else(|| StateError::not_registered("state", type_name::<T>()))
    }

    /// # Panics
    /// Panics when `T` was never registered with `add_state`.
    pub fn state<T: State>(&self) -> &T {
        self.try_state::<T>().unwrap_or_else(|err| panic!("{err}"))
    }

    /// # Panics
    /// Panics when `T` was never registered with `add_state`.
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        self.try_state_mut::<T>().unwrap_or_else(|err| panic!("{err}"))
    }

    pub fn update<T: State>(&mut self, f: impl FnOnce(&mut T)) {
        f(self.state_mut::<T>());
    }

    pub fn try_compute<T: Compute>(&self) -> Result<&T, StateError> {
        Self::downcast::<T>(self.slot::<T>(SlotKind::Compute)?, SlotKind::Compute)
    }

    /// # Panics
    /// Panics when `T` was never registered with `record_compute`.
    pub fn compute<T: Compute>(&self) -> &T {
        self.try_compute::<T>().unwrap_or_else(|err| panic!("{err}"))
    }

    pub fn cached<T: Compute>(&self) -> Option<&T> {
        self.try_compute::<T>().ok()
    }

    pub fn updater(&self) -> Updater {
        Updater::new(self.send.clone())
    }

    /// Queue a command; it starts on the next `flush_commands`.
    pub fn enqueue_command<C: Command>(&mut self) {
        self.command_queue.push(TypeId::of::<C>());
    }

    pub fn is_command_queued<C: Command>(&self) -> bool {
        self.command_queue.contains(&TypeId::of::<C>())
    }

    /// Start a command right away.
    pub fn dispatch<C: Command>(&mut self) {
        self.spawn_command(TypeId::of::<C>());
    }

    pub fn flush_commands(&mut self) {
        let queued = std::mem::take(&mut self.command_queue);
        for id in queued {
            self.spawn_command(id);
        }
    }

    fn spawn_command(&mut self, id: TypeId) {
        let Some(entry) = self.commands.get(&id) else {
            error!("Dispatched a command that was never recorded: {id:?}");
            return;
        };
        let name = entry.name;
        let lane = entry.lane;
        let command = Arc::clone(&entry.command);
        let latest = Arc::clone(&entry.latest);

        let generation = latest.fetch_add(1, Ordering::AcqRel) + 1;
        let token = CancellationToken::new();
        let task_id = TaskId::new(lane, generation);
        if let Some(previous) = self
            .running
            .insert(lane, TaskHandle::new(task_id, token.clone()))
            && previous.id().is_superseded_by(&task_id)
            && !previous.is_cancelled()
        {
            debug!(
                "{name}: generation {} superseded by {generation}",
                previous.id().generation()
            );
            previous.cancel();
        }

        let updater = LatestOnlyUpdater::new(self.updater(), lane, generation, latest);
        let future = command.run(CommandSnapshot::new(self), updater, token.clone());

        self.spawn(async move {
            tokio::select! {
                biased;
                () = token.cancelled() => debug!("{name}: generation {generation} cancelled"),
                () = future => {}
            }
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn spawn(&mut self, task: impl Future<Output = ()> + Send + 'static) {
        self.tasks.spawn_on(task, &runtime_handle());
    }

    #[cfg(target_arch = "wasm32")]
    fn spawn(&mut self, task: impl Future<Output = ()> + 'static) {
        wasm_bindgen_futures::spawn_local(task);
    }

    /// Apply every compute published since the last call.
    ///
    /// Values stamped with a generation older than their lane's latest
    /// dispatch are discarded here, even if they were sent before the newer
    /// dispatch started.
    pub fn sync_computes(&mut self) {
        while let Ok(update) = self.recv.try_recv() {
            self.apply(update);
        }

        #[cfg(not(target_arch = "wasm32"))]
        while self.tasks.try_join_next().is_some() {}
    }

    fn apply(&mut self, update: Update) {
        if let Some(stamp) = update.stamp
            && let Some(latest) = self.lanes.get(&stamp.lane)
            && latest.load(Ordering::Acquire) != stamp.generation
        {
            debug!(
                "Discarding stale {} from generation {}",
                update.type_name, stamp.generation
            );
            return;
        }

        match self.slots.get_mut(&update.type_id) {
            Some(slot) if slot.kind == SlotKind::Compute => slot.value = update.value,
            Some(slot) => warn!(
                "Ignoring update for {}: registered as {}",
                update.type_name,
                slot.kind.name()
            ),
            None => warn!("Ignoring update for unregistered compute {}", update.type_name),
        }
    }

    /// Number of spawned command tasks not yet reaped.
    pub fn task_count(&self) -> usize {
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.tasks.len()
        }

        #[cfg(target_arch = "wasm32")]
        {
            0
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn task_set_mut(&mut self) -> &mut tokio::task::JoinSet<()> {
        &mut self.tasks
    }

    /// Cancel every running command and wait for the tasks to finish.
    #[cfg(not(target_arch = "wasm32"))]
    pub async fn shutdown(&mut self) {
        for handle in self.running.values() {
            handle.cancel();
        }
        self.tasks.shutdown().await;
        self.command_queue.clear();
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_handle() -> tokio::runtime::Handle {
    tokio::runtime::Handle::try_current().unwrap_or_else(|_| background_runtime().handle().clone())
}

/// Runtime used when commands are dispatched outside of any Tokio context,
/// which is the case for the eframe render loop.
#[cfg(not(target_arch = "wasm32"))]
fn background_runtime() -> &'static tokio::runtime::Runtime {
    static RUNTIME: std::sync::OnceLock<tokio::runtime::Runtime> = std::sync::OnceLock::new();
    RUNTIME.get_or_init(|| {
        tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("quire-commands")
            .enable_all()
            .build()
            .expect("failed to start the command runtime")
    })
}
