use std::any::{Any, TypeId, type_name};
use std::collections::{BTreeMap, HashMap};

use flume::{Receiver, Sender};
use log::{debug, error, warn};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use ustr::Ustr;

use crate::state::Message;
use crate::{Command, CommandSnapshot, State, TaskHandle, TaskId, Updater};

type SnapshotFn = fn(&(dyn Any + Send)) -> Box<dyn Any + Send>;

struct Slot {
    value: Box<dyn Any + Send>,
    snapshot: SnapshotFn,
    name: &'static str,
}

fn clone_boxed<T: State>(any: &(dyn Any + Send)) -> Box<dyn Any + Send> {
    match any.downcast_ref::<T>() {
        Some(state) => Box::new(state.clone()),
        // Slots are keyed by `TypeId::of::<T>()`, so the downcast cannot miss.
        None => Box::new(()),
    }
}

/// Owner of every state of a screen (or of a CLI run) plus the commands
/// spawned against them.
///
/// Must be used from inside a Tokio runtime, since [`StateCtx::dispatch`]
/// spawns onto the current one.
pub struct StateCtx {
    storage: BTreeMap<TypeId, Slot>,
    send: Sender<Message>,
    recv: Receiver<Message>,
    tasks: JoinSet<()>,
    in_flight: HashMap<Ustr, TaskHandle>,
    generation: u64,
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StateCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.storage.values().map(|slot| slot.name).collect();
        f.debug_struct("StateCtx")
            .field("states", &names)
            .field("tasks", &self.tasks.len())
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();
        Self {
            storage: BTreeMap::new(),
            send,
            recv,
            tasks: JoinSet::new(),
            in_flight: HashMap::new(),
            generation: 0,
        }
    }

    /// Registers `state`, replacing any previous value of the same type.
    pub fn add_state<T: State>(&mut self, state: T) {
        self.storage.insert(
            TypeId::of::<T>(),
            Slot {
                value: Box::new(state),
                snapshot: clone_boxed::<T>,
                name: type_name::<T>(),
            },
        );
    }

    pub fn state<T: State>(&self) -> Option<&T> {
        self.storage
            .get(&TypeId::of::<T>())
            .and_then(|slot| slot.value.downcast_ref::<T>())
    }

    pub fn state_mut<T: State>(&mut self) -> Option<&mut T> {
        self.storage
            .get_mut(&TypeId::of::<T>())
            .and_then(|slot| slot.value.downcast_mut::<T>())
    }

    /// Updater not tied to any task; its writes are never considered stale.
    pub fn updater(&self) -> Updater {
        Updater::new(self.send.clone(), None)
    }

    /// Clones every registered state.
    pub fn snapshot(&self) -> CommandSnapshot {
        let mut snapshot = CommandSnapshot::new();
        for (id, slot) in &self.storage {
            snapshot.insert_boxed(*id, (slot.snapshot)(&*slot.value));
        }
        snapshot
    }

    /// Spawns `command` on the current Tokio runtime.
    ///
    /// Any in-flight task with the same key is cancelled, and its queued
    /// updates will be dropped by the next [`StateCtx::sync`].
    pub fn dispatch<C: Command>(&mut self, command: C) -> TaskId {
        self.generation += 1;
        let key = command.task_key();
        let id = TaskId::new(key, self.generation);
        let token = CancellationToken::new();

        if let Some(previous) = self
            .in_flight
            .insert(key, TaskHandle::new(id, token.clone()))
        {
            debug!(
                "Task {key}#{} superseded by #{}",
                previous.id().generation(),
                id.generation()
            );
            previous.cancel();
        }

        let updater = Updater::new(self.send.clone(), Some(id));
        let future = command.run(self.snapshot(), updater);

        debug!("Dispatch {key}#{}", id.generation());
        self.tasks.spawn(async move {
            tokio::select! {
                biased;
                () = token.cancelled() => {
                    debug!("Task {}#{} cancelled", id.key(), id.generation());
                }
                () = future => {}
            }
        });

        id
    }

    /// Applies queued updates and reaps finished tasks.
    ///
    /// Returns the number of updates applied.
    pub fn sync(&mut self) -> usize {
        while let Some(joined) = self.tasks.try_join_next() {
            Self::report_join(joined);
        }

        let mut applied = 0;
        while let Ok(message) = self.recv.try_recv() {
            if let Some(origin) = message.origin
                && self.is_stale(origin)
            {
                debug!(
                    "Dropping update for {} from superseded task {}#{}",
                    message.target_name,
                    origin.key(),
                    origin.generation()
                );
                continue;
            }

            match self.storage.get_mut(&message.target) {
                Some(slot) => {
                    (message.mutation)(&mut *slot.value);
                    applied += 1;
                }
                None => warn!(
                    "Update for unregistered state {} ignored",
                    message.target_name
                ),
            }
        }
        applied
    }

    fn is_stale(&self, origin: TaskId) -> bool {
        self.in_flight
            .get(&origin.key())
            .is_some_and(|latest| origin.is_superseded_by(&latest.id()))
    }

    fn report_join(joined: Result<(), tokio::task::JoinError>) {
        if let Err(err) = joined
            && !err.is_cancelled()
        {
            error!("Command task failed: {err}");
        }
    }

    /// Number of spawned tasks not yet reaped.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn has_pending_tasks(&self) -> bool {
        !self.tasks.is_empty()
    }

    /// Waits for every spawned task, syncing after each one finishes.
    pub async fn settle(&mut self) {
        while let Some(joined) = self.tasks.join_next().await {
            Self::report_join(joined);
            self.sync();
        }
        self.sync();
    }

    /// Cancels all in-flight tasks and waits for them to stop.
    pub async fn shutdown(&mut self) {
        for handle in self.in_flight.values() {
            handle.cancel();
        }
        self.tasks.abort_all();
        while self.tasks.join_next().await.is_some() {}
    }
}
