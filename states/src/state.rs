use std::any::{Any, TypeId, type_name};

use flume::Sender;
use log::warn;

use crate::TaskId;

/// A value stored in [`StateCtx`](crate::StateCtx), keyed by its type.
///
/// States must be `Clone` so commands can work on a snapshot without holding
/// a borrow of the context across an await point.
pub trait State: Any + Clone + Send {}

pub(crate) type Mutation = Box<dyn FnOnce(&mut (dyn Any + Send)) + Send>;

pub(crate) struct Message {
    pub(crate) origin: Option<TaskId>,
    pub(crate) target: TypeId,
    pub(crate) target_name: &'static str,
    pub(crate) mutation: Mutation,
}

/// Write handle for states, usable from any thread.
///
/// Updates are queued and only become visible after the owning context runs
/// [`StateCtx::sync`](crate::StateCtx::sync).
#[derive(Clone)]
pub struct Updater {
    send: Sender<Message>,
    origin: Option<TaskId>,
}

impl Updater {
    pub(crate) fn new(send: Sender<Message>, origin: Option<TaskId>) -> Self {
        Self { send, origin }
    }

    /// Replaces the whole state.
    pub fn set<T: State>(&self, state: T) {
        self.update(move |current: &mut T| *current = state);
    }

    /// Applies `f` to the current value of `T` during the next sync.
    ///
    /// Prefer this over [`Updater::set`] when other fields of the state may
    /// have changed since the command was dispatched.
    pub fn update<T: State>(&self, f: impl FnOnce(&mut T) + Send + 'static) {
        let mutation: Mutation = Box::new(move |any| {
            if let Some(state) = any.downcast_mut::<T>() {
                f(state);
            }
        });
        let message = Message {
            origin: self.origin,
            target: TypeId::of::<T>(),
            target_name: type_name::<T>(),
            mutation,
        };
        if self.send.send(message).is_err() {
            warn!(
                "State context dropped, discarding update for {}",
                type_name::<T>()
            );
        }
    }
}

impl std::fmt::Debug for Updater {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Updater")
            .field("origin", &self.origin)
            .finish_non_exhaustive()
    }
}
