use std::future::Future;
use std::pin::Pin;

use ustr::Ustr;

use crate::{CommandSnapshot, Updater};

pub type CommandFuture = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// An explicitly dispatched unit of async work, such as a network request.
///
/// Commands never run implicitly. The UI or CLI calls
/// [`StateCtx::dispatch`](crate::StateCtx::dispatch), which spawns the returned
/// future on Tokio.
pub trait Command: Send + 'static {
    /// Commands sharing a key supersede each other: dispatching one cancels the
    /// in-flight task of the previous one and discards its pending updates.
    fn task_key(&self) -> Ustr;

    fn run(&self, snapshot: CommandSnapshot, updater: Updater) -> CommandFuture;
}
