//! State container runtime shared by the UI and the CLI.
//!
//! A [`StateCtx`] owns one value per [`State`] type. Async work is expressed as
//! a [`Command`], spawned on Tokio, which reads a [`CommandSnapshot`] taken at
//! dispatch time and writes back through an [`Updater`]. Writes are queued on a
//! `flume` channel and applied on the owning thread by [`StateCtx::sync`].

mod command;
mod ctx;
mod error;
mod snapshot;
mod state;
mod task;

pub use command::{Command, CommandFuture};
pub use ctx::StateCtx;
pub use error::Error;
pub use snapshot::CommandSnapshot;
pub use state::{State, Updater};
pub use task::{TaskHandle, TaskId};
