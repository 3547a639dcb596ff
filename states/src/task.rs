//! Task identity and cancellation for dispatched commands.
//!
//! Every dispatch gets a [`TaskId`] made of the command's task key and a
//! generation drawn from a per-context counter. A newer generation for the same
//! key supersedes older ones: the older task is cancelled through its
//! [`TaskHandle`], and updates it already queued are dropped during sync.

use tokio_util::sync::CancellationToken;
use ustr::Ustr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId {
    key: Ustr,
    generation: u64,
}

impl TaskId {
    pub fn new(key: Ustr, generation: u64) -> Self {
        Self { key, generation }
    }

    pub fn key(&self) -> Ustr {
        self.key
    }

    /// Higher values were dispatched later.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True when `other` has the same key and a newer generation.
    pub fn is_superseded_by(&self, other: &Self) -> bool {
        self.key == other.key && other.generation > self.generation
    }
}

/// Handle to a spawned command with cooperative cancellation.
///
/// Cloned handles share the same token, so cancelling one cancels all.
#[derive(Debug, Clone)]
pub struct TaskHandle {
    id: TaskId,
    cancel_token: CancellationToken,
}

impl TaskHandle {
    pub fn new(id: TaskId, cancel_token: CancellationToken) -> Self {
        Self { id, cancel_token }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Requests cancellation. The task stops at its next await point.
    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}
