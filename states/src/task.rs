//! Identifiers and cancellation handles for command tasks.
//!
//! Each dispatch of a command gets a [`TaskId`] made of the command's lane
//! and a per-lane generation. The context keeps one [`TaskHandle`] per lane;
//! dispatching again cancels the stored handle before the new task starts.

use std::any::TypeId;

use tokio_util::sync::CancellationToken;

/// Unique identifier for a spawned command task.
///
/// Two ids with the same `lane` belong to the same supersede group; the one
/// with the higher generation was dispatched later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId {
    lane: TypeId,
    generation: u64,
}

impl TaskId {
    pub fn new(lane: TypeId, generation: u64) -> Self {
        Self { lane, generation }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True when `other` is a later dispatch in the same lane.
    pub fn is_superseded_by(&self, other: &TaskId) -> bool {
        self.lane == other.lane && other.generation > self.generation
    }
}

/// A running command task and the token used to cancel it cooperatively.
///
/// Cancelling does not abort the future by force; the context races the
/// command future against `cancelled()` so a cancelled run stops at its next
/// await point.
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

    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}
