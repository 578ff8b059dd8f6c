//! State runtime shared by the business and UI crates.
//!
//! Everything the application knows lives in a [`StateCtx`]:
//! - [`State`]: plain values the UI (or a test) may read and mutate directly.
//! - [`Compute`]: cached results that only change through an [`Updater`].
//! - [`Command`]: explicitly dispatched async side effects that publish computes.
//!
//! Commands of the same type supersede each other: a new dispatch cancels the
//! previous task and bumps a generation counter, and results carrying an older
//! generation are dropped before they reach the context.

mod command;
mod ctx;
mod error;
mod snapshot;
mod state;
mod task;
mod updater;

pub use command::{Command, CommandFuture};
pub use ctx::StateCtx;
pub use error::StateError;
pub use snapshot::CommandSnapshot;
pub use state::{Compute, State};
pub use task::{TaskHandle, TaskId};
pub use tokio_util::sync::CancellationToken;
pub use updater::{LatestOnlyUpdater, Updater};
