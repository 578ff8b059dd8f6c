use std::any::TypeId;
use std::future::Future;
use std::pin::Pin;

use tokio_util::sync::CancellationToken;

use crate::{CommandSnapshot, LatestOnlyUpdater};

/// Future returned by [`Command::run`].
///
/// It must be `Send + 'static`: everything the command needs is copied out of
/// the snapshot before the future is built.
pub type CommandFuture = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// An explicitly dispatched side effect.
///
/// Commands never run implicitly. The UI (or a test) calls
/// `StateCtx::enqueue_command::<C>()` / `dispatch::<C>()`; the context then
/// calls `run` with a read-only snapshot, an updater stamped with this
/// dispatch's generation, and a token that is cancelled when a newer dispatch
/// in the same [`lane`](Command::lane) supersedes this one.
pub trait Command: Send + Sync + 'static {
    fn run(
        &self,
        snap: CommandSnapshot<'_>,
        updater: LatestOnlyUpdater,
        cancel: CancellationToken,
    ) -> CommandFuture;

    /// Supersede group of this command. Defaults to the command's own type.
    ///
    /// Commands publishing the same compute should share a lane, otherwise a
    /// slow run of one can overwrite the result of another dispatched later.
    fn lane(&self) -> TypeId {
        TypeId::of::<Self>()
    }
}
