use crate::{Compute, State, StateCtx};

/// Read-only view of the context handed to [`Command::run`](crate::Command::run).
///
/// The borrow ends when `run` returns, so commands clone what their future
/// needs up front.
#[derive(Clone, Copy)]
pub struct CommandSnapshot<'a> {
    ctx: &'a StateCtx,
}

impl<'a> CommandSnapshot<'a> {
    pub(crate) fn new(ctx: &'a StateCtx) -> Self {
        Self { ctx }
    }

    pub fn state<T: State>(&self) -> &'a T {
        self.ctx.state::<T>()
    }

    pub fn compute<T: Compute>(&self) -> &'a T {
        self.ctx.compute::<T>()
    }

    pub fn cached<T: Compute>(&self) -> Option<&'a T> {
        self.ctx.cached::<T>()
    }
}
