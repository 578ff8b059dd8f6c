use std::any::Any;

/// A value stored in [`StateCtx`](crate::StateCtx) and keyed by its type.
///
/// States are owned by the context; the UI reads them every frame and may
/// mutate them through `state_mut` / `update`.
pub trait State: Any + Send {}

/// A cached result stored in [`StateCtx`](crate::StateCtx).
///
/// Computes are never mutated in place by callers. They are replaced wholesale
/// when an [`Updater`](crate::Updater) publishes a new value and the context
/// applies it in `sync_computes`.
pub trait Compute: State {}
