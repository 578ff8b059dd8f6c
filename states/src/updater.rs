use std::any::{Any, TypeId, type_name};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use flume::Sender;
use log::debug;

use crate::Compute;

/// Generation stamp carried by updates published from a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Stamp {
    pub(crate) lane: TypeId,
    pub(crate) generation: u64,
}

/// A compute value on its way back into the context.
pub(crate) struct Update {
    pub(crate) type_id: TypeId,
    pub(crate) type_name: &'static str,
    pub(crate) value: Box<dyn Any + Send>,
    pub(crate) stamp: Option<Stamp>,
}

/// Publishes new compute values; they are applied on the next `sync_computes`.
#[derive(Debug, Clone)]
pub struct Updater {
    send: Sender<Update>,
}

impl Updater {
    pub(crate) fn new(send: Sender<Update>) -> Self {
        Self { send }
    }

    pub fn set<T: Compute>(&self, value: T) {
        self.publish(value, None);
    }

    fn publish<T: Compute>(&self, value: T, stamp: Option<Stamp>) {
        let update = Update {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
            value: Box::new(value),
            stamp,
        };
        if self.send.send(update).is_err() {
            debug!("StateCtx dropped, discarding update for {}", type_name::<T>());
        }
    }
}

impl std::fmt::Debug for Update {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Update")
            .field("type_name", &self.type_name)
            .field("stamp", &self.stamp)
            .finish_non_exhaustive()
    }
}

/// Updater handed to a command run.
///
/// It knows which generation of its command lane it belongs to and silently
/// drops values once a newer dispatch in the same lane has started.
#[derive(Debug, Clone)]
pub struct LatestOnlyUpdater {
    inner: Updater,
    stamp: Stamp,
    latest: Arc<AtomicU64>,
}

impl LatestOnlyUpdater {
    pub(crate) fn new(inner: Updater, lane: TypeId, generation: u64, latest: Arc<AtomicU64>) -> Self {
        Self {
            inner,
            stamp: Stamp { lane, generation },
            latest,
        }
    }

    pub fn generation(&self) -> u64 {
        self.stamp.generation
    }

    /// Whether this run is still the most recent dispatch of its lane.
    pub fn is_latest(&self) -> bool {
        self.latest.load(Ordering::Acquire) == self.stamp.generation
    }

    pub fn set<T: Compute>(&self, value: T) {
        if self.is_latest() {
            self.inner.publish(value, Some(self.stamp));
        } else {
            debug!(
                "Dropping superseded {} (generation {}, latest {})",
                type_name::<T>(),
                self.stamp.generation,
                self.latest.load(Ordering::Acquire)
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::State;

    #[derive(Debug, Default, PartialEq)]
    struct Counter(u32);

    impl State for Counter {}
    impl Compute for Counter {}

    struct Cmd;

    #[test]
    fn superseded_updater_drops_values() {
        let (send, recv) = flume::unbounded();
        let latest = Arc::new(AtomicU64::new(1));
        let first = LatestOnlyUpdater::new(Updater::new(send.clone()), TypeId::of::<Cmd>(), 1, latest.clone());

        latest.store(2, Ordering::Release);
        let second = LatestOnlyUpdater::new(Updater::new(send), TypeId::of::<Cmd>(), 2, latest);

        first.set(Counter(1));
        second.set(Counter(2));

        let updates: Vec<Update> = recv.try_iter().collect();
        assert_eq!(updates.len(), 1, "only the latest generation should publish");
        assert_eq!(updates[0].stamp.map(|s| s.generation), Some(2));
        assert_eq!(updates[0].value.downcast_ref::<Counter>(), Some(&Counter(2)));
    }

    #[test]
    fn plain_updater_is_unstamped() {
        let (send, recv) = flume::unbounded();
        Updater::new(send).set(Counter(7));

        let update = recv.try_recv().expect("update should be queued");
        assert!(update.stamp.is_none());
        assert_eq!(update.type_id, TypeId::of::<Counter>());
    }
}
