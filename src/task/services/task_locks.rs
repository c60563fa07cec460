//! Per-task async locks used to serialize read-modify-write operations.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use crate::task::domain::TaskId;

/// Lock table keyed by task identifier.
///
/// Entries exist only while a holder or waiter references them. The table
/// itself sits behind a synchronous mutex that is never held across an
/// `.await`.
#[derive(Debug, Default)]
pub(crate) struct TaskLocks {
    slots: Mutex<HashMap<TaskId, Arc<AsyncMutex<()>>>>,
}

/// Exclusive hold on one task identifier, released on drop.
///
/// A waiter that is dropped before it obtains the lock still removes the
/// table entry when nobody else references it.
#[derive(Debug)]
pub(crate) struct TaskLockGuard<'a> {
    locks: &'a TaskLocks,
    id: TaskId,
    guard: Option<OwnedMutexGuard<()>>,
}

impl TaskLocks {
    /// Waits until no other holder owns `id`, then takes it.
    pub(crate) async fn acquire(&self, id: TaskId) -> TaskLockGuard<'_> {
        let slot = Arc::clone(self.table().entry(id).or_default());
        let mut hold = TaskLockGuard {
            locks: self,
            id,
            guard: None,
        };
        hold.guard = Some(slot.lock_owned().await);
        hold
    }

    fn table(&self) -> MutexGuard<'_, HashMap<TaskId, Arc<AsyncMutex<()>>>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[cfg(test)]
    pub(crate) fn tracked(&self) -> usize {
        self.table().len()
    }
}

impl Drop for TaskLockGuard<'_> {
    fn drop(&mut self) {
        drop(self.guard.take());
        let mut slots = self.locks.table();
        if slots
            .get(&self.id)
            .is_some_and(|slot| Arc::strong_count(slot) == 1)
        {
            slots.remove(&self.id);
        }
    }
}
