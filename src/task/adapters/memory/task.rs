//! In-memory task repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Clones share the same underlying map; separate [`InMemoryTaskRepository::new`]
/// calls produce isolated stores.
///
/// The port operations report a poisoned lock as
/// [`TaskRepositoryError::Persistence`]. [`Self::len`] and [`Self::is_empty`]
/// are diagnostics and read through a poisoned lock instead.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Task>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored tasks.
    ///
    /// A poisoned lock reports the count seen by the poisoning writer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .tasks
            .len()
    }

    /// Returns `true` when no tasks are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned<T>(err: &PoisonError<T>) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn save(&self, task: &Task) -> TaskRepositoryResult<Task> {
        let mut state = self.state.write().map_err(|err| poisoned(&err))?;
        state.tasks.insert(task.id(), task.clone());
        Ok(task.clone())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(|err| poisoned(&err))?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn find_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| poisoned(&err))?;
        Ok(state.tasks.values().cloned().collect())
    }

    async fn delete_by_id(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| poisoned(&err))?;
        state.tasks.remove(&id);
        Ok(())
    }
}
