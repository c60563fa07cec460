//! Repository port for task persistence and lookup.

use crate::task::domain::{Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Inserts the task, or overwrites the entry with the same identifier.
    ///
    /// Returns the stored value.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the backing store
    /// fails.
    async fn save(&self, task: &Task) -> TaskRepositoryResult<Task>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns every stored task. Ordering is unspecified.
    async fn find_all(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Removes the task with the given identifier.
    ///
    /// Removing an absent identifier is a no-op.
    async fn delete_by_id(&self, id: TaskId) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
