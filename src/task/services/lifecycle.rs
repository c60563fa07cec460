//! Service layer for task creation, lookup, completion, and deletion.

use crate::{
    config::{TaskServiceConfig, WriteGuard},
    task::{
        domain::{Task, TaskDomainError, TaskId, TaskTitle},
        ports::{TaskRepository, TaskRepositoryError},
    },
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::task_locks::{TaskLockGuard, TaskLocks};

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Input validation failed.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),

    /// No task exists for the identifier.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task orchestration service.
///
/// Clones share the repository and the per-task lock table.
pub struct TaskLifecycleService<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
    config: TaskServiceConfig,
    locks: Arc<TaskLocks>,
}

impl<R> Clone for TaskLifecycleService<R>
where
    R: TaskRepository,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            config: self.config,
            locks: Arc::clone(&self.locks),
        }
    }
}

impl<R> TaskLifecycleService<R>
where
    R: TaskRepository,
{
    /// Creates a service with the default configuration.
    #[must_use]
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_config(repository, TaskServiceConfig::default())
    }

    /// Creates a service with an explicit configuration.
    #[must_use]
    pub fn with_config(repository: Arc<R>, config: TaskServiceConfig) -> Self {
        Self {
            repository,
            config,
            locks: Arc::new(TaskLocks::default()),
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &TaskServiceConfig {
        &self.config
    }

    /// Creates and persists a new, incomplete task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Validation`] when the title is blank
    /// after trimming; nothing is persisted in that case. Returns
    /// [`TaskLifecycleError::Repository`] when persistence fails.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskLifecycleResult<Task> {
        let title = TaskTitle::new(request.title).inspect_err(|err| {
            warn!(error = %err, "rejected task creation");
        })?;
        let task = Task::new(title, request.description);
        let stored = self.repository.save(&task).await?;
        info!(task_id = %stored.id(), "task created");
        Ok(stored)
    }

    /// Returns every stored task. Ordering is unspecified.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the lookup fails.
    pub async fn get_all_tasks(&self) -> TaskLifecycleResult<Vec<Task>> {
        let tasks = self.repository.find_all().await?;
        debug!(count = tasks.len(), "listed tasks");
        Ok(tasks)
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when no task exists for the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the lookup fails.
    pub async fn get_task_by_id(&self, id: TaskId) -> TaskLifecycleResult<Option<Task>> {
        let task = self.repository.find_by_id(id).await?;
        debug!(task_id = %id, found = task.is_some(), "looked up task");
        Ok(task)
    }

    /// Marks a task as completed and persists the completed copy.
    ///
    /// Under [`WriteGuard::Serialized`] the read and the write run while
    /// holding the task's lock, so a concurrent [`Self::delete_task`] on the
    /// same identifier is ordered before or after the whole completion.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when no task exists for the
    /// identifier; the store is left unchanged. Returns
    /// [`TaskLifecycleError::Repository`] when persistence fails.
    pub async fn complete_task(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        let _guard = self.lock_task(id).await;
        let Some(task) = self.repository.find_by_id(id).await? else {
            warn!(task_id = %id, "cannot complete missing task");
            return Err(TaskLifecycleError::NotFound(id));
        };
        let stored = self.repository.save(&task.mark_completed()).await?;
        info!(task_id = %id, "task completed");
        Ok(stored)
    }

    /// Deletes a task by identifier.
    ///
    /// Deleting an identifier with no task succeeds without effect.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when persistence fails.
    pub async fn delete_task(&self, id: TaskId) -> TaskLifecycleResult<()> {
        let _guard = self.lock_task(id).await;
        self.repository.delete_by_id(id).await?;
        info!(task_id = %id, "task deleted");
        Ok(())
    }

    async fn lock_task(&self, id: TaskId) -> Option<TaskLockGuard<'_>> {
        match self.config.write_guard() {
            WriteGuard::Serialized => Some(self.locks.acquire(id).await),
            WriteGuard::Unguarded => None,
        }
    }
}
