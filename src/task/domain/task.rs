//! Task entity.

use super::{TaskId, TaskTitle};
use serde::{Deserialize, Serialize};

/// Immutable task record.
///
/// State changes never touch an existing value: [`Task::mark_completed`]
/// returns a replacement that callers persist under the same identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: Option<String>,
    completed: bool,
}

/// Parameter object for reconstructing a task with known field values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted completion flag.
    pub completed: bool,
}

impl Task {
    /// Creates a new, incomplete task with a fresh identifier.
    #[must_use]
    pub fn new(title: TaskTitle, description: Option<String>) -> Self {
        Self {
            id: TaskId::new(),
            title,
            description,
            completed: false,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            completed: data.completed,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the task description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns whether the task has been completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns a completed copy of this task.
    ///
    /// Completing an already completed task yields an equal value.
    #[must_use]
    pub fn mark_completed(&self) -> Self {
        Self {
            completed: true,
            ..self.clone()
        }
    }
}
