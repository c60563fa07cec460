//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use rstest::fixture;
use taskboard::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{PersistedTaskData, Task, TaskId, TaskTitle},
    services::TaskLifecycleService,
};

/// Service type used across the in-memory integration tests.
pub type TestService = TaskLifecycleService<InMemoryTaskRepository>;

/// Provides a fresh in-memory repository for each test.
#[fixture]
pub fn repo() -> InMemoryTaskRepository {
    InMemoryTaskRepository::new()
}

/// Provides a service over its own isolated repository.
#[fixture]
pub fn service() -> TestService {
    TaskLifecycleService::new(Arc::new(InMemoryTaskRepository::new()))
}

/// Builds a task with a known identifier.
///
/// # Errors
///
/// Returns an error if the title is blank.
pub fn task_with(
    id: TaskId,
    title: &str,
    description: Option<&str>,
    completed: bool,
) -> Result<Task, eyre::Report> {
    Ok(Task::from_persisted(PersistedTaskData {
        id,
        title: TaskTitle::new(title)?,
        description: description.map(str::to_owned),
        completed,
    }))
}
