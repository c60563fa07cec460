//! In-memory integration tests for task lifecycle operations.

use std::sync::Arc;

use super::helpers::{TestService, service};
use rstest::rstest;
use taskboard::{
    config::{TaskServiceConfig, WriteGuard},
    task::{
        adapters::memory::InMemoryTaskRepository,
        domain::{Task, TaskDomainError, TaskId},
        services::{CreateTaskRequest, TaskLifecycleError, TaskLifecycleService},
    },
};

/// Asserts the listing holds exactly the expected tasks, in any order.
///
/// # Errors
///
/// Returns an error if a task is missing or an unexpected one is present.
fn assert_same_tasks(found: &[Task], expected: &[Task]) -> Result<(), eyre::Report> {
    eyre::ensure!(
        found.len() == expected.len(),
        "expected {} tasks, found {}",
        expected.len(),
        found.len()
    );
    for task in expected {
        eyre::ensure!(found.contains(task), "missing task {}", task.id());
    }
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_list_complete_and_delete(service: TestService) -> Result<(), eyre::Report> {
    let groceries = service
        .create_task(CreateTaskRequest::new("Buy milk").with_description("2%  "))
        .await?;
    let chores = service.create_task(CreateTaskRequest::new("Take out bins")).await?;
    assert_same_tasks(&service.get_all_tasks().await?, &[groceries.clone(), chores.clone()])?;

    let completed = service.complete_task(groceries.id()).await?;
    eyre::ensure!(completed.is_completed(), "task should be completed");
    eyre::ensure!(
        completed.description() == Some("2%  "),
        "description must be stored verbatim"
    );
    assert_same_tasks(&service.get_all_tasks().await?, &[completed, chores.clone()])?;

    service.delete_task(groceries.id()).await?;
    assert_same_tasks(&service.get_all_tasks().await?, &[chores])?;
    Ok(())
}

#[rstest]
#[case("")]
#[case("   ")]
#[tokio::test(flavor = "multi_thread")]
async fn blank_titles_are_rejected(
    service: TestService,
    #[case] title: &str,
) -> Result<(), eyre::Report> {
    let result = service
        .create_task(CreateTaskRequest::new(title).with_description("d"))
        .await;

    eyre::ensure!(
        matches!(
            result,
            Err(TaskLifecycleError::Validation(TaskDomainError::EmptyTitle))
        ),
        "expected validation error, got {result:?}"
    );
    eyre::ensure!(service.get_all_tasks().await?.is_empty(), "nothing persisted");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completing_unknown_task_is_not_found(service: TestService) -> Result<(), eyre::Report> {
    let missing = TaskId::new();
    let result = service.complete_task(missing).await;

    eyre::ensure!(
        matches!(result, Err(TaskLifecycleError::NotFound(id)) if id == missing),
        "expected not found error, got {result:?}"
    );
    eyre::ensure!(service.get_all_tasks().await?.is_empty(), "store unchanged");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn text_ids_from_transport_resolve_to_tasks(
    service: TestService,
) -> Result<(), eyre::Report> {
    let created = service.create_task(CreateTaskRequest::new("Look me up")).await?;
    let parsed = TaskId::parse(&created.id().to_string())?;

    eyre::ensure!(
        service.get_task_by_id(parsed).await? == Some(created),
        "parsed id should find the task"
    );
    Ok(())
}

#[rstest]
#[case(WriteGuard::Serialized)]
#[case(WriteGuard::Unguarded)]
#[tokio::test(flavor = "multi_thread")]
async fn both_write_guards_serve_sequential_calls(
    #[case] write_guard: WriteGuard,
) -> Result<(), eyre::Report> {
    let config = TaskServiceConfig::new().with_write_guard(write_guard);
    let service =
        TaskLifecycleService::with_config(Arc::new(InMemoryTaskRepository::new()), config);
    let created = service.create_task(CreateTaskRequest::new("Guarded")).await?;

    let completed = service.complete_task(created.id()).await?;
    service.delete_task(created.id()).await?;

    eyre::ensure!(completed.is_completed(), "task should be completed");
    eyre::ensure!(service.config().write_guard() == write_guard, "config kept");
    eyre::ensure!(
        service.get_task_by_id(created.id()).await?.is_none(),
        "task should be deleted"
    );
    Ok(())
}
