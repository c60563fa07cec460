//! Application services for task orchestration.

mod lifecycle;
mod task_locks;

pub use lifecycle::{
    CreateTaskRequest, TaskLifecycleError, TaskLifecycleResult, TaskLifecycleService,
};
