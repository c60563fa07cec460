//! Domain model for task management.
//!
//! The domain holds the immutable task record and its validated value
//! types. Persistence and transport concerns stay outside this boundary.

mod error;
mod ids;
mod task;

pub use error::TaskDomainError;
pub use ids::{TaskId, TaskTitle};
pub use task::{PersistedTaskData, Task};
