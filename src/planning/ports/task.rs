//! Repository port for task persistence and lookup.

use crate::planning::domain::{ProjectId, Task, TaskId};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// This store is the source of truth for which tasks belong to a project.
pub trait TaskRepository: Send + Sync {
    /// Issues a fresh task identifier, strictly greater than every identifier
    /// issued before it. Identifiers are never reused, even after deletion.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::SequenceExhausted`] when no further
    /// identifiers can be issued.
    fn next_id(&self) -> TaskRepositoryResult<TaskId>;

    /// Inserts or replaces a task and returns the stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::OwnerChanged`] when a stored task with
    /// the same id belongs to a different project.
    fn save(&self, task: &Task) -> TaskRepositoryResult<Task>;

    /// Finds a task by identifier.
    fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns the tasks of one project in insertion order.
    fn find_by_project_id(&self, project_id: &ProjectId) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns every task in insertion order.
    fn find_all(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Deletes a task, returning whether it existed.
    fn delete_by_id(&self, id: TaskId) -> TaskRepositoryResult<bool>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The identifier sequence cannot issue any more values.
    #[error("task identifier sequence exhausted")]
    SequenceExhausted,

    /// A save would move a stored task to another project.
    #[error("task {task_id} belongs to project {owner}, not {requested}")]
    OwnerChanged {
        /// Task being saved.
        task_id: TaskId,
        /// Project recorded on the stored task.
        owner: ProjectId,
        /// Project on the rejected snapshot.
        requested: ProjectId,
    },

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
