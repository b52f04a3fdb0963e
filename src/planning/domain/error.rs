//! Error types for planning domain validation and parsing.

use super::{ProjectId, TaskId};
use thiserror::Error;

/// Errors returned while constructing or mutating planning domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PlanningDomainError {
    /// The project identifier is empty after trimming.
    #[error("project id must not be empty")]
    EmptyProjectId,

    /// The task identifier is zero or negative.
    #[error("invalid task id {0}, expected a positive integer")]
    InvalidTaskId(i64),

    /// The project name is empty after trimming.
    #[error("project name must not be empty")]
    EmptyProjectName,

    /// The task description is empty after trimming.
    #[error("task description must not be empty")]
    EmptyTaskDescription,

    /// A task was offered to a project that does not own it.
    #[error("task {task_id} belongs to project {task_project}, not {project}")]
    TaskProjectMismatch {
        /// Task that was rejected.
        task_id: TaskId,
        /// Project recorded on the task.
        task_project: ProjectId,
        /// Project that refused the task.
        project: ProjectId,
    },

    /// Completing a task that is already completed.
    #[error("task {0} is already completed")]
    TaskAlreadyCompleted(TaskId),
}

impl PlanningDomainError {
    /// Returns `true` for illegal status transitions, as opposed to malformed
    /// input.
    #[must_use]
    pub const fn is_invalid_state(&self) -> bool {
        matches!(self, Self::TaskAlreadyCompleted(_))
    }
}

/// Error returned while parsing task statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
