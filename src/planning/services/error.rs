//! Service-level errors shared by the planning use cases.

use crate::planning::{
    domain::{PlanningDomainError, ProjectName, TaskId},
    ports::{ProjectRepositoryError, TaskRepositoryError},
};
use thiserror::Error;

/// Coarse classification of a [`PlanningServiceError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed input such as an empty name or a non-positive id.
    Validation,
    /// The project name is already taken.
    DuplicateName,
    /// No project has the requested name.
    ProjectNotFound,
    /// No task has the requested id within the named project.
    TaskNotFound,
    /// The requested status transition is not allowed.
    InvalidState,
    /// The underlying store failed.
    Persistence,
}

/// Errors returned by planning use cases.
#[derive(Debug, Error)]
pub enum PlanningServiceError {
    /// Domain validation or a state transition failed.
    #[error(transparent)]
    Domain(#[from] PlanningDomainError),

    /// Project store operation failed.
    #[error(transparent)]
    ProjectRepository(#[from] ProjectRepositoryError),

    /// Task store operation failed.
    #[error(transparent)]
    TaskRepository(#[from] TaskRepositoryError),

    /// A project with the name already exists.
    #[error("project with name '{0}' already exists")]
    DuplicateProjectName(ProjectName),

    /// No project has the name.
    #[error("project with name '{0}' not found")]
    ProjectNotFound(ProjectName),

    /// No task has the id.
    #[error("task with id {0} not found")]
    TaskNotFound(TaskId),

    /// The task exists but belongs to another project.
    #[error("task {task_id} not found in project {project}")]
    TaskNotInProject {
        /// Requested task.
        task_id: TaskId,
        /// Project named by the caller.
        project: ProjectName,
    },
}

impl PlanningServiceError {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(err) if err.is_invalid_state() => ErrorKind::InvalidState,
            Self::Domain(_)
            | Self::ProjectRepository(ProjectRepositoryError::DuplicateName(_))
            | Self::TaskRepository(TaskRepositoryError::OwnerChanged { .. }) => {
                ErrorKind::Validation
            }
            Self::ProjectRepository(_) | Self::TaskRepository(_) => ErrorKind::Persistence,
            Self::DuplicateProjectName(_) => ErrorKind::DuplicateName,
            Self::ProjectNotFound(_) => ErrorKind::ProjectNotFound,
            Self::TaskNotFound(_) | Self::TaskNotInProject { .. } => ErrorKind::TaskNotFound,
        }
    }
}

/// Result type for planning use cases.
pub type PlanningServiceResult<T> = Result<T, PlanningServiceError>;
