//! Task entity and its two-state status machine.

use super::{ParseTaskStatusError, PlanningDomainError, ProjectId, TaskDescription, TaskId};
use serde::{Deserialize, Serialize};

/// Completion status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task still needs doing.
    #[default]
    Pending,
    /// Task has been done.
    Completed,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }

    /// Returns whether the status is [`TaskStatus::Completed`].
    #[must_use]
    pub const fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Returns whether the status is [`TaskStatus::Pending`].
    #[must_use]
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::Pending)
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// A unit of work owned by exactly one project.
///
/// Only the status is mutable; the description and owning project are fixed
/// at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    description: TaskDescription,
    project_id: ProjectId,
    status: TaskStatus,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted description.
    pub description: TaskDescription,
    /// Persisted owning project.
    pub project_id: ProjectId,
    /// Persisted status.
    pub status: TaskStatus,
}

impl Task {
    /// Creates a new pending task.
    #[must_use]
    pub const fn new(id: TaskId, description: TaskDescription, project_id: ProjectId) -> Self {
        Self {
            id,
            description,
            project_id,
            status: TaskStatus::Pending,
        }
    }

    /// Reconstructs a task from storage with an explicit status.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            description: data.description,
            project_id: data.project_id,
            status: data.status,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task description.
    #[must_use]
    pub const fn description(&self) -> &TaskDescription {
        &self.description
    }

    /// Returns the identifier of the owning project.
    #[must_use]
    pub const fn project_id(&self) -> &ProjectId {
        &self.project_id
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns whether the task is completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.status.is_completed()
    }

    /// Returns whether the task is pending.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.status.is_pending()
    }

    /// Marks the task as completed.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningDomainError::TaskAlreadyCompleted`] when the task is
    /// already completed. The status is left unchanged.
    pub const fn mark_as_completed(&mut self) -> Result<(), PlanningDomainError> {
        if self.status.is_completed() {
            return Err(PlanningDomainError::TaskAlreadyCompleted(self.id));
        }
        self.status = TaskStatus::Completed;
        Ok(())
    }

    /// Marks the task as pending.
    ///
    /// Reopening a task that is already pending is a no-op.
    pub const fn mark_as_pending(&mut self) {
        self.status = TaskStatus::Pending;
    }
}
