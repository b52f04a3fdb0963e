//! Identifier types for the planning domain.

use super::PlanningDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a project.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProjectId(String);

impl ProjectId {
    /// Creates a validated project identifier.
    ///
    /// The input is trimmed before it is stored.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningDomainError::EmptyProjectId`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, PlanningDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(PlanningDomainError::EmptyProjectId);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ProjectId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<String> for ProjectId {
    type Error = PlanningDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProjectId> for String {
    fn from(id: ProjectId) -> Self {
        id.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Positive numeric identifier of a task.
///
/// Task identifiers are issued by the task store in strictly increasing
/// order and are the ids users type at the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct TaskId(u64);

impl TaskId {
    /// Creates a validated task identifier.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningDomainError::InvalidTaskId`] when the value is zero or
    /// negative.
    pub fn new(value: i64) -> Result<Self, PlanningDomainError> {
        match u64::try_from(value) {
            Ok(positive) if positive > 0 => Ok(Self(positive)),
            _ => Err(PlanningDomainError::InvalidTaskId(value)),
        }
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl TryFrom<u64> for TaskId {
    type Error = PlanningDomainError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        if value == 0 {
            return Err(PlanningDomainError::InvalidTaskId(0));
        }
        Ok(Self(value))
    }
}

impl From<TaskId> for u64 {
    fn from(id: TaskId) -> Self {
        id.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
