//! Repository port for project persistence and lookup.

use crate::planning::domain::{Project, ProjectId, ProjectName};
use std::sync::Arc;
use thiserror::Error;

/// Result type for project repository operations.
pub type ProjectRepositoryResult<T> = Result<T, ProjectRepositoryError>;

/// Project persistence contract.
///
/// Implementations hand out snapshots: mutating a returned [`Project`] has no
/// effect until it is passed back to [`ProjectRepository::save`].
pub trait ProjectRepository: Send + Sync {
    /// Issues a fresh project identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::SequenceExhausted`] when no further
    /// identifiers can be issued.
    fn next_id(&self) -> ProjectRepositoryResult<ProjectId>;

    /// Inserts or replaces a project and returns the stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::DuplicateName`] when a different
    /// project already owns the name.
    fn save(&self, project: &Project) -> ProjectRepositoryResult<Project>;

    /// Finds a project by identifier.
    fn find_by_id(&self, id: &ProjectId) -> ProjectRepositoryResult<Option<Project>>;

    /// Finds a project by its exact name.
    fn find_by_name(&self, name: &ProjectName) -> ProjectRepositoryResult<Option<Project>>;

    /// Returns every project in insertion order.
    fn find_all(&self) -> ProjectRepositoryResult<Vec<Project>>;

    /// Returns whether a project with the name exists.
    fn exists_by_name(&self, name: &ProjectName) -> ProjectRepositoryResult<bool>;
}

/// Errors returned by project repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ProjectRepositoryError {
    /// Another project already uses the name.
    #[error("project with name '{0}' already exists")]
    DuplicateName(ProjectName),

    /// The identifier sequence cannot issue any more values.
    #[error("project identifier sequence exhausted")]
    SequenceExhausted,

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ProjectRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
