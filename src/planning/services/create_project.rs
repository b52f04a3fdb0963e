//! Use case for creating uniquely named projects.

use super::{PlanningServiceError, PlanningServiceResult};
use crate::planning::{
    domain::{Project, ProjectId, ProjectName},
    ports::{ProjectRepository, ProjectRepositoryError},
};
use std::sync::Arc;
use tracing::info;

/// Request payload for creating a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProjectRequest {
    name: String,
}

impl CreateProjectRequest {
    /// Creates a request for a project called `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Project creation service.
#[derive(Clone)]
pub struct CreateProjectService<P>
where
    P: ProjectRepository,
{
    projects: Arc<P>,
}

impl<P> CreateProjectService<P>
where
    P: ProjectRepository,
{
    /// Creates a new project creation service.
    #[must_use]
    pub const fn new(projects: Arc<P>) -> Self {
        Self { projects }
    }

    /// Creates a project and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningServiceError::Domain`] when the name is blank,
    /// [`PlanningServiceError::DuplicateProjectName`] when the name is taken,
    /// or [`PlanningServiceError::ProjectRepository`] when the store fails.
    pub fn create_project(&self, request: CreateProjectRequest) -> PlanningServiceResult<ProjectId> {
        let name = ProjectName::new(request.name)?;
        if self.projects.exists_by_name(&name)? {
            return Err(PlanningServiceError::DuplicateProjectName(name));
        }

        let project = Project::new(self.projects.next_id()?, name);
        // A concurrent creator may have claimed the name since the check.
        let saved = self.projects.save(&project).map_err(|err| match err {
            ProjectRepositoryError::DuplicateName(taken) => {
                PlanningServiceError::DuplicateProjectName(taken)
            }
            other => other.into(),
        })?;

        info!(project_id = %saved.id(), project = %saved.name(), "created project");
        Ok(saved.id().clone())
    }
}
