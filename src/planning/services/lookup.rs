//! Lookups shared by several use cases.

use super::{PlanningServiceError, PlanningServiceResult};
use crate::planning::{
    domain::{Project, ProjectName},
    ports::ProjectRepository,
};

/// Resolves a project by name, failing when it does not exist.
pub(super) fn resolve_project<P>(projects: &P, name: &ProjectName) -> PlanningServiceResult<Project>
where
    P: ProjectRepository + ?Sized,
{
    projects
        .find_by_name(name)?
        .ok_or_else(|| PlanningServiceError::ProjectNotFound(name.clone()))
}
