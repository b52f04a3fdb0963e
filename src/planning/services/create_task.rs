//! Use case for adding tasks to an existing project.

use super::{PlanningServiceResult, lookup::resolve_project};
use crate::planning::{
    domain::{ProjectName, Task, TaskDescription, TaskId},
    ports::{ProjectRepository, TaskRepository},
};
use std::sync::Arc;
use tracing::info;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    project_name: String,
    description: String,
}

impl CreateTaskRequest {
    /// Creates a request for a task in the project called `project_name`.
    #[must_use]
    pub fn new(project_name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            description: description.into(),
        }
    }
}

/// Task creation service.
///
/// Tasks are written straight to the task store and linked to their project
/// by id; the project aggregate itself is not re-saved.
#[derive(Clone)]
pub struct CreateTaskService<P, T>
where
    P: ProjectRepository,
    T: TaskRepository,
{
    projects: Arc<P>,
    tasks: Arc<T>,
}

impl<P, T> CreateTaskService<P, T>
where
    P: ProjectRepository,
    T: TaskRepository,
{
    /// Creates a new task creation service.
    #[must_use]
    pub const fn new(projects: Arc<P>, tasks: Arc<T>) -> Self {
        Self { projects, tasks }
    }

    /// Creates a pending task and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`super::PlanningServiceError::Domain`] when the project name
    /// or description is blank,
    /// [`super::PlanningServiceError::ProjectNotFound`] when no project has
    /// the name, or a repository error when a store fails.
    pub fn create_task(&self, request: CreateTaskRequest) -> PlanningServiceResult<TaskId> {
        let project_name = ProjectName::new(request.project_name)?;
        let description = TaskDescription::new(request.description)?;
        let project = resolve_project(&*self.projects, &project_name)?;

        let task = Task::new(self.tasks.next_id()?, description, project.id().clone());
        let saved = self.tasks.save(&task)?;

        info!(
            task_id = %saved.id(),
            project_id = %project.id(),
            project = %project.name(),
            "created task"
        );
        Ok(saved.id())
    }
}
