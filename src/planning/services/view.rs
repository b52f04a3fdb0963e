//! Read-only views over projects and their tasks.

use super::{PlanningServiceResult, lookup::resolve_project};
use crate::planning::{
    domain::{Project, ProjectName, Task},
    ports::{ProjectRepository, TaskRepository},
};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// A project name paired with views of its tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectView {
    /// Project name.
    pub name: String,
    /// Tasks in insertion order.
    pub tasks: Vec<TaskView>,
}

/// Display-oriented summary of a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskView {
    /// Numeric task id.
    pub id: u64,
    /// Task description.
    pub description: String,
    /// Whether the task is completed.
    pub completed: bool,
}

impl From<&Task> for TaskView {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().value(),
            description: task.description().as_str().to_owned(),
            completed: task.is_completed(),
        }
    }
}

/// Project listing service.
#[derive(Clone)]
pub struct ViewAllProjectsService<P, T>
where
    P: ProjectRepository,
    T: TaskRepository,
{
    projects: Arc<P>,
    tasks: Arc<T>,
}

impl<P, T> ViewAllProjectsService<P, T>
where
    P: ProjectRepository,
    T: TaskRepository,
{
    /// Creates a new listing service.
    #[must_use]
    pub const fn new(projects: Arc<P>, tasks: Arc<T>) -> Self {
        Self { projects, tasks }
    }

    /// Returns every project with its tasks, in store order.
    ///
    /// # Errors
    ///
    /// Returns a repository error when either store fails.
    pub fn view_all(&self) -> PlanningServiceResult<Vec<ProjectView>> {
        let views = self
            .projects
            .find_all()?
            .into_iter()
            .map(|project| -> PlanningServiceResult<ProjectView> {
                let tasks = self.tasks.find_by_project_id(project.id())?;
                Ok(ProjectView {
                    name: project.name().as_str().to_owned(),
                    tasks: tasks.iter().map(TaskView::from).collect(),
                })
            })
            .collect::<PlanningServiceResult<Vec<_>>>()?;
        debug!(projects = views.len(), "listed projects");
        Ok(views)
    }

    /// Loads one project with its task cache rebuilt from the task store.
    ///
    /// # Errors
    ///
    /// Returns [`super::PlanningServiceError::Domain`] for a blank name,
    /// [`super::PlanningServiceError::ProjectNotFound`] when no project has
    /// the name, or a repository error when either store fails.
    pub fn load_project(&self, name: impl Into<String>) -> PlanningServiceResult<Project> {
        let project_name = ProjectName::new(name)?;
        let mut project = resolve_project(&*self.projects, &project_name)?;
        project.replace_tasks(self.tasks.find_by_project_id(project.id())?)?;
        debug!(
            project_id = %project.id(),
            tasks = project.total_count(),
            "loaded project"
        );
        Ok(project)
    }
}
