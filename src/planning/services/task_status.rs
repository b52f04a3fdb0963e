//! Use case for completing and reopening tasks.

use super::{PlanningServiceError, PlanningServiceResult, lookup::resolve_project};
use crate::planning::{
    domain::{ProjectName, Task, TaskId},
    ports::{ProjectRepository, TaskRepository},
};
use std::sync::Arc;
use tracing::info;

/// Request payload for changing the status of a task within a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeTaskStatusRequest {
    project_name: String,
    task_id: i64,
    completed: bool,
}

impl ChangeTaskStatusRequest {
    /// Creates a request that completes (`completed == true`) or reopens the
    /// task.
    #[must_use]
    pub fn new(project_name: impl Into<String>, task_id: i64, completed: bool) -> Self {
        Self {
            project_name: project_name.into(),
            task_id,
            completed,
        }
    }
}

/// Task status service.
#[derive(Clone)]
pub struct ChangeTaskStatusService<P, T>
where
    P: ProjectRepository,
    T: TaskRepository,
{
    projects: Arc<P>,
    tasks: Arc<T>,
}

impl<P, T> ChangeTaskStatusService<P, T>
where
    P: ProjectRepository,
    T: TaskRepository,
{
    /// Creates a new task status service.
    #[must_use]
    pub const fn new(projects: Arc<P>, tasks: Arc<T>) -> Self {
        Self { projects, tasks }
    }

    /// Changes the status of a task that must belong to the named project.
    ///
    /// Completing a completed task fails; reopening a pending task succeeds
    /// without changing it.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningServiceError::Domain`] for a blank name, a
    /// non-positive id, or a task that is already completed,
    /// [`PlanningServiceError::ProjectNotFound`] when no project has the
    /// name (checked before the id is validated), [`PlanningServiceError::TaskNotFound`] when no task has the id,
    /// and [`PlanningServiceError::TaskNotInProject`] when the task belongs
    /// to another project.
    pub fn change_status(&self, request: ChangeTaskStatusRequest) -> PlanningServiceResult<Task> {
        let project_name = ProjectName::new(request.project_name)?;
        let project = resolve_project(&*self.projects, &project_name)?;
        let task_id = TaskId::new(request.task_id)?;

        let mut task = self.load(task_id)?;
        if task.project_id() != project.id() {
            return Err(PlanningServiceError::TaskNotInProject {
                task_id,
                project: project_name,
            });
        }

        apply_status(&mut task, request.completed)?;
        self.persist(&task)
    }

    /// Completes a task by id without checking project membership.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningServiceError::TaskNotFound`] when no task has the id
    /// and [`PlanningServiceError::Domain`] when it is already completed.
    pub fn complete_task(&self, task_id: TaskId) -> PlanningServiceResult<Task> {
        let mut task = self.load(task_id)?;
        task.mark_as_completed()?;
        self.persist(&task)
    }

    /// Reopens a task by id without checking project membership.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningServiceError::TaskNotFound`] when no task has the id.
    pub fn uncomplete_task(&self, task_id: TaskId) -> PlanningServiceResult<Task> {
        let mut task = self.load(task_id)?;
        task.mark_as_pending();
        self.persist(&task)
    }

    fn load(&self, task_id: TaskId) -> PlanningServiceResult<Task> {
        self.tasks
            .find_by_id(task_id)?
            .ok_or(PlanningServiceError::TaskNotFound(task_id))
    }

    fn persist(&self, task: &Task) -> PlanningServiceResult<Task> {
        let saved = self.tasks.save(task)?;
        info!(
            task_id = %saved.id(),
            completed = saved.is_completed(),
            "changed task status"
        );
        Ok(saved)
    }
}

fn apply_status(task: &mut Task, completed: bool) -> PlanningServiceResult<()> {
    if completed {
        task.mark_as_completed()?;
    } else {
        task.mark_as_pending();
    }
    Ok(())
}
