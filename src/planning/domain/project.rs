//! Project aggregate root.

use super::{PlanningDomainError, ProjectId, ProjectName, Task};
use serde::Serialize;

/// A named collection of tasks.
///
/// The task list held here is a cache. Task membership is owned by the task
/// store, and [`Project::replace_tasks`] rebuilds the cache from a store
/// query. Every cached task carries this project's id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    id: ProjectId,
    name: ProjectName,
    tasks: Vec<Task>,
}

impl Project {
    /// Creates a project with no tasks.
    #[must_use]
    pub const fn new(id: ProjectId, name: ProjectName) -> Self {
        Self {
            id,
            name,
            tasks: Vec::new(),
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> &ProjectId {
        &self.id
    }

    /// Returns the project name.
    #[must_use]
    pub const fn name(&self) -> &ProjectName {
        &self.name
    }

    /// Returns the cached tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Appends a task to the cached list.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningDomainError::TaskProjectMismatch`] when the task
    /// belongs to a different project.
    pub fn add_task(&mut self, task: Task) -> Result<(), PlanningDomainError> {
        self.ensure_owned(&task)?;
        self.tasks.push(task);
        Ok(())
    }

    /// Replaces the cached task list, preserving the given order.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningDomainError::TaskProjectMismatch`] for the first task
    /// owned by another project; the existing cache is left untouched.
    pub fn replace_tasks(
        &mut self,
        tasks: impl IntoIterator<Item = Task>,
    ) -> Result<(), PlanningDomainError> {
        let rebuilt = tasks
            .into_iter()
            .map(|task| self.ensure_owned(&task).map(|()| task))
            .collect::<Result<Vec<_>, _>>()?;
        self.tasks = rebuilt;
        Ok(())
    }

    /// Returns `true` when the project has at least one task and every task
    /// is completed.
    #[must_use]
    pub fn all_tasks_completed(&self) -> bool {
        !self.tasks.is_empty() && self.tasks.iter().all(Task::is_completed)
    }

    /// Returns pending tasks in insertion order.
    pub fn pending_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|task| task.is_pending())
    }

    /// Returns completed tasks in insertion order.
    pub fn completed_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|task| task.is_completed())
    }

    /// Returns the number of cached tasks.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.tasks.len()
    }

    /// Returns the number of completed tasks.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed_tasks().count()
    }

    fn ensure_owned(&self, task: &Task) -> Result<(), PlanningDomainError> {
        if task.project_id() == &self.id {
            return Ok(());
        }
        Err(PlanningDomainError::TaskProjectMismatch {
            task_id: task.id(),
            task_project: task.project_id().clone(),
            project: self.id.clone(),
        })
    }
}
