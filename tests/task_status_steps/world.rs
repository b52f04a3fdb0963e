//! Shared world state for task status BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use tasklist::planning::{
    adapters::memory::{InMemoryProjectRepository, InMemoryTaskRepository},
    domain::Task,
    services::{
        ChangeTaskStatusRequest, ChangeTaskStatusService, CreateProjectService, CreateTaskService,
        PlanningServiceError,
    },
};

/// Store types used by the BDD world.
pub type Projects = InMemoryProjectRepository;
/// Task store type used by the BDD world.
pub type Tasks = InMemoryTaskRepository;

/// Scenario world for task status behaviour tests.
pub struct TaskStatusWorld {
    /// Task store, inspected by `then` steps.
    pub tasks: Arc<Tasks>,
    /// Create-project use case.
    pub create_project: CreateProjectService<Projects>,
    /// Create-task use case.
    pub create_task: CreateTaskService<Projects, Tasks>,
    /// Status use case under test.
    pub status: ChangeTaskStatusService<Projects, Tasks>,
    /// Outcome of the most recent `when` step.
    pub last_result: Option<Result<Task, PlanningServiceError>>,
}

impl TaskStatusWorld {
    /// Creates a world over empty stores.
    #[must_use]
    pub fn new() -> Self {
        let projects = Arc::new(Projects::new());
        let tasks = Arc::new(Tasks::new());
        Self {
            create_project: CreateProjectService::new(Arc::clone(&projects)),
            create_task: CreateTaskService::new(Arc::clone(&projects), Arc::clone(&tasks)),
            status: ChangeTaskStatusService::new(projects, Arc::clone(&tasks)),
            tasks,
            last_result: None,
        }
    }

    /// Runs a status change and records its outcome.
    pub fn change(&mut self, project: &str, task_id: i64, completed: bool) {
        let result = self
            .status
            .change_status(ChangeTaskStatusRequest::new(project, task_id, completed));
        self.last_result = Some(result);
    }
}

impl Default for TaskStatusWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskStatusWorld {
    TaskStatusWorld::default()
}
