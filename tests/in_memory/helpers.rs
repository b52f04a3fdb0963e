//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use rstest::fixture;
use tasklist::planning::{
    adapters::memory::{InMemoryProjectRepository, InMemoryTaskRepository},
    services::{
        ChangeTaskStatusService, CreateProjectService, CreateTaskService, ViewAllProjectsService,
    },
};

/// The four use-case services wired to one pair of in-memory stores.
pub struct App {
    /// Project store shared by every service.
    pub projects: Arc<InMemoryProjectRepository>,
    /// Task store shared by every service.
    pub tasks: Arc<InMemoryTaskRepository>,
    /// Create-project use case.
    pub create_project: CreateProjectService<InMemoryProjectRepository>,
    /// Create-task use case.
    pub create_task: CreateTaskService<InMemoryProjectRepository, InMemoryTaskRepository>,
    /// Change-status use case.
    pub status: ChangeTaskStatusService<InMemoryProjectRepository, InMemoryTaskRepository>,
    /// View-all use case.
    pub view: ViewAllProjectsService<InMemoryProjectRepository, InMemoryTaskRepository>,
}

impl App {
    /// Wires services over fresh stores.
    #[must_use]
    pub fn new() -> Self {
        let projects = Arc::new(InMemoryProjectRepository::new());
        let tasks = Arc::new(InMemoryTaskRepository::new());
        Self {
            create_project: CreateProjectService::new(Arc::clone(&projects)),
            create_task: CreateTaskService::new(Arc::clone(&projects), Arc::clone(&tasks)),
            status: ChangeTaskStatusService::new(Arc::clone(&projects), Arc::clone(&tasks)),
            view: ViewAllProjectsService::new(Arc::clone(&projects), Arc::clone(&tasks)),
            projects,
            tasks,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Provides freshly wired services for each test.
#[fixture]
pub fn app() -> App {
    App::new()
}
