//! Application services for the planning use cases.

mod create_project;
mod create_task;
mod error;
mod lookup;
mod task_status;
mod view;

pub use create_project::{CreateProjectRequest, CreateProjectService};
pub use create_task::{CreateTaskRequest, CreateTaskService};
pub use error::{ErrorKind, PlanningServiceError, PlanningServiceResult};
pub use task_status::{ChangeTaskStatusRequest, ChangeTaskStatusService};
pub use view::{ProjectView, TaskView, ViewAllProjectsService};
