//! Domain model for project and task planning.
//!
//! Projects own an ordered list of tasks; tasks move between pending and
//! completed. No infrastructure concerns cross this boundary.

mod error;
mod ids;
mod project;
mod task;
mod text;

pub use error::{ParseTaskStatusError, PlanningDomainError};
pub use ids::{ProjectId, TaskId};
pub use project::Project;
pub use task::{PersistedTaskData, Task, TaskStatus};
pub use text::{ProjectName, TaskDescription};
