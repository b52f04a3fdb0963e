//! Port contracts for project and task storage.
//!
//! Ports define infrastructure-agnostic interfaces used by planning services.

pub mod project;
pub mod task;

pub use project::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult};
pub use task::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
