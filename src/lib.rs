//! Tasklist: projects and the tasks within them.
//!
//! This crate lets callers create projects, add tasks to them, mark tasks
//! complete or incomplete, and list everything.
//!
//! # Architecture
//!
//! Tasklist follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage
//! - **Adapters**: Concrete implementations of ports (in-memory stores)
//! - **Services**: One service per use case
//!
//! # Modules
//!
//! - [`planning`]: Projects, tasks, and the use cases over them
//! - [`cli`]: Interactive line-oriented front end

pub mod cli;
pub mod planning;
