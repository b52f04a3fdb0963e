//! In-memory adapters for the planning stores.
//!
//! Both stores keep snapshots behind an `RwLock` and draw identifiers from an
//! [`IdSequence`] that can be shared between store instances.

mod project;
mod sequence;
mod task;

pub use project::InMemoryProjectRepository;
pub use sequence::IdSequence;
pub use task::InMemoryTaskRepository;
