//! Step definitions for task status behaviour scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
