//! Adapter implementations for planning ports.

pub mod memory;
