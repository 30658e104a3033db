//! Test doubles for port traits.

mod memory_project_store;

pub use memory_project_store::MemoryProjectStore;
