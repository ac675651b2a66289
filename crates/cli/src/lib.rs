//! Library interface for the index maintenance binaries
//!
//! The binaries stay thin; everything they run lives here so integration
//! tests can drive it against the mock catalog.

pub mod bootstrap;
pub mod maintenance;
pub mod runner;
pub mod tasks;

// Re-export commonly needed types for tests
pub use anyhow::Result;
pub use maintenance::{
    drop_indexes, DropOutcome, DropStrategy, MaintenanceOptions, MaintenanceReport,
};
pub use tasks::{MaintenanceTask, BUILTIN_TASKS, CATEGORY_INDEXES_TASK, ORDER_INDEX_TASK};
pub use wearvirtually_core::config::Config;
