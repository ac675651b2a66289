//! Core types for the Wear Virtually index maintenance tooling
//!
//! This crate provides the foundational pieces shared by the storage layer
//! and the command-line tools:
//!
//! - **Configuration**: connection settings loaded from files and environment
//! - **Error handling**: the configuration error type
//!

pub mod config;
pub mod error;

// Re-export main types for convenience
pub use config::{Config, StorageConfig};
pub use error::{Error, Result};
