//! CLI command implementations.
//!
//! Commands orchestrate the various library components to perform user tasks.

pub mod build;
pub mod models;

// Re-export main command functions
pub use build::{execute_build, process_reader, validate_args};
pub use models::{BuildArgs, InputSource};
