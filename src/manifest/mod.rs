//! Manifest assembly from trace lines.
//!
//! This module turns extracted paths into the final manifest:
//! - Path filtering (virtual roots, bytecode caches)
//! - Deduplication and ordering
//! - Run statistics

pub mod builder;
pub mod path_filter;
pub mod stats;

// Re-export main types and functions
pub use builder::ManifestBuilder;
pub use path_filter::accept;
pub use stats::{LineOutcome, ManifestStats};
