//! Output writers for manifest data.
//!
//! This module handles:
//! - The plain-text manifest (stdout)
//! - The optional JSON report

pub mod json;
pub mod schema;
pub mod text;

// Re-export main functions
pub use json::{read_report, to_report, write_report};
pub use schema::ManifestReport;
pub use text::{format_entry, manifest_to_string, write_manifest};
