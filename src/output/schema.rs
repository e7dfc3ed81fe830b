//! JSON report schema.
//!
//! This module defines the structure of the optional report file.
//! Schema is versioned to allow future evolution.

use crate::manifest::ManifestStats;
use serde::{Deserialize, Serialize};

/// Top-level report structure written to JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Input sources in the order they were read ("-" for stdin)
    pub sources: Vec<String>,

    /// Run statistics
    pub stats: ManifestStats,

    /// Accepted paths, sorted and distinct
    pub paths: Vec<String>,

    /// Timestamp when the report was generated
    pub generated_at: String,
}
