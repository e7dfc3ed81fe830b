//! Accumulate accepted paths across a whole trace.
//!
//! The builder owns the only state that lives longer than a single line:
//! the set of accepted paths and the run statistics. Each line flows through
//! classify -> parse -> extract -> filter before reaching the set.

use super::path_filter::accept;
use super::stats::{LineOutcome, ManifestStats};
use crate::parser::{classify, extract_filename, parse_line, LineClass};
use crate::utils::error::TraceError;
use log::trace;
use std::collections::HashSet;

/// Incremental manifest of referenced paths
///
/// **Public** - used by the build command
#[derive(Debug, Clone, Default)]
pub struct ManifestBuilder {
    paths: HashSet<String>,
    stats: ManifestStats,
}

impl ManifestBuilder {
    /// Create an empty manifest
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one raw trace line through the full pipeline
    ///
    /// **Public** - main per-line entry point
    ///
    /// # Errors
    /// Any `TraceError` is fatal for the run; the builder should be dropped
    /// without emitting anything.
    pub fn process_line(&mut self, line: &str) -> Result<LineOutcome, TraceError> {
        let outcome = self.classify_and_add(line)?;
        trace!("{:?}: {}", outcome, line);

        self.stats.record(outcome);
        Ok(outcome)
    }

    fn classify_and_add(&mut self, line: &str) -> Result<LineOutcome, TraceError> {
        if classify(line) == LineClass::Discard {
            return Ok(LineOutcome::Noise);
        }

        let call = parse_line(line)?;

        let Some(path) = extract_filename(call.name, call.arguments)? else {
            return Ok(LineOutcome::NoPath);
        };

        if !accept(path) {
            return Ok(LineOutcome::Rejected);
        }

        if self.add(path) {
            Ok(LineOutcome::Accepted)
        } else {
            Ok(LineOutcome::Duplicate)
        }
    }

    /// Insert a path, returns false if it was already present
    ///
    /// No filtering happens here; `process_line` filters before adding.
    pub fn add(&mut self, path: &str) -> bool {
        // Borrowed lookup first, duplicates never allocate
        if self.paths.contains(path) {
            false
        } else {
            self.paths.insert(path.to_string())
        }
    }

    /// Number of distinct paths collected so far
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Statistics for the lines processed so far
    pub fn stats(&self) -> &ManifestStats {
        &self.stats
    }

    /// Consume the builder and return all paths in ascending byte order
    pub fn finalize(self) -> Vec<String> {
        let mut paths: Vec<String> = self.paths.into_iter().collect();
        paths.sort_unstable();
        paths
    }
}
