//! Counters describing a single manifest run.
//!
//! Statistics are informational only; they never influence which paths end
//! up in the manifest.

use serde::{Deserialize, Serialize};

/// What happened to one input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    /// Signal report, kill notice or unfinished record
    Noise,
    /// Recognized call without a path of interest (incl. directory stats)
    NoPath,
    /// Path dropped by the path filter
    Rejected,
    /// Path already in the manifest
    Duplicate,
    /// Path added to the manifest
    Accepted,
}

/// Run statistics
///
/// **Public** - included in the JSON report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestStats {
    /// Total lines read from all sources
    pub lines_read: u64,

    /// Lines discarded before parsing
    pub noise_lines: u64,

    /// Lines parsed as calls
    pub calls_inspected: u64,

    /// Calls that yielded no path
    pub calls_without_path: u64,

    /// Paths dropped by the filter
    pub rejected_paths: u64,

    /// Accepted paths seen more than once
    pub duplicate_paths: u64,

    /// Distinct paths in the manifest
    pub accepted_paths: u64,
}

impl ManifestStats {
    /// Create new empty stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one processed line
    pub fn record(&mut self, outcome: LineOutcome) {
        self.lines_read += 1;

        match outcome {
            LineOutcome::Noise => self.noise_lines += 1,
            LineOutcome::NoPath => {
                self.calls_inspected += 1;
                self.calls_without_path += 1;
            }
            LineOutcome::Rejected => {
                self.calls_inspected += 1;
                self.rejected_paths += 1;
            }
            LineOutcome::Duplicate => {
                self.calls_inspected += 1;
                self.duplicate_paths += 1;
            }
            LineOutcome::Accepted => {
                self.calls_inspected += 1;
                self.accepted_paths += 1;
            }
        }
    }

    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "Lines: {} | Noise: {} | Calls: {} | No path: {} | Rejected: {} | Duplicates: {} | Accepted: {}",
            self.lines_read,
            self.noise_lines,
            self.calls_inspected,
            self.calls_without_path,
            self.rejected_paths,
            self.duplicate_paths,
            self.accepted_paths
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_outcomes() {
        let mut stats = ManifestStats::new();

        stats.record(LineOutcome::Noise);
        stats.record(LineOutcome::NoPath);
        stats.record(LineOutcome::Rejected);
        stats.record(LineOutcome::Accepted);
        stats.record(LineOutcome::Duplicate);

        assert_eq!(stats.lines_read, 5);
        assert_eq!(stats.noise_lines, 1);
        assert_eq!(stats.calls_inspected, 4);
        assert_eq!(stats.calls_without_path, 1);
        assert_eq!(stats.rejected_paths, 1);
        assert_eq!(stats.duplicate_paths, 1);
        assert_eq!(stats.accepted_paths, 1);
    }

    #[test]
    fn test_summary_format() {
        let mut stats = ManifestStats::new();
        stats.record(LineOutcome::Accepted);

        assert_eq!(
            stats.summary(),
            "Lines: 1 | Noise: 0 | Calls: 1 | No path: 0 | Rejected: 0 | Duplicates: 0 | Accepted: 1"
        );
    }
}
