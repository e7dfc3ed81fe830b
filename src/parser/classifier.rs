//! Noise detection for raw strace lines.
//!
//! Some records in a trace never describe a completed call:
//! - Signal deliveries: `--- SIGCHLD {si_signo=SIGCHLD, ...} ---`
//! - Termination by a signal: `+++ killed by SIGKILL +++`
//! - Interrupted calls: `read(3, <unfinished ...>`
//!
//! These are dropped before the line is parsed at all.

use crate::utils::config::{
    CORE_DUMPED_NOTE, KILLED_BY_PREFIX, KILLED_BY_SUFFIX, SIGNAL_REPORT_PREFIX,
    SIGNAL_REPORT_SUFFIX, UNFINISHED_MARKER,
};

/// Outcome of classifying a raw trace line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// Noise record, skip without parsing
    Discard,
    /// Call record, hand to the parser
    Inspect,
}

/// Classify a raw trace line
///
/// **Public** - first stage of the per-line pipeline
pub fn classify(line: &str) -> LineClass {
    if is_signal_report(line) || is_killed_by_signal(line) || line.contains(UNFINISHED_MARKER) {
        LineClass::Discard
    } else {
        LineClass::Inspect
    }
}

/// `--- SIG... ---`
fn is_signal_report(line: &str) -> bool {
    line.len() >= SIGNAL_REPORT_PREFIX.len() + SIGNAL_REPORT_SUFFIX.len()
        && line.starts_with(SIGNAL_REPORT_PREFIX)
        && line.ends_with(SIGNAL_REPORT_SUFFIX)
}

/// `+++ killed by SIGNAME +++`, optionally with `(core dumped)`
///
/// Any signal name is accepted, not only SIGKILL and SIGPIPE.
fn is_killed_by_signal(line: &str) -> bool {
    let Some(rest) = line.strip_prefix(KILLED_BY_PREFIX) else {
        return false;
    };
    let Some(rest) = rest.strip_suffix(KILLED_BY_SUFFIX) else {
        return false;
    };

    let name = rest.strip_suffix(CORE_DUMPED_NOTE).unwrap_or(rest);

    // Signal name minus its "SIG" prefix, e.g. "KILL" or "RT_1"
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
