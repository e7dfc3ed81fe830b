//! Configuration and constants for the CLI.

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

// Entry kind written before every manifest path ("f" = regular file)
pub const MANIFEST_ENTRY_KIND: char = 'f';

// Noise markers in strace output
pub const SIGNAL_REPORT_PREFIX: &str = "--- SIG";
pub const SIGNAL_REPORT_SUFFIX: &str = "---";
pub const KILLED_BY_PREFIX: &str = "+++ killed by SIG";
pub const KILLED_BY_SUFFIX: &str = " +++";
pub const CORE_DUMPED_NOTE: &str = " (core dumped)";
pub const UNFINISHED_MARKER: &str = "<unfinished ...>";

// Directory results of stat-family calls are never packaging-relevant
pub const STAT_FAMILY_SUFFIX: &str = "stat";
pub const DIRECTORY_MODE_MARKER: &str = "S_IFDIR";

// Virtual, kernel-introspection and ephemeral roots (plain prefix match)
pub const REJECTED_ROOTS: &[&str] = &["/dev", "/sys", "/proc", "/tmp"];

// Regenerated at runtime by the Python interpreter
pub const BYTECODE_CACHE_MARKER: &str = "__pycache__";

/// Input name that stands for standard input
pub const STDIN_SOURCE: &str = "-";
