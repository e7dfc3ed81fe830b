//! Plain-text manifest writer.
//!
//! Format, one entry per line: `f<TAB><path>`

use crate::utils::config::MANIFEST_ENTRY_KIND;
use crate::utils::error::OutputError;
use std::io::Write;

/// Write manifest entries to any writer
///
/// **Public** - used for stdout emission
///
/// # Arguments
/// * `paths` - Finalized manifest paths (already sorted)
/// * `writer` - Destination; flushed before returning
pub fn write_manifest<W: Write>(paths: &[String], mut writer: W) -> Result<(), OutputError> {
    for path in paths {
        writeln!(writer, "{}", format_entry(path))?;
    }

    writer.flush()?;
    Ok(())
}

/// Render a single manifest line (without the newline)
pub fn format_entry(path: &str) -> String {
    format!("{}\t{}", MANIFEST_ENTRY_KIND, path)
}

/// Render a whole manifest to a string
pub fn manifest_to_string(paths: &[String]) -> String {
    paths
        .iter()
        .map(|path| format_entry(path) + "\n")
        .collect()
}
