//! Trace line parsing and filename extraction.
//!
//! This module handles:
//! - Discarding noise records (signals, unfinished calls)
//! - Splitting call records into name and arguments
//! - Mapping call names to a filename extraction rule

pub mod classifier;
pub mod line;
pub mod syscall;

// Re-export main types
pub use classifier::{classify, LineClass};
pub use line::{parse_line, ParsedCall};
pub use syscall::{extract_filename, PathArgument, Syscall};
