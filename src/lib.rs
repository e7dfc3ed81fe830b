//! Strace Manifest
//!
//! Turns an `strace` log into a sorted, deduplicated manifest of the files a
//! program touched, ready to drive minimal container image packaging.
//!
//! Each trace line goes through four stages:
//! 1. [`parser::classify`] drops noise (signals, unfinished calls)
//! 2. [`parser::parse_line`] splits `name(arguments`
//! 3. [`parser::extract_filename`] pulls the path out of known calls
//! 4. [`manifest::accept`] rejects virtual roots and bytecode caches
//!
//! Accepted paths accumulate in a [`manifest::ManifestBuilder`] and are
//! emitted as `f<TAB>path` lines.
//!
//! ## Getting Started
//!
//! ```bash
//! strace -f -o trace.log -e trace=file ./my-program
//! strace-manifest trace.log > manifest.txt
//! ```

pub mod commands;
pub mod manifest;
pub mod output;
pub mod parser;
pub mod utils;
