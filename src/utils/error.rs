//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that abort processing of a trace
///
/// Every variant is fatal for the whole run: a manifest built past one of
/// these could silently miss files.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TraceError {
    #[error("unable to parse syscall from the following line:\n{0}")]
    MalformedLine(String),

    #[error("unhandled syscall {0}")]
    UnhandledSyscall(String),

    #[error("{syscall} call has no quoted path where one is expected: {arguments}")]
    MissingPath { syscall: String, arguments: String },
}

/// Errors that can occur during manifest and report output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write output: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
