//! Rejection rules for extracted paths.
//!
//! Device nodes, kernel introspection trees and temporary storage are never
//! regular files worth packaging, and bytecode caches are regenerated at
//! runtime.

use crate::utils::config::{BYTECODE_CACHE_MARKER, REJECTED_ROOTS};

/// Decide whether an extracted path belongs in the manifest
///
/// **Public** - fourth stage of the per-line pipeline
///
/// Roots are matched as plain string prefixes, so `/devel/x` is rejected
/// along with `/dev/null`.
pub fn accept(path: &str) -> bool {
    !path.is_empty() && rejected_root(path).is_none() && !path.contains(BYTECODE_CACHE_MARKER)
}

/// Rejected root the path starts with, if any
pub fn rejected_root(path: &str) -> Option<&'static str> {
    REJECTED_ROOTS
        .iter()
        .copied()
        .find(|root| path.starts_with(root))
}
