//! Recognized system calls and filename extraction.
//!
//! Every call name the tool understands is listed in [`Syscall`], and every
//! variant maps to exactly one [`PathArgument`] strategy. Names outside the
//! enum are rejected: silently skipping an unknown call could drop a file
//! the packaged program needs.

use crate::utils::config::{DIRECTORY_MODE_MARKER, STAT_FAMILY_SUFFIX};
use crate::utils::error::TraceError;
use std::fmt;

/// System calls with a known filename extraction rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Syscall {
    // Path in the first argument
    Execve,
    Open,
    Access,
    Readlink,
    Stat,
    Lstat,
    // Path in the second argument, after a directory descriptor
    Openat,
    // Filesystem-related, but nothing to extract
    Getcwd,
    Mkdir,
    Statfs,
    Chown,
    Unlink,
    Rename,
    Chdir,
}

/// Where a call keeps the path worth recording
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathArgument {
    /// Quoted path at the very start of the argument text
    First,
    /// Quoted path right after the first comma
    Second,
    /// The call never carries a path of interest
    None,
}

impl std::str::FromStr for Syscall {
    type Err = TraceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "execve" => Self::Execve,
            "open" => Self::Open,
            "access" => Self::Access,
            "readlink" => Self::Readlink,
            "stat" => Self::Stat,
            "lstat" => Self::Lstat,
            "openat" => Self::Openat,
            "getcwd" => Self::Getcwd,
            "mkdir" => Self::Mkdir,
            "statfs" => Self::Statfs,
            "chown" => Self::Chown,
            "unlink" => Self::Unlink,
            "rename" => Self::Rename,
            "chdir" => Self::Chdir,
            _ => return Err(TraceError::UnhandledSyscall(s.to_string())),
        })
    }
}

impl Syscall {
    /// Canonical strace name of the call
    pub fn name(self) -> &'static str {
        match self {
            Self::Execve => "execve",
            Self::Open => "open",
            Self::Access => "access",
            Self::Readlink => "readlink",
            Self::Stat => "stat",
            Self::Lstat => "lstat",
            Self::Openat => "openat",
            Self::Getcwd => "getcwd",
            Self::Mkdir => "mkdir",
            Self::Statfs => "statfs",
            Self::Chown => "chown",
            Self::Unlink => "unlink",
            Self::Rename => "rename",
            Self::Chdir => "chdir",
        }
    }

    /// Extraction strategy for this call
    pub fn path_argument(self) -> PathArgument {
        match self {
            Self::Execve | Self::Open | Self::Access | Self::Readlink | Self::Stat | Self::Lstat => {
                PathArgument::First
            }
            Self::Openat => PathArgument::Second,
            Self::Getcwd
            | Self::Mkdir
            | Self::Statfs
            | Self::Chown
            | Self::Unlink
            | Self::Rename
            | Self::Chdir => PathArgument::None,
        }
    }
}

impl fmt::Display for Syscall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Extract the referenced path from a call's argument text
///
/// **Public** - third stage of the per-line pipeline
///
/// # Arguments
/// * `call_name` - Call name as parsed from the line
/// * `arguments` - Raw text after the opening parenthesis
///
/// # Returns
/// `Some(path)` for calls that carry a path, `None` for calls without one
/// and for stat-family calls on directories
///
/// # Errors
/// * `TraceError::UnhandledSyscall` - call name outside every known group
/// * `TraceError::MissingPath` - path-carrying call without a quoted path
pub fn extract_filename<'a>(
    call_name: &str,
    arguments: &'a str,
) -> Result<Option<&'a str>, TraceError> {
    // Checked before the allow-list, so e.g. fstat on a directory is fine
    if is_directory_stat(call_name, arguments) {
        return Ok(None);
    }

    let syscall: Syscall = call_name.parse()?;

    match syscall.path_argument() {
        PathArgument::First => first_quoted_argument(arguments)
            .map(Some)
            .ok_or_else(|| missing_path(syscall, arguments)),
        PathArgument::Second => second_quoted_argument(arguments)
            .map(Some)
            .ok_or_else(|| missing_path(syscall, arguments)),
        PathArgument::None => Ok(None),
    }
}

/// stat-family call whose result describes a directory
fn is_directory_stat(call_name: &str, arguments: &str) -> bool {
    call_name.ends_with(STAT_FAMILY_SUFFIX) && arguments.contains(DIRECTORY_MODE_MARKER)
}

/// `"path", ...` -> `path` (may be empty)
fn first_quoted_argument(arguments: &str) -> Option<&str> {
    let rest = arguments.strip_prefix('"')?;
    let end = rest.find('"')?;
    Some(&rest[..end])
}

/// `AT_FDCWD, "path", ...` -> `path` (never empty)
fn second_quoted_argument(arguments: &str) -> Option<&str> {
    let (descriptor, rest) = arguments.split_once(',')?;
    if descriptor.is_empty() {
        return None;
    }

    let path = first_quoted_argument(rest.trim_start())?;
    (!path.is_empty()).then_some(path)
}

fn missing_path(syscall: Syscall, arguments: &str) -> TraceError {
    TraceError::MissingPath {
        syscall: syscall.to_string(),
        arguments: arguments.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syscall_round_trips_through_name() {
        for name in [
            "execve", "open", "access", "readlink", "stat", "lstat", "openat", "getcwd", "mkdir",
            "statfs", "chown", "unlink", "rename", "chdir",
        ] {
            let syscall: Syscall = name.parse().unwrap();
            assert_eq!(syscall.name(), name);
        }
    }

    #[test]
    fn test_unknown_syscall_is_rejected() {
        assert_eq!(
            "fchmod".parse::<Syscall>(),
            Err(TraceError::UnhandledSyscall("fchmod".to_string()))
        );
        // Names are case-sensitive
        assert!("OPEN".parse::<Syscall>().is_err());
    }

    #[test]
    fn test_first_argument_extraction() {
        let path = extract_filename("execve", "\"/bin/ls\", [\"ls\"], 0x7ffd /* 20 vars */) = 0");
        assert_eq!(path, Ok(Some("/bin/ls")));
    }

    #[test]
    fn test_first_argument_may_be_empty() {
        assert_eq!(extract_filename("access", "\"\", F_OK) = -1"), Ok(Some("")));
    }

    #[test]
    fn test_first_argument_without_quotes_fails() {
        let result = extract_filename("open", "0x7ffc, O_RDONLY) = 3");
        assert!(matches!(result, Err(TraceError::MissingPath { .. })));
    }

    #[test]
    fn test_second_argument_extraction() {
        let path = extract_filename("openat", "AT_FDCWD, \"/etc/ld.so.cache\", O_RDONLY) = 3");
        assert_eq!(path, Ok(Some("/etc/ld.so.cache")));

        let path = extract_filename("openat", "3,\"lib/libc.so.6\", O_RDONLY) = 4");
        assert_eq!(path, Ok(Some("lib/libc.so.6")));
    }

    #[test]
    fn test_second_argument_must_follow_first_comma() {
        let result = extract_filename("openat", "AT_FDCWD, O_RDONLY, \"/etc/hosts\") = 3");
        assert!(matches!(result, Err(TraceError::MissingPath { .. })));

        let result = extract_filename("openat", ", \"/etc/hosts\", O_RDONLY) = 3");
        assert!(matches!(result, Err(TraceError::MissingPath { .. })));

        let result = extract_filename("openat", "AT_FDCWD, \"\", O_RDONLY) = -1");
        assert!(matches!(result, Err(TraceError::MissingPath { .. })));
    }

    #[test]
    fn test_no_path_group_yields_nothing() {
        assert_eq!(extract_filename("getcwd", "\"/home/user\", 128) = 11"), Ok(None));
        assert_eq!(extract_filename("unlink", "\"/etc/motd\") = 0"), Ok(None));
        assert_eq!(
            extract_filename("rename", "\"/a\", \"/b\") = 0"),
            Ok(None)
        );
    }

    #[test]
    fn test_directory_stat_yields_nothing() {
        let args = "\"/usr/lib\", {st_mode=S_IFDIR|0755, st_size=4096, ...}) = 0";
        assert_eq!(extract_filename("stat", args), Ok(None));
        assert_eq!(extract_filename("lstat", args), Ok(None));
    }

    #[test]
    fn test_directory_check_precedes_allow_list() {
        let args = "3, {st_mode=S_IFDIR|0755, st_size=4096, ...}) = 0";
        assert_eq!(extract_filename("fstat", args), Ok(None));

        let args = "3, {st_mode=S_IFREG|0644, st_size=4096, ...}) = 0";
        assert_eq!(
            extract_filename("fstat", args),
            Err(TraceError::UnhandledSyscall("fstat".to_string()))
        );
    }

    #[test]
    fn test_regular_file_stat_is_extracted() {
        let args = "\"/etc/hosts\", {st_mode=S_IFREG|0644, st_size=220, ...}) = 0";
        assert_eq!(extract_filename("stat", args), Ok(Some("/etc/hosts")));
    }

    #[test]
    fn test_missing_path_names_the_call() {
        let err = extract_filename("readlink", "3, \"x\", 16) = 1").unwrap_err();
        assert_eq!(
            err.to_string(),
            "readlink call has no quoted path where one is expected: 3, \"x\", 16) = 1"
        );
        assert_eq!(Syscall::Openat.to_string(), "openat");
    }

    #[test]
    fn test_path_argument_groups() {
        assert_eq!(Syscall::Readlink.path_argument(), PathArgument::First);
        assert_eq!(Syscall::Openat.path_argument(), PathArgument::Second);
        assert_eq!(Syscall::Statfs.path_argument(), PathArgument::None);
    }
}
