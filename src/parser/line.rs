//! Structural parsing of a single strace call record.
//!
//! A call record has the shape `name(arguments...`. Only the call name and
//! the opening parenthesis are structurally significant; the remainder
//! (closing parenthesis, return value, timing) is kept verbatim.

use crate::utils::error::TraceError;

/// A call record split into its name and raw argument text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedCall<'a> {
    /// Call name, always matches `[A-Za-z0-9_]+`
    pub name: &'a str,

    /// Everything after the first `(`
    pub arguments: &'a str,
}

/// Split a trace line into call name and argument text
///
/// **Public** - second stage of the per-line pipeline
///
/// # Errors
/// * `TraceError::MalformedLine` - the line does not start with `name(`
pub fn parse_line(line: &str) -> Result<ParsedCall<'_>, TraceError> {
    let name_len = line
        .bytes()
        .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
        .count();

    let (name, rest) = line.split_at(name_len);

    match rest.strip_prefix('(') {
        Some(arguments) if !name.is_empty() => Ok(ParsedCall { name, arguments }),
        _ => Err(TraceError::MalformedLine(line.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_openat_line() {
        let call =
            parse_line("openat(AT_FDCWD, \"/etc/ld.so.cache\", O_RDONLY|O_CLOEXEC) = 3").unwrap();

        assert_eq!(call.name, "openat");
        assert_eq!(
            call.arguments,
            "AT_FDCWD, \"/etc/ld.so.cache\", O_RDONLY|O_CLOEXEC) = 3"
        );
    }

    #[test]
    fn test_parse_keeps_everything_after_first_paren() {
        let call = parse_line("getcwd(\"/home/user\", 128) = 11 <0.000012>").unwrap();
        assert_eq!(call.name, "getcwd");
        assert_eq!(call.arguments, "\"/home/user\", 128) = 11 <0.000012>");
    }

    #[test]
    fn test_parse_empty_argument_list() {
        let call = parse_line("sync() = 0").unwrap();
        assert_eq!(call.name, "sync");
        assert_eq!(call.arguments, ") = 0");
    }

    #[test]
    fn test_blank_line_is_malformed() {
        assert_eq!(
            parse_line(""),
            Err(TraceError::MalformedLine(String::new()))
        );
    }

    #[test]
    fn test_missing_paren_is_malformed() {
        assert!(matches!(
            parse_line("execve \"/bin/ls\""),
            Err(TraceError::MalformedLine(_))
        ));
        assert!(matches!(
            parse_line("+++ exited with 0 +++"),
            Err(TraceError::MalformedLine(_))
        ));
    }

    #[test]
    fn test_pid_prefixed_line_is_malformed() {
        assert!(matches!(
            parse_line("[pid  1234] open(\"/etc/hosts\", O_RDONLY) = 3"),
            Err(TraceError::MalformedLine(_))
        ));
    }

    #[test]
    fn test_name_without_identifier_is_malformed() {
        assert!(matches!(parse_line("(foo) = 0"), Err(TraceError::MalformedLine(_))));
    }
}
