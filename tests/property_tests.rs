//! Property-based tests for ordering, filtering and idempotence.

use proptest::prelude::*;
use strace_manifest::manifest::ManifestBuilder;
use strace_manifest::output::manifest_to_string;
use strace_manifest::utils::config::{BYTECODE_CACHE_MARKER, REJECTED_ROOTS};

/// One well-formed trace line referencing `path`
fn trace_line() -> impl Strategy<Value = String> {
    let path = prop_oneof![
        "/[a-z]{1,6}(/[a-z._]{1,8}){0,3}",
        "/(dev|sys|proc|tmp)(/[a-z]{1,6}){0,2}",
        "/usr/lib/__pycache__/[a-z]{1,6}\\.pyc",
        "[a-z]{1,6}/[a-z.]{1,8}",
    ];

    (0usize..6, path).prop_map(|(kind, path)| match kind {
        0 => format!("open(\"{}\", O_RDONLY) = 3", path),
        1 => format!("openat(AT_FDCWD, \"{}\", O_RDONLY|O_CLOEXEC) = 3", path),
        2 => format!("stat(\"{}\", {{st_mode=S_IFREG|0644, ...}}) = 0", path),
        3 => format!("stat(\"{}\", {{st_mode=S_IFDIR|0755, ...}}) = 0", path),
        4 => format!("unlink(\"{}\") = 0", path),
        _ => "--- SIGCHLD {si_signo=SIGCHLD} ---".to_string(),
    })
}

fn run(lines: &[String]) -> String {
    let mut builder = ManifestBuilder::new();
    for line in lines {
        builder.process_line(line).unwrap();
    }
    manifest_to_string(&builder.finalize())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_manifest_is_strictly_ascending(lines in prop::collection::vec(trace_line(), 0..40)) {
        let output = run(&lines);
        let entries: Vec<&str> = output.lines().collect();

        prop_assert!(entries.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn prop_manifest_never_contains_rejected_paths(lines in prop::collection::vec(trace_line(), 0..40)) {
        let output = run(&lines);

        for entry in output.lines() {
            let path = entry.strip_prefix("f\t").unwrap();
            prop_assert!(!path.is_empty());
            prop_assert!(!path.contains(BYTECODE_CACHE_MARKER));
            prop_assert!(REJECTED_ROOTS.iter().all(|root| !path.starts_with(root)));
        }
    }

    #[test]
    fn prop_runs_are_idempotent(lines in prop::collection::vec(trace_line(), 0..40)) {
        prop_assert_eq!(run(&lines), run(&lines));
    }

    #[test]
    fn prop_line_order_does_not_matter(lines in prop::collection::vec(trace_line(), 0..40)) {
        let mut reversed = lines.clone();
        reversed.reverse();

        prop_assert_eq!(run(&lines), run(&reversed));
    }

    #[test]
    fn prop_repeating_input_changes_nothing(lines in prop::collection::vec(trace_line(), 0..20)) {
        let doubled: Vec<String> = lines.iter().chain(lines.iter()).cloned().collect();

        prop_assert_eq!(run(&lines), run(&doubled));
    }
}
