//! Build command implementation.
//!
//! The build command:
//! 1. Reads trace lines from every input source, in order
//! 2. Runs each line through the manifest pipeline
//! 3. Writes the sorted manifest (and the optional JSON report)
//!
//! Any trace error aborts the run before anything is written.

use super::models::{BuildArgs, InputSource};
use crate::manifest::{ManifestBuilder, ManifestStats};
use crate::output::{to_report, write_manifest, write_report};
use anyhow::{Context, Result};
use log::{debug, info};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use std::time::Instant;

/// Execute the build command
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `args` - Build command arguments
/// * `out` - Destination for the manifest lines (stdout in the CLI)
///
/// # Returns
/// Statistics of the completed run
///
/// # Errors
/// * Unreadable input sources
/// * Malformed lines, unhandled syscalls, missing paths
/// * Output write errors
pub fn execute_build<W: Write>(args: &BuildArgs, out: W) -> Result<ManifestStats> {
    let start_time = Instant::now();
    let sources = args.sources();

    // Step 1: Read and process every source
    info!("Step 1/3: Reading trace input from {} source(s)...", sources.len());
    let mut builder = ManifestBuilder::new();

    for source in &sources {
        process_source(&mut builder, source)?;
    }

    let stats = builder.stats().clone();
    info!("{}", stats.summary());

    // Step 2: Finalize
    info!("Step 2/3: Sorting {} distinct paths...", builder.len());
    let paths = builder.finalize();

    // Step 3: Write outputs
    info!("Step 3/3: Writing manifest...");
    write_manifest(&paths, out).context("Failed to write manifest")?;

    if let Some(report_path) = &args.report {
        let source_names: Vec<String> = sources.iter().map(InputSource::name).collect();
        let report = to_report(&source_names, &stats, &paths);

        write_report(&report, report_path).context("Failed to write report JSON")?;
        info!("✓ Report written to: {}", report_path.display());
    }

    if args.print_summary {
        print_summary(&stats);
    }

    let elapsed = start_time.elapsed();
    info!("Build completed in {:.2}s", elapsed.as_secs_f64());

    Ok(stats)
}

/// Open one source and feed it to the builder
///
/// **Private** - internal helper for execute_build
fn process_source(builder: &mut ManifestBuilder, source: &InputSource) -> Result<()> {
    let name = source.name();
    debug!("Reading source: {}", name);

    let lines = match source {
        InputSource::Stdin => process_reader(builder, io::stdin().lock(), &name)?,
        InputSource::File(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open trace file {}", path.display()))?;
            process_reader(builder, BufReader::new(file), &name)?
        }
    };

    debug!("Processed {} lines from {}", lines, name);
    Ok(())
}

/// Feed every line of a reader through the builder
///
/// **Public** - lets callers process in-memory traces
///
/// # Arguments
/// * `builder` - Manifest being accumulated
/// * `reader` - Line source
/// * `source_name` - Name used in error context
///
/// # Returns
/// Number of lines processed
pub fn process_reader<R: BufRead>(
    builder: &mut ManifestBuilder,
    reader: R,
    source_name: &str,
) -> Result<u64> {
    let mut count = 0;

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line
            .with_context(|| format!("Failed to read {} at line {}", source_name, line_no))?;

        builder
            .process_line(&line)
            .with_context(|| format!("Invalid trace record at {}:{}", source_name, line_no))?;

        count += 1;
    }

    Ok(count)
}

/// Print run statistics to stderr
///
/// **Private** - stdout carries only the manifest
fn print_summary(stats: &ManifestStats) {
    eprintln!("\n{}", "=".repeat(60));
    eprintln!("MANIFEST SUMMARY");
    eprintln!("{}", "=".repeat(60));
    eprintln!("Lines read:       {}", stats.lines_read);
    eprintln!("Noise lines:      {}", stats.noise_lines);
    eprintln!("Calls inspected:  {}", stats.calls_inspected);
    eprintln!("Calls w/o path:   {}", stats.calls_without_path);
    eprintln!("Rejected paths:   {}", stats.rejected_paths);
    eprintln!("Duplicate paths:  {}", stats.duplicate_paths);
    eprintln!("Manifest entries: {}", stats.accepted_paths);
    eprintln!("{}", "=".repeat(60));
}

/// Whether two paths name the same file
///
/// **Private** - falls back to literal comparison when either path does not
/// exist yet
fn same_file(a: &Path, b: &Path) -> bool {
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

/// Validate build arguments
///
/// **Public** - can be called before execute_build for early validation
pub fn validate_args(args: &BuildArgs) -> Result<()> {
    if let Some(report) = &args.report {
        // Empty and directory report paths are rejected by write_report
        if args.inputs.iter().any(|input| same_file(input, report)) {
            anyhow::bail!("Report path must differ from every input: {}", report.display());
        }
    }

    for source in args.sources() {
        if let InputSource::File(path) = source {
            if path.is_dir() {
                anyhow::bail!("Input is a directory: {}", path.display());
            }
        }
    }

    Ok(())
}
