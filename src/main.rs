//! Strace Manifest CLI
//!
//! Reads strace output and prints the sorted list of referenced files.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use strace_manifest::commands::{execute_build, validate_args, BuildArgs};

/// Strace Manifest - list the files a traced program touched
#[derive(Parser, Debug)]
#[command(name = "strace-manifest")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Trace files to read in order ("-" or none for stdin)
    #[arg(value_name = "INPUT")]
    inputs: Vec<PathBuf>,

    /// Also write a JSON report to this path
    #[arg(long, value_name = "PATH")]
    report: Option<PathBuf>,

    /// Print run statistics to stderr
    #[arg(long)]
    summary: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging (stderr, keeps stdout for the manifest)
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let args = BuildArgs {
        inputs: cli.inputs,
        report: cli.report,
        print_summary: cli.summary,
    };

    // Validate args first
    validate_args(&args)?;

    // Execute build
    let stdout = io::stdout();
    execute_build(&args, BufWriter::new(stdout.lock()))?;

    Ok(())
}
