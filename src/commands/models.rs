use crate::utils::config::STDIN_SOURCE;
use std::path::PathBuf;

/// Arguments for the build command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, Default)]
pub struct BuildArgs {
    /// Trace files, read in order ("-" = stdin, empty = stdin)
    pub inputs: Vec<PathBuf>,

    /// Output path for the JSON report (optional)
    pub report: Option<PathBuf>,

    /// Print run summary to stderr
    pub print_summary: bool,
}

/// Where trace lines come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// Name used in logs, error context and the report
    pub fn name(&self) -> String {
        match self {
            Self::Stdin => STDIN_SOURCE.to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

impl BuildArgs {
    /// Input sources in reading order
    pub fn sources(&self) -> Vec<InputSource> {
        if self.inputs.is_empty() {
            return vec![InputSource::Stdin];
        }

        self.inputs
            .iter()
            .map(|path| {
                if path.as_os_str() == STDIN_SOURCE {
                    InputSource::Stdin
                } else {
                    InputSource::File(path.clone())
                }
            })
            .collect()
    }
}
