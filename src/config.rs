use std::path::PathBuf;

use crate::cli::Cli;
use crate::constants::CODE_EXTENSIONS;

/// Immutable run configuration derived from CLI arguments.
///
/// The extension allow-list lives here rather than being read from a global
/// so tests can vary it per run.
#[derive(Debug, Clone)]
pub struct Config {
    pub root: PathBuf,
    pub output: PathBuf,
    pub excluded_dir: String,
    pub extensions: Vec<String>,
}

impl Config {
    /// Build a Config from parsed CLI arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Config {
            root: PathBuf::from(&cli.root),
            output: PathBuf::from(&cli.output),
            excluded_dir: cli.exclude_dir.clone(),
            extensions: CODE_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
