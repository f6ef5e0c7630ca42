use clap::Parser;

use crate::constants::{DEFAULT_EXCLUDED_DIR, DEFAULT_OUTPUT_FILE};

#[derive(Parser, Debug)]
#[command(name = "codecat")]
#[command(
    about = "Concatenate source files under a directory into a single text file, \
                   one path-headed block per file."
)]
pub struct Cli {
    /// Directory to walk.
    #[arg(default_value = ".")]
    pub root: String,

    /// Output file, truncated and recreated each run.
    #[arg(short = 'o', long = "output", default_value = DEFAULT_OUTPUT_FILE)]
    pub output: String,

    /// Directory base name pruned from traversal.
    #[arg(long = "exclude-dir", default_value = DEFAULT_EXCLUDED_DIR)]
    pub exclude_dir: String,
}
