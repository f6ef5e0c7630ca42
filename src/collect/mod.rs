pub mod types;
pub mod walk;
pub mod writer;

pub use types::{CollectReport, ReadFailure};

use std::fs::File;

use anyhow::{Context, Result, bail};

use crate::config::Config;

/// Runs one full collection pass: validate the root, truncate the output,
/// gather candidate paths in lexicographic order, then write one block per
/// readable file. Per-file read failures end up in the report; only startup
/// problems (missing root, uncreatable output) are fatal.
pub fn collect(config: &Config) -> Result<CollectReport> {
    if !config.root.is_dir() {
        bail!(
            "root directory {:?} does not exist or is not a directory",
            config.root
        );
    }

    // Created before the walk so the walker can compare candidates against
    // its canonical path, and so an unwritable output fails before any work.
    let out = File::create(&config.output)
        .with_context(|| format!("cannot create output file {:?}", config.output))?;

    let files = walk::gather_source_paths(
        &config.root,
        &config.output,
        &config.excluded_dir,
        &config.extensions,
    )?;

    writer::write_blocks(&config.root, out, &files)
}
