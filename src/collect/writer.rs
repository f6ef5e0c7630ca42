use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use path_slash::PathExt;

use crate::collect::types::{CollectReport, ReadFailure};

/// One path-headed block: header line, raw content, blank-line separator.
/// The content goes in unmodified; downstream consumers rely on this exact
/// shape, so keep it byte-stable.
pub fn format_block(
    rel_path: &str,
    contents: &str,
) -> String {
    format!("--- {rel_path} ---\n{contents}\n\n")
}

/// Reads `path` as strict UTF-8. Decode errors are ordinary per-file
/// failures, the same as permission or I/O errors.
pub fn read_source(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    String::from_utf8(bytes).map_err(|e| anyhow!("invalid UTF-8: {e}"))
}

/// Writes one block per readable file to `out`, in the given order, with
/// header paths relative to `root` using forward slashes. Read failures are
/// reported on stderr and recorded; they never abort the run. Write errors
/// on the output stream are fatal.
pub fn write_blocks<W: Write>(
    root: &Path,
    out: W,
    files: &[PathBuf],
) -> Result<CollectReport> {
    let mut out = BufWriter::new(out);

    let mut report = CollectReport::default();
    for path in files {
        let rel = path.strip_prefix(root).unwrap_or(path).to_slash_lossy();
        match read_source(path) {
            Ok(contents) => {
                out.write_all(format_block(&rel, &contents).as_bytes())?;
                println!("Added: {rel}");
                report.files_written += 1;
            }
            Err(e) => {
                eprintln!("Error processing {rel}: {e}");
                report.failures.push(ReadFailure {
                    path: path.clone(),
                    message: e.to_string(),
                });
            }
        }
    }
    out.flush()?;
    Ok(report)
}
