use std::path::{Path, PathBuf};

use anyhow::Result;
use ignore::WalkBuilder;

/// Extension of the file name with splitext semantics: the text after the
/// last dot, dot included. Dotfiles and extensionless names have none.
pub fn extension_of(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_str()?;
    Some(format!(".{ext}"))
}

/// Returns all collectable file paths under `root`, lexicographically sorted
/// so output ordering is reproducible across runs. Directories named
/// `excluded_dir` are pruned before descent, and `output` itself is never a
/// candidate even when its extension matches.
pub fn gather_source_paths(
    root: &Path,
    output: &Path,
    excluded_dir: &str,
    extensions: &[String],
) -> Result<Vec<PathBuf>> {
    let output_canon = dunce::canonicalize(output).ok();

    let excluded = excluded_dir.to_string();
    let walker = WalkBuilder::new(root)
        .follow_links(false)
        // Plain recursive walk: no gitignore or hidden-file filtering, the
        // only pruning is the excluded directory name.
        .standard_filters(false)
        .filter_entry(move |entry| {
            !(entry.file_type().is_some_and(|ft| ft.is_dir())
                && entry.file_name().to_string_lossy() == excluded)
        })
        .build();

    let mut results = Vec::new();
    for entry_result in walker {
        match entry_result {
            Ok(entry) => {
                if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                    continue;
                }
                let path = entry.path();
                if !has_allowed_extension(path, extensions) {
                    continue;
                }
                // Belt and suspenders with the pruning filter above.
                let rel = path.strip_prefix(root).unwrap_or(path);
                if passes_through(rel, excluded_dir) {
                    continue;
                }
                if let Some(out) = &output_canon
                    && dunce::canonicalize(path).is_ok_and(|c| &c == out)
                {
                    continue;
                }
                results.push(path.to_path_buf());
            }
            Err(e) => {
                tracing::warn!("Could not process entry under {:?}: {:?}", root, e);
            }
        }
    }

    results.sort();
    results.dedup();
    Ok(results)
}

fn has_allowed_extension(
    path: &Path,
    extensions: &[String],
) -> bool {
    extension_of(path).is_some_and(|ext| extensions.iter().any(|e| *e == ext))
}

fn passes_through(
    path: &Path,
    excluded_dir: &str,
) -> bool {
    path.components()
        .any(|c| c.as_os_str().to_string_lossy() == excluded_dir)
}
