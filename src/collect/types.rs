use std::path::PathBuf;

/// One failed file read. The run continues past these; they are collected
/// rather than unwound.
#[derive(Debug)]
pub struct ReadFailure {
    pub path: PathBuf,
    pub message: String,
}

/// Aggregate result of a collection run.
#[derive(Debug, Default)]
pub struct CollectReport {
    pub files_written: usize,
    pub failures: Vec<ReadFailure>,
}
