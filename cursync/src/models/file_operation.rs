// src/models/file_operation.rs
use crate::models::OperationType;
use std::path::PathBuf;

/// One file that was actually written or removed during a sync.
///
/// For deletions `source_path` is the path the file would have had on the
/// source side; it never exists on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOperation {
    pub kind: OperationType,
    pub source_path: PathBuf,
    pub target_path: PathBuf,
    pub relative_path: String,
}
