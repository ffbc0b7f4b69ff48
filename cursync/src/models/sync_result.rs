// src/models/sync_result.rs
use crate::models::{FileOperation, OperationType};

/// Ordered record of everything a single sync call changed.
///
/// Operations can only be appended through [`SyncResult::push`], which keeps
/// `has_changes` equal to "operations is non-empty".
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SyncResult {
    operations: Vec<FileOperation>,
}

impl SyncResult {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            operations: Vec::new(),
        }
    }

    #[inline]
    pub fn push(&mut self, operation: FileOperation) {
        self.operations.push(operation);
    }

    #[inline]
    #[must_use]
    pub fn operations(&self) -> &[FileOperation] {
        &self.operations
    }

    #[inline]
    #[must_use]
    pub fn has_changes(&self) -> bool {
        !self.operations.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn count(&self, kind: OperationType) -> usize {
        self.operations.iter().filter(|op| op.kind == kind).count()
    }
}
