// src/models.rs
mod file_operation;
mod operation_type;
mod pattern_stats;
mod sync_options;
mod sync_result;

pub use file_operation::FileOperation;
pub use operation_type::OperationType;
pub use pattern_stats::PatternStats;
pub use sync_options::SyncOptions;
pub use sync_result::SyncResult;
