// src/error.rs
use std::path::PathBuf;

/// Setup failures that abort a whole `pull`/`push`/`config` invocation.
///
/// Per-file problems never become one of these; the engine reports them
/// through the output sink and moves on to the next file.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error(
        "rules directory not specified: use --rules-dir flag, `cursync config set rules-dir PATH` or set {env_var} environment variable"
    )]
    RulesDirNotSet { env_var: &'static str },

    #[error(
        "failed to find git root or .cursor directory starting from {}: neither .git nor .cursor found in parent directories",
        start.display()
    )]
    RepoRootNotFound { start: PathBuf },

    #[error("project rules directory {} not found. Nothing to push", path.display())]
    ProjectRulesDirMissing { path: PathBuf },

    #[error("invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("failed to create destination directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown config key: {0}")]
    UnknownConfigKey(String),

    #[error("invalid boolean value for {key}: '{value}' (expected true/false)")]
    InvalidBool { key: String, value: String },
}
