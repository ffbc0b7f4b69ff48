// src/models/sync_options.rs

/// Per-invocation knobs, already merged from flags and the config file.
///
/// Empty strings mean "consult the environment"; an empty pattern string
/// that is still empty after the environment lookup means "no filtering".
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SyncOptions {
    pub rules_dir: String,
    pub git_without_push: bool,
    pub overwrite_headers: bool,
    pub file_patterns: String,
}
