// src/core/pattern.rs
mod matcher;
mod parse;

pub use matcher::{matches, matches_any};
pub use parse::{PATTERNS_ENV_VAR, dedupe, parse_patterns, split_trim_filter, validate};

use crate::core::paths::{base_name, relative_path};
use crate::models::PatternStats;
use std::path::{Path, PathBuf};

/// The string a file is matched by: its path relative to `base_dir` when that
/// can be computed, otherwise its base name.
fn match_candidate(file: &Path, base_dir: &Path) -> String {
    if base_dir.as_os_str().is_empty() {
        return base_name(file);
    }
    relative_path(file, base_dir).unwrap_or_else(|_| base_name(file))
}

/// Keeps the files selected by at least one pattern. An empty pattern list
/// selects everything and returns `files` unchanged.
#[must_use]
pub fn filter_by_patterns(files: &[PathBuf], base_dir: &Path, patterns: &[String]) -> Vec<PathBuf> {
    if patterns.is_empty() {
        return files.to_vec();
    }

    files
        .iter()
        .filter(|file| matches_any(&match_candidate(file, base_dir), patterns))
        .cloned()
        .collect()
}

/// Counts how many files each pattern selects.
#[must_use]
pub fn analyze_patterns(files: &[PathBuf], base_dir: &Path, patterns: &[String]) -> PatternStats {
    let mut stats = PatternStats::new();
    let mut counts = vec![0_u64; patterns.len()];

    for file in files {
        stats.total_files = stats.total_files.saturating_add(1);
        let candidate = match_candidate(file, base_dir);

        let mut selected = false;
        for (pattern, count) in patterns.iter().zip(counts.iter_mut()) {
            if matches(&candidate, pattern) {
                *count = count.saturating_add(1);
                selected = true;
            }
        }
        if selected || patterns.is_empty() {
            stats.matched_files = stats.matched_files.saturating_add(1);
        }
    }

    stats.matched_pattern_counts = patterns.iter().cloned().zip(counts).collect();
    stats
}
