// src/core/ignore/loader.rs
use crate::core::ignore::IgnoreList;
use anyhow::{Context as _, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

pub const IGNORE_FILE_NAME: &str = ".ruleignore";

/// Loads the ignore list from `<rules_dir>/.ruleignore`.
///
/// The ignore file itself is always part of the list, so it never takes part
/// in a sync. A missing file yields a list holding only that entry.
///
/// # Errors
///
/// This function may return an error if:
/// * The ignore file exists but cannot be read
/// * A line contains invalid glob syntax
#[inline]
pub fn load_ignore_list(rules_dir: &Path) -> Result<IgnoreList> {
    let mut list = IgnoreList::new();
    list.add_pattern(&format!("/{IGNORE_FILE_NAME}"))?;

    let ignore_file = rules_dir.join(IGNORE_FILE_NAME);
    if !ignore_file.is_file() {
        return Ok(list);
    }

    let content = fs::read_to_string(&ignore_file)
        .with_context(|| format!("Failed to read ignore file: {}", ignore_file.display()))?;
    for (number, line) in content.lines().enumerate() {
        list.add_pattern(line).with_context(|| {
            format!("{}:{}", ignore_file.display(), number.saturating_add(1))
        })?;
    }
    debug!("loaded {} ignore rules from {}", list.len(), ignore_file.display());

    Ok(list)
}
