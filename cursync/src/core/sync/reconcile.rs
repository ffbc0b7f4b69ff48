// src/core/sync/reconcile.rs
use crate::core::comparator::are_equal;
use crate::core::copier::copy;
use crate::core::files::{file_exists, find_all_files, remove_file};
use crate::core::ignore::{IgnoreList, load_ignore_list};
use crate::core::paths::{EnvSource, recreate_directory_structure, relative_path};
use crate::core::pattern::{
    PATTERNS_ENV_VAR, analyze_patterns, dedupe, filter_by_patterns, parse_patterns, validate,
};
use crate::error::SyncError;
use crate::models::{FileOperation, OperationType, SyncOptions, SyncResult};
use crate::output::OutputSink;
use anyhow::{Context as _, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Everything one direction of a sync needs, resolved up front.
#[derive(Debug)]
pub(super) struct SyncPlan {
    pub source: PathBuf,
    pub destination: PathBuf,
    /// Raw list used for source discovery.
    pub patterns: Vec<String>,
    /// Deduplicated list used for destination cleanup.
    pub effective_patterns: Vec<String>,
    pub ignore: IgnoreList,
    pub overwrite_headers: bool,
    /// Suffix label for operation lines, set for push.
    pub target_label: Option<String>,
}

impl SyncPlan {
    /// # Errors
    ///
    /// Fails when a pattern is not a valid glob or the ignore file in
    /// `rules_dir` cannot be loaded.
    pub fn new(
        source: PathBuf,
        destination: PathBuf,
        rules_dir: &Path,
        options: &SyncOptions,
        env: &dyn EnvSource,
    ) -> Result<Self> {
        let patterns = parse_patterns(&options.file_patterns, PATTERNS_ENV_VAR, env);
        validate(&patterns)?;
        let effective_patterns = dedupe(&patterns);
        let ignore = load_ignore_list(rules_dir)?;

        Ok(Self {
            source,
            destination,
            patterns,
            effective_patterns,
            ignore,
            overwrite_headers: options.overwrite_headers,
            target_label: None,
        })
    }
}

/// Creates `dir` (and parents) or fails with [`SyncError::CreateDir`].
pub(super) fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| SyncError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    Ok(())
}

struct Entry {
    path: PathBuf,
    relative: String,
}

/// Pattern-filtered, ignore-filtered files under `base`, paired with their
/// relative paths.
fn select(
    files: &[PathBuf],
    base: &Path,
    patterns: &[String],
    ignore: &IgnoreList,
    output: &dyn OutputSink,
) -> Vec<Entry> {
    filter_by_patterns(files, base, patterns)
        .into_iter()
        .filter_map(|path| match relative_path(&path, base) {
            Ok(relative) => Some(Entry { path, relative }),
            Err(err) => {
                output.error(&format!("Error resolving {}: {err:#}", path.display()));
                None
            }
        })
        .filter(|entry| {
            let ignored = ignore.matches(&entry.relative);
            if ignored {
                debug!("ignoring {}", entry.relative);
            }
            !ignored
        })
        .collect()
}

fn report_unmatched(output: &dyn OutputSink, files: &[PathBuf], plan: &SyncPlan) {
    if plan.patterns.is_empty() {
        return;
    }
    let stats = analyze_patterns(files, &plan.source, &plan.effective_patterns);
    debug!(
        "patterns selected {} of {} files ({:.1}%)",
        stats.matched_files,
        stats.total_files,
        stats.calculate_percentage()
    );
    for pattern in stats.unmatched_patterns() {
        output.info(&format!("No files match pattern {pattern:?}"));
    }
}

/// Removes destination files whose relative path has no source counterpart.
fn delete_stale(
    output: &dyn OutputSink,
    plan: &SyncPlan,
    source_paths: &HashSet<&str>,
    result: &mut SyncResult,
) {
    let files = match find_all_files(&plan.destination) {
        Ok(files) => files,
        Err(err) => {
            output.error(&format!("Error listing destination files: {err:#}"));
            return;
        }
    };

    let existing = select(
        &files,
        &plan.destination,
        &plan.effective_patterns,
        &plan.ignore,
        output,
    );
    for entry in existing {
        if source_paths.contains(entry.relative.as_str()) {
            continue;
        }
        match remove_file(&entry.path) {
            Ok(()) => {
                info!("deleted {}", entry.path.display());
                output.operation(
                    OperationType::Delete,
                    &entry.relative,
                    plan.target_label.as_deref(),
                );
                result.push(FileOperation {
                    kind: OperationType::Delete,
                    source_path: plan.source.join(&entry.relative),
                    target_path: entry.path,
                    relative_path: entry.relative,
                });
            }
            Err(err) => {
                warn!("failed to delete {}: {err}", entry.path.display());
                output.error(&format!("Error deleting {}: {err}", entry.relative));
            }
        }
    }
}

/// Copies one source file if it is new or differs. Returns the operation kind
/// that was applied, if any.
fn sync_file(plan: &SyncPlan, entry: &Entry) -> Result<Option<(OperationType, PathBuf)>> {
    let target = recreate_directory_structure(&entry.path, &plan.source, &plan.destination)?;
    let existed = file_exists(&target)
        .with_context(|| format!("cannot check {}", target.display()))?;

    if existed {
        match are_equal(&entry.path, &target, plan.overwrite_headers) {
            Ok(true) => {
                debug!("unchanged {}", entry.relative);
                return Ok(None);
            }
            Ok(false) => {}
            Err(err) => warn!("comparing {} failed, copying anyway: {err:#}", entry.relative),
        }
    }

    copy(&entry.path, &target, plan.overwrite_headers)?;
    let kind = if existed {
        OperationType::Update
    } else {
        OperationType::Add
    };
    Ok(Some((kind, target)))
}

/// Applies one direction of a sync: deletions first, then additions and
/// updates in discovery order.
///
/// # Errors
///
/// Fails only when the source tree cannot be listed.
pub(super) fn reconcile(output: &dyn OutputSink, plan: &SyncPlan) -> Result<SyncResult> {
    let all_files = find_all_files(&plan.source)
        .with_context(|| format!("cannot read source directory {}", plan.source.display()))?;
    report_unmatched(output, &all_files, plan);

    let sources = select(&all_files, &plan.source, &plan.patterns, &plan.ignore, output);
    let source_paths: HashSet<&str> = sources.iter().map(|e| e.relative.as_str()).collect();

    let mut result = SyncResult::new();
    delete_stale(output, plan, &source_paths, &mut result);

    for entry in &sources {
        match sync_file(plan, entry) {
            Ok(Some((kind, target))) => {
                debug!("{kind} {}", target.display());
                output.operation(kind, &entry.relative, plan.target_label.as_deref());
                result.push(FileOperation {
                    kind,
                    source_path: entry.path.clone(),
                    target_path: target,
                    relative_path: entry.relative.clone(),
                });
            }
            Ok(None) => {}
            Err(err) => {
                warn!("failed to sync {}: {err:#}", entry.relative);
                output.error(&format!("Error syncing {}: {err:#}", entry.relative));
            }
        }
    }

    Ok(result)
}
