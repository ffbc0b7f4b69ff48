// src/core/paths.rs
use crate::error::SyncError;
use anyhow::{Context as _, Result, anyhow};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Component, Path, PathBuf};

pub const CURSOR_DIR_NAME: &str = ".cursor";
pub const RULES_DIR_NAME: &str = "rules";
pub const GIT_DIR_NAME: &str = ".git";
pub const RULES_DIR_ENV_VAR: &str = "CURSOR_RULES_DIR";

/// Read-only view of environment variables.
pub trait EnvSource {
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    #[inline]
    fn var(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    #[inline]
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Resolves the rules directory from an explicit value, falling back to
/// `CURSOR_RULES_DIR`. A leading `~/` is expanded to the home directory.
///
/// # Errors
///
/// Returns [`SyncError::RulesDirNotSet`] when both the explicit value and the
/// environment variable are empty.
pub fn resolve_rules_dir(flag_value: &str, env: &dyn EnvSource) -> Result<PathBuf> {
    if !flag_value.is_empty() {
        return Ok(expand_home(flag_value));
    }

    match env.var(RULES_DIR_ENV_VAR) {
        Some(value) if !value.is_empty() => Ok(expand_home(&value)),
        _ => Err(SyncError::RulesDirNotSet {
            env_var: RULES_DIR_ENV_VAR,
        }
        .into()),
    }
}

fn expand_home(raw: &str) -> PathBuf {
    if let Some(rest) = raw.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(raw)
}

/// Walks upward from `start_dir` and returns the first directory that holds
/// either a `.git` entry or a `.cursor` directory.
///
/// # Errors
///
/// Fails when the current directory cannot be read (for relative input) or
/// when the filesystem root is reached without finding a marker.
pub fn find_repo_root(start_dir: &Path) -> Result<PathBuf> {
    let absolute = if start_dir.is_absolute() {
        start_dir.to_path_buf()
    } else {
        env::current_dir()
            .context("failed to get current directory")?
            .join(start_dir)
    };

    let mut current = absolute.as_path();
    loop {
        if current.join(GIT_DIR_NAME).exists() || current.join(CURSOR_DIR_NAME).is_dir() {
            return Ok(current.to_path_buf());
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => {
                return Err(SyncError::RepoRootNotFound {
                    start: absolute.clone(),
                }
                .into());
            }
        }
    }
}

/// `<root>/.cursor/rules`
#[inline]
#[must_use]
pub fn project_rules_dir(project_root: &Path) -> PathBuf {
    project_root.join(CURSOR_DIR_NAME).join(RULES_DIR_NAME)
}

/// Path of `file` relative to `base_dir`, with `/` separators.
///
/// # Errors
///
/// Fails when `file` does not live under `base_dir` or tries to climb out of
/// it with `..`.
pub fn relative_path(file: &Path, base_dir: &Path) -> Result<String> {
    let rel = relative_components(file, base_dir)?;
    Ok(normalize_path(&rel.to_string_lossy()))
}

fn relative_components(file: &Path, base_dir: &Path) -> Result<PathBuf> {
    let rel = file.strip_prefix(base_dir).map_err(|_| {
        anyhow!(
            "file path {} is not within base directory {}",
            file.display(),
            base_dir.display()
        )
    })?;
    if rel.as_os_str().is_empty() || rel.components().any(|c| c == Component::ParentDir) {
        return Err(anyhow!(
            "cannot determine relative path of {} against {}",
            file.display(),
            base_dir.display()
        ));
    }
    Ok(rel.to_path_buf())
}

/// Converts platform separators to `/`.
#[inline]
#[must_use]
pub fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}

/// Final component of `path`, or the whole path when it has none.
#[must_use]
pub fn base_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.to_string_lossy().into_owned(),
        |name| name.to_string_lossy().into_owned(),
    )
}

/// Maps `src_file` (under `src_base`) onto `dst_base` and makes sure the
/// destination's parent directory exists.
///
/// # Errors
///
/// Fails when the relative path cannot be computed or the parent directory
/// cannot be created.
pub fn recreate_directory_structure(
    src_file: &Path,
    src_base: &Path,
    dst_base: &Path,
) -> Result<PathBuf> {
    let rel = relative_components(src_file, src_base)?;
    let dst_file = dst_base.join(rel);
    if let Some(parent) = dst_file.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("cannot create directory {}", parent.display()))?;
    }
    Ok(dst_file)
}
