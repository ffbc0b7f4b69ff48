// src/core/git.rs
use anyhow::{Context as _, Result};
use std::path::Path;
use std::process::{Command, Output};
use tracing::{debug, info};

use crate::core::paths::base_name;

/// Stages, commits and optionally pushes a directory's repository.
pub trait VcsGateway {
    /// # Errors
    ///
    /// Fails when staging, committing or pushing fails.
    fn commit_changes(&self, repo_dir: &Path, message: &str, skip_push: bool) -> Result<()>;
}

/// Gateway backed by the `git` executable on `PATH`.
#[derive(Debug, Default, Clone, Copy)]
pub struct GitCli;

fn git(repo_dir: &Path, args: &[&str]) -> Result<Output> {
    debug!("git {} (in {})", args.join(" "), repo_dir.display());
    Command::new("git")
        .args(args)
        .current_dir(repo_dir)
        .output()
        .with_context(|| format!("failed to run git {}", args.join(" ")))
}

fn failure(step: &str, output: &Output) -> anyhow::Error {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let detail = if stderr.trim().is_empty() {
        stdout.trim().to_owned()
    } else {
        stderr.trim().to_owned()
    };
    anyhow::anyhow!("git {step} failed: {detail}")
}

impl VcsGateway for GitCli {
    fn commit_changes(&self, repo_dir: &Path, message: &str, skip_push: bool) -> Result<()> {
        let added = git(repo_dir, &["add", "."])?;
        if !added.status.success() {
            return Err(failure("add", &added));
        }

        let committed = git(repo_dir, &["commit", "-m", message])?;
        if !committed.status.success() {
            // Exit status 1 means there was nothing to commit.
            if committed.status.code() != Some(1) {
                return Err(failure("commit", &committed));
            }
            debug!("nothing to commit in {}", repo_dir.display());
        }

        if skip_push {
            return Ok(());
        }

        let remote = git(repo_dir, &["remote", "get-url", "origin"])?;
        if !remote.status.success() {
            info!("no origin remote in {}, skipping push", repo_dir.display());
            return Ok(());
        }

        let pushed = git(repo_dir, &["push"])?;
        if !pushed.status.success() {
            return Err(failure("push", &pushed));
        }
        Ok(())
    }
}

/// Commit message recorded when pushing from the project at `project_root`.
#[must_use]
pub fn commit_message(project_root: &Path) -> String {
    format!(
        "Sync cursor rules: updated from project {}",
        base_name(project_root)
    )
}
