// src/core/sync.rs
//! Two-directional synchronisation between a project's `.cursor/rules` and
//! the shared rules directory.

mod pull;
mod push;
mod reconcile;
#[cfg(test)]
mod test_utils;

use crate::core::git::VcsGateway;
use crate::core::paths::EnvSource;
use crate::models::{SyncOptions, SyncResult};
use crate::output::OutputSink;
use anyhow::Result;
use std::path::PathBuf;

/// Runs pull and push against injected collaborators.
///
/// `working_dir` is where the upward search for the project root starts and
/// what relative rules directories are resolved against.
pub struct SyncService<'a> {
    output: &'a dyn OutputSink,
    vcs: &'a dyn VcsGateway,
    env: &'a dyn EnvSource,
    working_dir: PathBuf,
}

impl<'a> SyncService<'a> {
    #[inline]
    #[must_use]
    pub const fn new(
        output: &'a dyn OutputSink,
        vcs: &'a dyn VcsGateway,
        env: &'a dyn EnvSource,
        working_dir: PathBuf,
    ) -> Self {
        Self {
            output,
            vcs,
            env,
            working_dir,
        }
    }

    /// Rules directory → `<project>/.cursor/rules`.
    ///
    /// # Errors
    ///
    /// Fails on setup problems only: no rules directory configured, no
    /// project root, an invalid pattern or ignore file, an unreadable source
    /// tree, or a destination that cannot be created. Per-file failures are
    /// reported through the output sink.
    pub fn pull(&self, options: &SyncOptions) -> Result<SyncResult> {
        pull::run(self, options)
    }

    /// `<project>/.cursor/rules` → rules directory, then commit the rules
    /// directory when anything changed.
    ///
    /// # Errors
    ///
    /// Same setup failures as [`SyncService::pull`], plus
    /// [`SyncError::ProjectRulesDirMissing`](crate::error::SyncError) when the
    /// project has no rules to push. Commit and push failures are reported,
    /// not returned.
    pub fn push(&self, options: &SyncOptions) -> Result<SyncResult> {
        push::run(self, options)
    }
}
