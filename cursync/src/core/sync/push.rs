// src/core/sync/push.rs
use crate::core::git::commit_message;
use crate::core::paths::{base_name, find_repo_root, project_rules_dir, resolve_rules_dir};
use crate::core::sync::SyncService;
use crate::core::sync::reconcile::{SyncPlan, ensure_dir, reconcile};
use crate::error::SyncError;
use crate::models::{SyncOptions, SyncResult};
use anyhow::Result;
use tracing::{info, warn};

pub(super) fn run(service: &SyncService<'_>, options: &SyncOptions) -> Result<SyncResult> {
    let rules_dir = service
        .working_dir
        .join(resolve_rules_dir(&options.rules_dir, service.env)?);
    let project_root = find_repo_root(&service.working_dir)?;
    let project_rules = project_rules_dir(&project_root);
    if !project_rules.is_dir() {
        return Err(SyncError::ProjectRulesDirMissing {
            path: project_rules,
        }
        .into());
    }
    info!(
        "pushing {} into {}",
        project_rules.display(),
        rules_dir.display()
    );

    ensure_dir(&rules_dir)?;
    let mut plan = SyncPlan::new(
        project_rules,
        rules_dir.clone(),
        &rules_dir,
        options,
        service.env,
    )?;
    plan.target_label = Some(base_name(&rules_dir));
    let result = reconcile(service.output, &plan)?;

    if result.has_changes() {
        let message = commit_message(&project_root);
        if let Err(err) =
            service
                .vcs
                .commit_changes(&rules_dir, &message, options.git_without_push)
        {
            warn!("git failed in {}: {err:#}", rules_dir.display());
            service
                .output
                .error(&format!("Error committing changes: {err:#}"));
        }
    }

    Ok(result)
}
