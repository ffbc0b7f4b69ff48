// src/core/sync/pull.rs
use crate::core::paths::{find_repo_root, project_rules_dir, resolve_rules_dir};
use crate::core::sync::SyncService;
use crate::core::sync::reconcile::{SyncPlan, ensure_dir, reconcile};
use crate::models::{SyncOptions, SyncResult};
use anyhow::Result;
use tracing::info;

pub(super) fn run(service: &SyncService<'_>, options: &SyncOptions) -> Result<SyncResult> {
    let rules_dir = service
        .working_dir
        .join(resolve_rules_dir(&options.rules_dir, service.env)?);
    let project_root = find_repo_root(&service.working_dir)?;
    let project_rules = project_rules_dir(&project_root);
    info!(
        "pulling {} into {}",
        rules_dir.display(),
        project_rules.display()
    );

    ensure_dir(&project_rules)?;
    let plan = SyncPlan::new(
        rules_dir.clone(),
        project_rules,
        &rules_dir,
        options,
        service.env,
    )?;
    reconcile(service.output, &plan)
}
