// tests/integration_tests/push_test.rs
use super::common::{
    FakeVcs, RecordingOutput, Workspace, create_test_file, empty_env, sorted_ops,
};
use anyhow::Result;
use cursync::{OperationType, SyncError, SyncOptions, SyncService};
use std::fs;

#[test]
fn test_push_copies_and_commits() -> Result<()> {
    let ws = Workspace::new()?;
    create_test_file(&ws.project_rules(), "rust.mdc", "---\nglobs: '*.rs'\n---\nbody\n")?;
    create_test_file(&ws.project_rules(), "nested/go.mdc", "go body\n")?;
    let output = RecordingOutput::default();
    let vcs = FakeVcs::default();
    let env = empty_env();
    let service = SyncService::new(&output, &vcs, &env, ws.project.clone());

    let result = service.push(&ws.options())?;

    assert_eq!(
        sorted_ops(&result),
        vec![
            (OperationType::Add, "nested/go.mdc".to_owned()),
            (OperationType::Add, "rust.mdc".to_owned())
        ]
    );
    assert!(ws.rules.join("nested/go.mdc").is_file());
    assert_eq!(
        *vcs.commits.borrow(),
        vec![(
            ws.rules.clone(),
            "Sync cursor rules: updated from project my-project".to_owned(),
            false
        )]
    );
    let mut lines = output.operations.borrow().clone();
    lines.sort();
    assert_eq!(
        lines,
        vec![
            "+ nested/go.mdc (to rules-repo)".to_owned(),
            "+ rust.mdc (to rules-repo)".to_owned()
        ]
    );
    Ok(())
}

#[test]
fn test_push_without_changes_skips_commit() -> Result<()> {
    let ws = Workspace::new()?;
    create_test_file(&ws.project_rules(), "a.mdc", "---\nlocal: true\n---\nbody\n")?;
    create_test_file(&ws.rules, "a.mdc", "---\nshared: true\n---\nbody\n")?;
    let output = RecordingOutput::default();
    let vcs = FakeVcs::default();
    let env = empty_env();
    let service = SyncService::new(&output, &vcs, &env, ws.project.clone());

    let result = service.push(&ws.options())?;

    assert!(!result.has_changes());
    assert!(vcs.commits.borrow().is_empty());
    Ok(())
}

#[test]
fn test_push_then_pull_round_trip() -> Result<()> {
    let ws = Workspace::new()?;
    create_test_file(&ws.project_rules(), "a.mdc", "---\nx: 1\n---\nbody\n")?;
    let output = RecordingOutput::default();
    let vcs = FakeVcs::default();
    let env = empty_env();
    let service = SyncService::new(&output, &vcs, &env, ws.project.clone());

    service.push(&ws.options())?;
    let pulled = service.pull(&ws.options())?;

    assert!(!pulled.has_changes());
    Ok(())
}

#[test]
fn test_push_git_without_push() -> Result<()> {
    let ws = Workspace::new()?;
    create_test_file(&ws.project_rules(), "a.mdc", "a")?;
    let output = RecordingOutput::default();
    let vcs = FakeVcs::default();
    let env = empty_env();
    let service = SyncService::new(&output, &vcs, &env, ws.project.clone());

    service.push(&SyncOptions {
        git_without_push: true,
        ..ws.options()
    })?;

    let commits = vcs.commits.borrow();
    assert_eq!(commits.len(), 1);
    assert!(commits[0].2, "push must be skipped");
    Ok(())
}

#[test]
fn test_push_git_failure_keeps_result() -> Result<()> {
    let ws = Workspace::new()?;
    create_test_file(&ws.project_rules(), "a.mdc", "a")?;
    let output = RecordingOutput::default();
    let vcs = FakeVcs {
        fail: true,
        ..FakeVcs::default()
    };
    let env = empty_env();
    let service = SyncService::new(&output, &vcs, &env, ws.project.clone());

    let result = service.push(&ws.options())?;

    assert!(result.has_changes());
    assert!(ws.rules.join("a.mdc").is_file());
    let errors = output.errors.borrow();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("push rejected by remote"));
    Ok(())
}

#[test]
fn test_push_removes_stale_rules_but_not_git() -> Result<()> {
    let ws = Workspace::new()?;
    create_test_file(&ws.rules, ".git/config", "[core]\n")?;
    create_test_file(&ws.rules, "stale.mdc", "old")?;
    create_test_file(&ws.project_rules(), "fresh.mdc", "new")?;
    let output = RecordingOutput::default();
    let vcs = FakeVcs::default();
    let env = empty_env();
    let service = SyncService::new(&output, &vcs, &env, ws.project.clone());

    let result = service.push(&ws.options())?;

    assert_eq!(
        sorted_ops(&result),
        vec![
            (OperationType::Add, "fresh.mdc".to_owned()),
            (OperationType::Delete, "stale.mdc".to_owned())
        ]
    );
    assert!(ws.rules.join(".git/config").is_file());
    assert!(
        output
            .operations
            .borrow()
            .contains(&"- stale.mdc (from rules-repo)".to_owned())
    );
    Ok(())
}

#[test]
fn test_push_without_project_rules() -> Result<()> {
    let ws = Workspace::new()?;
    fs::remove_dir_all(ws.project_rules())?;
    let output = RecordingOutput::default();
    let vcs = FakeVcs::default();
    let env = empty_env();
    let service = SyncService::new(&output, &vcs, &env, ws.project.clone());

    let err = service
        .push(&ws.options())
        .err()
        .ok_or_else(|| anyhow::anyhow!("push should fail"))?;

    assert!(matches!(
        err.downcast_ref::<SyncError>(),
        Some(SyncError::ProjectRulesDirMissing { .. })
    ));
    assert!(err.to_string().contains("Nothing to push"));
    Ok(())
}

#[test]
fn test_push_creates_missing_rules_dir() -> Result<()> {
    let ws = Workspace::new()?;
    fs::remove_dir_all(&ws.rules)?;
    create_test_file(&ws.project_rules(), "a.mdc", "a")?;
    let output = RecordingOutput::default();
    let vcs = FakeVcs::default();
    let env = empty_env();
    let service = SyncService::new(&output, &vcs, &env, ws.project.clone());

    let result = service.push(&ws.options())?;

    assert_eq!(result.count(OperationType::Add), 1);
    assert!(ws.rules.join("a.mdc").is_file());
    Ok(())
}
