// tests/integration_tests/pull_test.rs
use super::common::{
    FakeVcs, RecordingOutput, Workspace, create_test_file, empty_env, sorted_ops,
};
use anyhow::Result;
use cursync::{OperationType, SyncOptions, SyncService};
use std::collections::HashMap;
use std::fs;

#[test]
fn test_pull_into_empty_project() -> Result<()> {
    let ws = Workspace::new()?;
    create_test_file(&ws.rules, "a.mdc", "---\nx\n---\nhello\n")?;
    create_test_file(&ws.rules, "b.txt", "data")?;
    let output = RecordingOutput::default();
    let vcs = FakeVcs::default();
    let env = empty_env();
    let service = SyncService::new(&output, &vcs, &env, ws.project.clone());

    let result = service.pull(&ws.options())?;

    assert!(result.has_changes());
    assert_eq!(
        sorted_ops(&result),
        vec![
            (OperationType::Add, "a.mdc".to_owned()),
            (OperationType::Add, "b.txt".to_owned())
        ]
    );
    assert_eq!(fs::read(ws.project_rules().join("b.txt"))?, b"data");
    assert_eq!(
        fs::read_to_string(ws.project_rules().join("a.mdc"))?,
        "---\nx\n---\nhello\n"
    );
    assert!(output.errors.borrow().is_empty());
    Ok(())
}

#[test]
fn test_pull_twice_is_idempotent() -> Result<()> {
    let ws = Workspace::new()?;
    create_test_file(&ws.rules, "a.mdc", "---\nx: 1\n---\nhello\r\n")?;
    create_test_file(&ws.rules, "lang/rust.mdc", "use clippy\n")?;
    let output = RecordingOutput::default();
    let vcs = FakeVcs::default();
    let env = empty_env();
    let service = SyncService::new(&output, &vcs, &env, ws.project.clone());

    service.pull(&ws.options())?;
    let second = service.pull(&ws.options())?;

    assert!(!second.has_changes());
    assert_eq!(output.operations.borrow().len(), 2);
    Ok(())
}

#[test]
fn test_pull_renamed_rule() -> Result<()> {
    let ws = Workspace::new()?;
    create_test_file(&ws.rules, "new.mdc", "same body")?;
    create_test_file(&ws.project_rules(), "old.mdc", "same body")?;
    let output = RecordingOutput::default();
    let vcs = FakeVcs::default();
    let env = empty_env();
    let service = SyncService::new(&output, &vcs, &env, ws.project.clone());

    let result = service.pull(&ws.options())?;

    let ops: Vec<(OperationType, &str)> = result
        .operations()
        .iter()
        .map(|op| (op.kind, op.relative_path.as_str()))
        .collect();
    assert_eq!(
        ops,
        vec![(OperationType::Delete, "old.mdc"), (OperationType::Add, "new.mdc")]
    );
    assert!(!ws.project_rules().join("old.mdc").exists());
    assert!(ws.project_rules().join("new.mdc").exists());
    Ok(())
}

#[test]
fn test_pull_updates_changed_file() -> Result<()> {
    let ws = Workspace::new()?;
    create_test_file(&ws.rules, "notes.txt", "v2")?;
    create_test_file(&ws.project_rules(), "notes.txt", "v1")?;
    let output = RecordingOutput::default();
    let vcs = FakeVcs::default();
    let env = empty_env();
    let service = SyncService::new(&output, &vcs, &env, ws.project.clone());

    let result = service.pull(&ws.options())?;

    assert_eq!(result.count(OperationType::Update), 1);
    assert_eq!(*output.operations.borrow(), vec!["* notes.txt".to_owned()]);
    assert_eq!(fs::read_to_string(ws.project_rules().join("notes.txt"))?, "v2");
    Ok(())
}

#[test]
fn test_pull_patterns_from_environment() -> Result<()> {
    let ws = Workspace::new()?;
    create_test_file(&ws.rules, "rust/a.mdc", "a")?;
    create_test_file(&ws.rules, "go/b.mdc", "b")?;
    let output = RecordingOutput::default();
    let vcs = FakeVcs::default();
    let env = HashMap::from([
        (
            "CURSOR_RULES_DIR".to_owned(),
            ws.rules.to_string_lossy().into_owned(),
        ),
        ("CURSOR_RULES_PATTERNS".to_owned(), "rust".to_owned()),
    ]);
    let service = SyncService::new(&output, &vcs, &env, ws.project.clone());

    let result = service.pull(&SyncOptions::default())?;

    assert_eq!(
        sorted_ops(&result),
        vec![(OperationType::Add, "rust/a.mdc".to_owned())]
    );
    assert!(!ws.project_rules().join("go/b.mdc").exists());
    Ok(())
}

#[test]
fn test_pull_creates_missing_rules_dir() -> Result<()> {
    let ws = Workspace::new()?;
    fs::remove_dir_all(ws.project.join(".cursor"))?;
    create_test_file(&ws.rules, "a.mdc", "a")?;
    let output = RecordingOutput::default();
    let vcs = FakeVcs::default();
    let env = empty_env();
    let service = SyncService::new(&output, &vcs, &env, ws.project.clone());

    service.pull(&ws.options())?;

    assert!(ws.project_rules().join("a.mdc").is_file());
    Ok(())
}

#[test]
fn test_pull_never_commits() -> Result<()> {
    let ws = Workspace::new()?;
    create_test_file(&ws.rules, "a.mdc", "a")?;
    let output = RecordingOutput::default();
    let vcs = FakeVcs::default();
    let env = empty_env();
    let service = SyncService::new(&output, &vcs, &env, ws.project.clone());

    service.pull(&ws.options())?;

    assert!(vcs.commits.borrow().is_empty());
    Ok(())
}
