// src/core/sync/test_utils.rs
use crate::core::git::VcsGateway;
use crate::models::OperationType;
use crate::output::{OutputSink, format_operation};
use anyhow::{Result, bail};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

pub fn write(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(name);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, content)?;
    Ok(file_path)
}

#[derive(Debug, Default)]
pub struct RecordingOutput {
    infos: RefCell<Vec<String>>,
    errors: RefCell<Vec<String>>,
    operations: RefCell<Vec<String>>,
}

impl RecordingOutput {
    pub fn infos(&self) -> Vec<String> {
        self.infos.borrow().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.borrow().clone()
    }

    pub fn operations(&self) -> Vec<String> {
        self.operations.borrow().clone()
    }
}

impl OutputSink for RecordingOutput {
    fn info(&self, message: &str) {
        self.infos.borrow_mut().push(message.to_owned());
    }

    fn error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_owned());
    }

    fn operation(&self, kind: OperationType, relative_path: &str, target: Option<&str>) {
        self.operations
            .borrow_mut()
            .push(format_operation(kind, relative_path, target));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitCall {
    pub repo_dir: PathBuf,
    pub message: String,
    pub skip_push: bool,
}

#[derive(Debug, Default)]
pub struct FakeVcs {
    pub fail: bool,
    calls: RefCell<Vec<CommitCall>>,
}

impl FakeVcs {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<CommitCall> {
        self.calls.borrow().clone()
    }
}

impl VcsGateway for FakeVcs {
    fn commit_changes(&self, repo_dir: &Path, message: &str, skip_push: bool) -> Result<()> {
        self.calls.borrow_mut().push(CommitCall {
            repo_dir: repo_dir.to_path_buf(),
            message: message.to_owned(),
            skip_push,
        });
        if self.fail {
            bail!("remote rejected");
        }
        Ok(())
    }
}
