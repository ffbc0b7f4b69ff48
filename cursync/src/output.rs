// src/output.rs
use crate::models::OperationType;
use colored::Colorize as _;

/// Where user-facing progress goes. Nothing returned here affects the sync.
pub trait OutputSink {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
    /// One synced file. `target` names the destination directory for push.
    fn operation(&self, kind: OperationType, relative_path: &str, target: Option<&str>);
}

/// ` (to rules)`, or ` (from rules)` for deletions.
fn target_suffix(kind: OperationType, target: Option<&str>) -> String {
    match (kind, target) {
        (_, None) => String::new(),
        (OperationType::Delete, Some(target)) => format!(" (from {target})"),
        (_, Some(target)) => format!(" (to {target})"),
    }
}

/// Plain (uncoloured) line for an operation, e.g. `+ rust.mdc (to rules)`.
#[must_use]
pub fn format_operation(kind: OperationType, relative_path: &str, target: Option<&str>) -> String {
    format!(
        "{} {relative_path}{}",
        kind.symbol(),
        target_suffix(kind, target)
    )
}

/// Writes coloured operation lines to stdout, errors to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleOutput;

impl OutputSink for ConsoleOutput {
    fn info(&self, message: &str) {
        println!("{message}");
    }

    fn error(&self, message: &str) {
        eprintln!("{} {message}", "error:".red().bold());
    }

    fn operation(&self, kind: OperationType, relative_path: &str, target: Option<&str>) {
        let line = format_operation(kind, relative_path, target);
        let line = match kind {
            OperationType::Add => line.green(),
            OperationType::Update => line.yellow(),
            OperationType::Delete => line.red(),
        };
        println!("{line}");
    }
}
