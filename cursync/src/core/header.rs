// src/core/header.rs
//! Leading metadata block ("header") of rule files.
//!
//! A header opens with a line that is exactly `---` and closes with the next
//! `---` line, which must appear within [`MAX_HEADER_LINES`] lines of the
//! opening one. All functions expect content that has already been through
//! [`crate::core::files::normalize_content`].

use std::path::Path;

pub const HEADER_SEPARATOR: &str = "---";
/// How many lines after the opening separator are scanned for the closing one.
pub const MAX_HEADER_LINES: usize = 20;
/// Files with this extension (any case) get header-aware compare and copy.
pub const RULE_FILE_EXTENSION: &str = "mdc";

#[must_use]
pub fn is_rule_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(RULE_FILE_EXTENSION))
}

fn closing_separator(lines: &[&str]) -> Option<usize> {
    if lines.first() != Some(&HEADER_SEPARATOR) {
        return None;
    }
    lines
        .iter()
        .enumerate()
        .skip(1)
        .take(MAX_HEADER_LINES)
        .find(|(_, line)| **line == HEADER_SEPARATOR)
        .map(|(index, _)| index)
}

#[must_use]
pub fn has_header(content: &str) -> bool {
    content.split('\n').next() == Some(HEADER_SEPARATOR)
}

/// The header including both separators and one trailing newline, or an
/// empty string when there is no complete header.
#[must_use]
pub fn extract_header(content: &str) -> String {
    let lines: Vec<&str> = content.split('\n').collect();
    closing_separator(&lines)
        .and_then(|end| lines.get(..=end))
        .map(|header| format!("{}\n", header.join("\n")))
        .unwrap_or_default()
}

/// Everything after the header with leading blank lines removed. Content
/// without a complete header is returned unchanged.
#[must_use]
pub fn strip_header(content: &str) -> String {
    let lines: Vec<&str> = content.split('\n').collect();
    let Some(end) = closing_separator(&lines) else {
        return content.to_owned();
    };

    lines
        .get(end.saturating_add(1)..)
        .unwrap_or_default()
        .iter()
        .skip_while(|line| line.trim().is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("\n")
}
