// src/core/comparator.rs
use crate::core::files::{read_normalized, read_normalized_bytes};
use crate::core::header::{is_rule_file, strip_header};
use anyhow::{Context as _, Result};
use std::path::Path;

/// Decides whether two files carry the same content after normalization.
///
/// When `overwrite_headers` is false and both paths are rule files, the
/// header block of both sides is ignored so only the bodies are compared.
///
/// # Errors
///
/// Fails when either file cannot be read.
pub fn are_equal(a: &Path, b: &Path, overwrite_headers: bool) -> Result<bool> {
    if !overwrite_headers && is_rule_file(a) && is_rule_file(b) {
        let left =
            read_normalized(a).with_context(|| format!("failed to read {}", a.display()))?;
        let right =
            read_normalized(b).with_context(|| format!("failed to read {}", b.display()))?;
        return Ok(strip_header(&left) == strip_header(&right));
    }

    let left =
        read_normalized_bytes(a).with_context(|| format!("failed to read {}", a.display()))?;
    let right =
        read_normalized_bytes(b).with_context(|| format!("failed to read {}", b.display()))?;
    Ok(left == right)
}
