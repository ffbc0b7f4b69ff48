// src/core/copier.rs
use crate::core::files::{copy_file, read_normalized, write_file};
use crate::core::header::{extract_header, is_rule_file, strip_header};
use anyhow::{Context as _, Result};
use std::path::Path;
use tracing::debug;

/// Header currently present at `dst`, or empty when it has none or can't be read.
fn existing_header(dst: &Path) -> String {
    match read_normalized(dst) {
        Ok(content) => extract_header(&content),
        Err(err) => {
            debug!("no readable header at {}: {err}", dst.display());
            String::new()
        }
    }
}

/// Copies `src` over `dst`.
///
/// Rule files are written normalized. Unless `overwrite_headers` is set, a
/// header already present at `dst` is kept and the source body is written
/// under it. All other files are copied byte-for-byte.
///
/// # Errors
///
/// Fails when the source cannot be read or the destination cannot be written.
pub fn copy(src: &Path, dst: &Path, overwrite_headers: bool) -> Result<()> {
    if !is_rule_file(src) {
        return copy_file(src, dst);
    }

    let source = read_normalized(src)
        .with_context(|| format!("failed to read source file {}", src.display()))?;
    let header = if overwrite_headers {
        String::new()
    } else {
        existing_header(dst)
    };
    if header.is_empty() {
        return write_file(dst, &source);
    }

    let body = strip_header(&source);
    write_file(dst, &format!("{header}{body}"))
}
