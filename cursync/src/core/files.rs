// src/core/files.rs
use crate::core::paths::GIT_DIR_NAME;
use anyhow::{Context as _, Result, bail};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::{DirEntry, WalkDir};

fn is_vcs_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_type().is_dir() && entry.file_name() == GIT_DIR_NAME
}

/// Lists every regular file under `dir`, skipping `.git` directories.
///
/// Entries that cannot be read are logged and skipped. Symlinks are not
/// followed (other than `dir` itself).
///
/// # Errors
///
/// Fails when `dir` is not an existing directory.
pub fn find_all_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        bail!("error finding files in {}: not a directory", dir.display());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_vcs_dir(e))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("skipping unreadable entry under {}: {err}", dir.display());
                continue;
            }
        };
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Normalizes raw file bytes for comparison: CRLF and lone CR become LF,
/// trailing spaces and tabs at the end of the content are dropped, trailing
/// newlines collapse to exactly one. Empty input stays empty.
#[must_use]
pub fn normalize_bytes(raw: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(raw.len().saturating_add(1));
    let mut bytes = raw.iter().copied().peekable();
    while let Some(byte) = bytes.next() {
        if byte == b'\r' {
            bytes.next_if_eq(&b'\n');
            out.push(b'\n');
        } else {
            out.push(byte);
        }
    }

    while out.last().is_some_and(|b| *b == b' ' || *b == b'\t') {
        out.pop();
    }
    while out.last() == Some(&b'\n') {
        out.pop();
    }
    if !out.is_empty() {
        out.push(b'\n');
    }
    out
}

#[must_use]
pub fn normalize_content(content: &str) -> String {
    String::from_utf8_lossy(&normalize_bytes(content.as_bytes())).into_owned()
}

/// # Errors
///
/// Propagates the underlying read error.
pub fn read_normalized_bytes(path: &Path) -> io::Result<Vec<u8>> {
    fs::read(path).map(|raw| normalize_bytes(&raw))
}

/// Reads `path` as text and normalizes it. Invalid UTF-8 is replaced.
///
/// # Errors
///
/// Propagates the underlying read error.
pub fn read_normalized(path: &Path) -> io::Result<String> {
    read_normalized_bytes(path).map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory for {}", path.display()))?;
    }
    Ok(())
}

/// # Errors
///
/// Fails when the parent directory cannot be created or the write fails.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, content)
        .with_context(|| format!("failed to write file {}", path.display()))
}

/// Byte-for-byte copy, creating the destination's parent directories.
///
/// # Errors
///
/// Fails when the source cannot be read or the destination cannot be written.
pub fn copy_file(src: &Path, dst: &Path) -> Result<()> {
    let content =
        fs::read(src).with_context(|| format!("failed to read source file {}", src.display()))?;
    ensure_parent(dst)?;
    fs::write(dst, content)
        .with_context(|| format!("failed to write destination file {}", dst.display()))
}

/// # Errors
///
/// Propagates the removal error.
pub fn remove_file(path: &Path) -> io::Result<()> {
    fs::remove_file(path)
}

/// # Errors
///
/// Fails only when existence cannot be determined (e.g. permission denied).
pub fn file_exists(path: &Path) -> io::Result<bool> {
    path.try_exists()
}
