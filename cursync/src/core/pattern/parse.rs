// src/core/pattern/parse.rs
use crate::core::paths::EnvSource;
use crate::error::SyncError;
use glob::Pattern;
use std::collections::HashSet;

pub const PATTERNS_ENV_VAR: &str = "CURSOR_RULES_PATTERNS";

/// Splits on `separator`, trims each piece and drops the empty ones.
#[must_use]
pub fn split_trim_filter(input: &str, separator: char) -> Vec<String> {
    input
        .split(separator)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Parses a comma-separated pattern list, reading `env_var` when `raw` is
/// empty. An empty result means "no filtering".
#[must_use]
pub fn parse_patterns(raw: &str, env_var: &str, env: &dyn EnvSource) -> Vec<String> {
    if !raw.is_empty() {
        return split_trim_filter(raw, ',');
    }
    env.var(env_var)
        .map(|value| split_trim_filter(&value, ','))
        .unwrap_or_default()
}

/// Drops exact duplicates, keeping the first occurrence and the original order.
#[must_use]
pub fn dedupe(patterns: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    patterns
        .iter()
        .filter(|pattern| seen.insert(pattern.as_str()))
        .cloned()
        .collect()
}

/// Checks that every pattern compiles as a glob.
///
/// # Errors
///
/// Returns [`SyncError::InvalidPattern`] for the first pattern with bad syntax.
pub fn validate(patterns: &[String]) -> Result<(), SyncError> {
    for pattern in patterns {
        Pattern::new(pattern).map_err(|err| SyncError::InvalidPattern {
            pattern: pattern.clone(),
            message: err.msg.to_owned(),
        })?;
    }
    Ok(())
}
