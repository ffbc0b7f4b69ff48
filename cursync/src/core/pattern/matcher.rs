// src/core/pattern/matcher.rs
use glob::{MatchOptions, Pattern};

/// `*` and `?` stop at `/`, the way shell globs behave.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

fn glob_matches(pattern: &Pattern, candidate: &str) -> bool {
    pattern.matches_with(candidate, MATCH_OPTIONS)
}

/// True when `pattern` matches the whole relative path, its base name, or any
/// single path segment. An invalid pattern matches nothing.
#[must_use]
pub fn matches(relative_path: &str, pattern: &str) -> bool {
    let Ok(compiled) = Pattern::new(&pattern.replace('\\', "/")) else {
        return false;
    };
    let normalized = relative_path.replace('\\', "/");

    if glob_matches(&compiled, &normalized) {
        return true;
    }

    let file_name = normalized.rsplit('/').next().unwrap_or(&normalized);
    if glob_matches(&compiled, file_name) {
        return true;
    }

    normalized
        .split('/')
        .filter(|segment| !segment.is_empty())
        .any(|segment| glob_matches(&compiled, segment))
}

#[must_use]
pub fn matches_any(relative_path: &str, patterns: &[String]) -> bool {
    patterns
        .iter()
        .any(|pattern| matches(relative_path, pattern))
}
