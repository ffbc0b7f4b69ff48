// src/core/ignore/patterns.rs
use anyhow::{Context as _, Result, anyhow};
use glob::{MatchOptions, Pattern};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

#[derive(Debug)]
struct Rule {
    glob: Pattern,
    negated: bool,
    /// Leading `/`: only matches relative to the list's root.
    anchored: bool,
    /// Trailing `/`: only matches directories, never the file itself.
    dir_only: bool,
}

impl Rule {
    /// Patterns without a slash match a single path component at any depth.
    fn matches_candidate(&self, candidate: &str) -> bool {
        if self.anchored || self.glob.as_str().contains('/') {
            return self.glob.matches_with(candidate, MATCH_OPTIONS);
        }
        let name = candidate.rsplit('/').next().unwrap_or(candidate);
        self.glob.matches_with(name, MATCH_OPTIONS)
    }

    /// A rule matches a file when it matches the file's path or the path of
    /// any directory containing it.
    fn matches(&self, relative_path: &str) -> bool {
        let components: Vec<&str> = relative_path.split('/').collect();
        let last = if self.dir_only {
            components.len().saturating_sub(1)
        } else {
            components.len()
        };
        (1..=last).any(|depth| {
            components
                .get(..depth)
                .is_some_and(|prefix| self.matches_candidate(&prefix.join("/")))
        })
    }
}

/// Ordered ignore rules; the last rule matching a path decides.
#[derive(Debug, Default)]
pub struct IgnoreList {
    rules: Vec<Rule>,
}

/// Expands a single `{a,b}` group into one pattern per alternative.
fn expand_braces(pattern: &str) -> Result<Vec<String>> {
    let Some((prefix, suffix)) = pattern.split_once('{') else {
        if pattern.contains('}') {
            return Err(anyhow!("Invalid pattern: missing opening brace"));
        }
        return Ok(vec![pattern.to_owned()]);
    };
    let (alternatives, rest) = suffix
        .split_once('}')
        .ok_or_else(|| anyhow!("Invalid pattern: missing closing brace"))?;
    Ok(alternatives
        .split(',')
        .map(str::trim)
        .map(|alt| format!("{prefix}{alt}{rest}"))
        .collect())
}

impl IgnoreList {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { rules: Vec::new() }
    }

    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.rules.len()
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Adds one line of an ignore file.
    ///
    /// Handles:
    /// - Blank lines and `#` comments (skipped)
    /// - Negation with `!` prefix
    /// - Directory patterns ending with `/`
    /// - Anchored patterns starting with `/`
    /// - Brace groups like `*.{md,txt}`
    ///
    /// # Errors
    ///
    /// This function may return an error if:
    /// * The pattern contains invalid glob syntax
    /// * The pattern has mismatched braces
    #[inline]
    pub fn add_pattern(&mut self, line: &str) -> Result<()> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }

        let (line, negated) = line
            .strip_prefix('!')
            .map_or((line, false), |stripped| (stripped, true));
        let (line, anchored) = line
            .strip_prefix('/')
            .map_or((line, false), |stripped| (stripped, true));
        let (line, dir_only) = line
            .strip_suffix('/')
            .map_or((line, false), |stripped| (stripped, true));
        if line.is_empty() {
            return Ok(());
        }

        for expanded in expand_braces(line)? {
            let glob = Pattern::new(&expanded)
                .with_context(|| format!("Invalid ignore pattern: {expanded}"))?;
            self.rules.push(Rule {
                glob,
                negated,
                anchored,
                dir_only,
            });
        }
        Ok(())
    }

    /// Whether a `/`-separated path relative to the synced directory is ignored.
    #[inline]
    #[must_use]
    pub fn matches(&self, relative_path: &str) -> bool {
        self.rules
            .iter()
            .rev()
            .find(|rule| rule.matches(relative_path))
            .is_some_and(|rule| !rule.negated)
    }
}
