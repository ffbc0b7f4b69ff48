// src/models/pattern_stats.rs

/// How a pattern list selected files out of a candidate set.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PatternStats {
    pub total_files: u64,
    pub matched_files: u64,
    /// One entry per pattern, in pattern order.
    pub matched_pattern_counts: Vec<(String, u64)>,
}

impl PatternStats {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total_files: 0,
            matched_files: 0,
            matched_pattern_counts: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    #[expect(clippy::as_conversions, reason = "Precision not critical")]
    pub fn calculate_percentage(&self) -> f64 {
        if self.total_files == 0 {
            return 0.0;
        }
        (self.matched_files as f64 / self.total_files as f64) * 100.0
    }

    /// Patterns that did not select a single file.
    #[must_use]
    pub fn unmatched_patterns(&self) -> Vec<&str> {
        self.matched_pattern_counts
            .iter()
            .filter(|(_, count)| *count == 0)
            .map(|(pattern, _)| pattern.as_str())
            .collect()
    }
}
