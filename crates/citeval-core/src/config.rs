//! Thresholds and example caps used by the analyzers

use serde::{Deserialize, Serialize};

/// Tunable limits for one analysis run
///
/// The defaults reproduce the historical report format; changing them makes
/// output incomparable with earlier runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Maximum characters of any title echoed into an example
    pub title_limit: usize,

    /// Examples kept per error classification tag
    pub classification_examples: usize,
    /// Mismatch descriptions copied into each example
    pub mismatch_limit: usize,

    /// Accepted matches below this similarity are sampled
    pub low_similarity_threshold: f64,
    pub low_similarity_examples: usize,

    /// Author-count deltas with a magnitude above this are sampled
    pub author_delta_threshold: u64,
    pub author_delta_examples: usize,

    /// Lower (inclusive) and upper (exclusive) bounds of borderline similarity
    pub borderline_min: f64,
    pub borderline_max: f64,
    /// Examples kept per mistake pattern
    pub pattern_examples: usize,
    /// Authors listed per side in author-order examples
    pub pattern_author_limit: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            title_limit: 100,
            classification_examples: 5,
            mismatch_limit: 3,
            low_similarity_threshold: 95.0,
            low_similarity_examples: 10,
            author_delta_threshold: 5,
            author_delta_examples: 10,
            borderline_min: 80.0,
            borderline_max: 90.0,
            pattern_examples: 5,
            pattern_author_limit: 5,
        }
    }
}

impl AnalysisConfig {
    pub(crate) fn clip(&self, title: &str) -> String {
        crate::record::truncate_chars(title, self.title_limit)
    }

    pub(crate) fn is_borderline(&self, similarity: f64) -> bool {
        (self.borderline_min..self.borderline_max).contains(&similarity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: AnalysisConfig = serde_json::from_str(r#"{"title_limit": 40}"#).unwrap();
        assert_eq!(config.title_limit, 40);
        assert_eq!(config.pattern_examples, 5);
    }

    #[test]
    fn test_borderline_bounds() {
        let config = AnalysisConfig::default();
        assert!(config.is_borderline(80.0));
        assert!(config.is_borderline(89.99));
        assert!(!config.is_borderline(90.0));
        assert!(!config.is_borderline(79.9));
    }
}
