//! Analysis of flattened validation records
//!
//! - **classifications**: per-tag counts and examples
//! - **similarity**: title similarity distribution and low-similarity acceptances
//! - **author_counts**: matched-vs-reference author count deltas
//! - **mistakes**: recurring failure patterns
//!
//! The analyzers only read the records and never depend on each other, so
//! with the `parallel` feature they run on the rayon pool.

pub mod author_counts;
pub mod classifications;
pub mod mistakes;
pub mod similarity;

pub use author_counts::*;
pub use classifications::*;
pub use mistakes::*;
pub use similarity::*;

use crate::config::AnalysisConfig;
use crate::record::ValidationRecord;
use crate::report::{RunSummary, ValidationReport};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A statistics section, or the reason it could not be computed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Section<T> {
    Ready(T),
    Empty { error: String },
}

impl<T> Section<T> {
    pub fn empty(reason: impl Into<String>) -> Self {
        Self::Empty {
            error: reason.into(),
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::Empty { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Ready(_) => None,
            Self::Empty { error } => Some(error),
        }
    }
}

/// Everything computed for one validation report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub summary: RunSummary,
    pub error_classifications: ClassificationSummary,
    pub title_similarities: Section<SimilarityStats>,
    pub author_list_lengths: Section<AuthorCountStats>,
    pub common_mistakes: Vec<MistakePattern>,
}

/// Analyze a whole report
pub fn analyze_report(report: ValidationReport, config: &AnalysisConfig) -> AnalysisResult {
    let (summary, records) = report.into_parts();
    analyze(summary, &records, config)
}

/// Run all analyzers over an already flattened record sequence
pub fn analyze(
    summary: RunSummary,
    records: &[ValidationRecord],
    config: &AnalysisConfig,
) -> AnalysisResult {
    debug!(records = records.len(), "Running analyzers");

    #[cfg(feature = "parallel")]
    let ((error_classifications, title_similarities), (author_list_lengths, common_mistakes)) =
        rayon::join(
            || {
                rayon::join(
                    || aggregate_classifications(records, config),
                    || analyze_similarities(records, config),
                )
            },
            || {
                rayon::join(
                    || analyze_author_counts(records, config),
                    || detect_mistakes(records, config),
                )
            },
        );

    #[cfg(not(feature = "parallel"))]
    let ((error_classifications, title_similarities), (author_list_lengths, common_mistakes)) = (
        (
            aggregate_classifications(records, config),
            analyze_similarities(records, config),
        ),
        (
            analyze_author_counts(records, config),
            detect_mistakes(records, config),
        ),
    );

    AnalysisResult {
        summary,
        error_classifications,
        title_similarities,
        author_list_lengths,
        common_mistakes,
    }
}
