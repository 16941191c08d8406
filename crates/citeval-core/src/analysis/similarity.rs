//! Title similarity distribution

use super::Section;
use crate::config::AnalysisConfig;
use crate::record::{ValidationRecord, ValidationStatus, UNKNOWN_TITLE};
use crate::sample::BoundedSample;
use crate::stats::OrderStats;
use serde::{Deserialize, Serialize};

pub const NO_SIMILARITY_DATA: &str = "No title similarities found";

/// An accepted match whose title similarity was imperfect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LowSimilarityExample {
    pub similarity: f64,
    pub ref_title: String,
    pub dblp_title: String,
    pub status: ValidationStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityStats {
    #[serde(flatten)]
    pub distribution: OrderStats,
    pub low_similarity_examples: Vec<LowSimilarityExample>,
}

/// Describe the distribution of computed title similarities
///
/// Records with a similarity of zero never had one computed and are left out.
pub fn analyze_similarities(
    records: &[ValidationRecord],
    config: &AnalysisConfig,
) -> Section<SimilarityStats> {
    let mut scores = Vec::new();
    let mut examples = BoundedSample::new(config.low_similarity_examples);

    for record in records {
        let Some(similarity) = record.similarity() else {
            continue;
        };
        scores.push(similarity);

        if similarity < config.low_similarity_threshold && record.is_accepted() {
            examples.offer_with(|| LowSimilarityExample {
                similarity,
                ref_title: config.clip(record.reference_title().unwrap_or(UNKNOWN_TITLE)),
                dblp_title: config.clip(record.matched_title().unwrap_or(UNKNOWN_TITLE)),
                status: record.status().cloned().unwrap_or_default(),
            });
        }
    }

    match OrderStats::from_values(scores) {
        Some(distribution) => Section::Ready(SimilarityStats {
            distribution,
            low_similarity_examples: examples.into_items(),
        }),
        None => Section::empty(NO_SIMILARITY_DATA),
    }
}
