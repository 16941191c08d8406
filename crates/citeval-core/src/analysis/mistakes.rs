//! Recurring mistake patterns
//!
//! Four independent detectors run over the whole record set. A record may
//! trigger any number of them. Patterns that match nothing are left out of
//! the result entirely.

use crate::config::AnalysisConfig;
use crate::record::{ErrorTag, ValidationRecord, ValidationStatus};
use crate::sample::BoundedSample;
use serde::{Deserialize, Serialize};

/// The failure modes looked for, in reporting order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MistakeKind {
    /// Accepted although the title similarity sits in the borderline band
    BorderlineSimilarity,
    AuthorOrder,
    Diacritics,
    /// First- or last-name components disagree
    NameComponents,
}

impl MistakeKind {
    pub const ALL: [MistakeKind; 4] = [
        MistakeKind::BorderlineSimilarity,
        MistakeKind::AuthorOrder,
        MistakeKind::Diacritics,
        MistakeKind::NameComponents,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::BorderlineSimilarity => "Low title similarity but still processed",
            Self::AuthorOrder => "Author order mismatches",
            Self::Diacritics => "Accent/diacritic mismatches",
            Self::NameComponents => "First/Last name mismatches",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::BorderlineSimilarity => "Titles with similarity between 80-90% were still processed",
            Self::AuthorOrder => "Authors match but are in wrong order",
            Self::Diacritics => "Names differ only by accents/diacritics",
            Self::NameComponents => "Names differ in first or last name components",
        }
    }

    pub fn matches(&self, record: &ValidationRecord, config: &AnalysisConfig) -> bool {
        match self {
            Self::BorderlineSimilarity => {
                config.is_borderline(record.title_similarity) && record.is_accepted()
            }
            Self::AuthorOrder => record.has_tag(ErrorTag::AUTHOR_ORDER_WRONG),
            Self::Diacritics => record.has_tag(ErrorTag::ACCENTS_MISSING),
            Self::NameComponents => {
                record.has_tag(ErrorTag::FIRST_NAME_MISMATCH)
                    || record.has_tag(ErrorTag::LAST_NAME_MISMATCH)
            }
        }
    }

    fn example(&self, record: &ValidationRecord, config: &AnalysisConfig) -> MistakeExample {
        let title = config.clip(record.reference_title().unwrap_or_default());
        match self {
            Self::BorderlineSimilarity => MistakeExample::Similarity {
                similarity: record.title_similarity,
                status: record.status().cloned().unwrap_or_default(),
                ref_title: title,
                dblp_title: config.clip(record.matched_title().unwrap_or_default()),
            },
            Self::AuthorOrder => MistakeExample::AuthorOrder {
                title,
                ref_authors: leading(record.reference_authors(), config.pattern_author_limit),
                dblp_authors: leading(record.matched_authors(), config.pattern_author_limit),
            },
            Self::Diacritics => MistakeExample::Mismatches {
                title,
                mismatches: record.leading_mismatches(config.mismatch_limit),
            },
            Self::NameComponents => MistakeExample::NameComponents {
                title,
                classifications: record.error_classifications.clone(),
                mismatches: record.leading_mismatches(config.mismatch_limit),
            },
        }
    }
}

fn leading(names: &[String], limit: usize) -> Vec<String> {
    names.iter().take(limit).cloned().collect()
}

/// Evidence for one mistake; the payload depends on the pattern
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MistakeExample {
    Similarity {
        similarity: f64,
        status: ValidationStatus,
        ref_title: String,
        dblp_title: String,
    },
    AuthorOrder {
        title: String,
        ref_authors: Vec<String>,
        dblp_authors: Vec<String>,
    },
    NameComponents {
        title: String,
        classifications: Vec<ErrorTag>,
        mismatches: Vec<String>,
    },
    Mismatches {
        title: String,
        mismatches: Vec<String>,
    },
}

impl MistakeExample {
    pub fn title(&self) -> &str {
        match self {
            Self::Similarity { ref_title, .. } => ref_title,
            Self::AuthorOrder { title, .. }
            | Self::NameComponents { title, .. }
            | Self::Mismatches { title, .. } => title,
        }
    }
}

/// A detected pattern with its full count and a few examples
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MistakePattern {
    #[serde(rename = "type")]
    pub label: String,
    pub count: usize,
    pub description: String,
    pub examples: Vec<MistakeExample>,
}

/// Run every detector over the records
pub fn detect_mistakes(records: &[ValidationRecord], config: &AnalysisConfig) -> Vec<MistakePattern> {
    MistakeKind::ALL
        .iter()
        .filter_map(|kind| detect(*kind, records, config))
        .collect()
}

fn detect(
    kind: MistakeKind,
    records: &[ValidationRecord],
    config: &AnalysisConfig,
) -> Option<MistakePattern> {
    let mut sample = BoundedSample::new(config.pattern_examples);
    for record in records.iter().filter(|r| kind.matches(r, config)) {
        sample.offer_with(|| kind.example(record, config));
    }

    if sample.offered() == 0 {
        return None;
    }

    Some(MistakePattern {
        label: kind.label().to_string(),
        count: sample.offered(),
        description: kind.description().to_string(),
        examples: sample.into_items(),
    })
}
