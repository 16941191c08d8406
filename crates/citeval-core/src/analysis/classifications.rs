//! Error classification aggregation

use crate::config::AnalysisConfig;
use crate::record::{ErrorTag, ValidationRecord, UNKNOWN_TITLE};
use crate::sample::BoundedSample;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A record illustrating one classification tag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationExample {
    pub title: String,
    pub mismatches: Vec<String>,
}

/// Per-tag occurrence counts and examples
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassificationSummary {
    pub counts: BTreeMap<ErrorTag, usize>,
    pub examples: BTreeMap<ErrorTag, Vec<ClassificationExample>>,
}

impl ClassificationSummary {
    /// Tags ordered by descending count, ties broken by tag name
    pub fn ranked(&self) -> Vec<(&ErrorTag, usize)> {
        let mut ranked: Vec<_> = self.counts.iter().map(|(tag, n)| (tag, *n)).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    pub fn count(&self, tag: &str) -> usize {
        self.counts.get(&ErrorTag::new(tag)).copied().unwrap_or(0)
    }
}

/// Count every classification tag across the records
///
/// A record contributes each distinct tag once, however often it repeats it.
pub fn aggregate_classifications(
    records: &[ValidationRecord],
    config: &AnalysisConfig,
) -> ClassificationSummary {
    let mut samples: BTreeMap<ErrorTag, BoundedSample<ClassificationExample>> = BTreeMap::new();

    for record in records {
        for tag in record.distinct_tags() {
            samples
                .entry(tag.clone())
                .or_insert_with(|| BoundedSample::new(config.classification_examples))
                .offer_with(|| ClassificationExample {
                    title: config.clip(record.reference_title().unwrap_or(UNKNOWN_TITLE)),
                    mismatches: record.leading_mismatches(config.mismatch_limit),
                });
        }
    }

    let mut summary = ClassificationSummary::default();
    for (tag, sample) in samples {
        summary.counts.insert(tag.clone(), sample.offered());
        summary.examples.insert(tag, sample.into_items());
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Citation;

    fn tagged(title: &str, tags: &[&str]) -> ValidationRecord {
        ValidationRecord {
            reference: Citation::new(title, Vec::new()),
            error_classifications: tags.iter().map(|t| ErrorTag::from(*t)).collect(),
            mismatches: vec!["m1".into(), "m2".into(), "m3".into(), "m4".into()],
            ..Default::default()
        }
    }

    #[test]
    fn test_counts_and_examples() {
        let records = vec![
            tagged("a", &["accents_missing", "author_order_wrong"]),
            tagged("b", &["accents_missing"]),
            tagged("c", &[]),
        ];
        let summary = aggregate_classifications(&records, &AnalysisConfig::default());

        assert_eq!(summary.count("accents_missing"), 2);
        assert_eq!(summary.count("author_order_wrong"), 1);
        assert_eq!(summary.count("missing_tag"), 0);

        let examples = &summary.examples[&ErrorTag::from("accents_missing")];
        assert_eq!(examples.len(), 2);
        assert_eq!(examples[0].title, "a");
        assert_eq!(examples[0].mismatches, vec!["m1", "m2", "m3"]);
    }

    #[test]
    fn test_repeated_tag_counts_once_per_record() {
        let records = vec![tagged("a", &["x", "x", "x"])];
        let summary = aggregate_classifications(&records, &AnalysisConfig::default());
        assert_eq!(summary.count("x"), 1);
        assert_eq!(summary.examples[&ErrorTag::from("x")].len(), 1);
    }

    #[test]
    fn test_examples_are_capped() {
        let records: Vec<_> = (0..12).map(|i| tagged(&format!("t{i}"), &["x"])).collect();
        let summary = aggregate_classifications(&records, &AnalysisConfig::default());
        assert_eq!(summary.count("x"), 12);
        assert_eq!(summary.examples[&ErrorTag::from("x")].len(), 5);
    }

    #[test]
    fn test_missing_title_uses_placeholder() {
        let record = ValidationRecord {
            error_classifications: vec!["x".into()],
            ..Default::default()
        };
        let summary = aggregate_classifications(&[record], &AnalysisConfig::default());
        assert_eq!(summary.examples[&ErrorTag::from("x")][0].title, UNKNOWN_TITLE);
    }

    #[test]
    fn test_ranked_orders_by_count() {
        let records = vec![tagged("a", &["rare", "common"]), tagged("b", &["common"])];
        let summary = aggregate_classifications(&records, &AnalysisConfig::default());
        let ranked: Vec<(String, usize)> = summary
            .ranked()
            .into_iter()
            .map(|(tag, n)| (tag.to_string(), n))
            .collect();
        assert_eq!(ranked, vec![("common".to_string(), 2), ("rare".to_string(), 1)]);
    }
}
