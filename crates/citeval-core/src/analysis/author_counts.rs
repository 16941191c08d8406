//! Author-count deltas between references and their matched entries

use super::Section;
use crate::config::AnalysisConfig;
use crate::record::{ValidationRecord, UNKNOWN_TITLE};
use crate::sample::BoundedSample;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub const NO_AUTHOR_DATA: &str = "No author list length data found";

/// A record whose author lists differ greatly in length
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorCountExample {
    pub ref_count: usize,
    pub dblp_count: usize,
    pub diff: i64,
    pub title: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorCountStats {
    pub count: usize,
    pub mean_diff: f64,
    pub min_diff: i64,
    pub max_diff: i64,
    pub positive_diff_count: usize,
    pub negative_diff_count: usize,
    pub zero_diff_count: usize,
    pub examples: Vec<AuthorCountExample>,
}

/// Summarize `matched - reference` author counts
///
/// Only records with a non-empty author list on both sides take part.
pub fn analyze_author_counts(
    records: &[ValidationRecord],
    config: &AnalysisConfig,
) -> Section<AuthorCountStats> {
    let mut diffs = Vec::new();
    let mut examples = BoundedSample::new(config.author_delta_examples);

    for record in records {
        let Some(diff) = record.author_count_delta() else {
            continue;
        };
        diffs.push(diff);

        if diff.unsigned_abs() > config.author_delta_threshold {
            examples.offer_with(|| AuthorCountExample {
                ref_count: record.reference_authors().len(),
                dblp_count: record.matched_authors().len(),
                diff,
                title: config.clip(record.reference_title().unwrap_or(UNKNOWN_TITLE)),
                status: record
                    .status()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "unknown".to_string()),
            });
        }
    }

    let (Some(&min_diff), Some(&max_diff)) = (diffs.iter().min(), diffs.iter().max()) else {
        return Section::empty(NO_AUTHOR_DATA);
    };

    let mut stats = AuthorCountStats {
        count: diffs.len(),
        mean_diff: diffs.iter().sum::<i64>() as f64 / diffs.len() as f64,
        min_diff,
        max_diff,
        positive_diff_count: 0,
        negative_diff_count: 0,
        zero_diff_count: 0,
        examples: examples.into_items(),
    };
    for diff in &diffs {
        match diff.cmp(&0) {
            Ordering::Greater => stats.positive_diff_count += 1,
            Ordering::Less => stats.negative_diff_count += 1,
            Ordering::Equal => stats.zero_diff_count += 1,
        }
    }

    Section::Ready(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Citation;
    use rstest::rstest;

    fn authors(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("Author {i}")).collect()
    }

    fn compared(reference: usize, matched: Option<usize>) -> ValidationRecord {
        ValidationRecord {
            reference: Citation::new("Paper", authors(reference)),
            matched_entry: matched.map(|n| Citation::new("Paper", authors(n))),
            validation_status: Some("matched".into()),
            ..Default::default()
        }
    }

    #[rstest]
    #[case(2, Some(3), 1)]
    #[case(4, Some(1), -3)]
    #[case(2, Some(2), 0)]
    fn test_single_delta(#[case] reference: usize, #[case] matched: Option<usize>, #[case] expected: i64) {
        let stats = analyze_author_counts(&[compared(reference, matched)], &AnalysisConfig::default());
        let stats = stats.ready().unwrap();
        assert_eq!(stats.count, 1);
        assert_eq!(stats.min_diff, expected);
        assert_eq!(stats.max_diff, expected);
        assert_eq!(stats.mean_diff, expected as f64);
    }

    #[test]
    fn test_one_sided_records_are_skipped() {
        let records = vec![compared(0, Some(3)), compared(2, None), compared(2, Some(0))];
        let stats = analyze_author_counts(&records, &AnalysisConfig::default());
        assert_eq!(stats.error(), Some(NO_AUTHOR_DATA));
    }

    #[test]
    fn test_sign_counts_partition() {
        let records = vec![
            compared(1, Some(2)),
            compared(1, Some(3)),
            compared(3, Some(1)),
            compared(2, Some(2)),
        ];
        let stats = analyze_author_counts(&records, &AnalysisConfig::default());
        let stats = stats.ready().unwrap();
        assert_eq!(stats.positive_diff_count, 2);
        assert_eq!(stats.negative_diff_count, 1);
        assert_eq!(stats.zero_diff_count, 1);
        assert_eq!(stats.mean_diff, 0.25);
    }

    #[test]
    fn test_large_differences_are_sampled() {
        let mut unlabeled = compared(1, Some(8));
        unlabeled.validation_status = None;
        let records = vec![compared(1, Some(6)), compared(10, Some(2)), unlabeled];
        let stats = analyze_author_counts(&records, &AnalysisConfig::default());
        let examples = &stats.ready().unwrap().examples;

        assert_eq!(examples.len(), 2);
        assert_eq!(examples[0].diff, -8);
        assert_eq!(examples[0].ref_count, 10);
        assert_eq!(examples[0].dblp_count, 2);
        assert_eq!(examples[1].status, "unknown");
    }
}
