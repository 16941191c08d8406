//! Console summary of an analysis

use crate::analysis::AnalysisResult;
use std::path::Path;

const RULE_WIDTH: usize = 60;

/// Counters shown under "Overall Statistics", with their summary keys
const OVERALL_COUNTERS: [(&str, &str); 6] = [
    ("Files processed", "files_processed"),
    ("Total references", "total_references"),
    ("Matched", "total_matched"),
    ("Mismatches", "total_mismatches"),
    ("No match", "total_no_match"),
    ("Errors", "total_errors"),
];

/// Render the operator-facing text summary
pub fn render_summary(analysis: &AnalysisResult, output: &Path) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut lines = vec![
        String::new(),
        rule.clone(),
        "VALIDATION ANALYSIS SUMMARY".to_string(),
        rule.clone(),
        String::new(),
        "Overall Statistics:".to_string(),
    ];

    for (label, key) in OVERALL_COUNTERS {
        lines.push(format!("  {}: {}", label, analysis.summary.counter(key)));
    }

    let classifications = &analysis.error_classifications;
    if !classifications.counts.is_empty() {
        lines.push(String::new());
        lines.push("Error Classifications:".to_string());
        for (tag, count) in classifications.ranked() {
            lines.push(format!("  {}: {}", tag, count));
        }
    }

    if let Some(stats) = analysis.title_similarities.ready() {
        let d = &stats.distribution;
        lines.push(String::new());
        lines.push("Title Similarity Statistics:".to_string());
        lines.push(format!("  Mean: {:.2}%", d.mean));
        lines.push(format!("  Median: {:.2}%", d.median));
        lines.push(format!("  Min: {:.2}%", d.min));
        lines.push(format!("  Max: {:.2}%", d.max));
    }

    if let Some(stats) = analysis.author_list_lengths.ready() {
        lines.push(String::new());
        lines.push("Author List Length Differences:".to_string());
        lines.push(format!(
            "  Mean difference (DBLP - Reference): {:.2}",
            stats.mean_diff
        ));
        lines.push(format!(
            "  Cases where DBLP has more authors: {}",
            stats.positive_diff_count
        ));
        lines.push(format!(
            "  Cases where Reference has more authors: {}",
            stats.negative_diff_count
        ));
        lines.push(format!("  Cases with same length: {}", stats.zero_diff_count));
    }

    if !analysis.common_mistakes.is_empty() {
        lines.push(String::new());
        lines.push("Common Mistakes Identified:".to_string());
        for mistake in &analysis.common_mistakes {
            lines.push(format!("  {}: {} cases", mistake.label, mistake.count));
            lines.push(format!("    {}", mistake.description));
        }
    }

    lines.push(String::new());
    lines.push(rule.clone());
    lines.push(format!("Full analysis saved to: {}", output.display()));
    lines.push(rule);
    lines.push(String::new());

    lines.join("\n")
}
