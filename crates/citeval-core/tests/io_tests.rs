//! Loading reports and writing analysis artifacts

mod common;

use citeval_core::{analyze_report, load_report, write_analysis, AnalysisConfig, AnalysisError};
use common::fixtures::fixture_path;
use tempfile::TempDir;

#[test]
fn test_missing_input_is_reported() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("citation_validation_results.json");

    let err = load_report(&missing).unwrap_err();
    assert!(matches!(err, AnalysisError::InputNotFound { .. }));
    assert!(err.to_string().contains("citation_validation_results.json"));
}

#[test]
fn test_malformed_input_is_reported() {
    let path = fixture_path("reports/malformed.json");
    let err = load_report(&path).unwrap_err();
    assert!(matches!(err, AnalysisError::MalformedInput { .. }));
    assert!(err.to_string().contains("malformed.json"));
}

#[test]
fn test_wrong_shape_is_malformed() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.json");
    std::fs::write(&path, r#"{"files": {"results": []}}"#).unwrap();

    let err = load_report(&path).unwrap_err();
    assert!(matches!(err, AnalysisError::MalformedInput { .. }));
}

#[test]
fn test_write_and_reload_output() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("validation_analysis.json");
    let report = load_report(&fixture_path("reports/mixed_run.json")).unwrap();
    let analysis = analyze_report(report, &AnalysisConfig::default());

    write_analysis(&output, &analysis).unwrap();

    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.starts_with("{\n  \"summary\""));
    assert!(written.contains("Über die Grundlagen der Logik"));
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["title_similarities"]["count"], 6);
}

#[test]
fn test_repeated_runs_write_identical_bytes() {
    let dir = TempDir::new().unwrap();
    let config = AnalysisConfig::default();
    let mut outputs = Vec::new();

    for name in ["first.json", "second.json"] {
        let report = load_report(&fixture_path("reports/mixed_run.json")).unwrap();
        let path = dir.path().join(name);
        write_analysis(&path, &analyze_report(report, &config)).unwrap();
        outputs.push(std::fs::read(&path).unwrap());
    }

    assert_eq!(outputs[0], outputs[1]);
}

#[test]
fn test_unwritable_output_is_reported() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("no_such_dir").join("analysis.json");
    let analysis = analyze_report(Default::default(), &AnalysisConfig::default());

    let err = write_analysis(&output, &analysis).unwrap_err();
    assert!(matches!(err, AnalysisError::OutputWrite { .. }));
}
