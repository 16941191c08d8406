//! Test fixture loading utilities

use citeval_core::{parse_report, ValidationReport};
use std::path::PathBuf;

/// Get the path to a fixture file
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_fixtures")
        .join(name)
}

/// Load a fixture file as a string
#[allow(dead_code)]
pub fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", name))
}

/// Load and parse a validation report fixture
#[allow(dead_code)]
pub fn load_report_fixture(name: &str) -> ValidationReport {
    let json = load_fixture(&format!("reports/{}", name));
    parse_report(&json).unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", name, e))
}
