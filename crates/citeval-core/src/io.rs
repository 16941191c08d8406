//! Reading validation reports and writing analysis artifacts

use crate::analysis::AnalysisResult;
use crate::error::{AnalysisError, Result};
use crate::report::ValidationReport;
use std::fs;
use std::path::Path;
use tracing::info;

/// Parse a validation report from JSON text
pub fn parse_report(json: &str) -> serde_json::Result<ValidationReport> {
    serde_json::from_str(json)
}

/// Load a validation report from disk
pub fn load_report(path: &Path) -> Result<ValidationReport> {
    if !path.exists() {
        return Err(AnalysisError::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    info!("Loading validation results from: {}", path.display());
    let content = fs::read_to_string(path).map_err(|source| AnalysisError::InputRead {
        path: path.to_path_buf(),
        source,
    })?;

    parse_report(&content).map_err(|source| AnalysisError::MalformedInput {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize an analysis as indented JSON, keeping non-ASCII text as-is
pub fn to_json(analysis: &AnalysisResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(analysis)?)
}

/// Write an analysis to disk
pub fn write_analysis(path: &Path, analysis: &AnalysisResult) -> Result<()> {
    let json = to_json(analysis)?;
    fs::write(path, json).map_err(|source| AnalysisError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Analysis results written to: {}", path.display());
    Ok(())
}
