//! Error types for loading reports and persisting analyses

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for citeval operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Failures that abort an analysis run
///
/// Sparse or partially populated records are never an error; only the input
/// and output artifacts can fail.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Input report does not exist
    #[error("Input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    /// Input report exists but could not be read
    #[error("Error reading input file {}: {source}", path.display())]
    InputRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Input report is not valid JSON of the expected shape
    #[error("Error loading JSON file {}: {source}", path.display())]
    MalformedInput {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Analysis could not be serialized
    #[error("Error serializing analysis results: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Analysis could not be written to disk
    #[error("Error writing analysis results to {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}
