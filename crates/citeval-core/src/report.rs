//! Input report structure and record extraction
//!
//! The matcher writes one JSON document per batch run:
//!
//! ```json
//! { "summary": { ... }, "files": [ { "results": [ ... ] }, ... ] }
//! ```

use crate::record::{null_as_default, ValidationRecord};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Run-level counters computed upstream, passed through verbatim
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunSummary(Map<String, Value>);

impl RunSummary {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Render a counter for display, `0` when absent
    pub fn counter(&self, key: &str) -> String {
        match self.0.get(key) {
            None | Some(Value::Null) => "0".to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Results for one processed source document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileResults {
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<ValidationRecord>,
}

/// A complete batch validation report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: RunSummary,
    #[serde(default, deserialize_with = "null_as_default")]
    pub files: Vec<FileResults>,
}

impl ValidationReport {
    /// Iterate over every record of every file, in file order
    pub fn records(&self) -> impl Iterator<Item = &ValidationRecord> {
        self.files.iter().flat_map(|f| f.results.iter())
    }

    pub fn record_count(&self) -> usize {
        self.files.iter().map(|f| f.results.len()).sum()
    }

    /// Split into the passthrough summary and the flattened record sequence
    pub fn into_parts(self) -> (RunSummary, Vec<ValidationRecord>) {
        let records = self
            .files
            .into_iter()
            .flat_map(|f| f.results.into_iter())
            .collect();
        (self.summary, records)
    }
}
