//! citeval-core - Analysis of batch citation validation runs
//!
//! A validation run matches every reference of a set of papers against a
//! bibliographic database and records how each one fared. This crate reads
//! that report and summarizes it:
//!
//! - **Error classifications**: how often each mismatch tag occurs
//! - **Title similarity**: distribution of match scores, and accepted low scores
//! - **Author counts**: how author list lengths differ from the matched entry
//! - **Common mistakes**: recurring failure patterns worth a closer look
//!
//! The matching itself happens upstream; every score and label here is input.

pub mod analysis;
pub mod config;
pub mod error;
pub mod io;
pub mod record;
pub mod render;
pub mod report;
pub mod sample;
pub mod stats;

pub use analysis::{analyze, analyze_report, AnalysisResult, Section};
pub use config::AnalysisConfig;
pub use error::{AnalysisError, Result};
pub use io::{load_report, parse_report, to_json, write_analysis};
pub use record::{Citation, ErrorTag, ValidationRecord, ValidationStatus};
pub use render::render_summary;
pub use report::{FileResults, RunSummary, ValidationReport};
pub use sample::BoundedSample;
pub use stats::OrderStats;
