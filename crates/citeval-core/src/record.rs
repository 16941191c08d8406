//! Validation records as produced by the upstream citation matcher
//!
//! Every field is optional on the wire. Missing keys, explicit `null`s and
//! values of the wrong type all collapse to the field's default so that the
//! analyzers never have to guard against partially populated records
//! themselves, and one odd record never rejects a whole report.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Placeholder used when a record carries no usable title
pub const UNKNOWN_TITLE: &str = "Unknown";

/// Deserialize a field that may be `null` into its default value
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserialize a nested value, falling back to its default when it has the
/// wrong shape
fn shape_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// Text of a JSON scalar; `null` renders as the empty string
fn scalar_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Deserialize a list element by element
///
/// Non-string entries are stringified so the list keeps its length. Anything
/// other than an array yields an empty list.
fn lenient_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.into_iter().map(scalar_text).collect(),
        _ => Vec::new(),
    })
}

/// Deserialize a tag list, keeping only the string entries
fn lenient_tags<'de, D>(deserializer: D) -> Result<Vec<ErrorTag>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(tag) => Some(ErrorTag(tag)),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

/// Deserialize optional text; numbers are kept as their literal
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        number @ Value::Number(_) => Some(number.to_string()),
        _ => None,
    })
}

/// Deserialize a score; anything but a number is "not computed"
fn lenient_score<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?.as_f64().unwrap_or_default())
}

/// Truncate text to at most `limit` characters (not bytes)
pub fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

/// Outcome label assigned by the matcher (`matched`, `author_mismatch`, ...)
///
/// The vocabulary belongs to the upstream producer, so unknown labels are
/// preserved verbatim instead of being rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationStatus(String);

impl ValidationStatus {
    pub const MATCHED: &'static str = "matched";
    pub const AUTHOR_MISMATCH: &'static str = "author_mismatch";

    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the matcher accepted the citation (possibly with author issues)
    pub fn is_accepted(&self) -> bool {
        matches!(self.as_str(), Self::MATCHED | Self::AUTHOR_MISMATCH)
    }
}

impl fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ValidationStatus {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

/// Tag explaining why a record deviated from a clean match
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorTag(String);

impl ErrorTag {
    pub const AUTHOR_ORDER_WRONG: &'static str = "author_order_wrong";
    pub const ACCENTS_MISSING: &'static str = "accents_missing";
    pub const FIRST_NAME_MISMATCH: &'static str = "first_name_mismatch";
    pub const LAST_NAME_MISMATCH: &'static str = "last_name_mismatch";

    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ErrorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ErrorTag {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

/// Bibliographic data for one side of a comparison
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Citation {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    /// Author names; entries that were not strings are kept stringified
    #[serde(default, deserialize_with = "lenient_list")]
    pub authors: Vec<String>,
}

impl Citation {
    pub fn new(title: impl Into<String>, authors: Vec<String>) -> Self {
        Self {
            title: Some(title.into()),
            authors,
        }
    }
}

/// One evaluated reference citation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawRecord")]
pub struct ValidationRecord {
    /// The citation as parsed from the source document
    pub reference: Citation,

    /// The database entry the citation was compared against, if any
    #[serde(rename = "dblp_match")]
    pub matched_entry: Option<Citation>,

    /// Title similarity in [0, 100]; zero means "not computed"
    pub title_similarity: f64,

    pub validation_status: Option<ValidationStatus>,

    pub error_classifications: Vec<ErrorTag>,

    /// Free-form mismatch descriptions, only ever echoed back
    pub mismatches: Vec<String>,
}

/// Wire form of a record
///
/// Every field tolerates `null`, a missing key or a value of the wrong type.
/// The matched entry may arrive as `dblp_match` or `matched_entry`; when both
/// are present `dblp_match` wins.
#[derive(Deserialize)]
struct RawRecord {
    #[serde(default, deserialize_with = "shape_or_default")]
    reference: Citation,
    #[serde(default, deserialize_with = "shape_or_default")]
    dblp_match: Option<Citation>,
    #[serde(default, deserialize_with = "shape_or_default")]
    matched_entry: Option<Citation>,
    #[serde(default, deserialize_with = "lenient_score")]
    title_similarity: f64,
    #[serde(default, deserialize_with = "lenient_text")]
    validation_status: Option<String>,
    #[serde(default, deserialize_with = "lenient_tags")]
    error_classifications: Vec<ErrorTag>,
    #[serde(default, deserialize_with = "lenient_list")]
    mismatches: Vec<String>,
}

impl From<RawRecord> for ValidationRecord {
    fn from(raw: RawRecord) -> Self {
        Self {
            reference: raw.reference,
            matched_entry: raw.dblp_match.or(raw.matched_entry),
            title_similarity: raw.title_similarity,
            validation_status: raw.validation_status.map(ValidationStatus),
            error_classifications: raw.error_classifications,
            mismatches: raw.mismatches,
        }
    }
}

impl ValidationRecord {
    pub fn reference_title(&self) -> Option<&str> {
        self.reference.title.as_deref()
    }

    pub fn matched_title(&self) -> Option<&str> {
        self.matched_entry.as_ref().and_then(|m| m.title.as_deref())
    }

    pub fn reference_authors(&self) -> &[String] {
        &self.reference.authors
    }

    /// Authors of the matched entry; empty when there is no match
    pub fn matched_authors(&self) -> &[String] {
        self.matched_entry
            .as_ref()
            .map(|m| m.authors.as_slice())
            .unwrap_or(&[])
    }

    /// Title similarity, or `None` when it was never computed
    pub fn similarity(&self) -> Option<f64> {
        (self.title_similarity > 0.0).then_some(self.title_similarity)
    }

    pub fn status(&self) -> Option<&ValidationStatus> {
        self.validation_status.as_ref()
    }

    pub fn is_accepted(&self) -> bool {
        self.status().is_some_and(ValidationStatus::is_accepted)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.error_classifications.iter().any(|t| t.as_str() == tag)
    }

    /// Classification tags with repeats removed, in first-seen order
    pub fn distinct_tags(&self) -> impl Iterator<Item = &ErrorTag> {
        self.error_classifications
            .iter()
            .enumerate()
            .filter(|(i, tag)| !self.error_classifications[..*i].contains(*tag))
            .map(|(_, tag)| tag)
    }

    pub fn leading_mismatches(&self, limit: usize) -> Vec<String> {
        self.mismatches.iter().take(limit).cloned().collect()
    }

    /// `len(matched authors) - len(reference authors)` when both lists are non-empty
    pub fn author_count_delta(&self) -> Option<i64> {
        let reference = self.reference_authors().len();
        let matched = self.matched_authors().len();
        if reference == 0 || matched == 0 {
            return None;
        }
        Some(matched as i64 - reference as i64)
    }
}
