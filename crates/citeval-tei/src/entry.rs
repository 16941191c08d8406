//! BibTeX entry data structures

/// A single BibTeX field (key-value pair)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BibField {
    pub key: String,
    pub value: String,
}

/// A BibTeX entry with fields kept in insertion order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BibEntry {
    pub cite_key: String,
    pub entry_type: String,
    pub fields: Vec<BibField>,
}

impl BibEntry {
    pub fn new(cite_key: impl Into<String>, entry_type: impl Into<String>) -> Self {
        Self {
            cite_key: cite_key.into(),
            entry_type: entry_type.into(),
            fields: Vec::new(),
        }
    }

    /// Add a field to the entry
    pub fn add_field(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.push(BibField {
            key: key.into(),
            value: value.into(),
        });
    }

    /// Get a field value by key (case-insensitive)
    pub fn get_field(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.key.eq_ignore_ascii_case(key))
            .map(|f| f.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_lookup_is_case_insensitive() {
        let mut entry = BibEntry::new("key", "inproceedings");
        entry.add_field("Title", "A Paper");
        assert_eq!(entry.get_field("title"), Some("A Paper"));
        assert_eq!(entry.get_field("doi"), None);
    }
}
