//! BibTeX formatting
//!
//! Every value is brace-delimited and the last field carries no trailing
//! comma. Each entry ends with a newline so entries concatenate directly.

use crate::entry::BibEntry;

/// Format a single entry
pub fn format_entry(entry: &BibEntry) -> String {
    let mut result = String::new();

    result.push('@');
    result.push_str(&entry.entry_type);
    result.push('{');
    result.push_str(&entry.cite_key);
    result.push(',');
    result.push('\n');

    let fields: Vec<String> = entry
        .fields
        .iter()
        .map(|field| format!("    {} = {{{}}}", field.key, field.value))
        .collect();
    result.push_str(&fields.join(",\n"));
    if !fields.is_empty() {
        result.push('\n');
    }

    result.push_str("}\n");
    result
}

/// Format entries back to back
pub fn format_entries(entries: &[BibEntry]) -> String {
    entries.iter().map(format_entry).collect()
}
