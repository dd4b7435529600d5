//! Annotation Extractor
//!
//! Scans comment text for `@name`, `@name value` and `@name(prop = value, ...)`
//! occurrences and accumulates them into an `AnnotationStore`.
//!
//! Docblock decoration (`/**`, leading `*`, `*/`) is tolerated: matching only
//! starts at `@`, and a single-line value ends at the first `*/`.

use log::debug;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::interpreter::{interpret, interpret_or_present};
use crate::store::AnnotationStore;
use crate::value::AnnotationValue;

/// `@name`, followed by either a same-line value or a parenthesized property list
///
/// The value runs to the end of the line or to the first `*/`, whichever
/// comes first; the `*/` is consumed with the match.
static ANNOTATION_REGEXP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?mR)@(?P<name>\w+)(?:[^\S\r\n]+(?P<value>.*?)[^\S\r\n]*(?:\*/|$)|\((?P<properties>.+?)\))?",
    )
    .unwrap()
});

/// `name` or `name = value` inside a property list
static PROPERTY_REGEXP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?P<name>[\w-]+)(?:\s*=\s*(?P<value>.+))?").unwrap());

/// Payload of a single annotation occurrence
#[derive(Debug, Clone, PartialEq)]
pub enum AnnotationPayload {
    Scalar(AnnotationValue),
    Properties(Vec<(String, AnnotationValue)>),
}

/// One `@name ...` occurrence
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationEntry {
    pub name: String,
    pub payload: AnnotationPayload,
}

/// Comment text scanner
#[derive(Debug, Clone, Copy, Default)]
pub struct Extractor;

impl Extractor {
    pub fn new() -> Self {
        Extractor
    }

    /// Parse every annotation in `text` into a fresh store
    pub fn extract(&self, text: &str) -> AnnotationStore {
        let mut store = AnnotationStore::new();
        for entry in self.entries(text) {
            match entry.payload {
                AnnotationPayload::Scalar(value) => store.merge_scalar(&entry.name, value),
                AnnotationPayload::Properties(properties) => {
                    store.merge_properties(&entry.name, properties)
                }
            }
        }
        store
    }

    /// Iterate the annotation occurrences of `text` left to right
    ///
    /// Matches never overlap; scanning resumes after the end of each match.
    pub fn entries<'t>(&self, text: &'t str) -> impl Iterator<Item = AnnotationEntry> + 't {
        ANNOTATION_REGEXP.captures_iter(text).map(|caps| {
            let entry = parse_entry(&caps);
            debug!("annotation @{} -> {:?}", entry.name, entry.payload);
            entry
        })
    }
}

/// Parse every annotation in `text` into a fresh store
pub fn extract(text: &str) -> AnnotationStore {
    Extractor::new().extract(text)
}

fn parse_entry(caps: &Captures<'_>) -> AnnotationEntry {
    let name = caps["name"].to_string();

    let payload = match caps.name("properties") {
        Some(properties) => AnnotationPayload::Properties(parse_properties(properties.as_str())),
        None => {
            let raw = caps.name("value").and_then(|m| non_empty(m.as_str()));
            AnnotationPayload::Scalar(interpret_or_present(raw))
        }
    };

    AnnotationEntry { name, payload }
}

/// A blank single-line value counts as no value
fn non_empty(raw: &str) -> Option<&str> {
    let raw = raw.trim();
    (!raw.is_empty()).then_some(raw)
}

fn parse_properties(properties: &str) -> Vec<(String, AnnotationValue)> {
    split_unescaped(properties)
        .iter()
        .filter_map(|segment| {
            let segment = segment.trim();
            let Some(caps) = PROPERTY_REGEXP.captures(segment) else {
                debug!("skipping malformed property {:?}", segment);
                return None;
            };
            let name = caps["name"].trim().to_string();
            let value = match caps.name("value") {
                Some(raw) => interpret(raw.as_str()),
                None => AnnotationValue::Bool(true),
            };
            Some((name, value))
        })
        .collect()
}

/// Split a property list on commas; `\,` stands for a literal comma
fn split_unescaped(properties: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut chars = properties.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\\' if chars.peek() == Some(&',') => {
                current.push(',');
                chars.next();
            }
            ',' => segments.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    segments.push(current);
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_unescaped() {
        assert_eq!(split_unescaped("a=1, b"), vec!["a=1", " b"]);
        assert_eq!(split_unescaped(r"sep=\,, b"), vec!["sep=,", " b"]);
        assert_eq!(split_unescaped(r"path=C:\dir"), vec![r"path=C:\dir"]);
    }

    #[test]
    fn test_entries_keep_occurrence_order() {
        let entries: Vec<AnnotationEntry> =
            Extractor::new().entries("@first(a) @second 2").collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "first");
        assert_eq!(
            entries[0].payload,
            AnnotationPayload::Properties(vec![("a".to_string(), AnnotationValue::Bool(true))])
        );
        assert_eq!(entries[1].name, "second");
        assert_eq!(entries[1].payload, AnnotationPayload::Scalar(2i64.into()));
    }

    #[test]
    fn test_value_stops_at_comment_terminator() {
        let entries: Vec<AnnotationEntry> =
            Extractor::new().entries("/** @default 42 */ /** @ignore */").collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].payload, AnnotationPayload::Scalar(42i64.into()));
        assert_eq!(entries[1].payload, AnnotationPayload::Scalar(true.into()));
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(" 42 "), Some("42"));
        assert_eq!(non_empty("  "), None);
        assert_eq!(non_empty("a*b"), Some("a*b"));
    }
}
