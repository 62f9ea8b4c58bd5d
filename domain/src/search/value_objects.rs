//! Search result value objects

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Placeholder content used when the provider returns no text.
pub const NO_INFORMATION_FOUND: &str = "ไม่พบข้อมูลที่ต้องการ";

/// A web page the provider cited as evidence for its answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundingSource {
    pub title: String,
    pub uri: String,
}

impl GroundingSource {
    pub fn new(title: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            uri: uri.into(),
        }
    }

    /// Build a source from optional provider fields.
    ///
    /// Returns `None` unless both the link and the label are present and
    /// non-empty.
    pub fn from_parts(title: Option<&str>, uri: Option<&str>) -> Option<Self> {
        match (title, uri) {
            (Some(title), Some(uri)) if !title.is_empty() && !uri.is_empty() => {
                Some(Self::new(title, uri))
            }
            _ => None,
        }
    }
}

/// Keep the first source for each `uri`, preserving order of first appearance.
///
/// Later duplicates are dropped whole; their titles are not merged.
pub fn dedup_sources(sources: impl IntoIterator<Item = GroundingSource>) -> Vec<GroundingSource> {
    let mut seen = HashSet::new();
    sources
        .into_iter()
        .filter(|source| seen.insert(source.uri.clone()))
        .collect()
}

/// Normalized answer to one query (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Free text using the line-oriented markup understood by [`crate::render`]
    pub content: String,
    /// Cited sources, unique by uri
    pub sources: Vec<GroundingSource>,
    /// Local time the result was produced, display only
    pub timestamp: String,
}

impl SearchResult {
    pub fn new(
        content: impl Into<String>,
        sources: Vec<GroundingSource>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            content: content.into(),
            sources,
            timestamp: timestamp.into(),
        }
    }

    pub fn has_sources(&self) -> bool {
        !self.sources.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_requires_both_fields() {
        assert!(GroundingSource::from_parts(Some("WHO"), Some("https://who.int")).is_some());
        assert!(GroundingSource::from_parts(None, Some("https://who.int")).is_none());
        assert!(GroundingSource::from_parts(Some("WHO"), None).is_none());
        assert!(GroundingSource::from_parts(Some(""), Some("https://who.int")).is_none());
    }

    #[test]
    fn test_dedup_first_occurrence_wins() {
        let sources = vec![
            GroundingSource::new("L1", "A"),
            GroundingSource::new("L2", "B"),
            GroundingSource::new("L3", "A"),
            GroundingSource::new("L4", "C"),
        ];

        let deduped = dedup_sources(sources);

        assert_eq!(
            deduped,
            vec![
                GroundingSource::new("L1", "A"),
                GroundingSource::new("L2", "B"),
                GroundingSource::new("L4", "C"),
            ]
        );
    }

    #[test]
    fn test_dedup_empty() {
        assert!(dedup_sources(Vec::new()).is_empty());
    }

    #[test]
    fn test_has_sources() {
        let result = SearchResult::new("text", vec![], "10:00:00");
        assert!(!result.has_sources());
    }
}
