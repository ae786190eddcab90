//! In-memory term index backed by a hash map.

use std::fs;
use std::path::Path;

use ahash::AHashMap;
use log::info;
use parking_lot::RwLock;

use crate::error::{Result, WikiSearchError};
use crate::index::TermIndex;
use crate::query::Score;

type Postings = AHashMap<String, Score>;

/// A thread-safe term index held entirely in memory.
///
/// The serialized form is a JSON object mapping each term to its postings:
///
/// ```json
/// { "java": { "https://en.wikipedia.org/wiki/Java": 12 } }
/// ```
#[derive(Debug, Default)]
pub struct MemoryIndex {
    terms: RwLock<AHashMap<String, Postings>>,
    /// Reject lookups of unknown terms instead of returning no postings.
    strict: bool,
}

impl MemoryIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether unknown terms are an error.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Record `count` occurrences of `term` in document `url`.
    ///
    /// Counts for the same term and document accumulate.
    pub fn add_posting<T, U>(&self, term: T, url: U, count: Score)
    where
        T: Into<String>,
        U: Into<String>,
    {
        let mut terms = self.terms.write();
        let total = terms
            .entry(term.into())
            .or_default()
            .entry(url.into())
            .or_insert(0);
        *total = total.wrapping_add(count);
    }

    /// Number of distinct terms.
    pub fn term_count(&self) -> usize {
        self.terms.read().len()
    }

    /// Check if the index has no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.read().is_empty()
    }

    /// Load an index from its JSON form.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let terms: AHashMap<String, Postings> = serde_json::from_str(json)?;
        Ok(MemoryIndex {
            terms: RwLock::new(terms),
            strict: false,
        })
    }

    /// Load an index from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let index = Self::from_json_str(&json)?;
        info!(
            "Loaded index with {} terms from {}",
            index.term_count(),
            path.display()
        );
        Ok(index)
    }

    /// Serialize the index to JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(&*self.terms.read())?)
    }
}

impl TermIndex for MemoryIndex {
    fn term_counts(&self, term: &str) -> Result<AHashMap<String, Score>> {
        // Clone under the read lock; callers build results after it is released.
        match self.terms.read().get(term) {
            Some(postings) => Ok(postings.clone()),
            None if self.strict => Err(WikiSearchError::not_found(format!("term '{term}'"))),
            None => Ok(AHashMap::new()),
        }
    }

    fn terms(&self) -> Vec<String> {
        let mut terms: Vec<String> = self.terms.read().keys().cloned().collect();
        terms.sort();
        terms
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Arc;
    use std::thread;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_add_posting_accumulates() {
        let index = MemoryIndex::new();
        index.add_posting("java", "u1", 2);
        index.add_posting("java", "u1", 3);
        index.add_posting("java", "u2", 1);

        let counts = index.term_counts("java").unwrap();
        assert_eq!(counts.get("u1"), Some(&5));
        assert_eq!(counts.get("u2"), Some(&1));
        assert_eq!(index.term_count(), 1);
    }

    #[test]
    fn test_add_posting_wraps_on_overflow() {
        let index = MemoryIndex::new();
        index.add_posting("java", "u1", Score::MAX);
        index.add_posting("java", "u1", 2);

        let counts = index.term_counts("java").unwrap();
        assert_eq!(counts.get("u1"), Some(&1));
    }

    #[test]
    fn test_unknown_term() {
        let index = MemoryIndex::new();
        assert!(index.term_counts("java").unwrap().is_empty());

        let strict = MemoryIndex::new().with_strict(true);
        let err = strict.term_counts("java").unwrap_err();
        assert!(matches!(err, WikiSearchError::Index(_)));
    }

    #[test]
    fn test_json_round_trip() {
        let index = MemoryIndex::from_json_str(r#"{"java": {"u1": 2, "u2": 5}, "tea": {}}"#).unwrap();
        assert_eq!(index.terms(), vec!["java", "tea"]);

        let reloaded = MemoryIndex::from_json_str(&index.to_json_string().unwrap()).unwrap();
        assert_eq!(reloaded.term_counts("java").unwrap().get("u2"), Some(&5));
    }

    #[test]
    fn test_negative_counts_rejected() {
        let err = MemoryIndex::from_json_str(r#"{"java": {"u1": -2}}"#).unwrap_err();
        assert!(matches!(err, WikiSearchError::Json(_)));
    }

    #[test]
    fn test_from_json_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"java": {{"u1": 2}}}}"#).unwrap();

        let index = MemoryIndex::from_json_file(file.path()).unwrap();
        assert_eq!(index.term_counts("java").unwrap().get("u1"), Some(&2));

        let missing = MemoryIndex::from_json_file("/nonexistent/index.json").unwrap_err();
        assert!(matches!(missing, WikiSearchError::Io(_)));
    }

    #[test]
    fn test_concurrent_writers_and_readers() {
        let index = Arc::new(MemoryIndex::new());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let index = Arc::clone(&index);
                thread::spawn(move || {
                    for _ in 0..100 {
                        index.add_posting("java", format!("u{i}"), 1);
                        let _ = index.term_counts("java").unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let counts = index.term_counts("java").unwrap();
        assert_eq!(counts.len(), 4);
        assert!(counts.values().all(|&count| count == 100));
    }
}
