//! Configuration for query evaluation and result presentation.

use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{Result, WikiSearchError};
use crate::query::Score;

/// Configuration for the search engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Fetch the postings of distinct query terms in parallel.
    pub parallel_lookup: bool,

    /// Lower-case query terms before lookup.
    pub lowercase_terms: bool,

    /// Maximum number of hits to present.
    /// If None, all hits are presented.
    pub default_limit: Option<usize>,

    /// Hits scoring below this are not presented.
    pub min_score: Option<Score>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            parallel_lookup: true,
            lowercase_terms: true,
            default_limit: None,
            min_score: None,
        }
    }
}

impl SearchConfig {
    /// Load a configuration from a JSON file. Missing keys take their
    /// default values.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let config: SearchConfig = serde_json::from_str(&json).map_err(|e| {
            WikiSearchError::config(format!("Invalid config file {}: {e}", path.display()))
        })?;
        info!("Loaded search config from {}", path.display());
        Ok(config)
    }

    /// Default presentation options for this configuration.
    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            limit: self.default_limit,
            min_score: self.min_score,
        }
    }
}

/// Options for presenting a single result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Keep only the highest-scoring `limit` hits.
    pub limit: Option<usize>,

    /// Drop hits scoring below this.
    pub min_score: Option<Score>,
}

impl SearchOptions {
    /// Create options that keep at most `limit` hits.
    pub fn new(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Default::default()
        }
    }

    /// Set the minimum score threshold.
    pub fn with_min_score(mut self, min_score: Score) -> Self {
        self.min_score = Some(min_score);
        self
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = SearchConfig::default();
        assert!(config.parallel_lookup);
        assert!(config.lowercase_terms);
        assert_eq!(config.search_options(), SearchOptions::default());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"parallel_lookup": false, "default_limit": 5}}"#).unwrap();

        let config = SearchConfig::from_file(file.path()).unwrap();
        assert!(!config.parallel_lookup);
        assert!(config.lowercase_terms);
        assert_eq!(config.search_options(), SearchOptions::new(5));
    }

    #[test]
    fn test_invalid_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"min_score": "high"}}"#).unwrap();

        let err = SearchConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, WikiSearchError::Config(_)));
    }
}
