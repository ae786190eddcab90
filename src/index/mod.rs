//! Term lookup: where per-term results come from.
//!
//! The query layer never reads postings itself. It asks a [`TermIndex`] for
//! the documents containing a term and wraps the answer in a
//! [`QueryResult`]. Any failure in the lookup is reported here, before a
//! result is constructed.

pub mod memory;

use ahash::AHashMap;
use log::{debug, warn};

use crate::error::Result;
use crate::query::{QueryResult, Score};

pub use memory::MemoryIndex;

/// Trait for term indexes.
pub trait TermIndex: Send + Sync + std::fmt::Debug {
    /// Get the documents containing `term`, mapped to their relevance score.
    ///
    /// A term with no postings yields an empty map.
    fn term_counts(&self, term: &str) -> Result<AHashMap<String, Score>>;

    /// Get all terms known to this index, sorted.
    fn terms(&self) -> Vec<String>;

    /// Get the number of documents containing `term`.
    fn doc_freq(&self, term: &str) -> Result<usize> {
        Ok(self.term_counts(term)?.len())
    }
}

/// Look up a single term and wrap its postings in a [`QueryResult`].
pub fn search<I: TermIndex + ?Sized>(index: &I, term: &str) -> Result<QueryResult> {
    let counts = index.term_counts(term)?;
    if counts.is_empty() {
        warn!("No postings for term '{term}'");
    } else {
        debug!("Term '{term}' matched {} documents", counts.len());
    }
    Ok(QueryResult::from(counts))
}
