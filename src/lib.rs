//! # wikisearch
//!
//! Boolean combination and relevance ranking of scored search results.
//!
//! ## Features
//!
//! - Immutable scored result sets with AND, OR and MINUS combinators
//! - Deterministic ascending ranking
//! - Boolean query parsing and evaluation against a pluggable term index
//! - In-memory, JSON-loadable term index
//!
//! ```
//! use wikisearch::prelude::*;
//!
//! let index = MemoryIndex::new();
//! index.add_posting("java", "https://en.wikipedia.org/wiki/Java", 12);
//! index.add_posting("java", "https://en.wikipedia.org/wiki/Coffee", 3);
//! index.add_posting("coffee", "https://en.wikipedia.org/wiki/Coffee", 40);
//!
//! let engine = SearchEngine::new(index, SearchConfig::default());
//! let hits = engine.search_ranked("java MINUS coffee").unwrap();
//! assert_eq!(hits, vec![RankedHit::new("https://en.wikipedia.org/wiki/Java", 12)]);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod index;
pub mod query;
pub mod search;

pub mod prelude {
    pub use crate::config::{SearchConfig, SearchOptions};
    pub use crate::error::{Result, WikiSearchError};
    pub use crate::index::{MemoryIndex, TermIndex};
    pub use crate::query::{Query, QueryParser, QueryResult, RankedHit, Score};
    pub use crate::search::SearchEngine;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
