//! Error types for the wikisearch library.
//!
//! Combining and ranking results never fails; errors only arise at the
//! edges where postings are looked up, queries are parsed, or files are
//! read. All of them are represented by [`WikiSearchError`].
//!
//! # Examples
//!
//! ```
//! use wikisearch::error::{Result, WikiSearchError};
//!
//! fn lookup(term: &str) -> Result<()> {
//!     Err(WikiSearchError::index(format!("no such term: {term}")))
//! }
//!
//! match lookup("java") {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for wikisearch operations.
#[derive(Error, Debug)]
pub enum WikiSearchError {
    /// I/O errors (reading index or config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Index lookup errors
    #[error("Index error: {0}")]
    Index(String),

    /// Query-related errors (parsing, invalid queries)
    #[error("Query error: {0}")]
    Query(String),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with WikiSearchError.
pub type Result<T> = std::result::Result<T, WikiSearchError>;

impl WikiSearchError {
    /// Create a new index error.
    pub fn index<S: Into<String>>(msg: S) -> Self {
        WikiSearchError::Index(msg.into())
    }

    /// Create a new parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        WikiSearchError::Query(msg.into()) // Parse errors are treated as query errors
    }

    /// Create a new config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        WikiSearchError::Config(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        WikiSearchError::Other(msg.into())
    }

    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        WikiSearchError::Index(format!("Not found: {}", msg.into()))
    }
}
