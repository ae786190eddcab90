//! Query evaluation against a term index.

pub mod engine;

pub use engine::SearchEngine;
