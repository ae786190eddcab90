//! Query system: scored result sets and the boolean queries that combine them.

pub mod parser;
#[allow(clippy::module_inception)]
pub mod query;
pub mod result;

pub use self::parser::QueryParser;
pub use self::query::Query;
pub use self::result::{QueryResult, RankedHit, Score};
