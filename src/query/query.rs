//! Compound boolean queries over search terms.

use std::fmt;

use ahash::AHashSet;

use crate::error::Result;
use crate::query::result::QueryResult;

/// A boolean expression whose leaves are search terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Documents containing a single term.
    Term(String),
    /// Documents matching both sides (intersection).
    And(Box<Query>, Box<Query>),
    /// Documents matching either side (union).
    Or(Box<Query>, Box<Query>),
    /// Documents matching the left side but not the right (difference).
    Minus(Box<Query>, Box<Query>),
}

impl Query {
    /// Create a term query.
    pub fn term<S: Into<String>>(term: S) -> Self {
        Query::Term(term.into())
    }

    /// Combine two queries with AND.
    pub fn and(self, other: Query) -> Self {
        Query::And(Box::new(self), Box::new(other))
    }

    /// Combine two queries with OR.
    pub fn or(self, other: Query) -> Self {
        Query::Or(Box::new(self), Box::new(other))
    }

    /// Exclude the documents matched by `other`.
    pub fn minus(self, other: Query) -> Self {
        Query::Minus(Box::new(self), Box::new(other))
    }

    /// Distinct terms of this query, in order of first occurrence.
    pub fn terms(&self) -> Vec<&str> {
        let mut seen = AHashSet::new();
        let mut terms = Vec::new();
        self.collect_terms(&mut seen, &mut terms);
        terms
    }

    fn collect_terms<'a>(&'a self, seen: &mut AHashSet<&'a str>, terms: &mut Vec<&'a str>) {
        match self {
            Query::Term(term) => {
                if seen.insert(term.as_str()) {
                    terms.push(term.as_str());
                }
            }
            Query::And(left, right) | Query::Or(left, right) | Query::Minus(left, right) => {
                left.collect_terms(seen, terms);
                right.collect_terms(seen, terms);
            }
        }
    }

    /// Evaluate this query, resolving each term with `lookup`.
    ///
    /// `lookup` is called once per term leaf; callers that want each term
    /// fetched only once should resolve [`Query::terms`] up front and look
    /// them up from a cache.
    pub fn evaluate<F>(&self, lookup: &mut F) -> Result<QueryResult>
    where
        F: FnMut(&str) -> Result<QueryResult>,
    {
        match self {
            Query::Term(term) => lookup(term.as_str()),
            Query::And(left, right) => {
                let left = left.evaluate(lookup)?;
                let right = right.evaluate(lookup)?;
                Ok(left.intersect(&right))
            }
            Query::Or(left, right) => {
                let left = left.evaluate(lookup)?;
                let right = right.evaluate(lookup)?;
                Ok(left.union(&right))
            }
            Query::Minus(left, right) => {
                let left = left.evaluate(lookup)?;
                let right = right.evaluate(lookup)?;
                Ok(left.difference(&right))
            }
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::Term(term) => write!(f, "{term}"),
            Query::And(left, right) => write!(f, "({left} AND {right})"),
            Query::Or(left, right) => write!(f, "({left} OR {right})"),
            Query::Minus(left, right) => write!(f, "({left} MINUS {right})"),
        }
    }
}
