//! Scored result sets and the boolean algebra over them.
//!
//! A [`QueryResult`] maps document identifiers (typically URLs) to an
//! integer relevance score. Results for single terms come from an index
//! lookup; compound results are built with [`QueryResult::intersect`],
//! [`QueryResult::union`] and [`QueryResult::difference`], each of which
//! returns a new value and leaves its operands untouched.
//!
//! ```
//! use wikisearch::query::QueryResult;
//!
//! let java = QueryResult::from_iter([("u1", 2), ("u2", 5)]);
//! let programming = QueryResult::from_iter([("u2", 3), ("u3", 1)]);
//!
//! let both = java.intersect(&programming);
//! assert_eq!(both.get_score("u2"), 8);
//! assert_eq!(both.get_score("u1"), 0);
//! ```

use std::cmp::Ordering;
use std::collections::HashMap;
use std::ops::{BitAnd, BitOr, Sub};

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Relevance score of a document for a query.
///
/// Sums of scores wrap on overflow.
pub type Score = u64;

/// A single entry of a ranked result list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RankedHit {
    /// The document identifier.
    pub id: String,
    /// The relevance score.
    pub score: Score,
}

impl RankedHit {
    /// Create a new ranked hit.
    pub fn new<S: Into<String>>(id: S, score: Score) -> Self {
        RankedHit {
            id: id.into(),
            score,
        }
    }
}

impl From<RankedHit> for (String, Score) {
    fn from(hit: RankedHit) -> Self {
        (hit.id, hit.score)
    }
}

/// Ascending by score, ties broken by identifier.
fn ascending(a: &RankedHit, b: &RankedHit) -> Ordering {
    a.score.cmp(&b.score).then_with(|| a.id.cmp(&b.id))
}

/// The documents matching a query together with their relevance scores.
///
/// The mapping is private and there is no `&mut self` API, so a value never
/// changes after construction and can be shared freely across threads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryResult {
    scores: AHashMap<String, Score>,
}

impl QueryResult {
    /// Create a result from a pre-built identifier to score mapping.
    pub fn new(scores: HashMap<String, Score>) -> Self {
        QueryResult {
            scores: scores.into_iter().collect(),
        }
    }

    /// Create an empty result.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Score of `id`, or 0 if the document is not part of this result.
    pub fn get_score(&self, id: &str) -> Score {
        self.scores.get(id).copied().unwrap_or(0)
    }

    /// Whether `id` is a member of this result, regardless of its score.
    pub fn contains(&self, id: &str) -> bool {
        self.scores.contains_key(id)
    }

    /// Number of documents in this result.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Check if this result has no documents.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Iterate over the document identifiers in unspecified order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.scores.keys().map(String::as_str)
    }

    /// Iterate over `(id, score)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Score)> {
        self.scores.iter().map(|(id, score)| (id.as_str(), *score))
    }

    /// Sum of all scores in this result.
    pub fn total_score(&self) -> Score {
        self.iter()
            .fold(0, |total: Score, (_, score)| total.wrapping_add(score))
    }

    /// Boolean AND.
    ///
    /// Keeps the documents present in both results; each score is the sum of
    /// the two input scores.
    pub fn intersect(&self, other: &QueryResult) -> QueryResult {
        // Addition commutes, so walk the smaller map and look up in the larger.
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };

        let scores = small
            .scores
            .iter()
            .filter_map(|(id, score)| {
                large
                    .scores
                    .get(id)
                    .map(|other_score| (id.clone(), score.wrapping_add(*other_score)))
            })
            .collect();

        QueryResult { scores }
    }

    /// Boolean OR.
    ///
    /// Keeps every document present in either result; each score is the sum
    /// of the scores from the results that contain it.
    pub fn union(&self, other: &QueryResult) -> QueryResult {
        let mut scores = self.scores.clone();
        scores.reserve(other.len());
        for (id, score) in other.iter() {
            let total = scores.entry(id.to_string()).or_insert(0);
            *total = total.wrapping_add(score);
        }

        QueryResult { scores }
    }

    /// Boolean MINUS.
    ///
    /// Keeps the documents of `self` whose identifier does not occur in
    /// `other` at all. A document stored in `other` with a score of 0 is
    /// still excluded. Scores are taken from `self` unchanged.
    pub fn difference(&self, other: &QueryResult) -> QueryResult {
        let scores = self
            .scores
            .iter()
            .filter(|(id, _)| !other.scores.contains_key(id.as_str()))
            .map(|(id, score)| (id.clone(), *score))
            .collect();

        QueryResult { scores }
    }

    /// All `(id, score)` pairs sorted by score ascending.
    ///
    /// Documents with equal scores are ordered by identifier so the output
    /// is identical on every call.
    pub fn rank(&self) -> Vec<RankedHit> {
        let mut hits: Vec<RankedHit> = self
            .iter()
            .map(|(id, score)| RankedHit::new(id, score))
            .collect();
        hits.sort_unstable_by(ascending);
        hits
    }

    /// The `limit` highest-scoring documents, best first.
    pub fn top(&self, limit: usize) -> Vec<RankedHit> {
        let mut hits = self.rank();
        // Ties keep identifier order, as in rank().
        hits.sort_by(|a, b| b.score.cmp(&a.score));
        hits.truncate(limit);
        hits
    }
}

impl<K: Into<String>> FromIterator<(K, Score)> for QueryResult {
    /// Build a result from `(id, score)` pairs. Repeated identifiers keep
    /// the last score seen, as with any map insert.
    fn from_iter<I: IntoIterator<Item = (K, Score)>>(iter: I) -> Self {
        QueryResult {
            scores: iter.into_iter().map(|(id, score)| (id.into(), score)).collect(),
        }
    }
}

impl From<HashMap<String, Score>> for QueryResult {
    fn from(scores: HashMap<String, Score>) -> Self {
        QueryResult::new(scores)
    }
}

impl From<AHashMap<String, Score>> for QueryResult {
    fn from(scores: AHashMap<String, Score>) -> Self {
        QueryResult { scores }
    }
}

impl BitAnd for &QueryResult {
    type Output = QueryResult;

    fn bitand(self, rhs: &QueryResult) -> QueryResult {
        self.intersect(rhs)
    }
}

impl BitOr for &QueryResult {
    type Output = QueryResult;

    fn bitor(self, rhs: &QueryResult) -> QueryResult {
        self.union(rhs)
    }
}

impl Sub for &QueryResult {
    type Output = QueryResult;

    fn sub(self, rhs: &QueryResult) -> QueryResult {
        self.difference(rhs)
    }
}
