//! Search engine that evaluates boolean queries against a term index.

use std::collections::HashMap;
use std::time::Instant;

use log::debug;
use rayon::prelude::*;

use crate::config::{SearchConfig, SearchOptions};
use crate::error::{Result, WikiSearchError};
use crate::index::{self, TermIndex};
use crate::query::{Query, QueryParser, QueryResult, RankedHit};

/// Evaluates queries against a [`TermIndex`].
#[derive(Debug)]
pub struct SearchEngine<I: TermIndex> {
    /// The index term postings are read from.
    index: I,
    /// Engine configuration.
    config: SearchConfig,
    /// Parser for query strings.
    parser: QueryParser,
}

impl<I: TermIndex> SearchEngine<I> {
    /// Create a new search engine over `index`.
    pub fn new(index: I, config: SearchConfig) -> Self {
        let parser = QueryParser::new().with_lowercase(config.lowercase_terms);
        SearchEngine {
            index,
            config,
            parser,
        }
    }

    /// Get the underlying index.
    pub fn index(&self) -> &I {
        &self.index
    }

    /// Get the engine configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Look up a single term, lower-cased like parsed query terms when
    /// `lowercase_terms` is set.
    pub fn term(&self, term: &str) -> Result<QueryResult> {
        if self.config.lowercase_terms {
            index::search(&self.index, &term.to_lowercase())
        } else {
            index::search(&self.index, term)
        }
    }

    /// Parse a query string with this engine's parser settings.
    pub fn parse(&self, query_str: &str) -> Result<Query> {
        self.parser.parse(query_str)
    }

    /// Parse and evaluate a query string.
    pub fn search_str(&self, query_str: &str) -> Result<QueryResult> {
        let query = self.parse(query_str)?;
        self.search(&query)
    }

    /// Evaluate a query.
    ///
    /// Each distinct term is looked up once, then the query tree is folded
    /// with the result combinators.
    pub fn search(&self, query: &Query) -> Result<QueryResult> {
        let start = Instant::now();
        let results = self.fetch_terms(&query.terms())?;

        let result = query.evaluate(&mut |term: &str| {
            results
                .get(term)
                .cloned()
                .ok_or_else(|| WikiSearchError::other(format!("Term '{term}' was not fetched")))
        })?;

        debug!(
            "Evaluated {query}: {} hits in {:?}",
            result.len(),
            start.elapsed()
        );
        Ok(result)
    }

    /// Rank a result for presentation, applying `options`.
    ///
    /// Hits below the minimum score are dropped, then the `limit`
    /// highest-scoring hits are kept. The output is sorted ascending like
    /// [`QueryResult::rank`].
    pub fn ranked(&self, result: &QueryResult, options: &SearchOptions) -> Vec<RankedHit> {
        let mut hits = result.rank();
        if let Some(min_score) = options.min_score {
            hits.retain(|hit| hit.score >= min_score);
        }
        if let Some(limit) = options.limit {
            let skip = hits.len().saturating_sub(limit);
            hits = hits.split_off(skip);
        }
        hits
    }

    /// Parse, evaluate and rank a query string with the configured options.
    pub fn search_ranked(&self, query_str: &str) -> Result<Vec<RankedHit>> {
        let result = self.search_str(query_str)?;
        Ok(self.ranked(&result, &self.config.search_options()))
    }

    fn fetch_terms(&self, terms: &[&str]) -> Result<HashMap<String, QueryResult>> {
        let fetch = |term: &&str| -> Result<(String, QueryResult)> {
            Ok((term.to_string(), index::search(&self.index, term)?))
        };

        if self.config.parallel_lookup && terms.len() > 1 {
            terms.par_iter().map(fetch).collect()
        } else {
            terms.iter().map(fetch).collect()
        }
    }
}
