//! Command implementations for the wikisearch CLI.

use std::io::{self, Write};
use std::time::Instant;

use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::{SearchConfig, SearchOptions};
use crate::error::Result;
use crate::index::{MemoryIndex, TermIndex};
use crate::query::Query;
use crate::search::SearchEngine;

/// Execute a CLI command, writing results to stdout.
pub fn execute_command(args: WikiSearchArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute_command_to(&args, &mut out)
}

/// Execute a CLI command, writing results to `out`.
pub fn execute_command_to<W: Write>(args: &WikiSearchArgs, out: &mut W) -> Result<()> {
    let config = load_config(args)?;
    match &args.command {
        Command::Search(search_args) => search_index(search_args, config, args, out),
        Command::Terms(terms_args) => list_terms(terms_args, args, out),
        Command::Demo(demo_args) => run_demo(demo_args, config, args, out),
    }
}

/// Load the config file if one was given.
fn load_config(args: &WikiSearchArgs) -> Result<SearchConfig> {
    match &args.config {
        Some(path) => SearchConfig::from_file(path),
        None => Ok(SearchConfig::default()),
    }
}

/// Search the index.
fn search_index<W: Write>(
    search_args: &SearchArgs,
    mut config: SearchConfig,
    args: &WikiSearchArgs,
    out: &mut W,
) -> Result<()> {
    // Command line flags override the config file.
    if search_args.sequential {
        config.parallel_lookup = false;
    }
    if search_args.case_sensitive {
        config.lowercase_terms = false;
    }
    let options = SearchOptions {
        limit: search_args.limit.or(config.default_limit),
        min_score: search_args.min_score.or(config.min_score),
    };

    let index = MemoryIndex::from_json_file(&search_args.index_file)?;
    let engine = SearchEngine::new(index, config);

    let start_time = Instant::now();
    let query = engine.parse(&search_args.query)?;
    info!("Running query {query}");
    let result = engine.search(&query)?;
    let hits = engine.ranked(&result, &options);
    let duration = start_time.elapsed();

    output_result(
        out,
        &SearchResults {
            query: query.to_string(),
            total_hits: result.len(),
            duration_ms: duration.as_millis() as u64,
            hits,
        },
        args,
    )
}

/// List the terms of the index.
fn list_terms<W: Write>(terms_args: &TermsArgs, args: &WikiSearchArgs, out: &mut W) -> Result<()> {
    let index = MemoryIndex::from_json_file(&terms_args.index_file)?;

    let terms = index
        .terms()
        .into_iter()
        .map(|term| {
            let doc_freq = index.doc_freq(&term)?;
            Ok(TermStats { term, doc_freq })
        })
        .collect::<Result<Vec<_>>>()?;

    output_result(out, &TermsList { terms }, args)
}

/// Show two terms and their combinations.
fn run_demo<W: Write>(
    demo_args: &DemoArgs,
    config: SearchConfig,
    args: &WikiSearchArgs,
    out: &mut W,
) -> Result<()> {
    let index = MemoryIndex::from_json_file(&demo_args.index_file)?;
    let engine = SearchEngine::new(index, config);

    let first = engine.term(&demo_args.first)?;
    let second = engine.term(&demo_args.second)?;
    debug!(
        "'{}' matched {} documents, '{}' matched {}",
        demo_args.first,
        first.len(),
        demo_args.second,
        second.len()
    );

    let (a, b) = (
        Query::term(demo_args.first.as_str()),
        Query::term(demo_args.second.as_str()),
    );

    let sections = vec![
        ResultSection {
            title: format!("Results for '{}'", demo_args.first),
            hits: first.rank(),
        },
        ResultSection {
            title: format!("Results for '{}'", demo_args.second),
            hits: second.rank(),
        },
        ResultSection {
            title: format!("AND {}", a.clone().and(b.clone())),
            hits: first.intersect(&second).rank(),
        },
        ResultSection {
            title: format!("OR {}", a.clone().or(b.clone())),
            hits: first.union(&second).rank(),
        },
        ResultSection {
            title: format!("MINUS {}", a.minus(b)),
            hits: first.difference(&second).rank(),
        },
    ];

    output_result(out, &DemoResults { sections }, args)
}
