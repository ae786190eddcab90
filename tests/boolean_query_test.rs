//! Integration tests for boolean queries over an in-memory index

use std::sync::Arc;
use std::thread;

use wikisearch::prelude::*;

fn wiki_index() -> MemoryIndex {
    let index = MemoryIndex::new();
    let postings = [
        ("java", "https://en.wikipedia.org/wiki/Java_(programming_language)", 40),
        ("java", "https://en.wikipedia.org/wiki/Java", 25),
        ("java", "https://en.wikipedia.org/wiki/Coffee", 3),
        ("programming", "https://en.wikipedia.org/wiki/Java_(programming_language)", 12),
        ("programming", "https://en.wikipedia.org/wiki/Computer_programming", 30),
        ("coffee", "https://en.wikipedia.org/wiki/Coffee", 55),
        ("coffee", "https://en.wikipedia.org/wiki/Java", 4),
        ("island", "https://en.wikipedia.org/wiki/Java", 18),
    ];
    for (term, url, count) in postings {
        index.add_posting(term, url, count);
    }
    index
}

#[test]
fn test_and_query() -> Result<()> {
    let engine = SearchEngine::new(wiki_index(), SearchConfig::default());

    let result = engine.search_str("java AND programming")?;
    assert_eq!(result.len(), 1);
    assert_eq!(
        result.get_score("https://en.wikipedia.org/wiki/Java_(programming_language)"),
        52
    );

    Ok(())
}

#[test]
fn test_or_query_ranking() -> Result<()> {
    let engine = SearchEngine::new(wiki_index(), SearchConfig::default());

    let hits = engine.search_ranked("programming OR coffee")?;
    let scores: Vec<Score> = hits.iter().map(|hit| hit.score).collect();
    assert_eq!(scores, vec![4, 12, 30, 55]);
    assert_eq!(hits[3].id, "https://en.wikipedia.org/wiki/Coffee");

    Ok(())
}

#[test]
fn test_minus_query() -> Result<()> {
    let engine = SearchEngine::new(wiki_index(), SearchConfig::default());

    let result = engine.search_str("java MINUS coffee")?;
    assert_eq!(
        result.rank(),
        vec![RankedHit::new(
            "https://en.wikipedia.org/wiki/Java_(programming_language)",
            40
        )]
    );

    Ok(())
}

#[test]
fn test_nested_query() -> Result<()> {
    let engine = SearchEngine::new(wiki_index(), SearchConfig::default());

    // (java OR island) keeps Java at 25 + 18, then AND coffee adds 4.
    let result = engine.search_str("(java OR island) AND coffee MINUS programming")?;
    assert_eq!(result.get_score("https://en.wikipedia.org/wiki/Java"), 47);
    assert_eq!(result.get_score("https://en.wikipedia.org/wiki/Coffee"), 58);
    assert_eq!(result.len(), 2);

    Ok(())
}

#[test]
fn test_query_tree_matches_manual_composition() -> Result<()> {
    let index = wiki_index();
    let java = wikisearch::index::search(&index, "java")?;
    let programming = wikisearch::index::search(&index, "programming")?;
    let coffee = wikisearch::index::search(&index, "coffee")?;

    let engine = SearchEngine::new(index, SearchConfig::default());
    let query = Query::term("java")
        .or(Query::term("programming"))
        .minus(Query::term("coffee"));

    assert_eq!(engine.search(&query)?, &(&java | &programming) - &coffee);

    Ok(())
}

#[test]
fn test_shared_results_across_threads() {
    let index = wiki_index();
    let java = Arc::new(wikisearch::index::search(&index, "java").unwrap());
    let coffee = Arc::new(wikisearch::index::search(&index, "coffee").unwrap());
    let expected = java.union(&coffee);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let java = Arc::clone(&java);
            let coffee = Arc::clone(&coffee);
            thread::spawn(move || {
                (
                    java.union(&coffee),
                    java.intersect(&coffee),
                    java.difference(&coffee),
                )
            })
        })
        .collect();

    for handle in handles {
        let (union, intersection, difference) = handle.join().unwrap();
        assert_eq!(union, expected);
        assert_eq!(intersection.len(), 2);
        assert_eq!(difference.len(), 1);
    }
}

#[test]
fn test_empty_query_is_rejected() {
    let engine = SearchEngine::new(wiki_index(), SearchConfig::default());
    assert!(matches!(
        engine.search_str("  "),
        Err(WikiSearchError::Query(_))
    ));
}
