//! Property tests for the result combinators and ranking.

use std::collections::HashMap;

use proptest::prelude::*;
use wikisearch::query::{QueryResult, Score};

/// Small id alphabet so generated results overlap.
fn scores() -> impl Strategy<Value = HashMap<String, Score>> {
    prop::collection::hash_map("u[0-9]", 0u64..1000, 0..8)
}

fn ids() -> impl Strategy<Value = String> {
    "u[0-9]"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn union_scores_commute(a in scores(), b in scores(), id in ids()) {
        let (a, b) = (QueryResult::new(a), QueryResult::new(b));
        prop_assert_eq!(a.union(&b).get_score(&id), b.union(&a).get_score(&id));
    }

    #[test]
    fn union_score_is_sum(a in scores(), b in scores(), id in ids()) {
        let (a, b) = (QueryResult::new(a), QueryResult::new(b));
        let union = a.union(&b);
        prop_assert_eq!(union.get_score(&id), a.get_score(&id) + b.get_score(&id));
        prop_assert_eq!(union.contains(&id), a.contains(&id) || b.contains(&id));
    }

    #[test]
    fn intersection_excludes_partial_membership(a in scores(), b in scores(), id in ids()) {
        let (a, b) = (QueryResult::new(a), QueryResult::new(b));
        let intersection = a.intersect(&b);
        if !a.contains(&id) || !b.contains(&id) {
            prop_assert!(!intersection.contains(&id));
        } else {
            prop_assert_eq!(intersection.get_score(&id), a.get_score(&id) + b.get_score(&id));
        }
    }

    #[test]
    fn difference_exclusivity(a in scores(), b in scores(), id in ids()) {
        let (a, b) = (QueryResult::new(a), QueryResult::new(b));
        let difference = a.difference(&b);
        prop_assert_eq!(difference.contains(&id), a.contains(&id) && !b.contains(&id));
        if difference.contains(&id) {
            prop_assert_eq!(difference.get_score(&id), a.get_score(&id));
        }
    }

    #[test]
    fn union_identity(a in scores(), id in ids()) {
        let a = QueryResult::new(a);
        let union = a.union(&QueryResult::empty());
        prop_assert_eq!(union.get_score(&id), a.get_score(&id));
        prop_assert_eq!(&union, &a);
    }

    #[test]
    fn rank_is_ascending_and_complete(a in scores()) {
        let a = QueryResult::new(a);
        let ranked = a.rank();
        prop_assert_eq!(ranked.len(), a.len());
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].score <= pair[1].score);
            if pair[0].score == pair[1].score {
                prop_assert!(pair[0].id < pair[1].id);
            }
        }
        for hit in &ranked {
            prop_assert_eq!(a.get_score(&hit.id), hit.score);
        }
        prop_assert_eq!(a.rank(), ranked);
    }

    #[test]
    fn chained_intersection_is_order_independent(a in scores(), b in scores(), c in scores()) {
        let (a, b, c) = (QueryResult::new(a), QueryResult::new(b), QueryResult::new(c));
        prop_assert_eq!(a.intersect(&b).intersect(&c), c.intersect(&a).intersect(&b));
    }
}

#[test]
fn concrete_scenario() {
    let a = QueryResult::from_iter([("u1", 2), ("u2", 5)]);
    let b = QueryResult::from_iter([("u2", 3), ("u3", 1)]);

    assert_eq!(a.intersect(&b), QueryResult::from_iter([("u2", 8)]));
    assert_eq!(
        a.union(&b),
        QueryResult::from_iter([("u1", 2), ("u2", 8), ("u3", 1)])
    );
    assert_eq!(a.difference(&b), QueryResult::from_iter([("u1", 2)]));
    assert_eq!(b.difference(&a), QueryResult::from_iter([("u3", 1)]));

    let ranked: Vec<(String, Score)> = a.rank().into_iter().map(Into::into).collect();
    assert_eq!(
        ranked,
        vec![("u1".to_string(), 2), ("u2".to_string(), 5)]
    );
}
