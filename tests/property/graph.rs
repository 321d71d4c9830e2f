use std::collections::HashMap;

use proptest::prelude::*;

use confdag::conference::Conference;
use confdag::dag::{build_graph, normalize};
use confdag_test_utils::builders::conf;

// Each conference is (series, deadline, window length). Names are
// "S<series>:<edition>" so that conferences drawn from the same series share
// everything but the final character.
fn conferences_strategy(max: usize) -> impl Strategy<Value = Vec<Conference>> {
    proptest::collection::vec((0..4usize, 0..365i64, 1..200i64), 0..=max).prop_map(|raw| {
        let mut editions: HashMap<usize, u8> = HashMap::new();
        raw.into_iter()
            .map(|(series, deadline, len)| {
                let edition = editions.entry(series).or_insert(b'a');
                let name = format!("S{}:{}", series, *edition as char);
                *edition += 1;
                conf(&name, deadline, deadline + len)
            })
            .collect()
    })
}

fn witness_exists(all: &[Conference], a: &Conference, b: &Conference) -> bool {
    all.iter().any(|c| {
        c.name() != a.name()
            && c.name() != b.name()
            && a.notification_date() < c.submission_deadline()
            && c.notification_date() < b.submission_deadline()
    })
}

proptest! {
    #[test]
    fn graph_is_acyclic_for_well_formed_windows(
        confs in conferences_strategy(12),
        start_day in 0..400i64,
    ) {
        let graph = build_graph(&confs, start_day);
        prop_assert!(graph.topological_order().is_ok());
    }

    #[test]
    fn no_edge_joins_a_series(
        confs in conferences_strategy(12),
        start_day in 0..400i64,
    ) {
        let graph = build_graph(&confs, start_day);
        for (from, to) in graph.edges() {
            prop_assert_ne!(&from[..from.len() - 1], &to[..to.len() - 1]);
        }
    }

    #[test]
    fn edges_are_exactly_the_transitive_reduction(
        confs in conferences_strategy(12),
        start_day in 0..400i64,
    ) {
        let graph = build_graph(&confs, start_day);
        let normalized = normalize(&confs, start_day);

        for a in normalized.iter() {
            for b in normalized.iter() {
                if a.name() == b.name() {
                    continue;
                }
                let expected = !a.is_same_series(b)
                    && a.notification_date() < b.submission_deadline()
                    && !witness_exists(&normalized, a, b);
                prop_assert_eq!(
                    graph.has_edge(a.name(), b.name()),
                    expected,
                    "edge {} -> {}", a.name(), b.name()
                );
            }
        }
    }

    #[test]
    fn normalized_deadlines_fall_inside_the_window(
        confs in conferences_strategy(12),
        start_day in 0..=365i64,
    ) {
        let normalized = normalize(&confs, start_day);
        for (orig, norm) in confs.iter().zip(normalized.iter()) {
            prop_assert!(norm.submission_deadline() >= start_day);
            if orig.submission_deadline() >= start_day {
                prop_assert_eq!(orig, norm);
            } else {
                prop_assert_eq!(norm.submission_deadline(), orig.submission_deadline() + 365);
                prop_assert_eq!(norm.notification_date(), orig.notification_date() + 365);
            }
        }
    }
}
