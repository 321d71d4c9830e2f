// tests/graph_builder.rs

use std::collections::BTreeSet;

use confdag::dag::build_graph;
use confdag::dag::ConferenceGraph;
use confdag::errors::ConfdagError;
use confdag_test_utils::builders::{conf, ConferenceBuilder};
use confdag_test_utils::init_tracing;

fn edge_set(graph: &ConferenceGraph) -> BTreeSet<(String, String)> {
    graph
        .edges()
        .into_iter()
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .collect()
}

fn edges(pairs: &[(&str, &str)]) -> BTreeSet<(String, String)> {
    pairs
        .iter()
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .collect()
}

#[test]
fn overlapping_windows_feed_the_later_deadline() {
    init_tracing();

    // A(10,20) and B(15,25) overlap; C(30,40) comes after both.
    // B cannot sit between A and C because its deadline (15) precedes A's
    // notification (20), so A -> C stays.
    let confs = vec![conf("A1", 10, 20), conf("B1", 15, 25), conf("C1", 30, 40)];
    let graph = build_graph(&confs, 0);

    assert_eq!(edge_set(&graph), edges(&[("A1", "C1"), ("B1", "C1")]));
}

#[test]
fn chain_suppresses_the_direct_long_edge() {
    let confs = vec![conf("A1", 0, 10), conf("B1", 20, 30), conf("C1", 40, 50)];
    let graph = build_graph(&confs, 0);

    assert_eq!(edge_set(&graph), edges(&[("A1", "B1"), ("B1", "C1")]));
    assert!(!graph.has_edge("A1", "C1"));
}

#[test]
fn fan_out_when_successors_overlap() {
    let confs = vec![conf("A1", 0, 10), conf("B1", 20, 30), conf("C1", 25, 35)];
    let graph = build_graph(&confs, 0);

    assert_eq!(edge_set(&graph), edges(&[("A1", "B1"), ("A1", "C1")]));
    assert_eq!(graph.successors("A1"), vec!["B1", "C1"]);
    assert_eq!(graph.predecessors("C1"), vec!["A1"]);
}

#[test]
fn same_series_never_gets_an_edge() {
    let confs = vec![conf("FOO23", 0, 10), conf("FOO24", 20, 30)];
    let graph = build_graph(&confs, 0);

    assert_eq!(graph.edge_count(), 0);
    assert!(!graph.has_edge("FOO23", "FOO24"));
    assert!(!graph.has_edge("FOO24", "FOO23"));
}

#[test]
fn same_series_conference_still_counts_as_an_intermediate() {
    // FOO24 fits between FOO23 and BAR1, so FOO23 -> BAR1 is redundant even
    // though FOO23 -> FOO24 itself is never drawn.
    let confs = vec![
        conf("FOO23", 0, 10),
        conf("FOO24", 20, 30),
        conf("BAR1", 40, 50),
    ];
    let graph = build_graph(&confs, 0);

    assert_eq!(edge_set(&graph), edges(&[("FOO24", "BAR1")]));
}

#[test]
fn series_strips_only_one_character() {
    let a = conf("CONFA", 0, 10);
    let b = conf("CONFB", 20, 30);
    let c = conf("CON", 40, 50);
    assert_eq!(a.series(), "CONF");
    assert!(a.is_same_series(&b));
    assert!(!a.is_same_series(&c));

    let graph = build_graph(&[a, b, c], 0);
    assert_eq!(edge_set(&graph), edges(&[("CONFB", "CON")]));
}

#[test]
fn two_conferences_get_the_plain_ordering_edge() {
    let confs = vec![conf("A1", 0, 10), conf("B1", 20, 30)];
    let graph = build_graph(&confs, 0);
    assert_eq!(edge_set(&graph), edges(&[("A1", "B1")]));
}

#[test]
fn passed_deadlines_are_rolled_into_next_year() {
    // With start day 15, A's deadline (10) has passed and becomes 375.
    let confs = vec![conf("A1", 10, 20), conf("B1", 30, 40)];
    let graph = build_graph(&confs, 15);

    assert_eq!(edge_set(&graph), edges(&[("B1", "A1")]));
    assert_eq!(graph.conference("A1").map(|c| c.submission_deadline()), Some(375));
    assert_eq!(graph.next_conference().map(|c| c.name()), Some("B1"));
    assert_eq!(graph.start_day(), 15);
}

#[test]
fn nodes_carry_display_info() {
    let confs = vec![ConferenceBuilder::new("PLDI5")
        .area("PL")
        .page("7")
        .column("3")
        .dates("2025-11-10", "2026-02-20")
        .window(340, 445)
        .build()];
    let graph = build_graph(&confs, 0);

    let idx = graph.index_of("PLDI5").expect("node exists");
    let info = &graph.node(idx).info;
    assert_eq!(
        info,
        "Area: PL\nSubmission deadline: 2025-11-10\nNotification date: 2026-02-20\nPage: 7\nColumn: 3"
    );
}

#[test]
fn empty_input_builds_an_empty_graph() {
    let graph = build_graph(&[], 0);
    assert_eq!(graph.node_count(), 0);
    assert!(graph.next_conference().is_none());
    assert!(graph.topological_order().map(|o| o.is_empty()).unwrap_or(false));
}

#[test]
fn inverted_windows_can_form_a_cycle_which_is_reported() {
    // Notifications before deadlines break the acyclicity guarantee.
    let confs = vec![conf("A1", 30, 5), conf("B1", 20, 1)];
    let graph = build_graph(&confs, 0);

    assert!(graph.has_edge("A1", "B1"));
    assert!(graph.has_edge("B1", "A1"));
    match graph.topological_order() {
        Err(err @ ConfdagError::Cycle(_)) => assert_eq!(err.stage(), "render"),
        other => panic!("expected Cycle, got {other:?}"),
    }
}
