// src/dag/builder.rs

use petgraph::graph::NodeIndex;
use tracing::{debug, info};

use crate::conference::{Conference, DayOffset};
use crate::dag::graph::ConferenceGraph;
use crate::dag::normalize::{next_conference, normalize};

/// Build the resubmission graph for a given start day.
///
/// Edge A -> B exists iff:
/// - A and B are not in the same series,
/// - A's notification comes before B's deadline, and
/// - no other conference C fits strictly between them
///   (`A.notification < C.deadline` and `C.notification < B.deadline`).
///
/// The result is the transitive reduction of "can eventually resubmit".
pub fn build_graph(conferences: &[Conference], start_day: DayOffset) -> ConferenceGraph {
    let normalized = normalize(conferences, start_day);
    let next = next_conference(&normalized, start_day);

    let mut graph = ConferenceGraph::new(start_day);
    let indices: Vec<NodeIndex> = normalized
        .iter()
        .cloned()
        .map(|c| graph.add_conference(c))
        .collect();
    graph.set_next(next.map(|i| indices[i]));

    if let Some(i) = next {
        info!(
            conference = normalized[i].name(),
            days_until_deadline = normalized[i].submission_deadline() - start_day,
            "next conference"
        );
    }

    for (a_pos, a) in normalized.iter().enumerate() {
        for (b_pos, b) in normalized.iter().enumerate() {
            if a_pos == b_pos || a.is_same_series(b) {
                continue;
            }
            if a.notification_date() >= b.submission_deadline() {
                continue;
            }
            if has_in_between(&normalized, a_pos, b_pos) {
                continue;
            }
            debug!(from = a.name(), to = b.name(), "edge");
            graph.add_edge(indices[a_pos], indices[b_pos]);
        }
    }

    info!(
        start_day,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "conference graph built"
    );

    graph
}

/// Whether some third conference can be slotted between `a` and `b`.
fn has_in_between(conferences: &[Conference], a_pos: usize, b_pos: usize) -> bool {
    let a = &conferences[a_pos];
    let b = &conferences[b_pos];
    conferences.iter().enumerate().any(|(c_pos, c)| {
        c_pos != a_pos
            && c_pos != b_pos
            && a.notification_date() < c.submission_deadline()
            && c.notification_date() < b.submission_deadline()
    })
}
