// src/dag/graph.rs

use std::collections::HashMap;

use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use crate::conference::{Conference, DayOffset};
use crate::errors::{ConfdagError, Result};

/// Node payload: the (possibly normalised) conference and its hover text.
#[derive(Debug, Clone)]
pub struct ConferenceNode {
    pub conference: Conference,
    pub info: String,
}

/// Directed "can resubmit from A to B" graph.
///
/// Node indices follow the order in which conferences were added, which is
/// the input order.
#[derive(Debug, Clone)]
pub struct ConferenceGraph {
    graph: DiGraph<ConferenceNode, ()>,
    by_name: HashMap<String, NodeIndex>,
    start_day: DayOffset,
    next: Option<NodeIndex>,
}

impl ConferenceGraph {
    pub(crate) fn new(start_day: DayOffset) -> Self {
        Self {
            graph: DiGraph::new(),
            by_name: HashMap::new(),
            start_day,
            next: None,
        }
    }

    pub(crate) fn add_conference(&mut self, conference: Conference) -> NodeIndex {
        let name = conference.name().to_string();
        let info = conference.tooltip();
        let idx = self.graph.add_node(ConferenceNode { conference, info });
        self.by_name.insert(name, idx);
        idx
    }

    pub(crate) fn add_edge(&mut self, from: NodeIndex, to: NodeIndex) {
        self.graph.update_edge(from, to, ());
    }

    pub(crate) fn set_next(&mut self, next: Option<NodeIndex>) {
        self.next = next;
    }

    /// Start day the graph was normalised against.
    pub fn start_day(&self) -> DayOffset {
        self.start_day
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// All node indices in insertion order.
    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    pub fn node(&self, idx: NodeIndex) -> &ConferenceNode {
        &self.graph[idx]
    }

    /// Normalised conferences in insertion order.
    pub fn conferences(&self) -> impl Iterator<Item = &Conference> {
        self.graph.node_weights().map(|n| &n.conference)
    }

    pub fn index_of(&self, name: &str) -> Option<NodeIndex> {
        self.by_name.get(name).copied()
    }

    pub fn conference(&self, name: &str) -> Option<&Conference> {
        self.index_of(name).map(|idx| &self.graph[idx].conference)
    }

    /// Conference whose deadline is closest after the start day.
    pub fn next_conference(&self) -> Option<&Conference> {
        self.next.map(|idx| &self.graph[idx].conference)
    }

    pub fn is_next(&self, idx: NodeIndex) -> bool {
        self.next == Some(idx)
    }

    /// All edges as `(from, to)` name pairs.
    pub fn edges(&self) -> Vec<(&str, &str)> {
        self.graph
            .edge_references()
            .map(|e| {
                (
                    self.graph[e.source()].conference.name(),
                    self.graph[e.target()].conference.name(),
                )
            })
            .collect()
    }

    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        match (self.index_of(from), self.index_of(to)) {
            (Some(a), Some(b)) => self.graph.contains_edge(a, b),
            _ => false,
        }
    }

    /// Conferences a rejected paper from `name` can move on to directly.
    pub fn successors(&self, name: &str) -> Vec<&str> {
        self.neighbors(name, Direction::Outgoing)
    }

    /// Conferences whose results arrive in time for `name`.
    pub fn predecessors(&self, name: &str) -> Vec<&str> {
        self.neighbors(name, Direction::Incoming)
    }

    pub(crate) fn predecessor_indices(&self, idx: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors_directed(idx, Direction::Incoming)
    }

    fn neighbors(&self, name: &str, dir: Direction) -> Vec<&str> {
        let Some(idx) = self.index_of(name) else {
            return Vec::new();
        };
        let mut out: Vec<&str> = self
            .graph
            .neighbors_directed(idx, dir)
            .map(|n| self.graph[n].conference.name())
            .collect();
        out.sort_unstable();
        out
    }

    /// Topological order of the nodes.
    ///
    /// A cycle means the edge construction broke its own invariant and is
    /// reported as [`ConfdagError::Cycle`].
    pub fn topological_order(&self) -> Result<Vec<NodeIndex>> {
        toposort(&self.graph, None).map_err(|cycle| {
            let name = self.graph[cycle.node_id()].conference.name();
            ConfdagError::Cycle(format!(
                "cycle detected in conference graph involving '{}'",
                name
            ))
        })
    }
}
