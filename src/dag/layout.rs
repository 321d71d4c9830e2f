// src/dag/layout.rs

use std::collections::{BTreeMap, HashMap};

use petgraph::graph::NodeIndex;

use crate::config::LayoutSection;
use crate::dag::graph::ConferenceGraph;
use crate::errors::Result;

/// Position of one node in the leveled layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedNode {
    pub index: NodeIndex,
    pub level: usize,
    pub x: i64,
    pub y: i64,
}

/// Assign each node a level and a position.
///
/// Sources sit on level 0; every other node sits one level below its
/// deepest predecessor. Within a level, nodes keep topological order and
/// are spread `x_spacing` apart; levels are `y_spacing` apart, growing
/// upwards (`y = -y_spacing * level`).
pub fn level_layout(graph: &ConferenceGraph, layout: &LayoutSection) -> Result<Vec<PlacedNode>> {
    let order = graph.topological_order()?;

    let mut levels: HashMap<NodeIndex, usize> = HashMap::with_capacity(order.len());
    for &idx in order.iter() {
        let level = graph
            .predecessor_indices(idx)
            .filter_map(|p| levels.get(&p))
            .max()
            .map_or(0, |deepest| deepest + 1);
        levels.insert(idx, level);
    }

    let mut per_level: BTreeMap<usize, Vec<NodeIndex>> = BTreeMap::new();
    for &idx in order.iter() {
        per_level.entry(levels[&idx]).or_default().push(idx);
    }

    let mut placed = Vec::with_capacity(order.len());
    for (level, nodes) in per_level {
        let y = -layout.y_spacing * level as i64;
        for (i, index) in nodes.into_iter().enumerate() {
            placed.push(PlacedNode {
                index,
                level,
                x: layout.x_spacing * i as i64,
                y,
            });
        }
    }

    Ok(placed)
}
