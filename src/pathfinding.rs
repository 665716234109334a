//! Cost-optimal search between grid cells.
//!
//! Traversable cells become nodes of a directed graph; each legal move under
//! the topology becomes an edge weighted by its [`Direction`]. Shortest paths
//! use A* with a Manhattan-distance estimate. Under the 8-connected topology
//! that estimate can overshoot a diagonal shortcut, so paths there are short
//! but not guaranteed minimal.

use std::collections::HashMap;

use petgraph::algo::{astar, dijkstra};
use petgraph::graph::{DiGraph, NodeIndex};

use crate::grid::Grid;
use crate::types::{Direction, Position, Topology};

/// Movement graph over the traversable cells of a grid.
///
/// Only obstacles shape the graph, so it stays valid while resource counts
/// change.
#[derive(Debug, Clone)]
pub struct GridGraph {
    graph: DiGraph<Position, Direction>,
    nodes: HashMap<Position, NodeIndex>,
}

impl GridGraph {
    /// Builds the movement graph of `grid` under `topology`.
    pub fn build(grid: &Grid, topology: Topology) -> Self {
        let mut graph = DiGraph::new();
        let mut nodes = HashMap::new();

        for pos in grid.positions().filter(|p| grid.is_traversable(*p)) {
            nodes.insert(pos, graph.add_node(pos));
        }

        for pos in grid.positions() {
            let Some(&from) = nodes.get(&pos) else {
                continue;
            };
            for &direction in topology.directions() {
                let Some(target) = pos.step(direction) else {
                    continue;
                };
                if let Some(&to) = nodes.get(&target) {
                    graph.add_edge(from, to, direction);
                }
            }
        }

        Self { graph, nodes }
    }

    /// Directions leading from `from` to `to`, or `None` if unreachable.
    ///
    /// Returns an empty path when `from == to`. Costs are accumulated as
    /// saturating `u64`, so any `move_cost` is accepted.
    pub fn shortest_path(
        &self,
        from: Position,
        to: Position,
        move_cost: u32,
    ) -> Option<Vec<Direction>> {
        if from == to {
            return Some(Vec::new());
        }
        let start = *self.nodes.get(&from)?;
        let goal = *self.nodes.get(&to)?;

        // A path visits each node at most once, so capping the per-edge cost
        // keeps every running total below `u64::MAX / 2`.
        let node_count = u64::try_from(self.graph.node_count()).unwrap_or(u64::MAX);
        let edge_cost = u64::from(move_cost).min(u64::MAX / 2 / node_count.max(1));
        let (_, nodes) = astar(
            &self.graph,
            start,
            |n| n == goal,
            |_| edge_cost,
            |n| {
                let steps = self.graph[n].manhattan_distance(&to);
                let steps = u64::try_from(steps).unwrap_or(u64::MAX);
                steps.saturating_mul(edge_cost).min(u64::MAX / 2)
            },
        )?;

        nodes
            .windows(2)
            .map(|pair| {
                self.graph
                    .find_edge(pair[0], pair[1])
                    .map(|edge| self.graph[edge])
            })
            .collect()
    }

    /// Breadth-first step counts from `from` to every reachable cell.
    pub fn distances_from(&self, from: Position) -> HashMap<Position, usize> {
        let Some(&start) = self.nodes.get(&from) else {
            return HashMap::new();
        };
        dijkstra(&self.graph, start, None, |_| 1usize)
            .into_iter()
            .map(|(node, dist)| (self.graph[node], dist))
            .collect()
    }

    /// Closest reachable cell satisfying `is_target`.
    ///
    /// Ties on distance go to the first cell in row-major order.
    pub fn nearest<F>(&self, from: Position, is_target: F) -> Option<(Position, usize)>
    where
        F: Fn(Position) -> bool,
    {
        self.distances_from(from)
            .into_iter()
            .filter(|(pos, _)| is_target(*pos))
            .min_by_key(|&(pos, dist)| (dist, pos))
    }
}

/// Shortest path from `from` to `to` on `grid`, avoiding obstacles.
///
/// Returns `None` when `to` cannot be reached.
pub fn shortest_path(
    grid: &Grid,
    topology: Topology,
    from: Position,
    to: Position,
    move_cost: u32,
) -> Option<Vec<Direction>> {
    GridGraph::build(grid, topology).shortest_path(from, to, move_cost)
}
