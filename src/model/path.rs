//! A route found by the path-finding engine.

use serde::{Deserialize, Serialize};

/// Search strategy used by `find_path`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// Unweighted, fewest hops.
    BreadthFirst,
    /// Non-negative edge lengths.
    Dijkstra,
    /// Dijkstra plus a node-score heuristic.
    AStar,
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Algorithm::BreadthFirst => "bfs",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::AStar => "a*",
        };
        f.write_str(name)
    }
}

/// A path from `start` to `end`, both included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathResult<N> {
    /// Nodes along the path. Never empty; `nodes[0]` is the start.
    pub nodes: Vec<N>,
    /// Hop count for BFS, summed edge lengths otherwise.
    pub cost: f64,
    pub algorithm: Algorithm,
}

impl<N> PathResult<N> {
    /// Number of edges walked.
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    pub fn into_nodes(self) -> Vec<N> {
        self.nodes
    }
}
