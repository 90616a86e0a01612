//! # Graph Backend Trait
//!
//! This is THE contract between the path-finding engine and edge storage.
//! Backends differ only in how they keep edges; node membership, resolver
//! configuration and path-finding are shared through default methods.
//!
//! ## Implementations
//!
//! | Backend | Module | Tradeoff |
//! |---------|--------|----------|
//! | `AdjacencyList` | `adjacency_list` | memory proportional to edges, O(degree) neighbor scans |
//! | `AdjacencyMatrix` | `matrix` | O(1) edge lookup, N² memory, rebuilt when the node count drifts |

pub mod adjacency_list;
pub mod matrix;

use std::str::FromStr;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::model::*;
use crate::pathfinding;
use crate::{Error, Result};

pub use adjacency_list::AdjacencyList;
pub use matrix::AdjacencyMatrix;

// ============================================================================
// Backend Configuration
// ============================================================================

/// Which edge storage strategy to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    #[default]
    AdjacencyList,
    AdjacencyMatrix,
}

impl FromStr for BackendKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "list" | "adjacency_list" => Ok(BackendKind::AdjacencyList),
            "matrix" | "adjacency_matrix" => Ok(BackendKind::AdjacencyMatrix),
            other => Err(Error::InvalidConfig(format!("unknown backend kind '{other}'"))),
        }
    }
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendKind::AdjacencyList => f.write_str("adjacency_list"),
            BackendKind::AdjacencyMatrix => f.write_str("adjacency_matrix"),
        }
    }
}

/// Configuration for creating a backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub kind: BackendKind,
    /// Pre-allocated room in the node set.
    pub node_capacity: usize,
}

impl BackendConfig {
    pub fn new(kind: BackendKind) -> Self {
        Self { kind, node_capacity: 0 }
    }

    pub fn with_node_capacity(mut self, capacity: usize) -> Self {
        self.node_capacity = capacity;
        self
    }

    /// Instantiate the configured backend.
    pub fn build<N: NodeKey, E: Payload>(&self) -> Box<dyn GraphBackend<N, E>> {
        match self.kind {
            BackendKind::AdjacencyList => Box::new(AdjacencyList::with_capacity(self.node_capacity)),
            BackendKind::AdjacencyMatrix => Box::new(AdjacencyMatrix::with_capacity(self.node_capacity)),
        }
    }
}

// ============================================================================
// GraphBackend Trait
// ============================================================================

/// The graph contract.
///
/// All methods take `&self`; implementations keep their state behind a lock
/// so a backend can be shared across threads. Queries about nodes that are
/// not in the graph never panic: they yield empty neighborhoods, `None`
/// payloads, or `Error::NodeNotFound` for `degree`.
pub trait GraphBackend<N: NodeKey, E: Payload>: Send + Sync {
    /// Storage strategy of this backend.
    fn kind(&self) -> BackendKind;

    // ========================================================================
    // Node membership
    // ========================================================================

    /// Add a node. Returns false if it was already present.
    fn add_node(&self, node: N) -> bool;

    /// Remove a node together with every edge touching it.
    /// Returns true if the node was present.
    fn remove_node(&self, node: &N) -> bool;

    fn contains(&self, node: &N) -> bool;

    fn node_count(&self) -> usize;

    /// Snapshot of all nodes in node-set order.
    fn nodes(&self) -> Vec<N>;

    fn is_empty(&self) -> bool {
        self.node_count() == 0
    }

    // ========================================================================
    // Edges
    // ========================================================================

    /// Insert or overwrite the edge `from -> to`.
    ///
    /// Returns false, storing nothing, if either node is not in the graph.
    fn connect(&self, from: N, to: N, payload: E) -> bool;

    /// Remove the edge `from -> to`, returning its payload if it existed.
    fn disconnect(&self, from: &N, to: &N) -> Option<E>;

    /// Payload of the edge `from -> to`, if there is one.
    fn edge_info(&self, from: &N, to: &N) -> Option<E>;

    /// Number of stored edges.
    fn edge_count(&self) -> usize;

    // ========================================================================
    // Structure
    // ========================================================================

    /// In-degree plus out-degree. A self-loop counts twice.
    fn degree(&self, node: &N) -> Result<usize>;

    /// Nodes reachable over one outgoing edge.
    fn out_neighbors(&self, node: &N) -> Vec<N>;

    /// Nodes with an edge into `node`.
    fn in_neighbors(&self, node: &N) -> Vec<N>;

    /// Out-neighbors followed by in-neighbors. Mutually connected nodes
    /// appear twice.
    fn all_neighbors(&self, node: &N) -> Vec<N> {
        let mut result = self.out_neighbors(node);
        result.extend(self.in_neighbors(node));
        result
    }

    fn neighbors(&self, node: &N, dir: Direction) -> Vec<N> {
        match dir {
            Direction::Outgoing => self.out_neighbors(node),
            Direction::Incoming => self.in_neighbors(node),
            Direction::Both => self.all_neighbors(node),
        }
    }

    /// All nodes ordered by ascending degree. Ties keep node-set order.
    fn degree_sequence(&self) -> Vec<N> {
        let mut ranked: Vec<(usize, N)> = self
            .nodes()
            .into_iter()
            .filter_map(|n| self.degree(&n).ok().map(|d| (d, n)))
            .collect();
        ranked.sort_by_key(|(degree, _)| *degree);
        ranked.into_iter().map(|(_, n)| n).collect()
    }

    // ========================================================================
    // Resolver configuration
    // ========================================================================

    /// The lock guarding this backend's resolvers.
    fn resolver_slot(&self) -> &RwLock<Resolvers<N, E>>;

    /// Snapshot of the installed resolvers.
    fn resolvers(&self) -> Resolvers<N, E> {
        self.resolver_slot().read().clone()
    }

    /// Install or replace the edge-length resolver. Enables Dijkstra.
    fn set_edge_length_resolver(&self, f: EdgeLengthFn<E>) {
        self.resolver_slot().write().edge_length = Some(f);
    }

    /// Install or replace the node-score resolver. Together with an
    /// edge-length resolver this enables A*.
    fn set_node_score_resolver(&self, f: NodeScoreFn<N>) {
        self.resolver_slot().write().node_score = Some(f);
    }

    fn clear_resolvers(&self) {
        self.resolver_slot().write().clear();
    }

    /// Algorithm `find_path` would run right now.
    fn algorithm(&self) -> Algorithm {
        let resolvers = self.resolver_slot().read();
        Algorithm::select(&*resolvers)
    }

    // ========================================================================
    // Path-finding
    // ========================================================================

    /// Best path from `start` to `end`, both included.
    ///
    /// `None` when `end` is unreachable or either node is not in the graph.
    fn find_path(&self, start: &N, end: &N) -> Option<Vec<N>> {
        self.find_path_result(start, end).map(PathResult::into_nodes)
    }

    /// Like `find_path`, also reporting the algorithm used and the cost.
    fn find_path_result(&self, start: &N, end: &N) -> Option<PathResult<N>> {
        let resolvers = self.resolvers();
        pathfinding::find_path(self, &resolvers, start, end)
    }
}

/// Shared handle forwarding to the wrapped backend.
impl<N: NodeKey, E: Payload, B: GraphBackend<N, E> + ?Sized> GraphBackend<N, E> for Arc<B> {
    fn kind(&self) -> BackendKind { (**self).kind() }
    fn add_node(&self, node: N) -> bool { (**self).add_node(node) }
    fn remove_node(&self, node: &N) -> bool { (**self).remove_node(node) }
    fn contains(&self, node: &N) -> bool { (**self).contains(node) }
    fn node_count(&self) -> usize { (**self).node_count() }
    fn nodes(&self) -> Vec<N> { (**self).nodes() }
    fn connect(&self, from: N, to: N, payload: E) -> bool { (**self).connect(from, to, payload) }
    fn disconnect(&self, from: &N, to: &N) -> Option<E> { (**self).disconnect(from, to) }
    fn edge_info(&self, from: &N, to: &N) -> Option<E> { (**self).edge_info(from, to) }
    fn edge_count(&self) -> usize { (**self).edge_count() }
    fn degree(&self, node: &N) -> Result<usize> { (**self).degree(node) }
    fn out_neighbors(&self, node: &N) -> Vec<N> { (**self).out_neighbors(node) }
    fn in_neighbors(&self, node: &N) -> Vec<N> { (**self).in_neighbors(node) }
    fn resolver_slot(&self) -> &RwLock<Resolvers<N, E>> { (**self).resolver_slot() }
}

/// Shorthand used by the backends for `degree` on a non-member.
pub(crate) fn node_not_found<N: NodeKey>(node: &N) -> Error {
    Error::NodeNotFound(format!("{node:?}"))
}
