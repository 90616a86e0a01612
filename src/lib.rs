//! # pathgraph: directed graphs with pluggable edge storage
//!
//! A mutable set of unique nodes, directed edges carrying an arbitrary
//! payload, and a best-path query whose algorithm follows from the cost
//! functions you install.
//!
//! ## Design Principles
//!
//! 1. **Trait-first**: `GraphBackend` is the contract between path-finding and storage
//! 2. **One engine**: BFS, Dijkstra and A* only see neighborhoods and edge payloads
//! 3. **Resolvers pick the algorithm**: no resolvers → BFS, edge length → Dijkstra,
//!    edge length + node score → A*
//!
//! ## Quick Start
//!
//! ```rust
//! use pathgraph::{Graph, GraphBackend};
//!
//! let graph: Graph<u32, f64> = Graph::adjacency_list();
//! for n in 1..=3 {
//!     graph.add_node(n);
//! }
//! graph.connect(1, 2, 1.0);
//! graph.connect(2, 3, 1.0);
//! graph.connect(1, 3, 5.0);
//!
//! // Fewest hops.
//! assert_eq!(graph.find_path(&1, &3), Some(vec![1, 3]));
//!
//! // Cheapest route once edges have a length.
//! graph.set_edge_length_resolver(|w: &f64| *w);
//! assert_eq!(graph.find_path(&1, &3), Some(vec![1, 2, 3]));
//! ```
//!
//! ## Storage Backends
//!
//! | Backend | Config | Description |
//! |---------|--------|-------------|
//! | Adjacency list | `BackendKind::AdjacencyList` (default) | per-node neighbor lists |
//! | Adjacency matrix | `BackendKind::AdjacencyMatrix` | dense grid, lazily rebuilt |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod pathfinding;
pub mod storage;

use std::ops::Deref;
use std::sync::Arc;

// ============================================================================
// Re-exports: Model
// ============================================================================

pub use model::{
    NodeKey, NodeSet, NodePair, Direction, Payload,
    Algorithm, PathResult, Resolvers,
};

// ============================================================================
// Re-exports: Storage
// ============================================================================

pub use storage::{
    GraphBackend, BackendConfig, BackendKind,
    AdjacencyList, AdjacencyMatrix,
};

// ============================================================================
// Top-level Graph handle
// ============================================================================

/// The primary entry point. A `Graph` owns a backend chosen at runtime and
/// dereferences to the [`GraphBackend`] contract.
pub struct Graph<N: NodeKey, E: Payload> {
    backend: Box<dyn GraphBackend<N, E>>,
}

impl<N: NodeKey, E: Payload> Graph<N, E> {
    /// Create a Graph around an existing backend.
    pub fn with_backend(backend: impl GraphBackend<N, E> + 'static) -> Self {
        Self { backend: Box::new(backend) }
    }

    /// Create the backend described by `config`.
    pub fn open(config: &BackendConfig) -> Self {
        tracing::debug!(kind = %config.kind, node_capacity = config.node_capacity, "opening graph");
        Self { backend: config.build() }
    }

    pub fn adjacency_list() -> Self {
        Self::open(&BackendConfig::new(BackendKind::AdjacencyList))
    }

    pub fn adjacency_matrix() -> Self {
        Self::open(&BackendConfig::new(BackendKind::AdjacencyMatrix))
    }

    /// Access the underlying backend.
    pub fn backend(&self) -> &dyn GraphBackend<N, E> {
        &*self.backend
    }

    /// Install or replace the edge-length resolver. Enables Dijkstra.
    pub fn set_edge_length_resolver<F>(&self, f: F)
    where
        F: Fn(&E) -> f64 + Send + Sync + 'static,
    {
        self.backend.set_edge_length_resolver(Arc::new(f));
    }

    /// Install or replace the node-score resolver. Enables A* once an
    /// edge-length resolver is installed too.
    pub fn set_node_score_resolver<F>(&self, f: F)
    where
        F: Fn(&N, &N) -> f64 + Send + Sync + 'static,
    {
        self.backend.set_node_score_resolver(Arc::new(f));
    }

    /// Add every node from `nodes`, returning how many were new.
    pub fn extend_nodes(&self, nodes: impl IntoIterator<Item = N>) -> usize {
        nodes.into_iter().filter(|n| self.backend.add_node(n.clone())).count()
    }
}

impl<N: NodeKey, E: Payload> Default for Graph<N, E> {
    fn default() -> Self {
        Self::open(&BackendConfig::default())
    }
}

impl<N: NodeKey, E: Payload> Deref for Graph<N, E> {
    type Target = dyn GraphBackend<N, E>;

    fn deref(&self) -> &Self::Target {
        &*self.backend
    }
}

impl<N: NodeKey, E: Payload> std::fmt::Debug for Graph<N, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("kind", &self.backend.kind())
            .field("nodes", &self.backend.node_count())
            .field("edges", &self.backend.edge_count())
            .finish()
    }
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
