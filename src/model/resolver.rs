//! Caller-supplied cost functions that drive path-finding.

use std::fmt;
use std::sync::Arc;

/// Edge payload → non-negative length.
pub type EdgeLengthFn<E> = Arc<dyn Fn(&E) -> f64 + Send + Sync>;

/// (node, destination) → heuristic distance.
pub type NodeScoreFn<N> = Arc<dyn Fn(&N, &N) -> f64 + Send + Sync>;

/// The optional resolvers installed on a graph.
///
/// Which of them are present decides the algorithm `find_path` runs;
/// see [`crate::model::Algorithm::select`].
pub struct Resolvers<N, E> {
    pub edge_length: Option<EdgeLengthFn<E>>,
    pub node_score: Option<NodeScoreFn<N>>,
}

impl<N, E> Resolvers<N, E> {
    pub fn new() -> Self {
        Self { edge_length: None, node_score: None }
    }

    pub fn with_edge_length<F>(mut self, f: F) -> Self
    where
        F: Fn(&E) -> f64 + Send + Sync + 'static,
    {
        self.edge_length = Some(Arc::new(f));
        self
    }

    pub fn with_node_score<F>(mut self, f: F) -> Self
    where
        F: Fn(&N, &N) -> f64 + Send + Sync + 'static,
    {
        self.node_score = Some(Arc::new(f));
        self
    }

    pub fn clear(&mut self) {
        self.edge_length = None;
        self.node_score = None;
    }
}

impl<N, E> Default for Resolvers<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

// Manual impl: cloning only bumps the Arc counts, no bounds on N or E.
impl<N, E> Clone for Resolvers<N, E> {
    fn clone(&self) -> Self {
        Self {
            edge_length: self.edge_length.clone(),
            node_score: self.node_score.clone(),
        }
    }
}

impl<N, E> fmt::Debug for Resolvers<N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolvers")
            .field("edge_length", &self.edge_length.is_some())
            .field("node_score", &self.node_score.is_some())
            .finish()
    }
}
