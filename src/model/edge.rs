//! Edge keys and traversal direction.

use serde::{Deserialize, Serialize};

/// Bounds every edge payload has to satisfy.
pub trait Payload: Clone + Send + Sync + 'static {}

impl<T> Payload for T where T: Clone + Send + Sync + 'static {}

/// Ordered (from, to) pair identifying a directed edge.
///
/// Equality and hashing are structural, so `NodePair::new(a, b)` built twice
/// addresses the same edge, while `NodePair::new(b, a)` is a different one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodePair<N> {
    pub from: N,
    pub to: N,
}

impl<N> NodePair<N> {
    pub fn new(from: N, to: N) -> Self {
        Self { from, to }
    }
}

/// Traversal direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Outgoing,
    Incoming,
    Both,
}
