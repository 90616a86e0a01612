//! Unique-element container holding the graph's nodes.

use std::fmt::Debug;
use std::hash::Hash;

use indexmap::IndexSet;

/// Bounds every node type has to satisfy.
///
/// Nodes are identified by value, so equality and hashing must agree.
/// `Debug` is only used to render `Error::NodeNotFound`.
pub trait NodeKey: Eq + Hash + Clone + Debug + Send + Sync + 'static {}

impl<T> NodeKey for T where T: Eq + Hash + Clone + Debug + Send + Sync + 'static {}

/// Set of graph nodes.
///
/// Iteration follows insertion order, and removing a node keeps the relative
/// order of the others. Both backends rely on this to enumerate neighbors in
/// the same order for the same input.
#[derive(Debug, Clone)]
pub struct NodeSet<N: NodeKey> {
    inner: IndexSet<N>,
}

impl<N: NodeKey> NodeSet<N> {
    pub fn new() -> Self {
        Self { inner: IndexSet::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { inner: IndexSet::with_capacity(capacity) }
    }

    /// Insert a node. Returns false if it was already present.
    pub fn add(&mut self, node: N) -> bool {
        self.inner.insert(node)
    }

    /// Remove a node. Returns true if it was present.
    pub fn remove(&mut self, node: &N) -> bool {
        self.inner.shift_remove(node)
    }

    pub fn contains(&self, node: &N) -> bool {
        self.inner.contains(node)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &N> {
        self.inner.iter()
    }

    /// Position of a node in iteration order.
    pub fn position(&self, node: &N) -> Option<usize> {
        self.inner.get_index_of(node)
    }
}

impl<N: NodeKey> Default for NodeSet<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeKey> FromIterator<N> for NodeSet<N> {
    fn from_iter<I: IntoIterator<Item = N>>(iter: I) -> Self {
        Self { inner: iter.into_iter().collect() }
    }
}

impl<N: NodeKey> Extend<N> for NodeSet<N> {
    fn extend<I: IntoIterator<Item = N>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}
