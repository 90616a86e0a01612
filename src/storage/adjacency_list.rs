//! Adjacency-list backend.
//!
//! Every node maps to the ordered list of its out-neighbors and its
//! in-neighbors; payloads live in a separate map keyed by `NodePair`.
//!
//! ## Behavior
//!
//! - **One entry per pair**: reconnecting an existing pair only replaces the
//!   payload, so neighbor lists never hold duplicates.
//! - **Disconnect clears the payload**: `edge_info` agrees with the neighbor
//!   lists at all times.
//! - **Cascading removal**: `remove_node` drops every edge touching the node.
//! - **Neighbor order** is node-set order, whatever order edges were
//!   connected in, so both backends enumerate neighborhoods identically.

use hashbrown::HashMap;
use parking_lot::RwLock;
use smallvec::SmallVec;

use crate::model::*;
use crate::Result;
use super::{BackendKind, GraphBackend, node_not_found};

type NeighborList<N> = SmallVec<[N; 4]>;

// ============================================================================
// AdjacencyList
// ============================================================================

/// Graph storing edges as per-node neighbor lists.
pub struct AdjacencyList<N: NodeKey, E: Payload> {
    state: RwLock<ListState<N, E>>,
    resolvers: RwLock<Resolvers<N, E>>,
}

struct ListState<N: NodeKey, E> {
    nodes: NodeSet<N>,
    outgoing: HashMap<N, NeighborList<N>>,
    incoming: HashMap<N, NeighborList<N>>,
    payloads: HashMap<NodePair<N>, E>,
}

impl<N: NodeKey, E: Payload> AdjacencyList<N, E> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(node_capacity: usize) -> Self {
        Self {
            state: RwLock::new(ListState {
                nodes: NodeSet::with_capacity(node_capacity),
                outgoing: HashMap::with_capacity(node_capacity),
                incoming: HashMap::with_capacity(node_capacity),
                payloads: HashMap::new(),
            }),
            resolvers: RwLock::new(Resolvers::new()),
        }
    }
}

impl<N: NodeKey, E: Payload> Default for AdjacencyList<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Insert `node` into `list` keeping the lists sorted by node-set position.
///
/// Node removal preserves the relative order of the remaining nodes, so a
/// list sorted once stays sorted.
fn insert_ordered<N: NodeKey>(list: &mut NeighborList<N>, node: N, nodes: &NodeSet<N>) {
    let rank = nodes.position(&node);
    let at = list
        .iter()
        .position(|n| nodes.position(n) > rank)
        .unwrap_or(list.len());
    list.insert(at, node);
}

/// Remove the first occurrence of `node` from `list`.
fn remove_one<N: NodeKey>(list: Option<&mut NeighborList<N>>, node: &N) {
    if let Some(list) = list {
        if let Some(pos) = list.iter().position(|n| n == node) {
            list.remove(pos);
        }
    }
}

// ============================================================================
// GraphBackend impl
// ============================================================================

impl<N: NodeKey, E: Payload> GraphBackend<N, E> for AdjacencyList<N, E> {
    fn kind(&self) -> BackendKind {
        BackendKind::AdjacencyList
    }

    // ========================================================================
    // Node membership
    // ========================================================================

    fn add_node(&self, node: N) -> bool {
        self.state.write().nodes.add(node)
    }

    fn remove_node(&self, node: &N) -> bool {
        let mut state = self.state.write();
        if !state.nodes.remove(node) {
            return false;
        }

        let outgoing = state.outgoing.remove(node).unwrap_or_default();
        let incoming = state.incoming.remove(node).unwrap_or_default();

        let mut purged = 0;
        for target in &outgoing {
            if state.payloads.remove(&NodePair::new(node.clone(), target.clone())).is_some() {
                purged += 1;
            }
            if let Some(list) = state.incoming.get_mut(target) {
                list.retain(|n| n != node);
            }
        }
        for source in &incoming {
            if state.payloads.remove(&NodePair::new(source.clone(), node.clone())).is_some() {
                purged += 1;
            }
            if let Some(list) = state.outgoing.get_mut(source) {
                list.retain(|n| n != node);
            }
        }

        tracing::trace!(?node, purged, "removed node from adjacency list");
        true
    }

    fn contains(&self, node: &N) -> bool {
        self.state.read().nodes.contains(node)
    }

    fn node_count(&self) -> usize {
        self.state.read().nodes.len()
    }

    fn nodes(&self) -> Vec<N> {
        self.state.read().nodes.iter().cloned().collect()
    }

    // ========================================================================
    // Edges
    // ========================================================================

    fn connect(&self, from: N, to: N, payload: E) -> bool {
        let mut state = self.state.write();
        if !state.nodes.contains(&from) || !state.nodes.contains(&to) {
            tracing::trace!(?from, ?to, "connect ignored, endpoint not in graph");
            return false;
        }

        let state = &mut *state;
        let pair = NodePair::new(from.clone(), to.clone());
        if state.payloads.insert(pair, payload).is_none() {
            insert_ordered(state.outgoing.entry(from.clone()).or_default(), to.clone(), &state.nodes);
            insert_ordered(state.incoming.entry(to).or_default(), from, &state.nodes);
        }
        true
    }

    fn disconnect(&self, from: &N, to: &N) -> Option<E> {
        let mut state = self.state.write();
        let removed = state.payloads.remove(&NodePair::new(from.clone(), to.clone()))?;

        remove_one(state.outgoing.get_mut(from), to);
        remove_one(state.incoming.get_mut(to), from);
        Some(removed)
    }

    fn edge_info(&self, from: &N, to: &N) -> Option<E> {
        self.state
            .read()
            .payloads
            .get(&NodePair::new(from.clone(), to.clone()))
            .cloned()
    }

    fn edge_count(&self) -> usize {
        self.state.read().payloads.len()
    }

    // ========================================================================
    // Structure
    // ========================================================================

    fn degree(&self, node: &N) -> Result<usize> {
        let state = self.state.read();
        if !state.nodes.contains(node) {
            return Err(node_not_found(node));
        }
        let out = state.outgoing.get(node).map_or(0, |l| l.len());
        let inc = state.incoming.get(node).map_or(0, |l| l.len());
        Ok(out + inc)
    }

    fn out_neighbors(&self, node: &N) -> Vec<N> {
        self.state
            .read()
            .outgoing
            .get(node)
            .map(|l| l.to_vec())
            .unwrap_or_default()
    }

    fn in_neighbors(&self, node: &N) -> Vec<N> {
        self.state
            .read()
            .incoming
            .get(node)
            .map(|l| l.to_vec())
            .unwrap_or_default()
    }

    fn resolver_slot(&self) -> &RwLock<Resolvers<N, E>> {
        &self.resolvers
    }
}

// ============================================================================
// Tests
// ============================================================================
