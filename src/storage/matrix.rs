//! Adjacency-matrix backend.
//!
//! Edges live in a dense `dim × dim` grid of optional payloads, row = from,
//! column = to. Nodes are mapped to grid positions through an index map that
//! is rebuilt lazily: adding nodes is O(1), and the O(N²) rebuild only runs
//! when `connect` finds the grid out of step with the node set.
//!
//! ## Rebuild
//!
//! A rebuild allocates a fresh grid sized to the current node count, assigns
//! indices in node-set order and migrates every stored edge whose endpoints
//! both survive. Indices are not stable across rebuilds.
//!
//! ## Between rebuilds
//!
//! - A node added since the last rebuild has no index yet: degree 0, no
//!   neighbors, no edges.
//! - A removed node has its row and column cleared and its index dropped at
//!   once; the grid shrinks at the next rebuild.

use hashbrown::HashMap;
use parking_lot::RwLock;

use crate::model::*;
use crate::Result;
use super::{BackendKind, GraphBackend, node_not_found};

// ============================================================================
// AdjacencyMatrix
// ============================================================================

/// Graph storing edges in a dense adjacency matrix.
pub struct AdjacencyMatrix<N: NodeKey, E: Payload> {
    state: RwLock<MatrixState<N, E>>,
    resolvers: RwLock<Resolvers<N, E>>,
}

struct MatrixState<N: NodeKey, E> {
    nodes: NodeSet<N>,
    /// Row-major, `dim * dim` cells.
    cells: Vec<Option<E>>,
    dim: usize,
    /// node → row/column
    index: HashMap<N, usize>,
    /// row/column → node; `None` once the node is removed
    slots: Vec<Option<N>>,
    /// Occupied cells.
    edges: usize,
}

impl<N: NodeKey, E: Payload> AdjacencyMatrix<N, E> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(node_capacity: usize) -> Self {
        Self {
            state: RwLock::new(MatrixState {
                nodes: NodeSet::with_capacity(node_capacity),
                cells: Vec::new(),
                dim: 0,
                index: HashMap::new(),
                slots: Vec::new(),
                edges: 0,
            }),
            resolvers: RwLock::new(Resolvers::new()),
        }
    }

    /// Current side length of the grid. Lags behind `node_count()` until
    /// the next `connect`.
    pub fn dimension(&self) -> usize {
        self.state.read().dim
    }
}

impl<N: NodeKey, E: Payload> Default for AdjacencyMatrix<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeKey, E: Payload> MatrixState<N, E> {
    fn cell(&self, row: usize, col: usize) -> usize {
        row * self.dim + col
    }

    /// Both endpoints must already be members.
    fn needs_rebuild(&self, from: &N, to: &N) -> bool {
        self.dim != self.nodes.len() || !self.index.contains_key(from) || !self.index.contains_key(to)
    }

    fn rebuild(&mut self) {
        let old_dim = self.dim;
        let old_cells = std::mem::take(&mut self.cells);
        let old_slots = std::mem::take(&mut self.slots);

        let dim = self.nodes.len();
        let mut index = HashMap::with_capacity(dim);
        let mut slots = Vec::with_capacity(dim);
        for (i, node) in self.nodes.iter().enumerate() {
            index.insert(node.clone(), i);
            slots.push(Some(node.clone()));
        }

        let mut cells: Vec<Option<E>> = vec![None; dim * dim];
        let mut migrated = 0;
        for (pos, cell) in old_cells.into_iter().enumerate() {
            let Some(payload) = cell else { continue };
            let (row, col) = (pos / old_dim, pos % old_dim);
            let (Some(Some(from)), Some(Some(to))) = (old_slots.get(row), old_slots.get(col)) else {
                continue;
            };
            if let (Some(&r), Some(&c)) = (index.get(from), index.get(to)) {
                cells[r * dim + c] = Some(payload);
                migrated += 1;
            }
        }

        self.cells = cells;
        self.dim = dim;
        self.index = index;
        self.slots = slots;
        self.edges = migrated;

        tracing::debug!(old_dim, new_dim = dim, migrated, "rebuilt adjacency matrix");
    }

    /// Nodes whose cell in `row` (or `col`) is occupied.
    fn collect_line(&self, fixed: usize, outgoing: bool) -> Vec<N> {
        (0..self.dim)
            .filter(|&other| {
                let pos = if outgoing { self.cell(fixed, other) } else { self.cell(other, fixed) };
                self.cells[pos].is_some()
            })
            .filter_map(|other| self.slots[other].clone())
            .collect()
    }
}

// ============================================================================
// GraphBackend impl
// ============================================================================

impl<N: NodeKey, E: Payload> GraphBackend<N, E> for AdjacencyMatrix<N, E> {
    fn kind(&self) -> BackendKind {
        BackendKind::AdjacencyMatrix
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

        let Some(idx) = state.index.remove(node) else {
            return true;
        };
        let mut purged = 0;
        for other in 0..state.dim {
            let row = state.cell(idx, other);
            let col = state.cell(other, idx);
            if state.cells[row].take().is_some() {
                purged += 1;
            }
            if state.cells[col].take().is_some() {
                purged += 1;
            }
        }
        state.slots[idx] = None;
        state.edges -= purged;

        tracing::trace!(?node, purged, "removed node from adjacency matrix");
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
        if state.needs_rebuild(&from, &to) {
            state.rebuild();
        }

        let (Some(&row), Some(&col)) = (state.index.get(&from), state.index.get(&to)) else {
            return false;
        };
        let pos = state.cell(row, col);
        if state.cells[pos].replace(payload).is_none() {
            state.edges += 1;
        }
        true
    }

    fn disconnect(&self, from: &N, to: &N) -> Option<E> {
        let mut state = self.state.write();
        let (Some(&row), Some(&col)) = (state.index.get(from), state.index.get(to)) else {
            return None;
        };
        let pos = state.cell(row, col);
        let removed = state.cells[pos].take()?;
        state.edges -= 1;
        Some(removed)
    }

    fn edge_info(&self, from: &N, to: &N) -> Option<E> {
        let state = self.state.read();
        let (Some(&row), Some(&col)) = (state.index.get(from), state.index.get(to)) else {
            return None;
        };
        state.cells[state.cell(row, col)].clone()
    }

    fn edge_count(&self) -> usize {
        self.state.read().edges
    }

    // ========================================================================
    // Structure
    // ========================================================================

    fn degree(&self, node: &N) -> Result<usize> {
        let state = self.state.read();
        if !state.nodes.contains(node) {
            return Err(node_not_found(node));
        }
        let Some(&idx) = state.index.get(node) else {
            return Ok(0);
        };

        let mut degree = 0;
        for other in 0..state.dim {
            if state.cells[state.cell(idx, other)].is_some() {
                degree += 1;
            }
            if state.cells[state.cell(other, idx)].is_some() {
                degree += 1;
            }
        }
        Ok(degree)
    }

    fn out_neighbors(&self, node: &N) -> Vec<N> {
        let state = self.state.read();
        match state.index.get(node) {
            Some(&idx) => state.collect_line(idx, true),
            None => Vec::new(),
        }
    }

    fn in_neighbors(&self, node: &N) -> Vec<N> {
        let state = self.state.read();
        match state.index.get(node) {
            Some(&idx) => state.collect_line(idx, false),
            None => Vec::new(),
        }
    }

    fn resolver_slot(&self) -> &RwLock<Resolvers<N, E>> {
        &self.resolvers
    }
}

// ============================================================================
// Tests
// ============================================================================
