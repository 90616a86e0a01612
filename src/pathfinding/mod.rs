//! # Path-finding engine
//!
//! Backend-agnostic: every algorithm reads the graph only through
//! `contains`, `out_neighbors` and `edge_info`, so the adjacency list and
//! the adjacency matrix share one implementation and must agree on results.
//!
//! | edge length | node score | algorithm |
//! |-------------|------------|-----------|
//! | absent | any | BFS |
//! | present | absent | Dijkstra |
//! | present | present | A* |

mod astar;
mod bfs;
mod dijkstra;
mod queue;

use hashbrown::HashMap;

use crate::model::*;
use crate::storage::GraphBackend;

impl Algorithm {
    /// Pick the algorithm implied by the installed resolvers.
    pub fn select<N, E>(resolvers: &Resolvers<N, E>) -> Self {
        match (&resolvers.edge_length, &resolvers.node_score) {
            (Some(_), Some(_)) => Algorithm::AStar,
            (Some(_), None) => Algorithm::Dijkstra,
            (None, _) => Algorithm::BreadthFirst,
        }
    }
}

/// What a successful search leaves behind.
pub(crate) struct Traversal<N> {
    /// child → the node it was reached from
    pub(crate) parents: HashMap<N, N>,
    /// Nodes whose out-edges were scanned.
    pub(crate) expanded: usize,
}

impl<N> Traversal<N> {
    fn new() -> Self {
        Self { parents: HashMap::new(), expanded: 0 }
    }
}

/// Run the search selected by `resolvers` from `start` to `end`.
///
/// Returns `None` if either endpoint is not in the graph or `end` cannot be
/// reached. `start == end` yields the single-node path.
pub fn find_path<N, E, G>(
    graph: &G,
    resolvers: &Resolvers<N, E>,
    start: &N,
    end: &N,
) -> Option<PathResult<N>>
where
    N: NodeKey,
    E: Payload,
    G: GraphBackend<N, E> + ?Sized,
{
    if !graph.contains(start) || !graph.contains(end) {
        tracing::debug!(?start, ?end, "path endpoint not in graph");
        return None;
    }

    let algorithm = Algorithm::select(resolvers);
    tracing::trace!(%algorithm, ?start, ?end, "searching path");

    let traversal = match (&resolvers.edge_length, &resolvers.node_score) {
        (Some(length), Some(score)) => astar::search(graph, &**length, &**score, start, end),
        (Some(length), None) => dijkstra::search(graph, &**length, start, end),
        (None, _) => bfs::search(graph, start, end),
    }?;

    let nodes = reconstruct(&traversal.parents, start, end)?;
    let cost = match &resolvers.edge_length {
        Some(length) if algorithm != Algorithm::BreadthFirst => path_length(graph, &**length, &nodes),
        _ => (nodes.len() - 1) as f64,
    };

    let result = PathResult { nodes, cost, algorithm };
    tracing::debug!(
        %algorithm,
        hops = result.hops(),
        cost,
        expanded = traversal.expanded,
        "path found"
    );
    Some(result)
}

/// Walk parent links back from `end` and reverse.
///
/// A valid chain has at most `parents.len() + 1` nodes; a longer walk means
/// the parent links form a cycle, which only negative resolver output can
/// produce.
fn reconstruct<N: NodeKey>(parents: &HashMap<N, N>, start: &N, end: &N) -> Option<Vec<N>> {
    let mut path = vec![end.clone()];
    let mut current = end;

    while current != start {
        if path.len() > parents.len() {
            tracing::warn!(?start, ?end, "parent links form a cycle, dropping path");
            return None;
        }
        match parents.get(current) {
            Some(parent) => {
                path.push(parent.clone());
                current = parent;
            }
            None => {
                tracing::warn!(node = ?current, "parent link missing, dropping path");
                return None;
            }
        }
    }

    path.reverse();
    Some(path)
}

/// Sum of resolved edge lengths along `nodes`.
fn path_length<N, E, G>(graph: &G, edge_length: &(dyn Fn(&E) -> f64 + Send + Sync), nodes: &[N]) -> f64
where
    N: NodeKey,
    E: Payload,
    G: GraphBackend<N, E> + ?Sized,
{
    nodes
        .windows(2)
        .filter_map(|pair| graph.edge_info(&pair[0], &pair[1]))
        .map(|payload| edge_length(&payload))
        .sum()
}
