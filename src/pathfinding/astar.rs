//! A* search: Dijkstra ordered by accumulated score plus a heuristic.

use hashbrown::{HashMap, HashSet};

use super::Traversal;
use super::queue::MinQueue;
use crate::model::{NodeKey, Payload};
use crate::storage::GraphBackend;

/// Score-guided search from `start` to `end`.
///
/// The value carried along an edge is
/// `score[node] + edge_length(edge) + node_score(node, end)`, and it is both
/// the relaxation key and the queue priority. Only dequeued nodes are
/// checked against the visited set, so a settled child can still receive a
/// better score and parent, but it is never expanded twice.
pub(crate) fn search<N, E, G>(
    graph: &G,
    edge_length: &(dyn Fn(&E) -> f64 + Send + Sync),
    node_score: &(dyn Fn(&N, &N) -> f64 + Send + Sync),
    start: &N,
    end: &N,
) -> Option<Traversal<N>>
where
    N: NodeKey,
    E: Payload,
    G: GraphBackend<N, E> + ?Sized,
{
    let mut traversal = Traversal::new();
    let mut scores: HashMap<N, f64> = HashMap::new();
    let mut visited = HashSet::new();
    let mut queue = MinQueue::new();

    scores.insert(start.clone(), 0.0);
    queue.push(start.clone(), 0.0);

    while let Some((node, _)) = queue.pop() {
        if !visited.insert(node.clone()) {
            continue;
        }
        if node == *end {
            return Some(traversal);
        }
        traversal.expanded += 1;

        let base = scores.get(&node).copied().unwrap_or(f64::INFINITY);
        for child in graph.out_neighbors(&node) {
            let Some(payload) = graph.edge_info(&node, &child) else {
                continue;
            };

            let candidate = base + edge_length(&payload) + node_score(&node, end);
            if candidate < scores.get(&child).copied().unwrap_or(f64::INFINITY) {
                scores.insert(child.clone(), candidate);
                traversal.parents.insert(child.clone(), node.clone());
                queue.push(child, candidate);
            }
        }
    }

    tracing::debug!(expanded = traversal.expanded, "a* exhausted reachable nodes");
    None
}
