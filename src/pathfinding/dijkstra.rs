//! Dijkstra's algorithm over resolver-supplied edge lengths.

use hashbrown::{HashMap, HashSet};

use super::Traversal;
use super::queue::MinQueue;
use crate::model::{NodeKey, Payload};
use crate::storage::GraphBackend;

/// Weighted shortest path from `start` to `end`.
///
/// A node is settled the first time it is dequeued; later queue entries for
/// it are stale and skipped. Settled children are never relaxed again, and
/// edges without a payload are ignored.
pub(crate) fn search<N, E, G>(
    graph: &G,
    edge_length: &(dyn Fn(&E) -> f64 + Send + Sync),
    start: &N,
    end: &N,
) -> Option<Traversal<N>>
where
    N: NodeKey,
    E: Payload,
    G: GraphBackend<N, E> + ?Sized,
{
    let mut traversal = Traversal::new();
    let mut distance: HashMap<N, f64> = HashMap::new();
    let mut visited = HashSet::new();
    let mut queue = MinQueue::new();

    distance.insert(start.clone(), 0.0);
    queue.push(start.clone(), 0.0);

    while let Some((node, _)) = queue.pop() {
        if !visited.insert(node.clone()) {
            continue;
        }
        if node == *end {
            return Some(traversal);
        }
        traversal.expanded += 1;

        let base = distance.get(&node).copied().unwrap_or(f64::INFINITY);
        for child in graph.out_neighbors(&node) {
            if visited.contains(&child) {
                continue;
            }
            let Some(payload) = graph.edge_info(&node, &child) else {
                continue;
            };

            let candidate = base + edge_length(&payload);
            if candidate < distance.get(&child).copied().unwrap_or(f64::INFINITY) {
                distance.insert(child.clone(), candidate);
                traversal.parents.insert(child.clone(), node.clone());
                queue.push(child, candidate);
            }
        }
    }

    tracing::debug!(expanded = traversal.expanded, "dijkstra exhausted reachable nodes");
    None
}
