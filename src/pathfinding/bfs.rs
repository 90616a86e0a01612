//! Breadth-first search (unweighted, fewest hops).

use std::collections::VecDeque;

use hashbrown::HashSet;

use super::Traversal;
use crate::model::{NodeKey, Payload};
use crate::storage::GraphBackend;

/// Level-order search from `start` until `end` is dequeued.
///
/// Nodes are marked visited when enqueued, so each node enters the queue
/// at most once.
pub(crate) fn search<N, E, G>(graph: &G, start: &N, end: &N) -> Option<Traversal<N>>
where
    N: NodeKey,
    E: Payload,
    G: GraphBackend<N, E> + ?Sized,
{
    let mut traversal = Traversal::new();
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();

    visited.insert(start.clone());
    queue.push_back(start.clone());

    while let Some(node) = queue.pop_front() {
        if node == *end {
            return Some(traversal);
        }
        traversal.expanded += 1;

        for child in graph.out_neighbors(&node) {
            if visited.insert(child.clone()) {
                traversal.parents.insert(child.clone(), node.clone());
                queue.push_back(child);
            }
        }
    }

    tracing::debug!(expanded = traversal.expanded, "bfs exhausted reachable nodes");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::AdjacencyList;

    fn chain() -> AdjacencyList<u32, ()> {
        // 1 -> 2 -> 3 -> 4, plus the shortcut 1 -> 3
        let g = AdjacencyList::new();
        for n in 1..=4 {
            g.add_node(n);
        }
        g.connect(1, 2, ());
        g.connect(2, 3, ());
        g.connect(3, 4, ());
        g.connect(1, 3, ());
        g
    }

    #[test]
    fn test_bfs_takes_fewest_hops() {
        let g = chain();
        let t = search::<u32, (), _>(&g, &1, &4).unwrap();
        assert_eq!(t.parents.get(&4), Some(&3));
        assert_eq!(t.parents.get(&3), Some(&1));
    }

    #[test]
    fn test_bfs_unreachable() {
        let g = chain();
        assert!(search::<u32, (), _>(&g, &4, &1).is_none());
    }

    #[test]
    fn test_bfs_follows_self_loop_harmlessly() {
        let g = chain();
        g.connect(2, 2, ());
        let t = search::<u32, (), _>(&g, &2, &4).unwrap();
        assert_eq!(t.parents.get(&3), Some(&2));
        assert!(!t.parents.contains_key(&2));
    }
}
