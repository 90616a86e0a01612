//! End-to-end tests for path-finding across both backends.
//!
//! Every scenario is loaded into an adjacency list and an adjacency matrix;
//! both must produce the same routes under each resolver configuration.

use parking_lot::RwLock;
use pathgraph::{AdjacencyList, Algorithm, BackendKind, Graph, GraphBackend, Resolvers};
use pretty_assertions::assert_eq;

// ============================================================================
// Helper: the reference graph.
//
//   1 ---- 2 ---- 3 ---- 7 ---- 9 ----\   length 2 on these lines
//   |      |             |            |   length 1 on vertical lines
//   8 ---- 4 ---- 5 ---- 6 --- 10 -- 11   length 1 on these lines
// ============================================================================

const EDGES: [(i32, i32, i32); 13] = [
    (1, 2, 2),
    (1, 8, 1),
    (8, 4, 1),
    (2, 4, 1),
    (2, 3, 2),
    (4, 5, 1),
    (3, 7, 2),
    (5, 6, 1),
    (7, 6, 1),
    (7, 9, 2),
    (6, 10, 1),
    (10, 11, 1),
    (9, 11, 2),
];

fn load(graph: Graph<i32, i32>) -> Graph<i32, i32> {
    graph.extend_nodes(1..=11);
    for (from, to, length) in EDGES {
        assert!(graph.connect(from, to, length));
    }
    graph
}

fn both_backends() -> [Graph<i32, i32>; 2] {
    [load(Graph::adjacency_list()), load(Graph::adjacency_matrix())]
}

// ============================================================================
// 1. Resolver configuration drives the algorithm
// ============================================================================

#[test]
fn test_reference_routes() {
    for g in both_backends() {
        assert_eq!(g.edge_info(&1, &2), Some(2));

        assert_eq!(g.algorithm(), Algorithm::BreadthFirst);
        assert_eq!(g.find_path(&1, &11), Some(vec![1, 2, 3, 7, 9, 11]), "bfs on {:?}", g);

        g.set_edge_length_resolver(|e: &i32| f64::from(*e));
        assert_eq!(g.algorithm(), Algorithm::Dijkstra);
        assert_eq!(g.find_path(&1, &11), Some(vec![1, 8, 4, 5, 6, 10, 11]), "dijkstra on {:?}", g);

        g.set_node_score_resolver(|a: &i32, b: &i32| f64::from((a + b).abs()));
        assert_eq!(g.algorithm(), Algorithm::AStar);
        assert_eq!(g.find_path(&1, &11), Some(vec![1, 2, 3, 7, 9, 11]), "a* on {:?}", g);
    }
}

#[test]
fn test_reference_costs() {
    for g in both_backends() {
        let hops = g.find_path_result(&1, &11).unwrap();
        assert_eq!(hops.cost, 5.0);

        g.set_edge_length_resolver(|e: &i32| f64::from(*e));
        let weighted = g.find_path_result(&1, &11).unwrap();
        assert_eq!(weighted.cost, 6.0);
        assert_eq!(weighted.hops(), 6);

        g.set_node_score_resolver(|a: &i32, b: &i32| f64::from((a + b).abs()));
        let guided = g.find_path_result(&1, &11).unwrap();
        assert_eq!(guided.algorithm, Algorithm::AStar);
        // Cost is the walked edge length, not the heuristic-inflated score.
        assert_eq!(guided.cost, 10.0);
    }
}

// ============================================================================
// 2. Trivial and impossible routes
// ============================================================================

fn configure(g: &Graph<i32, i32>, algorithm: Algorithm) {
    g.clear_resolvers();
    if algorithm != Algorithm::BreadthFirst {
        g.set_edge_length_resolver(|e: &i32| f64::from(*e));
    }
    if algorithm == Algorithm::AStar {
        g.set_node_score_resolver(|a: &i32, b: &i32| f64::from((a - b).abs()));
    }
}

const ALL: [Algorithm; 3] = [Algorithm::BreadthFirst, Algorithm::Dijkstra, Algorithm::AStar];

#[test]
fn test_start_equals_end() {
    for g in both_backends() {
        for algorithm in ALL {
            configure(&g, algorithm);
            for n in 1..=11 {
                assert_eq!(g.find_path(&n, &n), Some(vec![n]), "{algorithm} from {n}");
            }
        }
    }
}

#[test]
fn test_unreachable_is_none() {
    for g in both_backends() {
        g.add_node(12);
        for algorithm in ALL {
            configure(&g, algorithm);
            // Edges only point "rightwards": 11 is a sink.
            assert_eq!(g.find_path(&11, &1), None, "{algorithm}");
            assert_eq!(g.find_path(&1, &12), None, "{algorithm}");
            assert_eq!(g.find_path(&12, &1), None, "{algorithm}");
        }
    }
}

#[test]
fn test_unknown_endpoint_is_none() {
    for g in both_backends() {
        for algorithm in ALL {
            configure(&g, algorithm);
            assert_eq!(g.find_path(&1, &99), None);
            assert_eq!(g.find_path(&99, &99), None);
        }
    }
}

// ============================================================================
// 3. Routes react to mutations
// ============================================================================

#[test]
fn test_disconnect_reroutes() {
    for g in both_backends() {
        g.set_edge_length_resolver(|e: &i32| f64::from(*e));
        assert_eq!(g.disconnect(&5, &6), Some(1));
        assert_eq!(g.find_path(&1, &11), Some(vec![1, 2, 3, 7, 6, 10, 11]));

        g.clear_resolvers();
        assert_eq!(g.disconnect(&9, &11), Some(2));
        assert_eq!(g.find_path(&1, &11), Some(vec![1, 2, 3, 7, 6, 10, 11]));
    }
}

#[test]
fn test_removed_node_is_routed_around() {
    for g in both_backends() {
        g.set_edge_length_resolver(|e: &i32| f64::from(*e));
        assert!(g.remove_node(&8));
        assert_eq!(g.find_path(&1, &11), Some(vec![1, 2, 4, 5, 6, 10, 11]));

        assert!(g.remove_node(&6));
        assert_eq!(g.find_path(&1, &11), Some(vec![1, 2, 3, 7, 9, 11]));
    }
}

#[test]
fn test_connect_order_does_not_change_routes() {
    for algorithm in ALL {
        let [list, matrix] = [Graph::adjacency_list(), Graph::adjacency_matrix()].map(|g| {
            g.extend_nodes(1..=4);
            g.connect(1, 3, 1);
            g.connect(1, 2, 1);
            g.connect(2, 4, 1);
            g.connect(3, 4, 1);
            configure(&g, algorithm);
            g
        });

        assert_eq!(list.out_neighbors(&1), vec![2, 3]);
        assert_eq!(list.in_neighbors(&4), matrix.in_neighbors(&4));
        // Relaxing 4 from 3 scores lower, so A* re-parents it.
        let expected = match algorithm {
            Algorithm::AStar => vec![1, 3, 4],
            _ => vec![1, 2, 4],
        };
        assert_eq!(list.find_path(&1, &4), Some(expected.clone()), "{algorithm}");
        assert_eq!(matrix.find_path(&1, &4), Some(expected), "{algorithm}");
    }
}

#[test]
fn test_infinite_length_edges_are_avoided() {
    // A payload of None means "no usable length"; the resolver turns it into
    // an infinite cost so Dijkstra never prefers that edge.
    let g: Graph<&str, Option<f64>> = Graph::adjacency_matrix();
    g.extend_nodes(["a", "b", "c"]);
    g.connect("a", "c", None);
    g.connect("a", "b", Some(1.0));
    g.connect("b", "c", Some(1.0));

    assert_eq!(g.find_path(&"a", &"c"), Some(vec!["a", "c"]));

    g.set_edge_length_resolver(|e: &Option<f64>| e.unwrap_or(f64::INFINITY));
    assert_eq!(g.find_path(&"a", &"c"), Some(vec!["a", "b", "c"]));
}

// ============================================================================
// 4. Backends that list a neighbor without a payload
// ============================================================================

/// Adjacency list that reports one extra out-neighbor with no stored edge.
struct DanglingNeighbor {
    inner: AdjacencyList<i32, i32>,
    from: i32,
    to: i32,
}

impl GraphBackend<i32, i32> for DanglingNeighbor {
    fn kind(&self) -> BackendKind { self.inner.kind() }
    fn add_node(&self, node: i32) -> bool { self.inner.add_node(node) }
    fn remove_node(&self, node: &i32) -> bool { self.inner.remove_node(node) }
    fn contains(&self, node: &i32) -> bool { self.inner.contains(node) }
    fn node_count(&self) -> usize { self.inner.node_count() }
    fn nodes(&self) -> Vec<i32> { self.inner.nodes() }
    fn connect(&self, from: i32, to: i32, payload: i32) -> bool { self.inner.connect(from, to, payload) }
    fn disconnect(&self, from: &i32, to: &i32) -> Option<i32> { self.inner.disconnect(from, to) }
    fn edge_info(&self, from: &i32, to: &i32) -> Option<i32> { self.inner.edge_info(from, to) }
    fn edge_count(&self) -> usize { self.inner.edge_count() }
    fn degree(&self, node: &i32) -> pathgraph::Result<usize> { self.inner.degree(node) }
    fn in_neighbors(&self, node: &i32) -> Vec<i32> { self.inner.in_neighbors(node) }
    fn resolver_slot(&self) -> &RwLock<Resolvers<i32, i32>> { self.inner.resolver_slot() }

    fn out_neighbors(&self, node: &i32) -> Vec<i32> {
        let mut neighbors = self.inner.out_neighbors(node);
        if *node == self.from {
            neighbors.insert(0, self.to);
        }
        neighbors
    }
}

#[test]
fn test_weighted_search_skips_neighbors_without_payload() {
    let g: Graph<i32, i32> = Graph::with_backend(DanglingNeighbor {
        inner: AdjacencyList::new(),
        from: 1,
        to: 3,
    });
    g.extend_nodes(1..=3);
    g.connect(1, 2, 5);
    g.connect(2, 3, 1);
    assert_eq!(g.edge_info(&1, &3), None);

    // Hop counting only looks at neighborhoods.
    assert_eq!(g.find_path(&1, &3), Some(vec![1, 3]));

    for algorithm in [Algorithm::Dijkstra, Algorithm::AStar] {
        configure(&g, algorithm);
        let route = g.find_path_result(&1, &3).unwrap();
        assert_eq!(route.nodes, vec![1, 2, 3], "{algorithm}");
        assert_eq!(route.cost, 6.0, "{algorithm}");
    }
}
