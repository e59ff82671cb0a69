use std::collections::BTreeSet;

use lowlink::{AdjacencyMatrix, Direction, EdgeList, Graph, SortedAdjacency};
use proptest::prelude::*;

const VERTICES: usize = 8;

#[derive(Debug, Clone)]
enum Operation {
    Add(usize, usize, u16),
    Remove(usize, usize),
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        3 => (0..VERTICES, 0..VERTICES, any::<u16>()).prop_map(|(u, v, w)| Operation::Add(u, v, w)),
        1 => (0..VERTICES, 0..VERTICES).prop_map(|(u, v)| Operation::Remove(u, v)),
    ]
}

fn apply<G: Graph<Weight = u16>>(graph: &mut G, op: &Operation) {
    match *op {
        Operation::Add(u, v, w) => graph.add_edge(u, v, w).unwrap(),
        Operation::Remove(u, v) => graph.remove_edge(u, v),
    }
}

fn neighbor_set<G: Graph>(graph: &G, vertex: usize) -> BTreeSet<usize> {
    graph
        .neighbors(vertex)
        .map(|neighbors| neighbors.collect())
        .unwrap_or_default()
}

fn check(direction: Direction, ops: &[Operation]) {
    let mut matrix = AdjacencyMatrix::new(VERTICES, direction);
    let mut sorted = SortedAdjacency::new(direction);
    let mut list = EdgeList::new(direction);

    for op in ops {
        apply(&mut matrix, op);
        apply(&mut sorted, op);
        apply(&mut list, op);
    }

    for u in 0..VERTICES {
        for v in 0..VERTICES {
            let expected = matrix.edge_weight(u, v);
            assert_eq!(sorted.edge_weight(u, v), expected, "sorted weight of {u} -> {v}");
            assert_eq!(list.edge_weight(u, v), expected, "edge list weight of {u} -> {v}");
            if !direction.is_directed() {
                assert_eq!(matrix.edge_weight(v, u), expected, "asymmetric {u} - {v}");
            }
        }

        let expected = neighbor_set(&matrix, u);
        assert_eq!(neighbor_set(&sorted, u), expected, "sorted neighbors of {u}");
        assert_eq!(neighbor_set(&list, u), expected, "edge list neighbors of {u}");
    }
}

proptest! {
    #[test]
    fn undirected_representations_agree(ops in proptest::collection::vec(operation(), 0..64)) {
        check(Direction::Undirected, &ops);
    }

    #[test]
    fn directed_representations_agree(ops in proptest::collection::vec(operation(), 0..64)) {
        check(Direction::Directed, &ops);
    }

    #[test]
    fn filtered_neighbors_match_manual_filter(
        ops in proptest::collection::vec(operation(), 0..64),
        threshold in any::<u16>(),
    ) {
        let mut sorted = SortedAdjacency::new(Direction::Undirected);
        for op in &ops {
            apply(&mut sorted, op);
        }
        for u in 0..sorted.vertex_bound() {
            let filtered: Vec<usize> = sorted
                .neighbors_filtered(u, |_, w| *w >= threshold)
                .unwrap()
                .collect();
            let manual: Vec<usize> = sorted
                .weighted_neighbors(u)
                .unwrap()
                .filter(|(_, w)| **w >= threshold)
                .map(|(v, _)| v)
                .collect();
            prop_assert_eq!(filtered, manual);
        }
    }
}
