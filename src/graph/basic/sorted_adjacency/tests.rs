use super::*;

#[test]
fn starts_empty() {
    let g = SortedAdjacency::<i32>::undirected();
    assert_eq!(g.size(), 0);
    assert_eq!(g.edge_count(), 0);
}

#[test]
fn add_grows_vertex_table() {
    let mut g = SortedAdjacency::undirected();
    g.add_edge(0, 1, 5).unwrap();
    assert_eq!(g.size(), 2);
    g.add_edge(4, 2, 5).unwrap();
    assert_eq!(g.size(), 5);
    assert_eq!(g.degree(3), 0);
}

#[test]
fn with_vertices_presizes() {
    let g = SortedAdjacency::<()>::with_vertices(4, Direction::Directed);
    assert_eq!(g.size(), 4);
    assert_eq!(g.neighbors(3).unwrap().len(), 0);
}

#[test]
fn undirected_and_directed_insertion() {
    let mut undirected = SortedAdjacency::undirected();
    undirected.add_edge(0, 1, 5).unwrap();
    assert_eq!(undirected.edge_weight(0, 1), Some(&5));
    assert_eq!(undirected.edge_weight(1, 0), Some(&5));

    let mut directed = SortedAdjacency::directed();
    directed.add_edge(0, 1, 5).unwrap();
    assert_eq!(directed.edge_weight(0, 1), Some(&5));
    assert_eq!(directed.edge_weight(1, 0), None);
}

#[test]
fn re_adding_overwrites_weight() {
    let mut g = SortedAdjacency::undirected();
    g.add_edge(0, 1, 5).unwrap();
    g.add_edge(0, 1, 9).unwrap();
    assert_eq!(g.edge_weight(1, 0), Some(&9));
    assert_eq!(g.edge_count(), 2);
}

#[test]
fn remove_keeps_vertices() {
    let mut g = SortedAdjacency::undirected();
    g.add_edge(0, 1, 1).unwrap();
    g.add_edge(2, 3, 1).unwrap();
    assert_eq!(g.size(), 4);

    g.remove_edge(0, 1);
    assert_eq!(g.size(), 4);
    assert_eq!(g.edge_weight(0, 1), None);
    assert_eq!(g.edge_weight(1, 0), None);
}

#[test]
fn remove_missing_edge_is_noop() {
    let mut g = SortedAdjacency::<i32>::undirected();
    g.remove_edge(0, 1);
    assert_eq!(g.size(), 0);
    assert_eq!(g.edge_weight(0, 1), None);

    g.add_edge(0, 1, 3).unwrap();
    g.remove_edge(0, 7);
    assert_eq!(g.edge_weight(0, 1), Some(&3));
}

#[test]
fn lookup_is_keyed_by_neighbor_not_weight() {
    let mut g = SortedAdjacency::directed();
    g.add_edge(0, 1, String::from("b")).unwrap();
    g.add_edge(0, 2, String::from("a")).unwrap();
    assert_eq!(g.edge_weight(0, 2).map(String::as_str), Some("a"));
    let ids: Vec<usize> = g.neighbors(0).unwrap().collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn neighbors_ascend_regardless_of_insertion_order() {
    let mut g = SortedAdjacency::undirected();
    for v in [5, 1, 3, 2] {
        g.add_edge(0, v, v * 10).unwrap();
    }
    let ids: Vec<usize> = g.neighbors(0).unwrap().collect();
    assert_eq!(ids, vec![1, 2, 3, 5]);

    let weights: Vec<usize> = g.weighted_neighbors(0).unwrap().map(|(_, w)| *w).collect();
    assert_eq!(weights, vec![10, 20, 30, 50]);
}

#[test]
fn filtered_neighbors() {
    let mut g = SortedAdjacency::undirected();
    g.add_edge(0, 1, 5).unwrap();
    g.add_edge(0, 2, 10).unwrap();

    let kept: Vec<usize> = g.neighbors_filtered(0, |_, w| *w >= 10).unwrap().collect();
    assert_eq!(kept, vec![2]);

    let mut nothing = g.neighbors_filtered(0, |_, w| *w > 10).unwrap();
    assert_eq!(nothing.next(), None);
}

#[test]
fn neighbors_out_of_range_is_an_error() {
    let mut g = SortedAdjacency::undirected();
    g.add_edge(0, 1, 1).unwrap();
    assert_eq!(
        g.neighbors(2).err(),
        Some(GraphError::VertexOutOfRange { vertex: 2, bound: 2 })
    );
    assert!(g.weighted_neighbors(2).is_err());
    assert!(g.neighbors_filtered(2, |_, _| true).is_err());
}
