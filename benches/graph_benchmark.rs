use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lowlink::{
    breadth_first_search, depth_first_search, AdjacencyMatrix, EdgeList, Graph, SortedAdjacency,
    Visitor,
};

/// Counts discovered vertices without allocating per event.
struct Counter(usize);

impl<G: ?Sized> Visitor<G> for Counter {
    fn discover_vertex(&mut self, _vertex: usize, _graph: &G) {
        self.0 += 1;
    }
}

/// Binary-heap shaped tree: `i / 2 - i`.
fn fill<G: Graph<Weight = ()>>(graph: &mut G, size: usize) {
    for i in 1..size {
        graph.add_edge(i / 2, i, ()).unwrap();
    }
}

fn bench_graph_build(c: &mut Criterion) {
    let size = 1000;

    c.bench_function("matrix_build", |b| {
        b.iter(|| {
            let mut graph = AdjacencyMatrix::undirected(size);
            fill(&mut graph, size);
            black_box(graph.edge_count());
        });
    });

    c.bench_function("sorted_adjacency_build", |b| {
        b.iter(|| {
            let mut graph = SortedAdjacency::undirected();
            fill(&mut graph, size);
            black_box(graph.edge_count());
        });
    });

    c.bench_function("edge_list_build", |b| {
        b.iter(|| {
            let mut graph = EdgeList::undirected();
            fill(&mut graph, size);
            black_box(graph.edge_count());
        });
    });
}

fn bench_graph_lookup(c: &mut Criterion) {
    let size = 1000;
    let mut matrix = AdjacencyMatrix::undirected(size);
    let mut sorted = SortedAdjacency::undirected();
    let mut list = EdgeList::undirected();
    fill(&mut matrix, size);
    fill(&mut sorted, size);
    fill(&mut list, size);

    c.bench_function("matrix_edge_weight", |b| {
        b.iter(|| black_box(matrix.edge_weight(black_box(250), black_box(500))));
    });
    c.bench_function("sorted_adjacency_edge_weight", |b| {
        b.iter(|| black_box(sorted.edge_weight(black_box(250), black_box(500))));
    });
    c.bench_function("edge_list_edge_weight", |b| {
        b.iter(|| black_box(list.edge_weight(black_box(250), black_box(500))));
    });
}

fn bench_graph_traversal(c: &mut Criterion) {
    let size = 1000;
    let mut matrix = AdjacencyMatrix::undirected(size);
    let mut sorted = SortedAdjacency::undirected();
    fill(&mut matrix, size);
    fill(&mut sorted, size);

    c.bench_function("matrix_bfs", |b| {
        b.iter(|| {
            let mut counter = Counter(0);
            breadth_first_search(&matrix, 0, &mut counter).unwrap();
            black_box(counter.0);
        });
    });

    c.bench_function("sorted_adjacency_bfs", |b| {
        b.iter(|| {
            let mut counter = Counter(0);
            breadth_first_search(&sorted, 0, &mut counter).unwrap();
            black_box(counter.0);
        });
    });

    c.bench_function("sorted_adjacency_dfs", |b| {
        b.iter(|| {
            let mut counter = Counter(0);
            depth_first_search(&sorted, &mut counter).unwrap();
            black_box(counter.0);
        });
    });
}

criterion_group!(benches, bench_graph_build, bench_graph_lookup, bench_graph_traversal);
criterion_main!(benches);
