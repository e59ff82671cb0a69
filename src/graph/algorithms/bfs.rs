//! Breadth-first traversal from a single start vertex.

use std::collections::VecDeque;

use super::Visitor;
use crate::error::{GraphError, Result};
use crate::graph::access::color::ColorMap;
use crate::graph::traits::Graph;
use crate::macros::debug_event;

/// Walks the component reachable from `start` in breadth-first order.
///
/// Event order per dequeued vertex `u`: `examine_vertex(u)`, then for each
/// neighbor `v` in the representation's order `examine_edge(u, v)` followed by
/// either `tree_edge(u, v)` + `discover_vertex(v)` or `non_tree_edge(u, v)`,
/// and finally `finish_vertex(u)`. Vertices outside `start`'s component are
/// never touched.
///
/// An empty graph is a no-op, and so is a `start` below the vertex bound that
/// is not a vertex of the graph (a hole in an edge list's id space).
///
/// # Errors
/// Returns [`GraphError::VertexOutOfRange`] if `start` is at or above the
/// graph's vertex bound (and the graph is not empty).
pub fn breadth_first_search<G, V>(graph: &G, start: usize, mut visitor: V) -> Result<()>
where
    G: Graph + ?Sized,
    V: Visitor<G>,
{
    let bound = graph.vertex_bound();
    if bound == 0 {
        return Ok(());
    }

    let mut colors = ColorMap::new(bound);
    if start >= colors.len() {
        return Err(GraphError::out_of_range(start, bound));
    }
    if !graph.contains_vertex(start) {
        return Ok(());
    }
    debug_event!(start, vertex_bound = bound, "breadth-first search started");

    let mut queue = VecDeque::new();
    colors.discover(start);
    visitor.discover_vertex(start, graph);
    queue.push_back(start);

    while let Some(u) = queue.pop_front() {
        visitor.examine_vertex(u, graph);

        for v in graph.neighbors(u)? {
            visitor.examine_edge(u, v, graph);
            if colors.is_unvisited(v) {
                visitor.tree_edge(u, v, graph);
                colors.discover(v);
                visitor.discover_vertex(v, graph);
                queue.push_back(v);
            } else {
                visitor.non_tree_edge(u, v, graph);
            }
        }

        colors.finish(u);
        visitor.finish_vertex(u, graph);
    }

    debug_event!(start, "breadth-first search finished");
    Ok(())
}
