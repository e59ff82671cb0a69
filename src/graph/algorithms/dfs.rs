//! Depth-first traversal over every component, driven by an explicit stack.
//!
//! Each stack frame holds a vertex and its partially consumed neighbor
//! iterator, which reproduces the recursive event order exactly without
//! tying recursion depth to the call stack.

use super::Visitor;
use crate::error::{GraphError, Result};
use crate::graph::access::color::ColorMap;
use crate::graph::traits::Graph;
use crate::macros::debug_event;

/// Depth-first search over the whole graph.
///
/// Roots are tried in ascending id order; every still-unvisited vertex starts
/// a new tree, so all components are covered. Per vertex `u`:
/// `discover_vertex(u)`, then for each neighbor `v` `examine_edge(u, v)`
/// followed by either `tree_edge(u, v)` and a descent into `v`, or
/// `non_tree_edge(u, v)`; finally `finish_vertex(u)`.
///
/// Ids below the vertex bound that are not vertices of the graph (holes in an
/// edge list) are skipped.
///
/// # Errors
/// Propagates [`GraphError`] from neighbor iteration; the built-in
/// representations never fail here.
pub fn depth_first_search<G, V>(graph: &G, mut visitor: V) -> Result<()>
where
    G: Graph + ?Sized,
    V: Visitor<G>,
{
    let bound = graph.vertex_bound();
    debug_event!(vertex_bound = bound, "depth-first search started");

    let mut colors = ColorMap::new(bound);
    for root in 0..bound {
        if graph.contains_vertex(root) && colors.is_unvisited(root) {
            visit(graph, root, &mut colors, &mut visitor)?;
        }
    }

    debug_event!("depth-first search finished");
    Ok(())
}

/// Depth-first search of the single tree rooted at `start`.
///
/// Same event order as [`depth_first_search`], but vertices not reachable
/// from `start` are left alone. As with
/// [`breadth_first_search`](super::breadth_first_search), an empty graph or a
/// `start` that is a hole below the vertex bound is a no-op.
///
/// # Errors
/// Returns [`GraphError::VertexOutOfRange`] if `start` is at or above the
/// graph's vertex bound (and the graph is not empty).
pub fn depth_first_visit<G, V>(graph: &G, start: usize, mut visitor: V) -> Result<()>
where
    G: Graph + ?Sized,
    V: Visitor<G>,
{
    let bound = graph.vertex_bound();
    if bound == 0 {
        return Ok(());
    }
    if start >= bound {
        return Err(GraphError::out_of_range(start, bound));
    }
    if !graph.contains_vertex(start) {
        return Ok(());
    }
    debug_event!(start, vertex_bound = bound, "depth-first visit started");

    let mut colors = ColorMap::new(bound);
    visit(graph, start, &mut colors, &mut visitor)
}

fn visit<'g, G, V>(graph: &'g G, root: usize, colors: &mut ColorMap, visitor: &mut V) -> Result<()>
where
    G: Graph + ?Sized,
    V: Visitor<G>,
{
    let mut stack: Vec<(usize, G::Neighbors<'g>)> = Vec::new();

    colors.discover(root);
    visitor.discover_vertex(root, graph);
    stack.push((root, graph.neighbors(root)?));

    loop {
        let Some((u, next)) = stack
            .last_mut()
            .map(|(vertex, neighbors)| (*vertex, neighbors.next()))
        else {
            break;
        };

        match next {
            Some(v) => {
                visitor.examine_edge(u, v, graph);
                if colors.is_unvisited(v) {
                    visitor.tree_edge(u, v, graph);
                    colors.discover(v);
                    visitor.discover_vertex(v, graph);
                    stack.push((v, graph.neighbors(v)?));
                } else {
                    visitor.non_tree_edge(u, v, graph);
                }
            }
            None => {
                stack.pop();
                colors.finish(u);
                visitor.finish_vertex(u, graph);
            }
        }
    }

    Ok(())
}
