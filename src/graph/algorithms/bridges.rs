//! Bridges and articulation points via Tarjan's low-link algorithm.
//!
//! - A **bridge** is an edge whose removal increases the number of connected components.
//! - An **articulation point** is a vertex whose removal does the same.
//!
//! One depth-first pass over every component computes, per vertex, its
//! discovery time and low-link (the smallest discovery time reachable from its
//! subtree through at most one back edge). A tree edge `u -> v` is a bridge iff
//! `low[v] > disc[u]`; a non-root `u` is an articulation point iff some child
//! has `low[v] >= disc[u]`; a root is one iff it has at least two tree children.

use std::collections::BTreeSet;
use std::fmt;

use crate::error::{GraphError, Result};
use crate::graph::access::color::{Color, ColorMap};
use crate::graph::traits::{Edge, Graph};
use crate::macros::{debug_event, trace_event};

const UNSET: usize = usize::MAX;

/// Result of a connectivity scan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Connectivity<W> {
    bridges: Vec<Edge<W>>,
    articulation_points: BTreeSet<usize>,
}

impl<W> Connectivity<W> {
    /// Bridges in discovery order, oriented parent -> child in the DFS tree.
    ///
    /// Each carries the weight of the exact edge the scan descended through.
    pub fn bridges(&self) -> &[Edge<W>] {
        &self.bridges
    }

    /// Articulation points.
    pub fn articulation_points(&self) -> &BTreeSet<usize> {
        &self.articulation_points
    }

    /// Returns `true` if `{u, v}` was reported as a bridge, in either orientation.
    pub fn is_bridge(&self, u: usize, v: usize) -> bool {
        self.bridges
            .iter()
            .any(|e| e.connects(u, v) || e.connects(v, u))
    }

    /// Returns `true` if `vertex` was reported as an articulation point.
    pub fn is_articulation_point(&self, vertex: usize) -> bool {
        self.articulation_points.contains(&vertex)
    }

    /// Splits into `(bridges, articulation points)`.
    pub fn into_parts(self) -> (Vec<Edge<W>>, BTreeSet<usize>) {
        (self.bridges, self.articulation_points)
    }
}

impl<W> fmt::Display for Connectivity<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Bridges:")?;
        for e in &self.bridges {
            writeln!(f, "{} - {}", e.from, e.to)?;
        }
        writeln!(f)?;
        writeln!(f, "Articulation Points:")?;
        for v in &self.articulation_points {
            writeln!(f, "{v}")?;
        }
        Ok(())
    }
}

/// One pending vertex on the explicit DFS stack.
struct Frame<'g, G: Graph + ?Sized + 'g> {
    vertex: usize,
    neighbors: G::WeightedNeighbors<'g>,
    /// Weight of the tree edge used to reach `vertex`; `None` for a root.
    via: Option<&'g G::Weight>,
    /// Whether the mirror of the tree edge has already been passed over.
    parent_edge_skipped: bool,
}

/// Single-use bridge and articulation-point scanner bound to one graph.
///
/// State is sized to the graph at construction; [`BridgeFinder::find`] consumes
/// the finder so a scan cannot be repeated on stale state.
pub struct BridgeFinder<'g, G: Graph + ?Sized> {
    graph: &'g G,
    clock: usize,
    discovery: Vec<usize>,
    low: Vec<usize>,
    colors: ColorMap,
    parent: Vec<Option<usize>>,
    root_children: usize,
    stack: Vec<Frame<'g, G>>,
    bridges: Vec<Edge<G::Weight>>,
    articulation_points: BTreeSet<usize>,
}

impl<'g, G> BridgeFinder<'g, G>
where
    G: Graph + ?Sized,
    G::Weight: Clone,
{
    /// Binds a finder to `graph`.
    pub fn new(graph: &'g G) -> Self {
        let n = graph.vertex_bound();
        Self {
            graph,
            clock: 0,
            discovery: vec![UNSET; n],
            low: vec![UNSET; n],
            colors: ColorMap::new(n),
            parent: vec![None; n],
            root_children: 0,
            stack: Vec::new(),
            bridges: Vec::new(),
            articulation_points: BTreeSet::new(),
        }
    }

    /// Runs the scan over every component.
    ///
    /// # Errors
    /// Returns [`GraphError::DirectedGraph`] for directed input, and propagates
    /// neighbor-iteration errors.
    pub fn find(mut self) -> Result<Connectivity<G::Weight>> {
        if self.graph.is_directed() {
            return Err(GraphError::DirectedGraph);
        }
        debug_event!(vertex_bound = self.colors.len(), "bridge scan started");

        for root in 0..self.colors.len() {
            if self.graph.contains_vertex(root) && self.colors.is_unvisited(root) {
                self.root_children = 0;
                self.scan_from(root)?;
                if self.root_children > 1 {
                    trace_event!(root, children = self.root_children, "root is an articulation point");
                    self.articulation_points.insert(root);
                }
            }
        }

        debug_event!(
            bridges = self.bridges.len(),
            articulation_points = self.articulation_points.len(),
            "bridge scan finished"
        );
        Ok(Connectivity {
            bridges: self.bridges,
            articulation_points: self.articulation_points,
        })
    }

    fn enter(&mut self, vertex: usize, via: Option<&'g G::Weight>) -> Result<()> {
        self.colors.discover(vertex);
        self.discovery[vertex] = self.clock;
        self.low[vertex] = self.clock;
        self.clock += 1;
        self.stack.push(Frame {
            vertex,
            neighbors: self.graph.weighted_neighbors(vertex)?,
            via,
            parent_edge_skipped: false,
        });
        Ok(())
    }

    fn scan_from(&mut self, root: usize) -> Result<()> {
        self.enter(root, None)?;

        loop {
            let Some((u, next)) = self
                .stack
                .last_mut()
                .map(|frame| (frame.vertex, frame.neighbors.next()))
            else {
                break;
            };

            match next {
                Some((v, weight)) => self.classify(u, v, weight)?,
                None => self.leave(u),
            }
        }

        Ok(())
    }

    fn classify(&mut self, u: usize, v: usize, weight: &'g G::Weight) -> Result<()> {
        if self.colors.is_unvisited(v) {
            self.parent[v] = Some(u);
            if self.parent[u].is_none() {
                self.root_children += 1;
            }
            return self.enter(v, Some(weight));
        }

        debug_assert_ne!(self.colors.get(v), Color::Unvisited);
        if self.parent[u] == Some(v) {
            if let Some(frame) = self.stack.last_mut() {
                if !frame.parent_edge_skipped {
                    frame.parent_edge_skipped = true;
                    return Ok(());
                }
            }
        }
        self.low[u] = self.low[u].min(self.discovery[v]);
        Ok(())
    }

    /// Pops `u`'s frame and folds its low-link into its DFS parent.
    fn leave(&mut self, u: usize) {
        let via = self.stack.pop().and_then(|frame| frame.via);
        self.colors.finish(u);

        let Some(p) = self.parent[u] else {
            return;
        };

        if self.low[u] > self.discovery[p] {
            if let Some(weight) = via {
                trace_event!(from = p, to = u, "bridge");
                self.bridges.push(Edge::new(p, u, weight.clone()));
            }
        }
        if self.low[u] >= self.discovery[p] && self.parent[p].is_some() {
            self.articulation_points.insert(p);
        }
        self.low[p] = self.low[p].min(self.low[u]);
    }
}

/// Convenience wrapper: `BridgeFinder::new(graph).find()`.
///
/// # Errors
/// See [`BridgeFinder::find`].
pub fn find_bridges_and_articulation_points<G>(graph: &G) -> Result<Connectivity<G::Weight>>
where
    G: Graph + ?Sized,
    G::Weight: Clone,
{
    BridgeFinder::new(graph).find()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::basic::{AdjacencyMatrix, EdgeList, SortedAdjacency};

    fn undirected_list(edges: &[(usize, usize)]) -> EdgeList<()> {
        let mut g = EdgeList::undirected();
        for &(u, v) in edges {
            g.add_edge(u, v, ()).unwrap();
        }
        g
    }

    #[test]
    fn star_center_is_the_only_cut_vertex() {
        let mut g = AdjacencyMatrix::<()>::undirected(4);
        for leaf in 1..4 {
            g.add_default_edge(0, leaf).unwrap();
        }
        let result = find_bridges_and_articulation_points(&g).unwrap();
        assert_eq!(result.bridges().len(), 3);
        assert_eq!(result.articulation_points(), &BTreeSet::from([0]));
    }

    #[test]
    fn triangle_has_no_bridges() {
        let g = undirected_list(&[(0, 1), (1, 2), (2, 0)]);
        let result = find_bridges_and_articulation_points(&g).unwrap();
        assert!(result.bridges().is_empty());
        assert!(result.articulation_points().is_empty());
    }

    #[test]
    fn path_middle_is_cut_vertex() {
        let g = undirected_list(&[(0, 1), (1, 2)]);
        let result = find_bridges_and_articulation_points(&g).unwrap();
        let bridges: Vec<_> = result.bridges().iter().map(Edge::endpoints).collect();
        assert_eq!(bridges, vec![(1, 2), (0, 1)]);
        assert_eq!(result.articulation_points(), &BTreeSet::from([1]));
    }

    #[test]
    fn bridge_weight_comes_from_the_tree_edge() {
        let mut g = SortedAdjacency::undirected();
        g.add_edge(0, 1, 7u32).unwrap();
        g.add_edge(1, 2, 9u32).unwrap();
        g.add_edge(2, 0, 3u32).unwrap();
        g.add_edge(2, 3, 42u32).unwrap();

        let result = find_bridges_and_articulation_points(&g).unwrap();
        assert_eq!(result.bridges(), &[Edge::new(2, 3, 42)]);
        assert!(result.is_bridge(3, 2));
        assert!(result.is_articulation_point(2));
    }

    #[test]
    fn doubled_edge_is_not_a_bridge() {
        let g = undirected_list(&[(0, 1), (0, 1), (1, 2)]);
        let result = find_bridges_and_articulation_points(&g).unwrap();
        let bridges: Vec<_> = result.bridges().iter().map(Edge::endpoints).collect();
        assert_eq!(bridges, vec![(1, 2)]);
        assert_eq!(result.articulation_points(), &BTreeSet::from([1]));
    }

    #[test]
    fn directed_input_is_rejected() {
        let mut g = SortedAdjacency::<()>::directed();
        g.add_default_edge(0, 1).unwrap();
        assert_eq!(
            find_bridges_and_articulation_points(&g),
            Err(GraphError::DirectedGraph)
        );
    }

    #[test]
    fn display_lists_both_sections() {
        let g = undirected_list(&[(0, 1)]);
        let text = find_bridges_and_articulation_points(&g).unwrap().to_string();
        assert_eq!(text, "Bridges:\n0 - 1\n\nArticulation Points:\n");
    }
}
