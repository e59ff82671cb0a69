//! Observer hooks for the traversal engines.
//!
//! Every hook defaults to a no-op, so a visitor only overrides the events it
//! cares about. Hooks receive a shared reference to the graph being walked and
//! must not try to mutate it.

/// Event hooks fired by [`breadth_first_search`](super::breadth_first_search)
/// and [`depth_first_search`](super::depth_first_search).
pub trait Visitor<G: ?Sized> {
    /// A vertex was reached for the first time.
    fn discover_vertex(&mut self, _vertex: usize, _graph: &G) {}

    /// A vertex was taken off the BFS queue. Depth-first search never fires this.
    fn examine_vertex(&mut self, _vertex: usize, _graph: &G) {}

    /// An edge is about to be classified.
    fn examine_edge(&mut self, _from: usize, _to: usize, _graph: &G) {}

    /// The edge leads to an unvisited vertex and joins the traversal tree.
    fn tree_edge(&mut self, _from: usize, _to: usize, _graph: &G) {}

    /// The edge leads to an already visited vertex (back or cross edge).
    fn non_tree_edge(&mut self, _from: usize, _to: usize, _graph: &G) {}

    /// All neighbors of the vertex have been processed.
    fn finish_vertex(&mut self, _vertex: usize, _graph: &G) {}
}

/// The null visitor.
impl<G: ?Sized> Visitor<G> for () {}

impl<G: ?Sized, V: Visitor<G> + ?Sized> Visitor<G> for &mut V {
    #[inline]
    fn discover_vertex(&mut self, vertex: usize, graph: &G) {
        (**self).discover_vertex(vertex, graph);
    }

    #[inline]
    fn examine_vertex(&mut self, vertex: usize, graph: &G) {
        (**self).examine_vertex(vertex, graph);
    }

    #[inline]
    fn examine_edge(&mut self, from: usize, to: usize, graph: &G) {
        (**self).examine_edge(from, to, graph);
    }

    #[inline]
    fn tree_edge(&mut self, from: usize, to: usize, graph: &G) {
        (**self).tree_edge(from, to, graph);
    }

    #[inline]
    fn non_tree_edge(&mut self, from: usize, to: usize, graph: &G) {
        (**self).non_tree_edge(from, to, graph);
    }

    #[inline]
    fn finish_vertex(&mut self, vertex: usize, graph: &G) {
        (**self).finish_vertex(vertex, graph);
    }
}

/// One visitor callback, as recorded by [`EventLog`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VisitorEvent {
    /// `discover_vertex(v)`
    DiscoverVertex(usize),
    /// `examine_vertex(v)`
    ExamineVertex(usize),
    /// `examine_edge(u, v)`
    ExamineEdge(usize, usize),
    /// `tree_edge(u, v)`
    TreeEdge(usize, usize),
    /// `non_tree_edge(u, v)`
    NonTreeEdge(usize, usize),
    /// `finish_vertex(v)`
    FinishVertex(usize),
}

/// A visitor that records every callback in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<VisitorEvent>,
}

impl EventLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events in firing order.
    pub fn events(&self) -> &[VisitorEvent] {
        &self.events
    }

    /// Vertices in `discover_vertex` order.
    pub fn discovered(&self) -> Vec<usize> {
        self.vertices_where(|e| match e {
            VisitorEvent::DiscoverVertex(v) => Some(v),
            _ => None,
        })
    }

    /// Vertices in `examine_vertex` order.
    pub fn examined(&self) -> Vec<usize> {
        self.vertices_where(|e| match e {
            VisitorEvent::ExamineVertex(v) => Some(v),
            _ => None,
        })
    }

    /// Vertices in `finish_vertex` order.
    pub fn finished(&self) -> Vec<usize> {
        self.vertices_where(|e| match e {
            VisitorEvent::FinishVertex(v) => Some(v),
            _ => None,
        })
    }

    /// Tree edges in firing order.
    pub fn tree_edges(&self) -> Vec<(usize, usize)> {
        self.edges_where(|e| match e {
            VisitorEvent::TreeEdge(u, v) => Some((u, v)),
            _ => None,
        })
    }

    /// Non-tree edges in firing order.
    pub fn non_tree_edges(&self) -> Vec<(usize, usize)> {
        self.edges_where(|e| match e {
            VisitorEvent::NonTreeEdge(u, v) => Some((u, v)),
            _ => None,
        })
    }

    /// Examined edges in firing order.
    pub fn examined_edges(&self) -> Vec<(usize, usize)> {
        self.edges_where(|e| match e {
            VisitorEvent::ExamineEdge(u, v) => Some((u, v)),
            _ => None,
        })
    }

    /// Drops all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    fn vertices_where(&self, pick: impl Fn(VisitorEvent) -> Option<usize>) -> Vec<usize> {
        self.events.iter().copied().filter_map(pick).collect()
    }

    fn edges_where(&self, pick: impl Fn(VisitorEvent) -> Option<(usize, usize)>) -> Vec<(usize, usize)> {
        self.events.iter().copied().filter_map(pick).collect()
    }
}

impl<G: ?Sized> Visitor<G> for EventLog {
    fn discover_vertex(&mut self, vertex: usize, _graph: &G) {
        self.events.push(VisitorEvent::DiscoverVertex(vertex));
    }

    fn examine_vertex(&mut self, vertex: usize, _graph: &G) {
        self.events.push(VisitorEvent::ExamineVertex(vertex));
    }

    fn examine_edge(&mut self, from: usize, to: usize, _graph: &G) {
        self.events.push(VisitorEvent::ExamineEdge(from, to));
    }

    fn tree_edge(&mut self, from: usize, to: usize, _graph: &G) {
        self.events.push(VisitorEvent::TreeEdge(from, to));
    }

    fn non_tree_edge(&mut self, from: usize, to: usize, _graph: &G) {
        self.events.push(VisitorEvent::NonTreeEdge(from, to));
    }

    fn finish_vertex(&mut self, vertex: usize, _graph: &G) {
        self.events.push(VisitorEvent::FinishVertex(vertex));
    }
}
