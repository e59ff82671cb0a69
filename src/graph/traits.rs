//! The capability contract shared by every graph representation.
//!
//! Vertices are dense, zero-based `usize` ids. A representation owns its edge
//! storage and hands out lazy neighbor iterators; algorithms only ever hold a
//! shared reference to it.

use crate::error::Result;

/// Whether edges are stored one-way or mirrored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `add_edge(u, v)` stores only `u -> v`.
    Directed,
    /// `add_edge(u, v)` stores `u -> v` and `v -> u` with the same weight.
    #[default]
    Undirected,
}

impl Direction {
    /// Returns `true` for [`Direction::Directed`].
    #[inline]
    pub fn is_directed(self) -> bool {
        matches!(self, Direction::Directed)
    }
}

/// A weighted edge record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge<W> {
    /// Source vertex.
    pub from: usize,
    /// Target vertex.
    pub to: usize,
    /// Edge weight.
    pub weight: W,
}

impl<W> Edge<W> {
    /// Creates an edge record.
    #[inline]
    pub fn new(from: usize, to: usize, weight: W) -> Self {
        Self { from, to, weight }
    }

    /// Returns `true` if this record connects `from` to `to` in that order.
    #[inline]
    pub fn connects(&self, from: usize, to: usize) -> bool {
        self.from == from && self.to == to
    }

    /// Returns the `(from, to)` pair.
    #[inline]
    pub fn endpoints(&self) -> (usize, usize) {
        (self.from, self.to)
    }
}

/// Operations every graph representation provides.
///
/// Neighbor iteration is lazy and restartable: each call returns a fresh
/// iterator, nothing is materialized up front. Ordering is part of each
/// representation's contract (ascending id for matrix and sorted adjacency,
/// insertion order for the edge list).
///
/// All three neighbor methods fail with
/// [`GraphError::VertexOutOfRange`](crate::GraphError::VertexOutOfRange) when the
/// vertex is at or above [`Graph::vertex_bound`].
pub trait Graph {
    /// Edge weight type.
    type Weight;

    /// Iterator over neighbor ids.
    type Neighbors<'a>: Iterator<Item = usize> + 'a
    where
        Self: 'a;

    /// Iterator over `(neighbor id, weight)` pairs, in the same order as [`Graph::Neighbors`].
    type WeightedNeighbors<'a>: Iterator<Item = (usize, &'a Self::Weight)> + 'a
    where
        Self: 'a;

    /// Whether edges are mirrored on insertion.
    fn direction(&self) -> Direction;

    /// Inserts (or overwrites) the edge `from -> to`, and its mirror for undirected graphs.
    fn add_edge(&mut self, from: usize, to: usize, weight: Self::Weight) -> Result<()>;

    /// Removes the edge `from -> to`, and its mirror for undirected graphs.
    ///
    /// Removing an edge that does not exist is a no-op.
    fn remove_edge(&mut self, from: usize, to: usize);

    /// Returns the stored weight of `from -> to`, or `None` if there is no such edge.
    fn edge_weight(&self, from: usize, to: usize) -> Option<&Self::Weight>;

    /// Number of vertices.
    fn size(&self) -> usize;

    /// Lazy iterator over the neighbors of `vertex`.
    fn neighbors(&self, vertex: usize) -> Result<Self::Neighbors<'_>>;

    /// Lazy iterator over the neighbors of `vertex` together with edge weights.
    fn weighted_neighbors(&self, vertex: usize) -> Result<Self::WeightedNeighbors<'_>>;

    /// Exclusive upper bound of vertex ids.
    ///
    /// Per-call algorithm state is sized to this value. It equals [`Graph::size`]
    /// unless the representation can have holes in its id space.
    #[inline]
    fn vertex_bound(&self) -> usize {
        self.size()
    }

    /// Returns `true` if `vertex` is a vertex of this graph.
    #[inline]
    fn contains_vertex(&self, vertex: usize) -> bool {
        vertex < self.size()
    }

    /// Returns `true` if edges are stored one-way.
    #[inline]
    fn is_directed(&self) -> bool {
        self.direction().is_directed()
    }

    /// Inserts `from -> to` with `Weight::default()`.
    #[inline]
    fn add_default_edge(&mut self, from: usize, to: usize) -> Result<()>
    where
        Self::Weight: Default,
    {
        self.add_edge(from, to, Self::Weight::default())
    }

    /// Neighbors of `vertex` for which `predicate(neighbor, weight)` holds.
    ///
    /// The predicate is evaluated lazily, one candidate at a time.
    #[inline]
    fn neighbors_filtered<P>(
        &self,
        vertex: usize,
        predicate: P,
    ) -> Result<FilteredNeighbors<Self::WeightedNeighbors<'_>, P>>
    where
        P: FnMut(usize, &Self::Weight) -> bool,
    {
        Ok(FilteredNeighbors::new(
            self.weighted_neighbors(vertex)?,
            predicate,
        ))
    }
}

/// Iterator adapter returned by [`Graph::neighbors_filtered`].
pub struct FilteredNeighbors<I, P> {
    inner: I,
    predicate: P,
}

impl<I, P> FilteredNeighbors<I, P> {
    #[inline]
    pub(crate) fn new(inner: I, predicate: P) -> Self {
        Self { inner, predicate }
    }
}

impl<'a, W, I, P> Iterator for FilteredNeighbors<I, P>
where
    W: 'a,
    I: Iterator<Item = (usize, &'a W)>,
    P: FnMut(usize, &W) -> bool,
{
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        for (vertex, weight) in self.inner.by_ref() {
            if (self.predicate)(vertex, weight) {
                return Some(vertex);
            }
        }
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}
