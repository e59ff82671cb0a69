//! Sorted adjacency graph: one ordered map of `(neighbor -> weight)` per vertex.
//!
//! Vertical split:
//! - `iter`: in-order walks over a vertex's map
//! - `tests`: module tests
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `add_edge` | \(O(\log d)\) amortized | Grows the vertex table on demand |
//! | `remove_edge` | \(O(\log d)\) | |
//! | `edge_weight` | \(O(\log d)\) | Keyed by neighbor id, never by weight |
//! | `neighbors` | \(O(d)\) | Ascending neighbor id |

use std::collections::BTreeMap;

use crate::error::{GraphError, Result};
use crate::graph::traits::{Direction, Graph};
use crate::macros::trace_event;

mod iter;
#[cfg(test)]
mod tests;

pub use iter::{SortedNeighbors, SortedWeightedNeighbors};

/// Per-vertex ordered neighbor maps.
///
/// The vertex table grows to `max(from, to) + 1` on insertion and never
/// shrinks; removing an edge keeps both endpoints as vertices.
#[derive(Clone, Debug)]
pub struct SortedAdjacency<W> {
    adjacency: Vec<BTreeMap<usize, W>>,
    direction: Direction,
}

impl<W> SortedAdjacency<W> {
    /// Creates an empty graph.
    pub fn new(direction: Direction) -> Self {
        Self {
            adjacency: Vec::new(),
            direction,
        }
    }

    /// Creates a graph with `vertex_count` isolated vertices.
    pub fn with_vertices(vertex_count: usize, direction: Direction) -> Self {
        let adjacency = (0..vertex_count).map(|_| BTreeMap::new()).collect();
        Self {
            adjacency,
            direction,
        }
    }

    /// Creates an empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(Direction::Undirected)
    }

    /// Creates an empty directed graph.
    pub fn directed() -> Self {
        Self::new(Direction::Directed)
    }

    /// Number of stored directed entries (an undirected edge counts twice, a self-loop once).
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(BTreeMap::len).sum()
    }

    /// Number of neighbors of `vertex`.
    ///
    /// # Panics
    /// Panics if `vertex` is out of bounds.
    pub fn degree(&self, vertex: usize) -> usize {
        assert!(vertex < self.adjacency.len(), "vertex {vertex} out of bounds");
        self.adjacency[vertex].len()
    }

    fn ensure_vertex(&mut self, vertex: usize) {
        if vertex >= self.adjacency.len() {
            self.adjacency.resize_with(vertex + 1, BTreeMap::new);
        }
    }

    fn checked_map(&self, vertex: usize) -> Result<&BTreeMap<usize, W>> {
        self.adjacency
            .get(vertex)
            .ok_or_else(|| GraphError::out_of_range(vertex, self.adjacency.len()))
    }
}

impl<W> Default for SortedAdjacency<W> {
    fn default() -> Self {
        Self::undirected()
    }
}

impl<W: Clone> Graph for SortedAdjacency<W> {
    type Weight = W;
    type Neighbors<'a> = SortedNeighbors<'a, W> where Self: 'a;
    type WeightedNeighbors<'a> = SortedWeightedNeighbors<'a, W> where Self: 'a;

    fn direction(&self) -> Direction {
        self.direction
    }

    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        self.ensure_vertex(from.max(to));
        trace_event!(from, to, "sorted adjacency: add edge");
        if !self.direction.is_directed() {
            self.adjacency[to].insert(from, weight.clone());
        }
        self.adjacency[from].insert(to, weight);
        Ok(())
    }

    fn remove_edge(&mut self, from: usize, to: usize) {
        if from.max(to) >= self.adjacency.len() {
            return;
        }
        trace_event!(from, to, "sorted adjacency: remove edge");
        self.adjacency[from].remove(&to);
        if !self.direction.is_directed() {
            self.adjacency[to].remove(&from);
        }
    }

    fn edge_weight(&self, from: usize, to: usize) -> Option<&W> {
        self.adjacency.get(from)?.get(&to)
    }

    fn size(&self) -> usize {
        self.adjacency.len()
    }

    fn neighbors(&self, vertex: usize) -> Result<SortedNeighbors<'_, W>> {
        self.checked_map(vertex).map(|map| SortedNeighbors::new(map.keys()))
    }

    fn weighted_neighbors(&self, vertex: usize) -> Result<SortedWeightedNeighbors<'_, W>> {
        self.checked_map(vertex)
            .map(|map| SortedWeightedNeighbors::new(map.iter()))
    }
}
