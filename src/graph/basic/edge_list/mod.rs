//! Flat edge-list graph.
//!
//! Vertical split:
//! - `edges`: record storage + endpoint bookkeeping
//! - `iter`: neighbor scans in insertion order
//! - `tests`: module tests
//!
//! Vertices exist only as endpoints of stored records. `size()` counts distinct
//! endpoints, which can be smaller than `vertex_bound()` when ids are sparse
//! (edges `(1, 2)` alone give size 2 and bound 3).
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `add_edge` | \(O(\log V)\) amortized | Append, plus endpoint bookkeeping |
//! | `remove_edge` | \(O(E)\) | Removes every matching record |
//! | `edge_weight` | \(O(E)\) | Latest matching record wins |
//! | `neighbors` | \(O(E)\) | Insertion order, duplicates preserved |
//! | `size` | \(O(1)\) | Cached distinct-endpoint count |

use crate::error::{GraphError, Result};
use crate::graph::traits::{Direction, Edge, Graph};
use crate::macros::trace_event;

mod edges;
mod iter;

use edges::EdgeRecords;
pub use iter::{EdgeListNeighbors, EdgeListWeightedNeighbors};

/// A sequence of directed edge records; undirected edges are stored as two records.
#[derive(Clone, Debug)]
pub struct EdgeList<W> {
    records: EdgeRecords<W>,
    direction: Direction,
}

impl<W> EdgeList<W> {
    /// Creates an empty graph.
    pub fn new(direction: Direction) -> Self {
        Self {
            records: EdgeRecords::new(),
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

    /// All stored records in insertion order.
    pub fn edges(&self) -> &[Edge<W>] {
        self.records.as_slice()
    }

    /// Number of stored records (an undirected edge counts twice).
    pub fn edge_count(&self) -> usize {
        self.records.len()
    }
}

impl<W> Default for EdgeList<W> {
    fn default() -> Self {
        Self::undirected()
    }
}

impl<W: Clone> Graph for EdgeList<W> {
    type Weight = W;
    type Neighbors<'a> = EdgeListNeighbors<'a, W> where Self: 'a;
    type WeightedNeighbors<'a> = EdgeListWeightedNeighbors<'a, W> where Self: 'a;

    fn direction(&self) -> Direction {
        self.direction
    }

    /// Appends the record(s). Never fails; repeated insertion keeps every copy.
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        trace_event!(from, to, "edge list: add edge");
        if self.direction.is_directed() {
            self.records.push(Edge::new(from, to, weight));
        } else {
            self.records.push(Edge::new(from, to, weight.clone()));
            self.records.push(Edge::new(to, from, weight));
        }
        Ok(())
    }

    /// Removes every `from -> to` record, and every mirror record for undirected graphs.
    fn remove_edge(&mut self, from: usize, to: usize) {
        let mut removed = self.records.remove_all(from, to);
        if !self.direction.is_directed() && from != to {
            removed += self.records.remove_all(to, from);
        }
        if removed > 0 {
            trace_event!(from, to, removed, "edge list: remove edge");
        }
    }

    fn edge_weight(&self, from: usize, to: usize) -> Option<&W> {
        self.records.latest(from, to).map(|e| &e.weight)
    }

    fn size(&self) -> usize {
        self.records.distinct_endpoints()
    }

    fn vertex_bound(&self) -> usize {
        self.records.bound()
    }

    fn contains_vertex(&self, vertex: usize) -> bool {
        self.records.contains_endpoint(vertex)
    }

    fn neighbors(&self, vertex: usize) -> Result<EdgeListNeighbors<'_, W>> {
        self.weighted_neighbors(vertex).map(EdgeListNeighbors::new)
    }

    fn weighted_neighbors(&self, vertex: usize) -> Result<EdgeListWeightedNeighbors<'_, W>> {
        let bound = self.records.bound();
        if vertex >= bound {
            return Err(GraphError::out_of_range(vertex, bound));
        }
        Ok(EdgeListWeightedNeighbors::new(
            self.records.as_slice(),
            vertex,
        ))
    }
}
