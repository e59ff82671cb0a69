//! Dense adjacency-matrix graph.
//!
//! Vertical split:
//! - `iter`: row scans yielding neighbors in ascending id order
//! - `tests`: module tests
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `add_edge` | \(O(1)\) | Overwrites the cell (and its mirror) |
//! | `remove_edge` | \(O(1)\) | Clears the cell (and its mirror) |
//! | `edge_weight` | \(O(1)\) | Direct index |
//! | `neighbors` | \(O(V)\) | Scans one row |

use crate::error::{GraphError, Result};
use crate::graph::traits::{Direction, Graph};
use crate::macros::trace_event;

mod iter;

pub use iter::{MatrixNeighbors, MatrixWeightedNeighbors};

/// A fixed-size `n x n` table of optional weights.
///
/// The vertex count is fixed at construction; `add_edge` with an endpoint
/// outside `0..n` fails instead of growing the table.
#[derive(Clone, Debug)]
pub struct AdjacencyMatrix<W> {
    cells: Vec<Option<W>>,
    vertex_count: usize,
    direction: Direction,
}

impl<W> AdjacencyMatrix<W> {
    /// Creates a graph with `vertex_count` vertices and no edges.
    ///
    /// # Panics
    /// Panics if `vertex_count * vertex_count` overflows `usize`.
    pub fn new(vertex_count: usize, direction: Direction) -> Self {
        let len = vertex_count
            .checked_mul(vertex_count)
            .unwrap_or_else(|| panic!("{vertex_count} x {vertex_count} matrix overflows usize"));
        let cells = (0..len).map(|_| None).collect();
        Self {
            cells,
            vertex_count,
            direction,
        }
    }

    /// Creates an undirected graph with `vertex_count` vertices.
    ///
    /// # Panics
    /// See [`AdjacencyMatrix::new`].
    pub fn undirected(vertex_count: usize) -> Self {
        Self::new(vertex_count, Direction::Undirected)
    }

    /// Creates a directed graph with `vertex_count` vertices.
    ///
    /// # Panics
    /// See [`AdjacencyMatrix::new`].
    pub fn directed(vertex_count: usize) -> Self {
        Self::new(vertex_count, Direction::Directed)
    }

    /// Number of stored directed entries (an undirected edge counts twice, a self-loop once).
    pub fn edge_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Number of stored entries in `vertex`'s row.
    ///
    /// # Panics
    /// Panics if `vertex` is out of bounds.
    pub fn degree(&self, vertex: usize) -> usize {
        assert!(vertex < self.vertex_count, "vertex {vertex} out of bounds");
        self.row(vertex).iter().filter(|c| c.is_some()).count()
    }

    #[inline(always)]
    fn index(&self, from: usize, to: usize) -> usize {
        from * self.vertex_count + to
    }

    #[inline]
    fn in_bounds(&self, from: usize, to: usize) -> bool {
        from < self.vertex_count && to < self.vertex_count
    }

    #[inline]
    fn row(&self, vertex: usize) -> &[Option<W>] {
        let start = vertex * self.vertex_count;
        &self.cells[start..start + self.vertex_count]
    }
}

impl<W: Clone> Graph for AdjacencyMatrix<W> {
    type Weight = W;
    type Neighbors<'a> = MatrixNeighbors<'a, W> where Self: 'a;
    type WeightedNeighbors<'a> = MatrixWeightedNeighbors<'a, W> where Self: 'a;

    fn direction(&self) -> Direction {
        self.direction
    }

    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        if !self.in_bounds(from, to) {
            return Err(GraphError::out_of_range(from.max(to), self.vertex_count));
        }
        trace_event!(from, to, "matrix: add edge");
        if !self.direction.is_directed() {
            let mirror = self.index(to, from);
            self.cells[mirror] = Some(weight.clone());
        }
        let idx = self.index(from, to);
        self.cells[idx] = Some(weight);
        Ok(())
    }

    fn remove_edge(&mut self, from: usize, to: usize) {
        if !self.in_bounds(from, to) {
            return;
        }
        trace_event!(from, to, "matrix: remove edge");
        let idx = self.index(from, to);
        self.cells[idx] = None;
        if !self.direction.is_directed() {
            let mirror = self.index(to, from);
            self.cells[mirror] = None;
        }
    }

    fn edge_weight(&self, from: usize, to: usize) -> Option<&W> {
        if !self.in_bounds(from, to) {
            return None;
        }
        self.cells[self.index(from, to)].as_ref()
    }

    fn size(&self) -> usize {
        self.vertex_count
    }

    fn neighbors(&self, vertex: usize) -> Result<MatrixNeighbors<'_, W>> {
        self.weighted_neighbors(vertex).map(MatrixNeighbors::new)
    }

    fn weighted_neighbors(&self, vertex: usize) -> Result<MatrixWeightedNeighbors<'_, W>> {
        if vertex >= self.vertex_count {
            return Err(GraphError::out_of_range(vertex, self.vertex_count));
        }
        Ok(MatrixWeightedNeighbors::new(self.row(vertex)))
    }
}
