//! Error taxonomy for graph operations.
//!
//! The surface is deliberately narrow: asking for the neighbors of a vertex
//! beyond a representation's bound, and running an undirected-only analysis on a
//! directed graph. Missing edges are never errors; lookups return `None` and
//! removals are no-ops.

use thiserror::Error;

/// Errors produced by graph representations and algorithms.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex id was at or above the representation's vertex bound.
    #[error("vertex {vertex} is out of range (vertex bound is {bound})")]
    VertexOutOfRange {
        /// The offending vertex id.
        vertex: usize,
        /// The exclusive upper bound of valid vertex ids at the time of the call.
        bound: usize,
    },

    /// An analysis that is only defined for undirected graphs was given a directed one.
    #[error("operation requires an undirected graph")]
    DirectedGraph,
}

impl GraphError {
    #[inline]
    pub(crate) fn out_of_range(vertex: usize, bound: usize) -> Self {
        GraphError::VertexOutOfRange { vertex, bound }
    }
}

/// Convenience alias for results using [`GraphError`].
pub type Result<T> = core::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_vertex_and_bound() {
        let err = GraphError::out_of_range(7, 3);
        assert_eq!(
            err.to_string(),
            "vertex 7 is out of range (vertex bound is 3)"
        );
    }

    #[test]
    fn directed_graph_message() {
        assert_eq!(
            GraphError::DirectedGraph.to_string(),
            "operation requires an undirected graph"
        );
    }
}
