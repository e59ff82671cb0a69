//! Basic graph representations.
//!
//! Three interchangeable storage layouts behind the same [`Graph`](crate::Graph)
//! contract, differing in lookup cost and neighbor ordering:
//! - `adjacency_matrix`: fixed `n x n` table, O(1) lookup, ascending neighbors
//! - `sorted_adjacency`: per-vertex ordered maps, O(log d) lookup, ascending neighbors
//! - `edge_list`: flat records, O(1) append, insertion-ordered neighbors

pub mod adjacency_matrix;
pub mod edge_list;
pub mod sorted_adjacency;

pub use adjacency_matrix::AdjacencyMatrix;
pub use edge_list::EdgeList;
pub use sorted_adjacency::SortedAdjacency;
