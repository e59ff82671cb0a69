//! Graph representations and the algorithms that run over them.
//!
//! Graph code is organized into categories:
//! - `traits`: the [`Graph`] contract plus [`Edge`] and [`Direction`]
//! - `basic`: the three storage layouts
//! - `algorithms`: traversals and connectivity analysis

pub(crate) mod access;
pub mod algorithms;
pub mod basic;
pub mod traits;

pub use access::Color;
pub use algorithms::{
    breadth_first_search, depth_first_search, depth_first_visit,
    find_bridges_and_articulation_points, BridgeFinder, Connectivity, EventLog, Visitor,
    VisitorEvent,
};
pub use basic::{AdjacencyMatrix, EdgeList, SortedAdjacency};
pub use traits::{Direction, Edge, FilteredNeighbors, Graph};
