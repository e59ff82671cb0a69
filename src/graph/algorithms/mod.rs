//! Algorithms generic over [`Graph`](crate::Graph).
//!
//! - `bfs` / `dfs`: visitor-driven traversals
//! - `bridges`: Tarjan's low-link bridges and articulation points
//!
//! Every algorithm borrows the graph immutably and keeps its per-call state
//! (colors, discovery times, stacks) to itself, so independent calls on a
//! shared graph never interfere.

pub mod bfs;
pub mod bridges;
pub mod dfs;
pub mod visitor;

pub use bfs::breadth_first_search;
pub use bridges::{find_bridges_and_articulation_points, BridgeFinder, Connectivity};
pub use dfs::{depth_first_search, depth_first_visit};
pub use visitor::{EventLog, Visitor, VisitorEvent};
