//! # `lowlink` - Graph Representations and Connectivity Analysis
//!
//! Three interchangeable in-memory graph layouts behind one capability trait,
//! visitor-driven traversals written against that trait, and a Tarjan-style
//! analysis that finds bridges and articulation points of undirected graphs.
//!
//! ## Key Features
//!
//! - **One contract, three layouts**: [`AdjacencyMatrix`], [`SortedAdjacency`]
//!   and [`EdgeList`] all implement [`Graph`]; algorithms never see which one
//!   they were handed
//! - **Lazy neighbors**: neighbor iteration is an associated iterator type,
//!   optionally weighted or filtered, with nothing materialized up front
//! - **Visitor traversals**: [`breadth_first_search`] and [`depth_first_search`]
//!   fire six hooks, all defaulting to no-ops
//! - **Deep graphs are fine**: depth-first engines keep an explicit stack, so
//!   path length is bounded by memory rather than the call stack
//!
//! ## Architecture
//!
//! Vertices are dense `usize` ids starting at zero. Every algorithm borrows the
//! graph immutably and owns its traversal state, so independent analyses of the
//! same graph can run concurrently from several threads.
//!
//! ### Invariants
//!
//! **Symmetry**: in an undirected graph `edge_weight(u, v)` and
//! `edge_weight(v, u)` always agree, including after removals.
//!
//! **Color monotonicity**: within one traversal a vertex moves
//! `Unvisited -> InProgress -> Done` exactly once.
//!
//! **Connectivity**: a reported bridge disconnects its endpoints when removed,
//! and a reported articulation point increases the component count when
//! removed; nothing else is reported.
//!
//! ## Example
//!
//! ```rust
//! use lowlink::{find_bridges_and_articulation_points, EdgeList, Graph};
//!
//! let mut g = EdgeList::undirected();
//! g.add_edge(0, 1, 1.5).unwrap();
//! g.add_edge(1, 2, 2.0).unwrap();
//! g.add_edge(2, 0, 0.5).unwrap();
//! g.add_edge(2, 3, 4.0).unwrap();
//!
//! let result = find_bridges_and_articulation_points(&g).unwrap();
//! assert!(result.is_bridge(2, 3));
//! assert!(result.is_articulation_point(2));
//! assert_eq!(result.bridges().len(), 1);
//! ```
//!
//! ## Logging
//!
//! With the default `tracing` feature, edge mutations emit `trace` events and
//! algorithm runs emit `debug` events. Disable default features to compile the
//! instrumentation out entirely.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod macros;

pub mod error;
pub mod graph;

pub use error::{GraphError, Result};
pub use graph::{
    breadth_first_search, depth_first_search, depth_first_visit,
    find_bridges_and_articulation_points, AdjacencyMatrix, BridgeFinder, Color, Connectivity,
    Direction, Edge, EdgeList, EventLog, FilteredNeighbors, Graph, SortedAdjacency, Visitor,
    VisitorEvent,
};

// Compile-time layout checks.
const _: () = {
    use core::mem;

    // Traversal colors are a single byte.
    assert!(mem::size_of::<Color>() == 1);

    assert!(mem::size_of::<Direction>() == 1);

    // Unit-weighted edge records are just the endpoint pair.
    assert!(mem::size_of::<Edge<()>>() == 2 * mem::size_of::<usize>());
};
