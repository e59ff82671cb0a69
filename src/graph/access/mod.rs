//! Internal traversal state shared by the graph algorithms.
//!
//! `Color` is public so visitors and callers can talk about traversal state;
//! the map itself stays `pub(crate)` and is owned by exactly one algorithm call.

pub(crate) mod color;

pub use color::Color;
