//! Per-call vertex coloring for traversals.
//!
//! Every traversal allocates a fresh `ColorMap` sized to the graph's vertex
//! bound and drops it on return. Colors only move forward:
//! `Unvisited -> InProgress -> Done`.

/// Traversal state of a single vertex.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Color {
    /// Not reached yet.
    #[default]
    Unvisited,
    /// Discovered, neighbors not yet exhausted.
    InProgress,
    /// All neighbors processed.
    Done,
}

/// Dense color array indexed by vertex id.
#[derive(Clone, Debug)]
pub(crate) struct ColorMap {
    colors: Vec<Color>,
}

impl ColorMap {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            colors: vec![Color::Unvisited; len],
        }
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline(always)]
    pub(crate) fn get(&self, vertex: usize) -> Color {
        self.colors[vertex]
    }

    #[inline(always)]
    pub(crate) fn is_unvisited(&self, vertex: usize) -> bool {
        self.colors[vertex] == Color::Unvisited
    }

    /// Marks `vertex` as discovered.
    #[inline]
    pub(crate) fn discover(&mut self, vertex: usize) {
        debug_assert_eq!(self.colors[vertex], Color::Unvisited, "vertex {vertex} discovered twice");
        self.colors[vertex] = Color::InProgress;
    }

    /// Marks `vertex` as finished.
    #[inline]
    pub(crate) fn finish(&mut self, vertex: usize) {
        debug_assert_eq!(self.colors[vertex], Color::InProgress, "vertex {vertex} finished out of order");
        self.colors[vertex] = Color::Done;
    }
}
