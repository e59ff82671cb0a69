use std::collections::BTreeMap;

use crate::graph::traits::Edge;

/// Insertion-ordered edge records plus a reference count per endpoint.
///
/// The count map is kept in step with `records` on every mutation, so the
/// distinct-endpoint count and the id bound never need a full scan.
#[derive(Clone, Debug)]
pub(super) struct EdgeRecords<W> {
    records: Vec<Edge<W>>,
    endpoints: BTreeMap<usize, usize>,
}

impl<W> EdgeRecords<W> {
    pub(super) fn new() -> Self {
        Self {
            records: Vec::new(),
            endpoints: BTreeMap::new(),
        }
    }

    pub(super) fn push(&mut self, edge: Edge<W>) {
        self.acquire(edge.from);
        self.acquire(edge.to);
        self.records.push(edge);
    }

    /// Drops every `from -> to` record. Returns how many were removed.
    pub(super) fn remove_all(&mut self, from: usize, to: usize) -> usize {
        let before = self.records.len();
        self.records.retain(|e| !e.connects(from, to));
        let removed = before - self.records.len();
        for _ in 0..removed {
            self.release(from);
            self.release(to);
        }
        removed
    }

    /// Most recently inserted `from -> to` record.
    pub(super) fn latest(&self, from: usize, to: usize) -> Option<&Edge<W>> {
        self.records.iter().rev().find(|e| e.connects(from, to))
    }

    #[inline]
    pub(super) fn as_slice(&self) -> &[Edge<W>] {
        &self.records
    }

    #[inline]
    pub(super) fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub(super) fn distinct_endpoints(&self) -> usize {
        self.endpoints.len()
    }

    #[inline]
    pub(super) fn contains_endpoint(&self, vertex: usize) -> bool {
        self.endpoints.contains_key(&vertex)
    }

    /// Largest stored endpoint plus one, or zero when empty.
    #[inline]
    pub(super) fn bound(&self) -> usize {
        self.endpoints
            .last_key_value()
            .map_or(0, |(&vertex, _)| vertex + 1)
    }

    fn acquire(&mut self, vertex: usize) {
        *self.endpoints.entry(vertex).or_insert(0) += 1;
    }

    fn release(&mut self, vertex: usize) {
        if let Some(count) = self.endpoints.get_mut(&vertex) {
            *count -= 1;
            if *count == 0 {
                self.endpoints.remove(&vertex);
            }
        }
    }
}
