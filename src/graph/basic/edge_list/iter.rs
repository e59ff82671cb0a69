use crate::graph::traits::Edge;

/// Iterator over `(neighbor, weight)` pairs of one vertex, in insertion order.
///
/// Scans the whole record list; duplicate records yield duplicate neighbors.
#[derive(Clone, Debug)]
pub struct EdgeListWeightedNeighbors<'a, W> {
    records: &'a [Edge<W>],
    source: usize,
    idx: usize,
}

impl<'a, W> EdgeListWeightedNeighbors<'a, W> {
    #[inline]
    pub(super) fn new(records: &'a [Edge<W>], source: usize) -> Self {
        Self {
            records,
            source,
            idx: 0,
        }
    }
}

impl<'a, W> Iterator for EdgeListWeightedNeighbors<'a, W> {
    type Item = (usize, &'a W);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while let Some(edge) = self.records.get(self.idx) {
            self.idx += 1;
            if edge.from == self.source {
                return Some((edge.to, &edge.weight));
            }
        }
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.records.len().saturating_sub(self.idx)))
    }
}

/// Iterator over the neighbor ids of one vertex, in insertion order.
#[derive(Clone, Debug)]
pub struct EdgeListNeighbors<'a, W> {
    inner: EdgeListWeightedNeighbors<'a, W>,
}

impl<'a, W> EdgeListNeighbors<'a, W> {
    #[inline]
    pub(super) fn new(inner: EdgeListWeightedNeighbors<'a, W>) -> Self {
        Self { inner }
    }
}

impl<'a, W> Iterator for EdgeListNeighbors<'a, W> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(vertex, _)| vertex)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
