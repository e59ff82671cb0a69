use std::collections::btree_map;

/// Iterator over the neighbor ids of one vertex, in ascending id order.
pub struct SortedNeighbors<'a, W> {
    keys: btree_map::Keys<'a, usize, W>,
}

impl<'a, W> SortedNeighbors<'a, W> {
    #[inline]
    pub(super) fn new(keys: btree_map::Keys<'a, usize, W>) -> Self {
        Self { keys }
    }
}

impl<'a, W> Iterator for SortedNeighbors<'a, W> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.keys.next().copied()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<'a, W> ExactSizeIterator for SortedNeighbors<'a, W> {}

/// Iterator over `(neighbor, weight)` pairs of one vertex, in ascending id order.
pub struct SortedWeightedNeighbors<'a, W> {
    entries: btree_map::Iter<'a, usize, W>,
}

impl<'a, W> SortedWeightedNeighbors<'a, W> {
    #[inline]
    pub(super) fn new(entries: btree_map::Iter<'a, usize, W>) -> Self {
        Self { entries }
    }
}

impl<'a, W> Iterator for SortedWeightedNeighbors<'a, W> {
    type Item = (usize, &'a W);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(|(&vertex, weight)| (vertex, weight))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<'a, W> ExactSizeIterator for SortedWeightedNeighbors<'a, W> {}
