/// Iterator over `(neighbor, weight)` pairs of one matrix row, in ascending id order.
#[derive(Clone, Debug)]
pub struct MatrixWeightedNeighbors<'a, W> {
    row: &'a [Option<W>],
    idx: usize,
}

impl<'a, W> MatrixWeightedNeighbors<'a, W> {
    #[inline]
    pub(super) fn new(row: &'a [Option<W>]) -> Self {
        Self { row, idx: 0 }
    }
}

impl<'a, W> Iterator for MatrixWeightedNeighbors<'a, W> {
    type Item = (usize, &'a W);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while let Some(cell) = self.row.get(self.idx) {
            let current = self.idx;
            self.idx += 1;
            if let Some(weight) = cell {
                return Some((current, weight));
            }
        }
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.row.len().saturating_sub(self.idx)))
    }
}

/// Iterator over the neighbor ids of one matrix row, in ascending id order.
#[derive(Clone, Debug)]
pub struct MatrixNeighbors<'a, W> {
    inner: MatrixWeightedNeighbors<'a, W>,
}

impl<'a, W> MatrixNeighbors<'a, W> {
    #[inline]
    pub(super) fn new(inner: MatrixWeightedNeighbors<'a, W>) -> Self {
        Self { inner }
    }
}

impl<'a, W> Iterator for MatrixNeighbors<'a, W> {
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
