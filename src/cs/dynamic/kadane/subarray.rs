use std::ops::Range;

/// A winning contiguous range `[start, end)` together with its sum.
///
/// Produced values always satisfy `start < end`; an empty input produces no
/// `Subarray` at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subarray<S> {
    /// Index of the first element in the range.
    pub start: usize,
    /// One past the index of the last element in the range.
    pub end: usize,
    /// Sum of the elements in `[start, end)`.
    pub sum: S,
}

impl<S> Subarray<S> {
    pub(crate) fn single(index: usize, sum: S) -> Self {
        Self {
            start: index,
            end: index + 1,
            sum,
        }
    }

    /// The half-open index range.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Number of elements in the range.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// The elements of `data` covered by this range.
    ///
    /// # Panics
    ///
    /// Panics if the range does not fit in `data`, i.e. when `data` is not the
    /// sequence this result was computed from.
    ///
    /// # Examples
    ///
    /// ```
    /// use kadane_mss::max_subarray;
    ///
    /// let data = [-2, 1, -3, 4, -1, 2, 1, -5, 4];
    /// let best = max_subarray::<i32, _>(&data).unwrap();
    /// assert_eq!(best.of(&data), &[4, -1, 2, 1]);
    /// ```
    pub fn of<'a, E>(&self, data: &'a [E]) -> &'a [E] {
        &data[self.range()]
    }
}
