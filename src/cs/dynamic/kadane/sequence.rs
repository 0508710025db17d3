use std::collections::VecDeque;

/// An ordered, fixed-length container addressed by a zero-based index.
///
/// Implementors must return `Some` from [`get`](Sequence::get) for every
/// index below [`len`](Sequence::len). The unchecked scan panics when that
/// does not hold; the checked scan reports
/// [`KadaneError::SequenceTooShort`](crate::KadaneError::SequenceTooShort).
pub trait Sequence {
    /// The element type stored in the sequence.
    type Element;

    /// Number of elements in the sequence.
    fn len(&self) -> usize;

    /// Element at `index`, or `None` when out of range.
    fn get(&self, index: usize) -> Option<&Self::Element>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<E> Sequence for [E] {
    type Element = E;

    fn len(&self) -> usize {
        <[E]>::len(self)
    }

    fn get(&self, index: usize) -> Option<&E> {
        <[E]>::get(self, index)
    }
}

impl<E, const N: usize> Sequence for [E; N] {
    type Element = E;

    fn len(&self) -> usize {
        N
    }

    fn get(&self, index: usize) -> Option<&E> {
        self.as_slice().get(index)
    }
}

impl<E> Sequence for Vec<E> {
    type Element = E;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> Option<&E> {
        self.as_slice().get(index)
    }
}

impl<E> Sequence for VecDeque<E> {
    type Element = E;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn get(&self, index: usize) -> Option<&E> {
        VecDeque::get(self, index)
    }
}

impl<T: Sequence + ?Sized> Sequence for &T {
    type Element = T::Element;

    fn len(&self) -> usize {
        (**self).len()
    }

    fn get(&self, index: usize) -> Option<&T::Element> {
        (**self).get(index)
    }
}
