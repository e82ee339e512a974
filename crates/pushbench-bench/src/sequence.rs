//! The container seam the trial loop is generic over.

use pushbench_vec::GrowVec;

/// An ordered, growable container that the runner appends into.
///
/// `empty()` must not pre-size: the measured workload includes every
/// reallocation the container performs while growing.
pub trait Sequence<T> {
    /// A fresh, empty container with its default capacity.
    fn empty() -> Self;

    /// Append one value at the end.
    fn push_value(&mut self, value: T);

    /// Number of values held.
    fn len(&self) -> usize;

    /// Whether the container holds no values.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Sequence<T> for Vec<T> {
    fn empty() -> Self {
        Vec::new()
    }

    #[inline]
    fn push_value(&mut self, value: T) {
        self.push(value);
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<T> Sequence<T> for GrowVec<T> {
    fn empty() -> Self {
        GrowVec::new()
    }

    #[inline]
    fn push_value(&mut self, value: T) {
        self.push(value);
    }

    fn len(&self) -> usize {
        GrowVec::len(self)
    }
}
