//! Doubling-capacity growable sequence.
//!
//! A [`GrowVec`] owns a boxed slice of `Option<T>` slots. Slots `[0, len)`
//! are always `Some`; slots `[len, capacity)` are always `None`. A push into
//! a full sequence reallocates to twice the capacity and moves the live
//! elements across, which keeps appends amortised O(1).

use std::fmt;
use std::iter::Flatten;
use std::ops::{Index, IndexMut};
use std::slice;
use std::vec;

use crate::error::VecError;

/// Borrowing iterator over a [`GrowVec`].
pub type Iter<'a, T> = Flatten<slice::Iter<'a, Option<T>>>;

/// Mutable borrowing iterator over a [`GrowVec`].
pub type IterMut<'a, T> = Flatten<slice::IterMut<'a, Option<T>>>;

/// Owning iterator over a [`GrowVec`].
pub type IntoIter<T> = Flatten<vec::IntoIter<Option<T>>>;

/// A growable, ordered sequence with an explicit doubling growth policy.
///
/// Capacity never drops below 1, so the doubling step always makes room.
/// Equality compares elements only; two sequences holding the same values
/// with different capacities are equal.
pub struct GrowVec<T> {
    slots: Box<[Option<T>]>,
    len: usize,
}

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

impl<T> GrowVec<T> {
    /// Capacity of a sequence created with [`new`](Self::new).
    pub const DEFAULT_CAPACITY: usize = 4;

    /// Create an empty sequence with [`DEFAULT_CAPACITY`](Self::DEFAULT_CAPACITY) slots.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Create an empty sequence with room for `capacity` elements.
    ///
    /// A requested capacity of zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: empty_slots(capacity.max(1)),
            len: 0,
        }
    }

    /// Number of elements currently stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of elements the sequence can hold before it must grow.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Whether the sequence holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append `value`, doubling the capacity first if the sequence is full.
    pub fn push(&mut self, value: T) {
        if self.len == self.capacity() {
            self.grow_to(self.capacity().saturating_mul(2).max(1));
        }
        self.slots[self.len] = Some(value);
        self.len += 1;
    }

    /// Remove and return the last element, or `None` if empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        self.slots[self.len].take()
    }

    /// Remove and return the last element.
    ///
    /// Returns [`VecError::Empty`] instead of `None` so callers can
    /// propagate the failure with `?`.
    pub fn try_pop(&mut self) -> Result<T, VecError> {
        self.pop().ok_or(VecError::Empty)
    }

    /// Shared reference to the element at `index`, if it is in bounds.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len {
            self.slots[index].as_ref()
        } else {
            None
        }
    }

    /// Mutable reference to the element at `index`, if it is in bounds.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len {
            self.slots[index].as_mut()
        } else {
            None
        }
    }

    /// Bounds-checked access that reports the failing index.
    pub fn at(&self, index: usize) -> Result<&T, VecError> {
        self.get(index).ok_or(VecError::OutOfBounds {
            index,
            len: self.len,
        })
    }

    /// Drop every element. Capacity is kept.
    pub fn clear(&mut self) {
        for slot in &mut self.slots[..self.len] {
            *slot = None;
        }
        self.len = 0;
    }

    /// Grow the capacity to at least `capacity`. Never shrinks.
    pub fn reserve(&mut self, capacity: usize) {
        if capacity > self.capacity() {
            self.grow_to(capacity);
        }
    }

    /// Exchange contents and capacity with `other`.
    pub fn swap_with(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.slots[..self.len].iter().flatten()
    }

    /// Iterate mutably over the elements in order.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.slots[..self.len].iter_mut().flatten()
    }

    fn grow_to(&mut self, new_capacity: usize) {
        let mut slots = Vec::with_capacity(new_capacity);
        slots.extend(self.slots[..self.len].iter_mut().map(Option::take));
        slots.resize_with(new_capacity, || None);
        self.slots = slots.into_boxed_slice();
    }
}

impl<T: Clone> Clone for GrowVec<T> {
    /// The copy gets capacity `max(len, DEFAULT_CAPACITY)`, not the
    /// source's capacity.
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.len.max(Self::DEFAULT_CAPACITY));
        copy.extend(self.iter().cloned());
        copy
    }
}

impl<T> Default for GrowVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for GrowVec<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(value) => value,
            None => panic!(
                "index out of bounds: the len is {} but the index is {index}",
                self.len
            ),
        }
    }
}

impl<T> IndexMut<usize> for GrowVec<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        match self.get_mut(index) {
            Some(value) => value,
            None => panic!("index out of bounds: the len is {len} but the index is {index}"),
        }
    }
}

impl<T: PartialEq> PartialEq for GrowVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for GrowVec<T> {}

impl<T: fmt::Debug> fmt::Debug for GrowVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for GrowVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

impl<T> From<Vec<T>> for GrowVec<T> {
    /// Capacity is `max(len, DEFAULT_CAPACITY)`.
    fn from(values: Vec<T>) -> Self {
        let len = values.len();
        let capacity = len.max(Self::DEFAULT_CAPACITY);
        let mut slots = Vec::with_capacity(capacity);
        slots.extend(values.into_iter().map(Some));
        slots.resize_with(capacity, || None);
        Self {
            slots: slots.into_boxed_slice(),
            len,
        }
    }
}

impl<T> FromIterator<T> for GrowVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<T>>().into()
    }
}

impl<T> Extend<T> for GrowVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> IntoIterator for GrowVec<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        let len = self.len;
        let mut slots = self.slots.into_vec();
        slots.truncate(len);
        slots.into_iter().flatten()
    }
}

impl<'a, T> IntoIterator for &'a GrowVec<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut GrowVec<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
