use std::cell::Cell;

use crate::{
    category::Category,
    range::{
        BidirectionalRange, ContiguousRange, ForwardRange, InputRange, OutputRange,
        RandomAccessRange, SizedRange,
    },
};

/// Exposes a borrowed slice as a contiguous range
///
/// The view never owns its memory. It holds the whole borrowed slice plus a `[beg, end)` window
/// into it, so it can be widened again with `push_front`/`push_back` up to the edges of the
/// original borrow, but never past them.
///
/// A view over `&[Cell<T>]` (see [`iter_mut`]) is also an [`OutputRange`]: `put` writes into the
/// front slot and advances past it. Copies of such a view alias the same memory, which is the
/// caller's business to coordinate.
pub struct BufferRange<'a, E> {
    buf: &'a [E],
    beg: usize,
    end: usize,
}

impl<'a, E> BufferRange<'a, E> {
    pub fn new(buf: &'a [E]) -> Self {
        Self {
            buf,
            beg: 0,
            end: buf.len(),
        }
    }

    /// the elements currently in view
    pub fn as_slice(&self) -> &'a [E] {
        &self.buf[self.beg..self.end]
    }

    /// Copy elements into `dst` as one block, returning the number copied
    ///
    /// Copies `min(self.size(), dst.len())` elements with [`slice::clone_from_slice`], which is
    /// a plain memory copy for `Copy` element types, and advances past them.
    ///
    /// This is the block copy path. [`crate::range::copy`] and [`OutputRange::put_n`] go element
    /// by element because a writable view is a slice of [`Cell`]s, which cannot be borrowed as
    /// one `&mut [T]`.
    pub fn copy_block(&mut self, dst: &mut [E]) -> usize
    where
        E: Clone,
    {
        let count = self.size().min(dst.len());
        dst[..count].clone_from_slice(&self.buf[self.beg..self.beg + count]);
        self.beg += count;
        count
    }
}

impl<'a, E> Clone for BufferRange<'a, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, E> Copy for BufferRange<'a, E> {}

impl<'a, E> std::fmt::Debug for BufferRange<'a, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BufferRange")
            .field("len", &self.buf.len())
            .field("beg", &self.beg)
            .field("end", &self.end)
            .finish()
    }
}

impl<'a, E> InputRange for BufferRange<'a, E> {
    const CATEGORY: Category = Category::Contiguous;

    type Value = E;
    type Ref = &'a E;

    fn is_empty(&self) -> bool {
        self.beg == self.end
    }

    fn front(&self) -> &'a E {
        assert!(!self.is_empty(), "front of an empty BufferRange");
        &self.buf[self.beg]
    }

    fn pop_front(&mut self) -> bool {
        if self.is_empty() {
            return false;
        }
        self.beg += 1;
        true
    }

    fn pop_front_n(&mut self, n: usize) -> usize {
        let count = n.min(self.end - self.beg);
        self.beg += count;
        count
    }
}

impl<'a, E> ForwardRange for BufferRange<'a, E> {
    fn equals_front(&self, other: &Self) -> bool {
        std::ptr::eq(self.buf, other.buf) && self.beg == other.beg
    }

    fn distance_front(&self, other: &Self) -> isize {
        debug_assert!(std::ptr::eq(self.buf, other.buf));
        other.beg as isize - self.beg as isize
    }

    fn push_front(&mut self) -> bool {
        if self.beg == 0 {
            return false;
        }
        self.beg -= 1;
        true
    }

    fn push_front_n(&mut self, n: usize) -> usize {
        let count = n.min(self.beg);
        self.beg -= count;
        count
    }
}

impl<'a, E> BidirectionalRange for BufferRange<'a, E> {
    fn back(&self) -> &'a E {
        assert!(!self.is_empty(), "back of an empty BufferRange");
        &self.buf[self.end - 1]
    }

    fn pop_back(&mut self) -> bool {
        if self.is_empty() {
            return false;
        }
        self.end -= 1;
        true
    }

    fn push_back(&mut self) -> bool {
        if self.end == self.buf.len() {
            return false;
        }
        self.end += 1;
        true
    }

    fn equals_back(&self, other: &Self) -> bool {
        std::ptr::eq(self.buf, other.buf) && self.end == other.end
    }

    fn distance_back(&self, other: &Self) -> isize {
        debug_assert!(std::ptr::eq(self.buf, other.buf));
        other.end as isize - self.end as isize
    }

    fn pop_back_n(&mut self, n: usize) -> usize {
        let count = n.min(self.end - self.beg);
        self.end -= count;
        count
    }

    fn push_back_n(&mut self, n: usize) -> usize {
        let count = n.min(self.buf.len() - self.end);
        self.end += count;
        count
    }
}

impl<'a, E> RandomAccessRange for BufferRange<'a, E> {
    fn at(&self, idx: usize) -> &'a E {
        debug_assert!(idx < self.size(), "index {idx} out of a view of {}", self.size());
        &self.buf[self.beg + idx]
    }

    fn slice(&self, start: usize, end: usize) -> Self {
        assert!(
            start <= end && end <= self.size(),
            "slice [{start}, {end}) out of a view of {}",
            self.size()
        );
        Self {
            buf: self.buf,
            beg: self.beg + start,
            end: self.beg + end,
        }
    }
}

impl<'a, E> SizedRange for BufferRange<'a, E> {
    fn size(&self) -> usize {
        self.end - self.beg
    }
}

impl<'a, E> ContiguousRange for BufferRange<'a, E> {
    fn data(&self) -> &[E] {
        self.as_slice()
    }
}

impl<'a, T> OutputRange<T> for BufferRange<'a, Cell<T>> {
    fn put(&mut self, value: T) -> bool {
        if self.is_empty() {
            return false;
        }
        self.buf[self.beg].set(value);
        self.beg += 1;
        true
    }

    /// one `Cell::set` per slot, see [`BufferRange::copy_block`] for a block copy
    fn put_n(&mut self, values: &[T]) -> usize
    where
        T: Clone,
    {
        let count = self.size().min(values.len());
        for (slot, value) in self.buf[self.beg..self.beg + count].iter().zip(values) {
            slot.set(value.clone());
        }
        self.beg += count;
        count
    }
}

impl<'a, 'r, T: Clone> OutputRange<&'r T> for BufferRange<'a, Cell<T>> {
    fn put(&mut self, value: &'r T) -> bool {
        <Self as OutputRange<T>>::put(self, value.clone())
    }
}

/// Conversion into the range a collection is naturally iterated with
///
/// Borrowed slices, arrays and vectors become a [`BufferRange`]; mutable borrows become a
/// writable view over [`Cell`]s. Every range converts into itself.
pub trait IntoRange {
    type Range: InputRange;

    fn into_range(self) -> Self::Range;
}

impl<R: InputRange> IntoRange for R {
    type Range = R;

    fn into_range(self) -> R {
        self
    }
}

impl<'a, T> IntoRange for &'a [T] {
    type Range = BufferRange<'a, T>;

    fn into_range(self) -> Self::Range {
        BufferRange::new(self)
    }
}

impl<'a, T, const N: usize> IntoRange for &'a [T; N] {
    type Range = BufferRange<'a, T>;

    fn into_range(self) -> Self::Range {
        BufferRange::new(self.as_slice())
    }
}

impl<'a, T> IntoRange for &'a Vec<T> {
    type Range = BufferRange<'a, T>;

    fn into_range(self) -> Self::Range {
        BufferRange::new(self.as_slice())
    }
}

impl<'a, T> IntoRange for &'a mut [T] {
    type Range = BufferRange<'a, Cell<T>>;

    fn into_range(self) -> Self::Range {
        BufferRange::new(Cell::from_mut(self).as_slice_of_cells())
    }
}

impl<'a, T, const N: usize> IntoRange for &'a mut [T; N] {
    type Range = BufferRange<'a, Cell<T>>;

    fn into_range(self) -> Self::Range {
        self.as_mut_slice().into_range()
    }
}

impl<'a, T> IntoRange for &'a mut Vec<T> {
    type Range = BufferRange<'a, Cell<T>>;

    fn into_range(self) -> Self::Range {
        self.as_mut_slice().into_range()
    }
}

/// The natural range of `collection`, see [`IntoRange`]
pub fn iter<C: IntoRange>(collection: C) -> C::Range {
    collection.into_range()
}

/// A writable view over `buf`
pub fn iter_mut<T>(buf: &mut [T]) -> BufferRange<'_, Cell<T>> {
    buf.into_range()
}
