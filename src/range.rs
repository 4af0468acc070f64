use std::cell::Cell;

use crate::{
    buffer::BufferRange,
    category::Category,
    cursor::RangeHalf,
    movable::MoveRange,
    reverse::Reverse,
    span::HalfRange,
};

/// A readable stream of elements
///
/// Implementors provide the three primitives [`InputRange::is_empty`], [`InputRange::front`] and
/// [`InputRange::pop_front`] and declare their [`Category`]. Every bulk operation and conversion
/// below is written once against those primitives, so a new range type gets all of them for
/// free. Types with a cheaper way to do a bulk step (e.g. [`BufferRange`]) override it.
///
/// Calling [`InputRange::front`] on an empty range is a caller error. Implementations panic
/// rather than return a placeholder.
pub trait InputRange {
    /// The most refined tier this range satisfies
    const CATEGORY: Category;

    /// Element type stored in or produced by the range
    type Value;

    /// What [`InputRange::front`] hands out, a borrow for buffer views or a value for generators
    type Ref;

    fn is_empty(&self) -> bool;

    fn front(&self) -> Self::Ref;

    /// advance past the front element, returns false if there was nothing to pop
    fn pop_front(&mut self) -> bool;

    /// Pop up to `n` elements, returning how many were actually popped
    ///
    /// The result is less than `n` exactly when the range ran out first.
    fn pop_front_n(&mut self, n: usize) -> usize {
        for i in 0..n {
            if !self.pop_front() {
                tracing::trace!(requested = n, popped = i, "pop_front_n clipped");
                return i;
            }
        }
        n
    }

    /// Move up to `n` elements into `out`, front to back
    ///
    /// Stops when `self` runs out, when `n` elements were transferred, or when `out` rejects an
    /// element. `self` is left positioned just past the last element `out` accepted.
    fn copy_into<O>(&mut self, out: &mut O, n: usize) -> usize
    where
        Self: Sized,
        O: OutputRange<Self::Ref>,
    {
        let mut copied = 0;
        while copied < n && !self.is_empty() {
            if !out.put(self.front()) {
                tracing::trace!(requested = n, copied, "copy_into stopped at a full sink");
                return copied;
            }
            self.pop_front();
            copied += 1;
        }
        copied
    }

    /// Copy as many elements as fit into `dst`, returning how many were written
    fn copy_to_slice<'d, T>(&mut self, dst: &'d mut [T]) -> usize
    where
        Self: Sized,
        BufferRange<'d, Cell<T>>: OutputRange<Self::Ref>,
    {
        let capacity = dst.len();
        let mut sink = BufferRange::new(Cell::from_mut(dst).as_slice_of_cells());
        self.copy_into(&mut sink, capacity)
    }

    /// A view of the same elements in back-to-front order, `self` is left untouched
    fn reverse(&self) -> Reverse<Self>
    where
        Self: BidirectionalRange,
    {
        Reverse::new(self.clone())
    }

    /// A view whose elements are moved out of the underlying storage as they are read
    fn movable(&self) -> MoveRange<Self>
    where
        Self: ForwardRange,
    {
        MoveRange::new(self.clone())
    }

    /// A cursor positioned at the front of this range
    fn half(&self) -> RangeHalf<Self>
    where
        Self: ForwardRange,
    {
        RangeHalf::new(self.clone())
    }

    /// Split a finite range into a begin/end cursor pair covering all of its elements
    fn half_range(&self) -> HalfRange<Self>
    where
        Self: ForwardRange,
    {
        let begin = self.half();
        let mut end = self.half();
        end.next_n(usize::MAX);
        HalfRange::new(begin, end)
    }

    /// Consume the range as a [`std::iter::Iterator`]
    fn elements(self) -> RangeIter<Self>
    where
        Self: Sized,
    {
        RangeIter { range: self }
    }
}

/// A range that can be traversed more than once by cloning it
///
/// Cloning copies the position only. Buffer-backed ranges keep pointing at the same memory.
pub trait ForwardRange: InputRange + Clone {
    /// true if both ranges are at the same front position of the same stream
    fn equals_front(&self, other: &Self) -> bool;

    /// Signed number of forward steps from the front of `self` to the front of `other`
    ///
    /// Both ranges must be positions in the same stream. The default walks a clone of whichever
    /// range is behind until it meets the other one.
    fn distance_front(&self, other: &Self) -> isize {
        if let Some(steps) = steps_until(self, other) {
            return steps;
        }
        if let Some(steps) = steps_until(other, self) {
            return -steps;
        }
        debug_assert!(false, "distance_front between unrelated positions");
        0
    }

    /// Move the front back by one element
    ///
    /// Forward-only ranges cannot do this and keep the default, which refuses.
    fn push_front(&mut self) -> bool {
        false
    }

    fn push_front_n(&mut self, n: usize) -> usize {
        for i in 0..n {
            if !self.push_front() {
                return i;
            }
        }
        n
    }
}

fn steps_until<R: ForwardRange>(from: &R, to: &R) -> Option<isize> {
    let mut probe = from.clone();
    let mut steps = 0isize;

    loop {
        if probe.equals_front(to) {
            return Some(steps);
        }
        if probe.is_empty() || !probe.pop_front() {
            return None;
        }
        steps += 1;
    }
}

/// A range that can also be read and shrunk from the back
pub trait BidirectionalRange: ForwardRange {
    fn back(&self) -> Self::Ref;

    fn pop_back(&mut self) -> bool;

    /// widen the range by one element at the back
    fn push_back(&mut self) -> bool;

    fn equals_back(&self, other: &Self) -> bool;

    /// Signed number of forward steps from the back of `self` to the back of `other`
    fn distance_back(&self, other: &Self) -> isize {
        if let Some(steps) = back_steps_until(other, self) {
            return steps;
        }
        if let Some(steps) = back_steps_until(self, other) {
            return -steps;
        }
        debug_assert!(false, "distance_back between unrelated positions");
        0
    }

    fn pop_back_n(&mut self, n: usize) -> usize {
        for i in 0..n {
            if !self.pop_back() {
                return i;
            }
        }
        n
    }

    fn push_back_n(&mut self, n: usize) -> usize {
        for i in 0..n {
            if !self.push_back() {
                return i;
            }
        }
        n
    }
}

fn back_steps_until<R: BidirectionalRange>(from: &R, to: &R) -> Option<isize> {
    let mut probe = from.clone();
    let mut steps = 0isize;

    loop {
        if probe.equals_back(to) {
            return Some(steps);
        }
        if probe.is_empty() || !probe.pop_back() {
            return None;
        }
        steps += 1;
    }
}

/// Positional access relative to the front
///
/// Indexing or slicing outside of the range is a caller error.
pub trait RandomAccessRange: BidirectionalRange {
    fn at(&self, idx: usize) -> Self::Ref;

    /// the sub-range `[start, end)` relative to the current front
    fn slice(&self, start: usize, end: usize) -> Self;
}

/// A range that knows how many elements it has left
pub trait SizedRange: InputRange {
    fn size(&self) -> usize;
}

/// Random access with a known size
///
/// Implemented for every type that is both [`RandomAccessRange`] and [`SizedRange`].
pub trait FiniteRandomAccessRange: RandomAccessRange + SizedRange {}

impl<R: RandomAccessRange + SizedRange> FiniteRandomAccessRange for R {}

/// A finite random access range whose remaining elements sit in one block of memory
pub trait ContiguousRange: FiniteRandomAccessRange {
    fn data(&self) -> &[Self::Value];
}

/// A sink accepting values of type `T`
///
/// A sink may implement this for both `T` and `&T`, either one is enough for the sink to be
/// used as a [`InputRange::copy_into`] target.
pub trait OutputRange<T> {
    const CATEGORY: Category = Category::Output;

    /// Offer a value to the sink, false if it was rejected
    fn put(&mut self, value: T) -> bool;

    /// Offer every value of `values` in order, stopping at the first rejection
    ///
    /// Returns the number of values accepted.
    fn put_n(&mut self, values: &[T]) -> usize
    where
        T: Clone,
    {
        for (i, value) in values.iter().enumerate() {
            if !self.put(value.clone()) {
                tracing::trace!(offered = values.len(), accepted = i, "put_n stopped early");
                return i;
            }
        }
        values.len()
    }
}

/// Transfer up to `n` elements from `source` into `dest`
///
/// See [`InputRange::copy_into`].
pub fn copy<R, O>(source: &mut R, dest: &mut O, n: usize) -> usize
where
    R: InputRange,
    O: OutputRange<R::Ref>,
{
    source.copy_into(dest, n)
}

/// Adapts a range into a [`std::iter::Iterator`], see [`InputRange::elements`]
#[derive(Debug, Clone)]
pub struct RangeIter<R> {
    range: R,
}

impl<R> RangeIter<R> {
    pub fn into_range(self) -> R {
        self.range
    }
}

impl<R: InputRange> Iterator for RangeIter<R> {
    type Item = R::Ref;

    fn next(&mut self) -> Option<Self::Item> {
        if self.range.is_empty() {
            return None;
        }
        let item = self.range.front();
        self.range.pop_front();
        Some(item)
    }
}

impl<R: BidirectionalRange> DoubleEndedIterator for RangeIter<R> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.range.is_empty() {
            return None;
        }
        let item = self.range.back();
        self.range.pop_back();
        Some(item)
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use crate::{
        appender::appender,
        buffer::{iter, iter_mut},
        number::range,
        range::{InputRange, copy},
    };

    /// a single-pass range declaring nothing but the input primitives
    struct Countdown {
        left: u32,
    }

    impl InputRange for Countdown {
        const CATEGORY: crate::category::Category = crate::category::Category::Input;
        type Value = u32;
        type Ref = u32;

        fn is_empty(&self) -> bool {
            self.left == 0
        }

        fn front(&self) -> u32 {
            assert!(!self.is_empty(), "front of an empty Countdown");
            self.left
        }

        fn pop_front(&mut self) -> bool {
            if self.left == 0 {
                return false;
            }
            self.left -= 1;
            true
        }
    }

    #[test]
    fn primitive_only_range_gets_bulk_ops() {
        let mut c = Countdown { left: 5 };
        assert_eq!(c.pop_front_n(2), 2);
        assert_eq!(c.front(), 3);
        assert_eq!(c.pop_front_n(10), 3);
        assert!(c.is_empty());
        assert_eq!(c.pop_front_n(1), 0);
    }

    #[test]
    fn primitive_only_range_copies() {
        let mut c = Countdown { left: 4 };
        let mut out = appender(Vec::<u32>::new());
        assert_eq!(c.copy_into(&mut out, usize::MAX), 4);
        assert_eq!(out.into_inner(), vec![4, 3, 2, 1]);
    }

    #[test]
    fn copy_stops_at_sink_capacity() {
        let src = [1, 2, 3, 4, 5];
        let mut dst = [0; 3];
        let mut source = iter(&src);
        let mut sink = iter_mut(&mut dst);

        assert_eq!(copy(&mut source, &mut sink, 10), 3);
        assert_eq!(source.front(), &4);
        assert!(sink.is_empty());
        assert_eq!(dst, [1, 2, 3]);
    }

    #[test]
    fn copy_respects_requested_count() {
        let src = [1, 2, 3, 4, 5];
        let mut dst = [0; 5];
        let mut source = iter(&src);

        assert_eq!(copy(&mut source, &mut iter_mut(&mut dst), 2), 2);
        assert_eq!(dst, [1, 2, 0, 0, 0]);
        assert_eq!(source.front(), &3);
    }

    #[test]
    fn copy_to_slice_clips_to_both_sides() {
        let mut dst = [0u32; 8];
        let mut numbers = range(3u32);
        assert_eq!(numbers.copy_to_slice(&mut dst), 3);
        assert_eq!(dst[..4], [0, 1, 2, 0]);

        let src = [9u32; 20];
        let mut source = iter(&src);
        assert_eq!(source.copy_to_slice(&mut dst), 8);
        assert_eq!(source.as_slice().len(), 12);
    }

    #[test]
    fn elements_bridges_to_iterator() {
        let v = vec![1, 2, 3];
        let collected: Vec<i32> = iter(&v).elements().copied().collect();
        assert_eq!(collected, v);

        let backwards: Vec<i32> = iter(&v).elements().rev().copied().collect();
        assert_eq!(backwards, vec![3, 2, 1]);
    }

    #[test]
    fn conversions_do_not_consume() {
        let v = [1, 2, 3];
        let r = iter(&v);
        let reversed = r.reverse();
        let half = r.half();

        assert_eq!(reversed.front(), &3);
        assert_eq!(half.get(), &1);
        assert_eq!(r.front(), &1);
        assert_eq!(r.half_range().elements().count(), 3);
    }
}
