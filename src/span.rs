use crate::{
    category::Category,
    cursor::RangeHalf,
    error::RangeError,
    range::{
        BidirectionalRange, ForwardRange, InputRange, OutputRange, RandomAccessRange, SizedRange,
    },
};

/// A bounded view between two cursors over the same stream
///
/// The view is empty when both cursors are equal. Popping only moves a cursor inwards while the
/// view is non-empty, so the begin cursor never passes the end cursor through `pop_front` or
/// `pop_back`. Pushing moves a cursor outwards and is not checked against any earlier bounds.
#[derive(Clone)]
pub struct HalfRange<R> {
    beg: RangeHalf<R>,
    end: RangeHalf<R>,
}

impl<R: std::fmt::Debug> std::fmt::Debug for HalfRange<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HalfRange")
            .field("beg", &self.beg)
            .field("end", &self.end)
            .finish()
    }
}

/// a bounded view is always finite, and it is not itself a handle on contiguous memory
const fn bounded(inner: Category) -> Category {
    match inner {
        Category::RandomAccess | Category::Contiguous => Category::FiniteRandomAccess,
        other => other,
    }
}

impl<R: ForwardRange> HalfRange<R> {
    /// Create a view from `beg` to `end` without checking their order
    ///
    /// Use [`RangeHalf::span_to`] when the order is not already known.
    pub fn new(beg: RangeHalf<R>, end: RangeHalf<R>) -> Self {
        Self { beg, end }
    }

    pub fn begin(&self) -> &RangeHalf<R> {
        &self.beg
    }

    pub fn end(&self) -> &RangeHalf<R> {
        &self.end
    }

    pub fn into_halves(self) -> (RangeHalf<R>, RangeHalf<R>) {
        (self.beg, self.end)
    }
}

impl<R: RandomAccessRange> HalfRange<R> {
    /// Like [`RandomAccessRange::slice`] but reports out of order or out of bounds indices
    pub fn try_slice(&self, start: usize, end: usize) -> Result<Self, RangeError> {
        let size = self.size();
        if start > end || end > size {
            tracing::debug!(start, end, size, "rejected an out of bounds slice");
            return Err(RangeError::SliceOutOfBounds { start, end, size });
        }
        Ok(self.slice(start, end))
    }
}

impl<R: ForwardRange> InputRange for HalfRange<R> {
    const CATEGORY: Category = bounded(R::CATEGORY);

    type Value = R::Value;
    type Ref = R::Ref;

    fn is_empty(&self) -> bool {
        self.beg == self.end
    }

    fn front(&self) -> R::Ref {
        assert!(!self.is_empty(), "front of an empty HalfRange");
        self.beg.get()
    }

    fn pop_front(&mut self) -> bool {
        if self.is_empty() {
            return false;
        }
        self.beg.next()
    }
}

impl<R: ForwardRange> ForwardRange for HalfRange<R> {
    fn equals_front(&self, other: &Self) -> bool {
        self.beg == other.beg
    }

    fn distance_front(&self, other: &Self) -> isize {
        self.beg.distance(&other.beg)
    }

    fn push_front(&mut self) -> bool {
        self.beg.prev()
    }
}

impl<R: BidirectionalRange> BidirectionalRange for HalfRange<R> {
    fn back(&self) -> R::Ref {
        assert!(!self.is_empty(), "back of an empty HalfRange");
        let mut last = self.end.clone();
        last.prev();
        last.get()
    }

    fn pop_back(&mut self) -> bool {
        if self.is_empty() {
            return false;
        }
        self.end.prev()
    }

    fn push_back(&mut self) -> bool {
        self.end.next()
    }

    fn equals_back(&self, other: &Self) -> bool {
        self.end == other.end
    }

    fn distance_back(&self, other: &Self) -> isize {
        self.end.distance(&other.end)
    }
}

impl<R: RandomAccessRange> RandomAccessRange for HalfRange<R> {
    fn at(&self, idx: usize) -> R::Ref {
        debug_assert!(idx < self.size(), "index {idx} out of a view of {}", self.size());
        self.beg.at(idx)
    }

    fn slice(&self, start: usize, end: usize) -> Self {
        debug_assert!(
            start <= end && end <= self.size(),
            "slice [{start}, {end}) out of a view of {}",
            self.size()
        );
        let mut beg = self.beg.clone();
        beg.next_n(start);
        let mut stop = self.beg.clone();
        stop.next_n(end);
        Self::new(beg, stop)
    }
}

impl<R: ForwardRange> SizedRange for HalfRange<R> {
    fn size(&self) -> usize {
        self.beg.distance(&self.end).max(0) as usize
    }
}

impl<T, R: ForwardRange + OutputRange<T>> OutputRange<T> for HalfRange<R> {
    fn put(&mut self, value: T) -> bool {
        if self.is_empty() {
            return false;
        }
        self.beg.put(value)
    }
}
