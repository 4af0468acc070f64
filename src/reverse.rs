use crate::{
    category::Category,
    range::{
        BidirectionalRange, FiniteRandomAccessRange, ForwardRange, InputRange, RandomAccessRange,
        SizedRange,
    },
};

/// Reads a bidirectional range back to front
///
/// Front and back are swapped, as are popping and pushing. Indexing needs the inner size, so an
/// unbounded random access range only reverses into a bidirectional one.
#[derive(Debug, Clone)]
pub struct Reverse<R> {
    inner: R,
}

const fn reversed(inner: Category) -> Category {
    match inner {
        Category::RandomAccess => Category::Bidirectional,
        other => other.capped(Category::FiniteRandomAccess),
    }
}

impl<R: BidirectionalRange> Reverse<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: BidirectionalRange> InputRange for Reverse<R> {
    const CATEGORY: Category = reversed(R::CATEGORY);

    type Value = R::Value;
    type Ref = R::Ref;

    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    fn front(&self) -> R::Ref {
        self.inner.back()
    }

    fn pop_front(&mut self) -> bool {
        self.inner.pop_back()
    }

    fn pop_front_n(&mut self, n: usize) -> usize {
        self.inner.pop_back_n(n)
    }
}

impl<R: BidirectionalRange> ForwardRange for Reverse<R> {
    fn equals_front(&self, other: &Self) -> bool {
        self.inner.equals_back(&other.inner)
    }

    fn distance_front(&self, other: &Self) -> isize {
        -self.inner.distance_back(&other.inner)
    }

    fn push_front(&mut self) -> bool {
        self.inner.push_back()
    }

    fn push_front_n(&mut self, n: usize) -> usize {
        self.inner.push_back_n(n)
    }
}

impl<R: BidirectionalRange> BidirectionalRange for Reverse<R> {
    fn back(&self) -> R::Ref {
        self.inner.front()
    }

    fn pop_back(&mut self) -> bool {
        self.inner.pop_front()
    }

    fn push_back(&mut self) -> bool {
        self.inner.push_front()
    }

    fn equals_back(&self, other: &Self) -> bool {
        self.inner.equals_front(&other.inner)
    }

    fn distance_back(&self, other: &Self) -> isize {
        -self.inner.distance_front(&other.inner)
    }

    fn pop_back_n(&mut self, n: usize) -> usize {
        self.inner.pop_front_n(n)
    }

    fn push_back_n(&mut self, n: usize) -> usize {
        self.inner.push_front_n(n)
    }
}

impl<R: FiniteRandomAccessRange> RandomAccessRange for Reverse<R> {
    fn at(&self, idx: usize) -> R::Ref {
        let size = self.inner.size();
        debug_assert!(idx < size, "index {idx} out of a view of {size}");
        self.inner.at(size - 1 - idx)
    }

    fn slice(&self, start: usize, end: usize) -> Self {
        let size = self.inner.size();
        assert!(
            start <= end && end <= size,
            "slice [{start}, {end}) out of a view of {size}"
        );
        Self::new(self.inner.slice(size - end, size - start))
    }
}

impl<R: BidirectionalRange + SizedRange> SizedRange for Reverse<R> {
    fn size(&self) -> usize {
        self.inner.size()
    }
}
