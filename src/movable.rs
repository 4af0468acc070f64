use std::cell::Cell;

use crate::{
    category::Category,
    range::{
        BidirectionalRange, ForwardRange, InputRange, OutputRange, RandomAccessRange, SizedRange,
    },
};

/// A reference an element can be moved out of
///
/// Extracting leaves a valid placeholder behind in the source slot.
pub trait Extract {
    type Output;

    fn extract(self) -> Self::Output;
}

impl<'a, T: Default> Extract for &'a Cell<T> {
    type Output = T;

    fn extract(self) -> T {
        self.take()
    }
}

/// Moves elements out of the wrapped range instead of borrowing them
///
/// Every read through [`InputRange::front`], [`BidirectionalRange::back`] or
/// [`RandomAccessRange::at`] takes the element, so reading the same slot twice yields the
/// default value the second time.
#[derive(Debug, Clone)]
pub struct MoveRange<R> {
    inner: R,
}

impl<R: ForwardRange> MoveRange<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R> InputRange for MoveRange<R>
where
    R: ForwardRange,
    R::Ref: Extract,
{
    const CATEGORY: Category = R::CATEGORY.capped(Category::FiniteRandomAccess);

    type Value = <R::Ref as Extract>::Output;
    type Ref = <R::Ref as Extract>::Output;

    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    fn front(&self) -> Self::Ref {
        self.inner.front().extract()
    }

    fn pop_front(&mut self) -> bool {
        self.inner.pop_front()
    }

    fn pop_front_n(&mut self, n: usize) -> usize {
        self.inner.pop_front_n(n)
    }
}

impl<R> ForwardRange for MoveRange<R>
where
    R: ForwardRange,
    R::Ref: Extract,
{
    fn equals_front(&self, other: &Self) -> bool {
        self.inner.equals_front(&other.inner)
    }

    fn distance_front(&self, other: &Self) -> isize {
        self.inner.distance_front(&other.inner)
    }

    fn push_front(&mut self) -> bool {
        self.inner.push_front()
    }

    fn push_front_n(&mut self, n: usize) -> usize {
        self.inner.push_front_n(n)
    }
}

impl<R> BidirectionalRange for MoveRange<R>
where
    R: BidirectionalRange,
    R::Ref: Extract,
{
    fn back(&self) -> Self::Ref {
        self.inner.back().extract()
    }

    fn pop_back(&mut self) -> bool {
        self.inner.pop_back()
    }

    fn push_back(&mut self) -> bool {
        self.inner.push_back()
    }

    fn equals_back(&self, other: &Self) -> bool {
        self.inner.equals_back(&other.inner)
    }

    fn distance_back(&self, other: &Self) -> isize {
        self.inner.distance_back(&other.inner)
    }

    fn pop_back_n(&mut self, n: usize) -> usize {
        self.inner.pop_back_n(n)
    }

    fn push_back_n(&mut self, n: usize) -> usize {
        self.inner.push_back_n(n)
    }
}

impl<R> RandomAccessRange for MoveRange<R>
where
    R: RandomAccessRange,
    R::Ref: Extract,
{
    fn at(&self, idx: usize) -> Self::Ref {
        self.inner.at(idx).extract()
    }

    fn slice(&self, start: usize, end: usize) -> Self {
        Self::new(self.inner.slice(start, end))
    }
}

impl<R> SizedRange for MoveRange<R>
where
    R: ForwardRange + SizedRange,
    R::Ref: Extract,
{
    fn size(&self) -> usize {
        self.inner.size()
    }
}

impl<T, R: OutputRange<T>> OutputRange<T> for MoveRange<R> {
    fn put(&mut self, value: T) -> bool {
        self.inner.put(value)
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use crate::{
        appender::appender,
        buffer::iter_mut,
        range::{BidirectionalRange, InputRange, OutputRange, RandomAccessRange, SizedRange},
    };

    #[test]
    fn reading_moves_out() {
        let mut words = vec![String::from("a"), String::from("b"), String::from("c")];
        let m = iter_mut(&mut words).movable();

        assert_eq!(m.size(), 3);
        assert_eq!(m.front(), "a");
        assert_eq!(m.front(), "");
        assert_eq!(m.back(), "c");
        assert_eq!(m.at(1), "b");
        assert_eq!(words, vec!["", "", ""]);
    }

    #[test]
    fn drains_into_a_sink() {
        let mut words = vec![String::from("x"), String::from("y")];
        let mut m = iter_mut(&mut words).movable();
        let mut out = appender(Vec::<String>::new());

        assert_eq!(m.copy_into(&mut out, usize::MAX), 2);
        assert!(m.is_empty());
        assert_eq!(out.into_inner(), vec!["x", "y"]);
        assert!(words.iter().all(String::is_empty));
    }

    #[test]
    fn slices_and_pops_from_the_back() {
        let mut nums = vec![1, 2, 3, 4];
        let mut m = iter_mut(&mut nums).movable().slice(1, 4);

        assert!(m.pop_back());
        assert_eq!(m.elements().collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(nums, vec![1, 0, 0, 4]);
    }

    #[test]
    fn put_writes_through() {
        let mut nums = vec![0; 2];
        let mut m = iter_mut(&mut nums).movable();

        assert!(m.put(5));
        assert!(m.put(6));
        assert!(!m.put(7));
        assert_eq!(nums, vec![5, 6]);
    }
}
