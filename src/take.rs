use crate::{
    buffer::IntoRange,
    category::Category,
    range::{ForwardRange, InputRange, SizedRange},
};

/// At most the first `n` elements of the wrapped range
#[derive(Debug, Clone)]
pub struct Take<R> {
    inner: R,
    remaining: usize,
}

impl<R: InputRange> Take<R> {
    pub fn new(inner: R, n: usize) -> Self {
        Self {
            inner,
            remaining: n,
        }
    }

    /// how many more elements this view may still yield, at most
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: InputRange> InputRange for Take<R> {
    const CATEGORY: Category = R::CATEGORY.common(Category::Forward);

    type Value = R::Value;
    type Ref = R::Ref;

    fn is_empty(&self) -> bool {
        self.remaining == 0 || self.inner.is_empty()
    }

    fn front(&self) -> R::Ref {
        assert!(self.remaining > 0, "front of an exhausted Take");
        self.inner.front()
    }

    fn pop_front(&mut self) -> bool {
        if self.remaining == 0 || !self.inner.pop_front() {
            return false;
        }
        self.remaining -= 1;
        true
    }

    fn pop_front_n(&mut self, n: usize) -> usize {
        let popped = self.inner.pop_front_n(n.min(self.remaining));
        self.remaining -= popped;
        popped
    }
}

impl<R: ForwardRange> ForwardRange for Take<R> {
    fn equals_front(&self, other: &Self) -> bool {
        self.inner.equals_front(&other.inner)
    }

    fn distance_front(&self, other: &Self) -> isize {
        self.inner.distance_front(&other.inner)
    }

    fn push_front(&mut self) -> bool {
        if !self.inner.push_front() {
            return false;
        }
        self.remaining += 1;
        true
    }
}

impl<R: SizedRange> SizedRange for Take<R> {
    fn size(&self) -> usize {
        self.remaining.min(self.inner.size())
    }
}

pub fn take<C: IntoRange>(collection: C, n: usize) -> Take<C::Range> {
    Take::new(collection.into_range(), n)
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use crate::{
        buffer::iter,
        number::range,
        range::{ForwardRange, InputRange, RandomAccessRange, SizedRange},
        take::take,
    };

    #[test]
    fn stops_after_n() {
        let t = take(range(100), 3);
        assert_eq!(t.elements().collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn size_is_clipped_by_both_sides() {
        let v = [1, 2, 3, 4];

        assert_eq!(take(&v, 2).size(), 2);
        assert_eq!(take(&v, 10).size(), 4);
        assert_eq!(take(&v, 0).size(), 0);
        assert!(take(&v, 0).is_empty());
    }

    #[test]
    fn bulk_pop_respects_remaining() {
        let v = [1, 2, 3, 4, 5, 6];
        let mut t = take(iter(&v), 4);

        assert_eq!(t.pop_front_n(3), 3);
        assert_eq!(t.remaining(), 1);
        assert_eq!(t.pop_front_n(3), 1);
        assert!(t.is_empty());
        assert!(!t.pop_front());
        assert_eq!(t.into_inner().as_slice(), &[5, 6]);
    }

    #[test]
    fn pushing_front_gives_back_budget() {
        let v = [1, 2, 3];
        let mut t = take(iter(&v).slice(1, 3), 1);

        assert!(t.push_front());
        assert_eq!(t.remaining(), 2);
        assert_eq!(t.front(), &1);
        assert!(!take(range(5), 2).push_front());
    }
}
