use crate::{
    buffer::IntoRange,
    category::Category,
    range::{ForwardRange, InputRange, SizedRange},
};

/// An element paired with its position from the start of an [`Enumerate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enumerated<V> {
    pub index: usize,
    pub value: V,
}

/// Pairs every element of the wrapped range with a running index
#[derive(Debug, Clone)]
pub struct Enumerate<R> {
    inner: R,
    index: usize,
}

impl<R: InputRange> Enumerate<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, index: 0 }
    }

    /// index the current front element will be reported with
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: InputRange> InputRange for Enumerate<R> {
    const CATEGORY: Category = R::CATEGORY.common(Category::Forward);

    type Value = Enumerated<R::Value>;
    type Ref = Enumerated<R::Ref>;

    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    fn front(&self) -> Self::Ref {
        Enumerated {
            index: self.index,
            value: self.inner.front(),
        }
    }

    fn pop_front(&mut self) -> bool {
        if !self.inner.pop_front() {
            return false;
        }
        self.index += 1;
        true
    }

    fn pop_front_n(&mut self, n: usize) -> usize {
        let popped = self.inner.pop_front_n(n);
        self.index += popped;
        popped
    }
}

impl<R: ForwardRange> ForwardRange for Enumerate<R> {
    fn equals_front(&self, other: &Self) -> bool {
        self.inner.equals_front(&other.inner)
    }

    fn distance_front(&self, other: &Self) -> isize {
        self.inner.distance_front(&other.inner)
    }

    fn push_front(&mut self) -> bool {
        if self.index == 0 || !self.inner.push_front() {
            return false;
        }
        self.index -= 1;
        true
    }
}

impl<R: SizedRange> SizedRange for Enumerate<R> {
    fn size(&self) -> usize {
        self.inner.size()
    }
}

pub fn enumerate<C: IntoRange>(collection: C) -> Enumerate<C::Range> {
    Enumerate::new(collection.into_range())
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use crate::{
        buffer::iter,
        enumerate::{Enumerated, enumerate},
        number::range,
        range::{ForwardRange, InputRange, SizedRange},
    };

    #[test]
    fn indices_follow_single_pops() {
        let v = ['a', 'b', 'c'];
        let pairs: Vec<(usize, char)> = enumerate(&v)
            .elements()
            .map(|e| (e.index, *e.value))
            .collect();

        assert_eq!(pairs, vec![(0, 'a'), (1, 'b'), (2, 'c')]);
    }

    #[test]
    fn indices_follow_bulk_pops() {
        let mut e = enumerate(range(10));

        assert_eq!(e.pop_front_n(4), 4);
        assert_eq!(e.front(), Enumerated { index: 4, value: 4 });
        assert_eq!(e.pop_front_n(100), 6);
        assert_eq!(e.index(), 10);
        assert!(e.is_empty());
    }

    #[test]
    fn stepping_back_rewinds_the_index() {
        let v = [5, 6, 7];
        let mut e = enumerate(iter(&v));

        assert!(!e.push_front());
        e.pop_front_n(2);
        assert!(e.push_front());
        assert_eq!(e.front(), Enumerated { index: 1, value: &6 });
        assert_eq!(e.size(), 2);
    }
}
