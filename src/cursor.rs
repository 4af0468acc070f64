use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::{
    category::Category,
    error::RangeError,
    range::{ContiguousRange, ForwardRange, OutputRange, RandomAccessRange},
    span::HalfRange,
};

/// Cheaply clonable position in a range's stream
///
/// A cursor is a range reinterpreted as a point: stepping forward pops its front, stepping back
/// pushes its front. Two cursors over the same stream compare equal when they sit at the same
/// position and can be subtracted to get the signed distance between them.
///
/// Cursors over ranges that cannot step backwards still accept backward steps, they just never
/// move and report zero steps taken.
#[derive(Clone)]
pub struct RangeHalf<R> {
    range: R,
}

impl<R: std::fmt::Debug> std::fmt::Debug for RangeHalf<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RangeHalf")
            .field("range", &self.range)
            .finish()
    }
}

impl<R: ForwardRange> PartialEq for RangeHalf<R> {
    fn eq(&self, other: &Self) -> bool {
        self.range.equals_front(&other.range)
    }
}

impl<R: ForwardRange> RangeHalf<R> {
    pub fn new(range: R) -> Self {
        Self { range }
    }

    /// get the range this cursor was built from, positioned at the cursor
    pub fn range(&self) -> &R {
        &self.range
    }

    pub fn into_range(self) -> R {
        self.range
    }

    /// step one position forward, returns false if already at the end
    pub fn next(&mut self) -> bool {
        self.range.pop_front()
    }

    /// step one position back, returns false at the start or if the range cannot step back
    pub fn prev(&mut self) -> bool {
        self.range.push_front()
    }

    /// Step forward up to `n` positions, returning the number of steps taken
    pub fn next_n(&mut self, n: usize) -> usize {
        self.range.pop_front_n(n)
    }

    /// Step back up to `n` positions, returning the number of steps taken
    pub fn prev_n(&mut self, n: usize) -> usize {
        self.range.push_front_n(n)
    }

    /// Step by `n` positions, backwards when `n` is negative
    ///
    /// Returns the signed displacement actually achieved. Backward steps on a range below
    /// [`Category::Bidirectional`] are a no-op returning zero.
    pub fn add_n(&mut self, n: isize) -> isize {
        if n < 0 {
            if !R::CATEGORY.refines(Category::Bidirectional) {
                return 0;
            }
            -(self.prev_n(n.unsigned_abs()) as isize)
        } else {
            self.next_n(n as usize) as isize
        }
    }

    /// Step back by `n` positions, forwards when `n` is negative
    ///
    /// Returns the signed number of backward steps achieved. On a range that cannot step back
    /// this is always a no-op returning zero.
    pub fn sub_n(&mut self, n: isize) -> isize {
        if !R::CATEGORY.refines(Category::Bidirectional) {
            return 0;
        }
        if n < 0 {
            -(self.next_n(n.unsigned_abs()) as isize)
        } else {
            self.prev_n(n as usize) as isize
        }
    }

    /// get the element at this position
    pub fn get(&self) -> R::Ref {
        self.range.front()
    }

    /// Signed number of forward steps from `self` to `other`
    ///
    /// Both cursors must come from the same stream.
    pub fn distance(&self, other: &Self) -> isize {
        self.range.distance_front(&other.range)
    }

    /// Create a [`HalfRange`] running from `self` to `other`
    ///
    /// Returns an error if `other` occurs before `self`
    pub fn span_to(&self, other: &Self) -> Result<HalfRange<R>, RangeError> {
        let distance = self.distance(other);
        if distance < 0 {
            tracing::debug!(distance, "rejected a span ending before its start");
            return Err(RangeError::NegativeSpan { distance });
        }
        Ok(HalfRange::new(self.clone(), other.clone()))
    }

    /// put `value` into the range at this position, advancing past it
    pub fn put<T>(&mut self, value: T) -> bool
    where
        R: OutputRange<T>,
    {
        self.range.put(value)
    }
}

impl<R: RandomAccessRange> RangeHalf<R> {
    /// get the element `idx` positions ahead of this one
    pub fn at(&self, idx: usize) -> R::Ref {
        self.range.at(idx)
    }
}

impl<R: ContiguousRange> RangeHalf<R> {
    /// the memory from this position to the end of the underlying range
    pub fn data(&self) -> &[R::Value] {
        self.range.data()
    }
}

impl<R: ForwardRange> Add<isize> for RangeHalf<R> {
    type Output = Self;

    fn add(mut self, n: isize) -> Self {
        self.add_n(n);
        self
    }
}

impl<R: ForwardRange> Sub<isize> for RangeHalf<R> {
    type Output = Self;

    fn sub(mut self, n: isize) -> Self {
        self.sub_n(n);
        self
    }
}

impl<R: ForwardRange> AddAssign<isize> for RangeHalf<R> {
    fn add_assign(&mut self, n: isize) {
        self.add_n(n);
    }
}

impl<R: ForwardRange> SubAssign<isize> for RangeHalf<R> {
    fn sub_assign(&mut self, n: isize) {
        self.sub_n(n);
    }
}

/// `a - b` is the number of forward steps it takes to get from `b` to `a`
impl<'a, R: ForwardRange> Sub<&'a RangeHalf<R>> for &'a RangeHalf<R> {
    type Output = isize;

    fn sub(self, rhs: &'a RangeHalf<R>) -> isize {
        rhs.distance(self)
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use crate::{
        buffer::iter,
        error::RangeError,
        enumerate::enumerate,
        number::range,
        range::{InputRange, SizedRange},
        take::take,
    };

    #[test]
    fn steps_and_clips() {
        let v = [1, 2, 3, 4, 5];
        let mut c = iter(&v).half();

        assert!(c.next());
        assert_eq!(c.get(), &2);
        assert!(c.prev());
        assert!(!c.prev());
        assert_eq!(c.next_n(10), 5);
        assert!(!c.next());
        assert_eq!(c.prev_n(2), 2);
        assert_eq!(c.get(), &4);
    }

    #[test]
    fn add_and_sub_dispatch_by_sign() {
        let v = [1, 2, 3, 4, 5];
        let mut c = iter(&v).half();

        assert_eq!(c.add_n(3), 3);
        assert_eq!(c.add_n(-2), -2);
        assert_eq!(c.get(), &2);
        assert_eq!(c.sub_n(5), 1);
        assert_eq!(c.sub_n(-4), -4);
        assert_eq!(c.get(), &5);
    }

    #[test]
    fn forward_only_cursor_never_steps_back() {
        let mut c = range(10).half();

        assert_eq!(c.add_n(4), 4);
        assert_eq!(c.add_n(-2), 0);
        assert_eq!(c.sub_n(2), 0);
        assert_eq!(c.sub_n(-2), 0);
        assert!(!c.prev());
        assert_eq!(c.get(), 4);
    }

    #[test]
    fn forward_tier_adaptors_do_not_step_back() {
        let v = [1, 2, 3, 4, 5];
        let mut c = take(iter(&v), 5).half();

        assert_eq!(c.add_n(3), 3);
        assert_eq!(c.add_n(-2), 0);
        assert_eq!(c.sub_n(1), 0);
        assert_eq!(c.get(), &4);

        let mut e = enumerate(iter(&v[..3])).half();
        assert_eq!(e.add_n(2), 2);
        assert_eq!(e.add_n(-1), 0);
        assert_eq!(e.get().index, 2);
    }

    #[test]
    fn distance_is_antisymmetric() {
        let v = [0u8; 8];
        let a = iter(&v).half();
        let b = a.clone() + 5;

        assert_eq!(a.distance(&b), 5);
        assert_eq!(b.distance(&a), -5);
        assert_eq!(&b - &a, 5);
        assert_eq!(&a - &b, -5);
    }

    #[test]
    fn counted_distance_on_forward_only_ranges() {
        let a = range(100).half();
        let mut b = a.clone();
        b += 7;

        assert_eq!(a.distance(&b), 7);
        assert_eq!(b.distance(&a), -7);
        assert!(a != b);
        b -= 3;
        assert_eq!(b.get(), 7);
    }

    #[test]
    fn span_to_rejects_negative_length() {
        let v = [1, 2, 3];
        let a = iter(&v).half();
        let b = a.clone() + 2;

        assert_eq!(a.span_to(&b).unwrap().size(), 2);
        assert!(matches!(
            b.span_to(&a),
            Err(RangeError::NegativeSpan { distance: -2 })
        ));
        assert!(a.span_to(&a).unwrap().is_empty());
    }

    #[test]
    fn random_access_and_data() {
        let v = [1, 2, 3, 4];
        let c = iter(&v).half() + 1;

        assert_eq!(c.at(2), &4);
        assert_eq!(c.data(), &[2, 3, 4]);
    }
}
