use std::fmt::Debug;

use crate::{
    category::Category,
    range::{ForwardRange, InputRange},
};

/// Numeric types a [`NumberRange`] can count with
pub trait Step: Copy + PartialOrd + Debug {
    const ZERO: Self;
    const ONE: Self;

    /// `self + step`, saturating at the edges of the type for integers
    fn advance(self, step: Self) -> Self;
}

macro_rules! impl_int_step {
    ($($t:ty),* $(,)?) => {
        $(
            impl Step for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                fn advance(self, step: Self) -> Self {
                    self.saturating_add(step)
                }
            }
        )*
    };
}

macro_rules! impl_float_step {
    ($($t:ty),* $(,)?) => {
        $(
            impl Step for $t {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;

                fn advance(self, step: Self) -> Self {
                    self + step
                }
            }
        )*
    };
}

impl_int_step!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float_step!(f32, f64);

/// Generates `start, start + step, ...` while short of `bound`
///
/// A positive step counts up to `bound`, a negative one counts down to it and a zero step
/// produces nothing.
#[derive(Debug, Clone, Copy)]
pub struct NumberRange<T> {
    current: T,
    bound: T,
    step: T,
}

impl<T: Step> NumberRange<T> {
    pub fn new(start: T, bound: T) -> Self {
        Self::with_step(start, bound, T::ONE)
    }

    pub fn with_step(start: T, bound: T, step: T) -> Self {
        Self {
            current: start,
            bound,
            step,
        }
    }

    /// `0, 1, ...` up to `bound`
    pub fn up_to(bound: T) -> Self {
        Self::new(T::ZERO, bound)
    }

    pub fn current(&self) -> T {
        self.current
    }

    pub fn bound(&self) -> T {
        self.bound
    }

    pub fn step(&self) -> T {
        self.step
    }
}

impl<T: Step> InputRange for NumberRange<T> {
    const CATEGORY: Category = Category::Forward;

    type Value = T;
    type Ref = T;

    fn is_empty(&self) -> bool {
        if self.step > T::ZERO {
            !(self.current < self.bound)
        } else if self.step < T::ZERO {
            !(self.current > self.bound)
        } else {
            true
        }
    }

    fn front(&self) -> T {
        assert!(!self.is_empty(), "front of an empty NumberRange");
        self.current
    }

    fn pop_front(&mut self) -> bool {
        if self.is_empty() {
            return false;
        }
        self.current = self.current.advance(self.step);
        true
    }
}

impl<T: Step> ForwardRange for NumberRange<T> {
    fn equals_front(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

/// `0, 1, ...` up to `bound`
pub fn range<T: Step>(bound: T) -> NumberRange<T> {
    NumberRange::up_to(bound)
}

/// `start, start + 1, ...` up to `bound`
pub fn range_between<T: Step>(start: T, bound: T) -> NumberRange<T> {
    NumberRange::new(start, bound)
}

pub fn range_step<T: Step>(start: T, bound: T, step: T) -> NumberRange<T> {
    NumberRange::with_step(start, bound, step)
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use crate::{
        number::{NumberRange, range, range_between, range_step},
        range::{ForwardRange, InputRange},
    };

    #[test]
    fn counts_up_to_the_bound() {
        let mut r = range_between(0, 5);

        for i in 0..5 {
            assert!(!r.is_empty());
            assert_eq!(r.front(), i);
            assert!(r.pop_front());
        }
        assert!(r.is_empty());
        assert!(!r.pop_front());
        assert_eq!(r.current(), 5);
    }

    #[test]
    fn negative_step_counts_down() {
        let r = range_step(10, 0, -3);
        assert_eq!(r.elements().collect::<Vec<_>>(), vec![10, 7, 4, 1]);
    }

    #[test]
    fn zero_step_and_backwards_bounds_are_empty() {
        assert!(range_step(0, 10, 0).is_empty());
        assert!(range_between(5, 2).is_empty());
        assert!(range(0u64).is_empty());
    }

    #[test]
    fn stepping_past_the_bound_never_overflows() {
        let r = range_step(0u8, 255, 10);
        let values: Vec<u8> = r.elements().collect();

        assert_eq!(values.len(), 26);
        assert_eq!(values.last(), Some(&250));
    }

    #[test]
    fn floats_step_by_fractions() {
        let r = NumberRange::with_step(0.0, 1.0, 0.25);
        assert_eq!(r.elements().collect::<Vec<f64>>(), vec![0.0, 0.25, 0.5, 0.75]);
    }

    #[test]
    fn forward_positions_are_counted() {
        let a = range(20);
        let mut b = a;
        b.pop_front_n(6);

        assert!(!a.equals_front(&b));
        assert_eq!(a.distance_front(&b), 6);
        assert_eq!(b.distance_front(&a), -6);
        assert!(!b.clone().push_front());
    }
}
