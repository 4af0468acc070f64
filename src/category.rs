use crate::range::{InputRange, OutputRange};

/// Capability tier of a range
///
/// The first six variants form a chain where each tier refines the one before it:
/// `Input` ⊃ `Forward` ⊃ `Bidirectional` ⊃ `RandomAccess` ⊃ `FiniteRandomAccess` ⊃ `Contiguous`.
/// [`Category::Output`] sits outside the chain and only refines itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Single-pass readable
    Input,
    /// Multi-pass readable, positions can be saved by cloning
    Forward,
    /// Readable and poppable from both ends
    Bidirectional,
    /// Positional access and slicing, possibly unbounded
    RandomAccess,
    /// Random access with a known size
    FiniteRandomAccess,
    /// Finite random access backed by a single block of memory
    Contiguous,
    /// Write-only sink
    Output,
}

impl Category {
    /// position along the refinement chain, `None` for [`Category::Output`]
    const fn rank(self) -> Option<u8> {
        match self {
            Category::Input => Some(0),
            Category::Forward => Some(1),
            Category::Bidirectional => Some(2),
            Category::RandomAccess => Some(3),
            Category::FiniteRandomAccess => Some(4),
            Category::Contiguous => Some(5),
            Category::Output => None,
        }
    }

    const fn from_rank(rank: u8) -> Self {
        match rank {
            0 => Category::Input,
            1 => Category::Forward,
            2 => Category::Bidirectional,
            3 => Category::RandomAccess,
            4 => Category::FiniteRandomAccess,
            _ => Category::Contiguous,
        }
    }

    /// Returns true if a range of this category satisfies every requirement of `base`
    pub const fn refines(self, base: Category) -> bool {
        match (self.rank(), base.rank()) {
            (Some(lhs), Some(rhs)) => lhs >= rhs,
            (None, None) => true,
            _ => false,
        }
    }

    /// The most refined category satisfied by both `self` and `other`
    ///
    /// Adaptors use this to cap the category of the range they wrap. Mixing [`Category::Output`]
    /// with a readable category yields the readable one.
    pub const fn common(self, other: Category) -> Category {
        match (self.rank(), other.rank()) {
            (Some(lhs), Some(rhs)) => {
                if lhs < rhs {
                    self
                } else {
                    other
                }
            }
            (Some(_), None) => self,
            (None, Some(_)) => other,
            (None, None) => Category::Output,
        }
    }

    /// Caps `self` at `ceiling`, leaving less refined categories untouched
    pub const fn capped(self, ceiling: Category) -> Category {
        match (self.rank(), ceiling.rank()) {
            (Some(lhs), Some(rhs)) if lhs > rhs => Category::from_rank(rhs),
            _ => self,
        }
    }
}

/// Element type of a range
pub type RangeValue<R> = <R as InputRange>::Value;

/// Type returned by [`InputRange::front`]
pub type RangeReference<R> = <R as InputRange>::Ref;

/// Unsigned count type used by every bulk operation
pub type RangeSize = usize;

/// Signed distance type used between positions
pub type RangeDifference = isize;

pub const fn category_of<R: InputRange>() -> Category {
    R::CATEGORY
}

pub const fn is_input_range<R: InputRange>() -> bool {
    R::CATEGORY.refines(Category::Input)
}

pub const fn is_forward_range<R: InputRange>() -> bool {
    R::CATEGORY.refines(Category::Forward)
}

pub const fn is_bidirectional_range<R: InputRange>() -> bool {
    R::CATEGORY.refines(Category::Bidirectional)
}

pub const fn is_random_access_range<R: InputRange>() -> bool {
    R::CATEGORY.refines(Category::RandomAccess)
}

pub const fn is_finite_random_access_range<R: InputRange>() -> bool {
    R::CATEGORY.refines(Category::FiniteRandomAccess)
}

/// random access without a known size, e.g. an unbounded generator
pub const fn is_infinite_random_access_range<R: InputRange>() -> bool {
    is_random_access_range::<R>() && !is_finite_random_access_range::<R>()
}

pub const fn is_contiguous_range<R: InputRange>() -> bool {
    R::CATEGORY.refines(Category::Contiguous)
}

/// Output capability is orthogonal to the readable tiers, `O` may also be a readable range
///
/// The `O: OutputRange<T>` bound is the actual detection: a type that is not an output for `T`
/// fails to satisfy it, so a call that compiles always returns true. Generic code should state
/// the bound instead of branching on this.
pub const fn is_output_range<O: OutputRange<T>, T>() -> bool {
    O::CATEGORY.refines(Category::Output)
}
