//! Capability graded ranges and the adaptors built on top of them
//!
//! A range is a value that can report whether it is empty, read its front element and pop it.
//! Every other operation, and every adaptor in this crate, is written against that contract and
//! its refinements (see [`Category`]).

pub mod appender;
pub mod buffer;
pub mod category;
pub mod chunks;
pub mod cursor;
pub mod enumerate;
pub mod error;
pub mod movable;
pub mod number;
pub mod range;
pub mod reverse;
pub mod span;
pub mod take;

pub use crate::{
    appender::{Appender, Container, appender},
    buffer::{BufferRange, IntoRange, iter, iter_mut},
    category::{
        Category, RangeDifference, RangeReference, RangeSize, RangeValue, category_of,
        is_bidirectional_range, is_contiguous_range, is_finite_random_access_range,
        is_forward_range, is_infinite_random_access_range, is_input_range, is_output_range,
        is_random_access_range,
    },
    chunks::{Chunks, chunks, try_chunks},
    cursor::RangeHalf,
    enumerate::{Enumerate, Enumerated, enumerate},
    error::RangeError,
    movable::{Extract, MoveRange},
    number::{NumberRange, Step, range, range_between, range_step},
    range::{
        BidirectionalRange, ContiguousRange, FiniteRandomAccessRange, ForwardRange, InputRange,
        OutputRange, RandomAccessRange, RangeIter, SizedRange, copy,
    },
    reverse::Reverse,
    span::HalfRange,
    take::{Take, take},
};
