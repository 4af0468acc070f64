use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("Cannot split a range into chunks of size zero")]
    ZeroChunkSize,

    #[error("Cannot slice [{start}, {end}) out of a range of size {size}")]
    SliceOutOfBounds {
        start: usize,
        end: usize,
        size: usize,
    },

    #[error("Cannot create a span of negative length {distance}")]
    NegativeSpan { distance: isize },
}
