use crate::{
    buffer::IntoRange,
    category::Category,
    error::RangeError,
    range::{ForwardRange, InputRange, SizedRange},
    take::Take,
};

/// Splits a range into consecutive runs of `size` elements
///
/// Each element is a [`Take`] over the wrapped range, built on demand when the front is read.
/// The last chunk is shorter when the length does not divide evenly.
#[derive(Debug, Clone)]
pub struct Chunks<R> {
    inner: R,
    size: usize,
}

impl<R: ForwardRange> Chunks<R> {
    /// # Panics
    /// if `size` is zero, see [`Chunks::try_new`] for the checked form
    pub fn new(inner: R, size: usize) -> Self {
        assert!(size > 0, "chunk size must be non-zero");
        Self { inner, size }
    }

    pub fn try_new(inner: R, size: usize) -> Result<Self, RangeError> {
        if size == 0 {
            tracing::debug!("rejected a zero chunk size");
            return Err(RangeError::ZeroChunkSize);
        }
        Ok(Self { inner, size })
    }

    pub fn chunk_size(&self) -> usize {
        self.size
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: ForwardRange> InputRange for Chunks<R> {
    const CATEGORY: Category = R::CATEGORY.common(Category::Forward);

    type Value = Take<R>;
    type Ref = Take<R>;

    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    fn front(&self) -> Take<R> {
        assert!(!self.is_empty(), "front of an empty Chunks");
        Take::new(self.inner.clone(), self.size)
    }

    fn pop_front(&mut self) -> bool {
        self.inner.pop_front_n(self.size) > 0
    }

    /// skips up to `n` chunks, a trailing partial chunk counts as one
    fn pop_front_n(&mut self, n: usize) -> usize {
        let popped = self.inner.pop_front_n(n.saturating_mul(self.size));
        popped.div_ceil(self.size)
    }
}

impl<R: ForwardRange> ForwardRange for Chunks<R> {
    fn equals_front(&self, other: &Self) -> bool {
        self.inner.equals_front(&other.inner)
    }
}

impl<R: ForwardRange + SizedRange> SizedRange for Chunks<R> {
    fn size(&self) -> usize {
        self.inner.size().div_ceil(self.size)
    }
}

/// # Panics
/// if `size` is zero, see [`try_chunks`]
pub fn chunks<C>(collection: C, size: usize) -> Chunks<C::Range>
where
    C: IntoRange,
    C::Range: ForwardRange,
{
    tracing::trace!(size, "chunking");
    Chunks::new(collection.into_range(), size)
}

pub fn try_chunks<C>(collection: C, size: usize) -> Result<Chunks<C::Range>, RangeError>
where
    C: IntoRange,
    C::Range: ForwardRange,
{
    Chunks::try_new(collection.into_range(), size)
}
