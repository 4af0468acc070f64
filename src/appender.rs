use std::collections::VecDeque;

use crate::range::OutputRange;

/// A growable container an [`Appender`] can manage
pub trait Container {
    type Item;

    fn len(&self) -> usize;

    fn capacity(&self) -> usize;

    fn reserve(&mut self, additional: usize);

    fn clear(&mut self);

    /// grow with default values or truncate to `len`
    fn resize(&mut self, len: usize)
    where
        Self::Item: Default;
}

impl<T> Container for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn capacity(&self) -> usize {
        Vec::capacity(self)
    }

    fn reserve(&mut self, additional: usize) {
        Vec::reserve(self, additional);
    }

    fn clear(&mut self) {
        Vec::clear(self);
    }

    fn resize(&mut self, len: usize)
    where
        Self::Item: Default,
    {
        self.resize_with(len, Default::default);
    }
}

impl<T> Container for VecDeque<T> {
    type Item = T;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn capacity(&self) -> usize {
        VecDeque::capacity(self)
    }

    fn reserve(&mut self, additional: usize) {
        VecDeque::reserve(self, additional);
    }

    fn clear(&mut self) {
        VecDeque::clear(self);
    }

    fn resize(&mut self, len: usize)
    where
        Self::Item: Default,
    {
        self.resize_with(len, Default::default);
    }
}

/// An output range that appends everything it is given to a container
///
/// `put` never rejects a value.
#[derive(Debug, Clone, Default)]
pub struct Appender<C> {
    container: C,
}

impl<C> Appender<C> {
    pub fn new(container: C) -> Self {
        Self { container }
    }

    pub fn get(&self) -> &C {
        &self.container
    }

    pub fn get_mut(&mut self) -> &mut C {
        &mut self.container
    }

    pub fn into_inner(self) -> C {
        self.container
    }
}

impl<C: Container> Appender<C> {
    pub fn size(&self) -> usize {
        self.container.len()
    }

    pub fn capacity(&self) -> usize {
        self.container.capacity()
    }

    pub fn reserve(&mut self, additional: usize) {
        self.container.reserve(additional);
    }

    pub fn resize(&mut self, len: usize)
    where
        C::Item: Default,
    {
        self.container.resize(len);
    }

    pub fn clear(&mut self) {
        self.container.clear();
    }
}

impl<C> From<C> for Appender<C> {
    fn from(container: C) -> Self {
        Self::new(container)
    }
}

impl<T, C: Extend<T>> OutputRange<T> for Appender<C> {
    fn put(&mut self, value: T) -> bool {
        self.container.extend(std::iter::once(value));
        true
    }

    fn put_n(&mut self, values: &[T]) -> usize
    where
        T: Clone,
    {
        self.container.extend(values.iter().cloned());
        values.len()
    }
}

pub fn appender<C>(container: C) -> Appender<C> {
    Appender::new(container)
}
