// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{IterSource, TryIterSource};

/// A trait for types that can be turned into a [`Source`](crate::Source).
///
/// Blanket-implemented for everything iterable, so vectors, ranges and iterator
/// chains can feed a pipeline directly.
///
/// ```rust
/// use sluice_core::{IntoSource, Source};
///
/// let mut source = (1..=3).into_source();
/// assert_eq!(source.pull().unwrap(), Some(1));
/// ```
pub trait IntoSource {
    /// The type of items in the source.
    type Item;
    /// The iterator driving the source.
    type IntoIter: Iterator<Item = Self::Item>;

    /// Converts this object into a source.
    fn into_source(self) -> IterSource<Self::IntoIter>;
}

impl<T> IntoSource for T
where
    T: IntoIterator,
{
    type Item = T::Item;
    type IntoIter = T::IntoIter;

    fn into_source(self) -> IterSource<Self::IntoIter> {
        IterSource::new(self)
    }
}

/// Builds a source from anything iterable that yields `Result<T, E>`.
pub fn try_source<C, T, E>(items: C) -> TryIterSource<C::IntoIter, T>
where
    C: IntoIterator<Item = core::result::Result<T, E>>,
{
    TryIterSource::new(items)
}
