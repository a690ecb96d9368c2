// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Sources backed by plain and fallible iterators.

use crate::Source;
use sluice_error::{Result, SluiceError};

/// A [`Source`] over any iterator.
///
/// `has_more` peeks one item ahead and keeps it until `advance` hands it out, so
/// the iterator is never advanced more than once per item.
///
/// # Examples
///
/// ```rust
/// use sluice_core::{IterSource, Source};
///
/// let mut source = IterSource::new(vec![1, 2]);
/// assert_eq!(source.pull().unwrap(), Some(1));
/// assert_eq!(source.pull().unwrap(), Some(2));
/// assert_eq!(source.pull().unwrap(), None);
/// ```
pub struct IterSource<I: Iterator> {
    iter: I,
    peeked: Option<I::Item>,
    done: bool,
}

impl<I: Iterator> IterSource<I> {
    /// Wraps anything iterable.
    pub fn new<T>(items: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            iter: items.into_iter(),
            peeked: None,
            done: false,
        }
    }
}

impl<I: Iterator> Source for IterSource<I> {
    type Item = I::Item;

    fn has_more(&mut self) -> Result<bool> {
        if self.peeked.is_some() {
            return Ok(true);
        }
        if self.done {
            return Ok(false);
        }
        self.peeked = self.iter.next();
        self.done = self.peeked.is_none();
        Ok(!self.done)
    }

    fn advance(&mut self) -> Result<Self::Item> {
        if !self.has_more()? {
            return Err(SluiceError::SourceExhausted);
        }
        self.peeked.take().ok_or(SluiceError::SourceExhausted)
    }
}

/// A [`Source`] over an iterator of `Result`s.
///
/// An `Err` from the iterator surfaces as [`SluiceError::UserError`] from the call
/// that looked ahead. The iterator decides what follows a fault; the source simply
/// keeps pulling from it.
#[derive(Debug)]
pub struct TryIterSource<I, T> {
    iter: I,
    peeked: Option<T>,
    done: bool,
}

impl<I, T, E> TryIterSource<I, T>
where
    I: Iterator<Item = core::result::Result<T, E>>,
{
    /// Wraps anything iterable that yields `Result<T, E>`.
    pub fn new<C>(items: C) -> Self
    where
        C: IntoIterator<IntoIter = I>,
    {
        Self {
            iter: items.into_iter(),
            peeked: None,
            done: false,
        }
    }
}

impl<I, T, E> Source for TryIterSource<I, T>
where
    I: Iterator<Item = core::result::Result<T, E>>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Item = T;

    fn has_more(&mut self) -> Result<bool> {
        if self.peeked.is_some() {
            return Ok(true);
        }
        if self.done {
            return Ok(false);
        }
        match self.iter.next() {
            Some(Ok(item)) => {
                self.peeked = Some(item);
                Ok(true)
            }
            Some(Err(e)) => {
                trace!("fallible source raised a fault while looking ahead");
                Err(SluiceError::user_error(e))
            }
            None => {
                self.done = true;
                Ok(false)
            }
        }
    }

    fn advance(&mut self) -> Result<Self::Item> {
        if !self.has_more()? {
            return Err(SluiceError::SourceExhausted);
        }
        self.peeked.take().ok_or(SluiceError::SourceExhausted)
    }
}
