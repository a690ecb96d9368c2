// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::buffer::TeeBuffer;
use core::cell::{Ref, RefCell, RefMut};
use core::fmt;
use core::iter::FusedIterator;
use sluice_core::{Result, SluiceError, Source};
use std::rc::Rc;

/// Splits `source` into `branches` independent cursors.
///
/// Every branch observes every item of `source`, in order, whatever the
/// interleaving of reads across branches. The source is pulled at most once per
/// item.
///
/// # Errors
///
/// Returns `SluiceError::InvalidArgument` if `branches` is 0.
pub fn tee<S>(source: S, branches: usize) -> Result<Vec<Branch<S>>>
where
    S: Source,
    S::Item: Clone,
{
    if branches == 0 {
        return Err(SluiceError::invalid_argument(
            "tee: branch count must be at least 1",
        ));
    }
    debug!(branches, "splitting source");
    let shared = Rc::new(RefCell::new(TeeBuffer::new(source, branches)));
    Ok((0..branches)
        .map(|id| Branch {
            id,
            shared: Rc::clone(&shared),
        })
        .collect())
}

/// One forward-only cursor over a teed source.
///
/// A branch is released when it is deactivated or dropped, so a consumer that
/// stops early (including by `?` or a panic) never pins buffered items.
pub struct Branch<S>
where
    S: Source,
    S::Item: Clone,
{
    id: usize,
    shared: Rc<RefCell<TeeBuffer<S>>>,
}

impl<S> Branch<S>
where
    S: Source,
    S::Item: Clone,
{
    /// Position of this branch in the vector returned by [`tee`].
    #[must_use]
    pub const fn id(&self) -> usize {
        self.id
    }

    /// `true` if [`next_value`](Self::next_value) will yield an item.
    ///
    /// `false` once the branch is inactive, or when it has read everything
    /// buffered and the source is exhausted. May pull-ahead-check the source.
    ///
    /// # Errors
    ///
    /// Propagates a fault raised by the source while looking ahead.
    pub fn has_value(&mut self) -> Result<bool> {
        let id = self.id;
        self.buffer()?.has_value(id)
    }

    /// Returns the item at this branch's cursor and moves past it.
    ///
    /// The item comes from the buffer when another branch already pulled it,
    /// otherwise exactly one item is pulled from the source.
    ///
    /// # Errors
    ///
    /// Returns `SluiceError::ProtocolViolation` when the branch is inactive or
    /// exhausted. A source fault is returned as is and leaves the buffer and
    /// every cursor untouched.
    pub fn next_value(&mut self) -> Result<S::Item> {
        let id = self.id;
        self.buffer()?.next_value(id)
    }

    /// Permanently stops this branch and frees what only it was holding.
    ///
    /// Deactivating twice is harmless. Other branches keep reading.
    pub fn deactivate(&mut self) {
        let id = self.id;
        match self.shared.try_borrow_mut() {
            Ok(mut buffer) => buffer.deactivate(id),
            Err(_) => debug!(branch = id, "tee buffer busy, branch left active"),
        }
    }

    /// `true` until the branch is deactivated or dropped.
    ///
    /// # Errors
    ///
    /// Returns `SluiceError::ProtocolViolation` when called from inside the
    /// source while it is being pulled.
    pub fn is_active(&self) -> Result<bool> {
        Ok(self.peek()?.is_active(self.id))
    }

    /// The retained window `(head, tail)` shared by every branch of this tee.
    ///
    /// # Errors
    ///
    /// Returns `SluiceError::ProtocolViolation` when called from inside the
    /// source while it is being pulled.
    pub fn buffer_window(&self) -> Result<(usize, usize)> {
        Ok(self.peek()?.window())
    }

    /// Number of items currently held in the shared buffer.
    ///
    /// # Errors
    ///
    /// Same as [`buffer_window`](Self::buffer_window).
    pub fn buffered(&self) -> Result<usize> {
        Ok(self.peek()?.buffered())
    }

    /// Number of items pulled from the underlying source, across all branches.
    ///
    /// # Errors
    ///
    /// Same as [`buffer_window`](Self::buffer_window).
    pub fn pulled(&self) -> Result<usize> {
        Ok(self.peek()?.pulled())
    }

    fn buffer(&self) -> Result<RefMut<'_, TeeBuffer<S>>> {
        self.shared.try_borrow_mut().map_err(|_| reentrant())
    }

    fn peek(&self) -> Result<Ref<'_, TeeBuffer<S>>> {
        self.shared.try_borrow().map_err(|_| reentrant())
    }
}

fn reentrant() -> SluiceError {
    SluiceError::protocol_violation("tee buffer accessed re-entrantly from its own source")
}

impl<S> Iterator for Branch<S>
where
    S: Source,
    S::Item: Clone,
{
    type Item = Result<S::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.has_value() {
            Ok(true) => Some(self.next_value()),
            Ok(false) => None,
            Err(error) => Some(Err(error)),
        }
    }
}

impl<S> FusedIterator for Branch<S>
where
    S: Source,
    S::Item: Clone,
{
}

impl<S> Source for Branch<S>
where
    S: Source,
    S::Item: Clone,
{
    type Item = S::Item;

    fn has_more(&mut self) -> Result<bool> {
        self.has_value()
    }

    fn advance(&mut self) -> Result<S::Item> {
        if !self.has_value()? {
            return Err(SluiceError::SourceExhausted);
        }
        self.next_value()
    }
}

impl<S> Drop for Branch<S>
where
    S: Source,
    S::Item: Clone,
{
    fn drop(&mut self) {
        self.deactivate();
    }
}

impl<S> fmt::Debug for Branch<S>
where
    S: Source,
    S::Item: Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("Branch");
        debug.field("id", &self.id);
        if let Ok(buffer) = self.shared.try_borrow() {
            debug
                .field("active", &buffer.is_active(self.id))
                .field("window", &buffer.window());
        }
        debug.finish()
    }
}
