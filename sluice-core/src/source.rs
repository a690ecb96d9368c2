// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use sluice_error::Result;

/// A single-pass, forward-only cursor over a sequence of items.
///
/// Collections, generators and blocking producers all adapt to this trait. Items
/// can only be pulled forward once; nothing in the engine ever rewinds a source.
///
/// # Contract
///
/// - `has_more` reports whether `advance` will yield an item. It may block on a
///   lazy producer and it may fail.
/// - `advance` moves past the next item and hands it over by value. Calling it
///   when `has_more` is `false` returns [`SluiceError::SourceExhausted`].
///
/// [`SluiceError::SourceExhausted`]: sluice_error::SluiceError::SourceExhausted
pub trait Source {
    /// The type of items produced by this source.
    type Item;

    /// Returns `true` if another item can be pulled.
    ///
    /// # Errors
    ///
    /// Returns the producer's fault if looking ahead fails.
    fn has_more(&mut self) -> Result<bool>;

    /// Moves the cursor past the next item and returns it.
    ///
    /// # Errors
    ///
    /// Returns `SluiceError::SourceExhausted` when no item is left, or the
    /// producer's fault.
    fn advance(&mut self) -> Result<Self::Item>;

    /// Pulls the next item, or `None` once the source is exhausted.
    ///
    /// # Errors
    ///
    /// Propagates any fault from [`has_more`](Source::has_more) or
    /// [`advance`](Source::advance).
    fn pull(&mut self) -> Result<Option<Self::Item>> {
        if self.has_more()? {
            self.advance().map(Some)
        } else {
            Ok(None)
        }
    }
}

impl<S: Source + ?Sized> Source for &mut S {
    type Item = S::Item;

    fn has_more(&mut self) -> Result<bool> {
        (**self).has_more()
    }

    fn advance(&mut self) -> Result<Self::Item> {
        (**self).advance()
    }
}

impl<S: Source + ?Sized> Source for Box<S> {
    type Item = S::Item;

    fn has_more(&mut self) -> Result<bool> {
        (**self).has_more()
    }

    fn advance(&mut self) -> Result<Self::Item> {
        (**self).advance()
    }
}
