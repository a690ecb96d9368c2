// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use sluice_core::{IntoSource, IterSource, Result, Source};
use std::cell::Cell;
use std::rc::Rc;

/// Shared view of how many items a [`CountingSource`] handed out.
///
/// The counter stays readable after the source itself moved into a pipeline.
#[derive(Debug, Clone, Default)]
pub struct PullCounter(Rc<Cell<usize>>);

impl PullCounter {
    /// Number of successful `advance` calls so far.
    #[must_use]
    pub fn get(&self) -> usize {
        self.0.get()
    }

    fn bump(&self) {
        self.0.set(self.0.get() + 1);
    }
}

/// A source wrapper that counts the items pulled through it.
pub struct CountingSource<S> {
    inner: S,
    counter: PullCounter,
    probes: usize,
}

impl<S: Source> CountingSource<S> {
    /// Wraps `inner`, returning the source and a handle on its counter.
    pub fn new(inner: S) -> (Self, PullCounter) {
        let counter = PullCounter::default();
        let source = Self {
            inner,
            counter: counter.clone(),
            probes: 0,
        };
        (source, counter)
    }

    /// Number of `has_more` calls, useful to check nothing peeks needlessly.
    #[must_use]
    pub const fn probes(&self) -> usize {
        self.probes
    }
}

impl<S: Source> Source for CountingSource<S> {
    type Item = S::Item;

    fn has_more(&mut self) -> Result<bool> {
        self.probes += 1;
        self.inner.has_more()
    }

    fn advance(&mut self) -> Result<Self::Item> {
        let item = self.inner.advance()?;
        self.counter.bump();
        Ok(item)
    }
}

/// Builds a counting source over anything iterable, including infinite ranges.
pub fn counting<I>(items: I) -> (CountingSource<IterSource<I::IntoIter>>, PullCounter)
where
    I: IntoIterator,
{
    CountingSource::new(items.into_source())
}
