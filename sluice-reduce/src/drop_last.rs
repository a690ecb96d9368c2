// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Drop-last decorator that withholds the trailing items of a stream.

use sluice_core::{Reducer, Result, Step, Transducer};
use std::collections::VecDeque;

/// Delegates every item except the final `count` ones.
///
/// Items are held in a FIFO of at most `count + 1` entries; whenever it grows past
/// `count`, the oldest item is delegated. The last `count` items are still held
/// when the source ends and are discarded: `complete` does not flush them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropLast {
    count: usize,
}

impl DropLast {
    /// Holds back the final `count` items.
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self { count }
    }
}

impl<In> Transducer<In> for DropLast {
    type Out = In;
    type Wrapped<R: Reducer<In>> = DropLastReducer<R, In>;

    fn apply<R: Reducer<In>>(&self, inner: R) -> DropLastReducer<R, In> {
        DropLastReducer {
            inner,
            count: self.count,
            pending: VecDeque::with_capacity(self.count.saturating_add(1)),
        }
    }
}

/// The stateful reducer built by [`DropLast`].
#[derive(Debug)]
pub struct DropLastReducer<R, In> {
    inner: R,
    count: usize,
    pending: VecDeque<In>,
}

impl<R, In> DropLastReducer<R, In> {
    /// Number of items currently withheld.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

impl<In, R: Reducer<In>> Reducer<In> for DropLastReducer<R, In> {
    type Acc = R::Acc;
    type Output = R::Output;

    fn init(&mut self) -> R::Acc {
        self.inner.init()
    }

    fn step(&mut self, acc: R::Acc, item: In) -> Result<Step<R::Acc>> {
        self.pending.push_back(item);
        if self.pending.len() <= self.count {
            return Ok(Step::Continue(acc));
        }
        match self.pending.pop_front() {
            Some(oldest) => self.inner.step(acc, oldest),
            None => Ok(Step::Continue(acc)),
        }
    }

    fn complete(&mut self, acc: R::Acc) -> Result<R::Output> {
        if !self.pending.is_empty() {
            trace!(dropped = self.pending.len(), "drop_last discarding trailing items");
            self.pending.clear();
        }
        self.inner.complete(acc)
    }
}
