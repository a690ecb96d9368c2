// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Take-last decorator that keeps only the tail of a stream.

use sluice_core::{Reducer, Result, Step, Transducer};
use std::collections::VecDeque;

/// Keeps a sliding window of the last `count` items and delegates them, in
/// arrival order, when the run completes.
///
/// Nothing reaches the inner reducer during `step`; the accumulator is handed
/// back untouched. On `complete` the window is flushed into the inner reducer
/// (stopping early if it terminates) before its own `complete` runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TakeLast {
    count: usize,
}

impl TakeLast {
    /// Keeps the final `count` items.
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self { count }
    }
}

impl<In> Transducer<In> for TakeLast {
    type Out = In;
    type Wrapped<R: Reducer<In>> = TakeLastReducer<R, In>;

    fn apply<R: Reducer<In>>(&self, inner: R) -> TakeLastReducer<R, In> {
        TakeLastReducer {
            inner,
            count: self.count,
            window: VecDeque::with_capacity(self.count),
        }
    }
}

/// The stateful reducer built by [`TakeLast`].
#[derive(Debug)]
pub struct TakeLastReducer<R, In> {
    inner: R,
    count: usize,
    window: VecDeque<In>,
}

impl<In, R: Reducer<In>> Reducer<In> for TakeLastReducer<R, In> {
    type Acc = R::Acc;
    type Output = R::Output;

    fn init(&mut self) -> R::Acc {
        self.inner.init()
    }

    fn step(&mut self, acc: R::Acc, item: In) -> Result<Step<R::Acc>> {
        if self.count == 0 {
            return Ok(Step::Continue(acc));
        }
        if self.window.len() == self.count {
            self.window.pop_front();
        }
        self.window.push_back(item);
        Ok(Step::Continue(acc))
    }

    fn complete(&mut self, mut acc: R::Acc) -> Result<R::Output> {
        trace!(flushed = self.window.len(), "take_last flushing window");
        while let Some(item) = self.window.pop_front() {
            match self.inner.step(acc, item)? {
                Step::Continue(next) => acc = next,
                Step::Reduced(last) => {
                    acc = last;
                    self.window.clear();
                }
            }
        }
        self.inner.complete(acc)
    }
}
