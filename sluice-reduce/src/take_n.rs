// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Take-n decorator that limits a run to its first n items.

use core::marker::PhantomData;
use sluice_core::{Reducer, Result, Step, Transducer};

/// Delegates the first `limit` items, then terminates the run.
///
/// The decorator returns `Reduced` together with the `limit`-th delegation, so a
/// driver pulls exactly `limit` items from the source and never one more. A
/// `step` arriving after the limit was reached returns `Reduced` without
/// delegating; with `limit == 0` that happens on the very first item.
///
/// ```rust
/// use sluice_core::{reduce, IntoSource, Transducer};
/// use sluice_reduce::{Collect, TakeN};
///
/// let reducer = TakeN::new(3).apply(Collect);
/// assert_eq!(reduce((1..).into_source(), reducer).unwrap(), vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TakeN {
    limit: usize,
}

impl TakeN {
    /// Stops the run after `limit` items.
    #[must_use]
    pub const fn new(limit: usize) -> Self {
        Self { limit }
    }
}

impl<In> Transducer<In> for TakeN {
    type Out = In;
    type Wrapped<R: Reducer<In>> = TakeNReducer<R, In>;

    fn apply<R: Reducer<In>>(&self, inner: R) -> TakeNReducer<R, In> {
        TakeNReducer {
            inner,
            limit: self.limit,
            taken: 0,
            _item: PhantomData,
        }
    }
}

/// The stateful reducer built by [`TakeN`].
#[derive(Debug)]
pub struct TakeNReducer<R, In> {
    inner: R,
    limit: usize,
    taken: usize,
    _item: PhantomData<fn(In)>,
}

impl<In, R: Reducer<In>> Reducer<In> for TakeNReducer<R, In> {
    type Acc = R::Acc;
    type Output = R::Output;

    forward_lifecycle!();

    fn step(&mut self, acc: R::Acc, item: In) -> Result<Step<R::Acc>> {
        // `init` cannot terminate a run, so a zero limit costs one pull.
        if self.taken >= self.limit {
            return Ok(Step::Reduced(acc));
        }
        self.taken += 1;
        let step = self.inner.step(acc, item)?;
        if self.taken == self.limit {
            trace!(limit = self.limit, "take_n limit reached");
            return Ok(step.reduced());
        }
        Ok(step)
    }
}
