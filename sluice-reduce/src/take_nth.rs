// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Take-nth decorator for regular downsampling.

use core::marker::PhantomData;
use sluice_core::{Reducer, Result, SluiceError, Step, Transducer};

/// Delegates every `n`-th item, starting with the first (indices `0, n, 2n, ...`).
///
/// The running index advances on every item, delegated or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TakeNth {
    n: usize,
}

impl TakeNth {
    /// # Errors
    ///
    /// Returns `SluiceError::InvalidArgument` if `n` is 0.
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(SluiceError::invalid_argument(
                "take_nth: step must be at least 1",
            ));
        }
        Ok(Self { n })
    }
}

impl<In> Transducer<In> for TakeNth {
    type Out = In;
    type Wrapped<R: Reducer<In>> = TakeNthReducer<R, In>;

    fn apply<R: Reducer<In>>(&self, inner: R) -> TakeNthReducer<R, In> {
        TakeNthReducer {
            inner,
            n: self.n,
            index: 0,
            _item: PhantomData,
        }
    }
}

/// The stateful reducer built by [`TakeNth`].
#[derive(Debug)]
pub struct TakeNthReducer<R, In> {
    inner: R,
    n: usize,
    index: usize,
    _item: PhantomData<fn(In)>,
}

impl<In, R: Reducer<In>> Reducer<In> for TakeNthReducer<R, In> {
    type Acc = R::Acc;
    type Output = R::Output;

    forward_lifecycle!();

    fn step(&mut self, acc: R::Acc, item: In) -> Result<Step<R::Acc>> {
        let index = self.index;
        self.index = self.index.wrapping_add(1);
        if index % self.n == 0 {
            self.inner.step(acc, item)
        } else {
            Ok(Step::Continue(acc))
        }
    }
}
