// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Drop-first decorator that discards a fixed number of leading items.

use core::marker::PhantomData;
use sluice_core::{Reducer, Result, Step, Transducer};

/// Skips the first `count` items unconditionally and delegates every later item.
///
/// If the source has fewer than `count` items, nothing reaches the inner reducer.
///
/// # Examples
///
/// ```rust
/// use sluice_core::{reduce, IntoSource, Transducer};
/// use sluice_reduce::{Collect, DropFirst};
///
/// let reducer = DropFirst::new(2).apply(Collect);
/// assert_eq!(reduce(vec![1, 2, 3].into_source(), reducer).unwrap(), vec![3]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropFirst {
    count: usize,
}

impl DropFirst {
    /// Skips the first `count` items.
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self { count }
    }
}

impl<In> Transducer<In> for DropFirst {
    type Out = In;
    type Wrapped<R: Reducer<In>> = DropFirstReducer<R, In>;

    fn apply<R: Reducer<In>>(&self, inner: R) -> DropFirstReducer<R, In> {
        DropFirstReducer {
            inner,
            remaining: self.count,
            _item: PhantomData,
        }
    }
}

/// The stateful reducer built by [`DropFirst`].
#[derive(Debug)]
pub struct DropFirstReducer<R, In> {
    inner: R,
    remaining: usize,
    _item: PhantomData<fn(In)>,
}

impl<In, R: Reducer<In>> Reducer<In> for DropFirstReducer<R, In> {
    type Acc = R::Acc;
    type Output = R::Output;

    forward_lifecycle!();

    fn step(&mut self, acc: R::Acc, item: In) -> Result<Step<R::Acc>> {
        if self.remaining > 0 {
            self.remaining -= 1;
            return Ok(Step::Continue(acc));
        }
        self.inner.step(acc, item)
    }
}
