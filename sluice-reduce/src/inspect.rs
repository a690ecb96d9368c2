// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Inspect decorator for side-effect observation without modifying the stream.

use sluice_core::{Reducer, Result, Step, Transducer};

/// Calls `f` with a reference to each item, then delegates the item unchanged.
///
/// Useful for debugging, logging or metrics at a given point of a chain. Only
/// items that actually reach this decorator are observed: place it after a
/// filter to observe the filtered stream.
#[derive(Debug, Clone, Copy)]
pub struct Inspect<F> {
    f: F,
}

impl<F> Inspect<F> {
    /// Calls `f` on every item before delegating it.
    pub fn new<In>(f: F) -> Self
    where
        F: FnMut(&In) + Clone,
    {
        Self { f }
    }
}

impl<In, F> Transducer<In> for Inspect<F>
where
    F: FnMut(&In) + Clone,
{
    type Out = In;
    type Wrapped<R: Reducer<In>> = InspectReducer<F, R>;

    fn apply<R: Reducer<In>>(&self, inner: R) -> InspectReducer<F, R> {
        InspectReducer {
            inner,
            f: self.f.clone(),
        }
    }
}

/// The reducer built by [`Inspect`].
#[derive(Debug)]
pub struct InspectReducer<F, R> {
    inner: R,
    f: F,
}

impl<In, F, R> Reducer<In> for InspectReducer<F, R>
where
    F: FnMut(&In),
    R: Reducer<In>,
{
    type Acc = R::Acc;
    type Output = R::Output;

    forward_lifecycle!();

    fn step(&mut self, acc: R::Acc, item: In) -> Result<Step<R::Acc>> {
        (self.f)(&item);
        self.inner.step(acc, item)
    }
}
