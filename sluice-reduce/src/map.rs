// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use sluice_core::{Reducer, Result, Step, Transducer};

/// Transforms each item with `f` before delegating it; may change the item type.
#[derive(Debug, Clone, Copy)]
pub struct Map<F> {
    f: F,
}

impl<F> Map<F> {
    /// Delegates `f(item)` for every item.
    pub fn new<In, U>(f: F) -> Self
    where
        F: FnMut(In) -> U + Clone,
    {
        Self { f }
    }
}

impl<In, U, F> Transducer<In> for Map<F>
where
    F: FnMut(In) -> U + Clone,
{
    type Out = U;
    type Wrapped<R: Reducer<U>> = MapReducer<F, R>;

    fn apply<R: Reducer<U>>(&self, inner: R) -> MapReducer<F, R> {
        MapReducer {
            inner,
            f: self.f.clone(),
        }
    }
}

/// The reducer built by [`Map`].
#[derive(Debug)]
pub struct MapReducer<F, R> {
    inner: R,
    f: F,
}

impl<In, U, F, R> Reducer<In> for MapReducer<F, R>
where
    F: FnMut(In) -> U,
    R: Reducer<U>,
{
    type Acc = R::Acc;
    type Output = R::Output;

    forward_lifecycle!();

    fn step(&mut self, acc: R::Acc, item: In) -> Result<Step<R::Acc>> {
        self.inner.step(acc, (self.f)(item))
    }
}
