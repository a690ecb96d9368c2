// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! General-purpose folding sinks.

use sluice_core::{IntoSluiceError, Reducer, Result, Step};

/// Folds items into an accumulator seeded from `init`.
///
/// The seed is cloned on every `init`, so a `Fold` can back several runs.
#[derive(Debug, Clone)]
pub struct Fold<A, F> {
    init: A,
    f: F,
}

impl<A, F> Fold<A, F> {
    /// Starts every run from a clone of `init` and folds with `f`.
    pub fn new<In>(init: A, f: F) -> Self
    where
        F: FnMut(A, In) -> A,
    {
        Self { init, f }
    }
}

impl<In, A, F> Reducer<In> for Fold<A, F>
where
    A: Clone,
    F: FnMut(A, In) -> A,
{
    type Acc = A;
    type Output = A;

    fn init(&mut self) -> A {
        self.init.clone()
    }

    fn step(&mut self, acc: A, item: In) -> Result<Step<A>> {
        Ok(Step::Continue((self.f)(acc, item)))
    }

    fn complete(&mut self, acc: A) -> Result<A> {
        Ok(acc)
    }
}

/// Folds items with a fallible closure.
///
/// The first `Err` returned by the closure aborts the run and reaches the caller
/// as [`SluiceError::UserError`](sluice_core::SluiceError::UserError).
#[derive(Debug, Clone)]
pub struct TryFold<A, F> {
    init: A,
    f: F,
}

impl<A, F> TryFold<A, F> {
    /// Starts every run from a clone of `init` and folds with the fallible `f`.
    pub fn new<In, E>(init: A, f: F) -> Self
    where
        F: FnMut(A, In) -> core::result::Result<A, E>,
    {
        Self { init, f }
    }
}

impl<In, A, E, F> Reducer<In> for TryFold<A, F>
where
    A: Clone,
    E: std::error::Error + Send + Sync + 'static,
    F: FnMut(A, In) -> core::result::Result<A, E>,
{
    type Acc = A;
    type Output = A;

    fn init(&mut self) -> A {
        self.init.clone()
    }

    fn step(&mut self, acc: A, item: In) -> Result<Step<A>> {
        (self.f)(acc, item)
            .map(Step::Continue)
            .map_err(IntoSluiceError::into_sluice)
    }

    fn complete(&mut self, acc: A) -> Result<A> {
        Ok(acc)
    }
}
