// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Take-until decorator with an inclusive stop condition.

use sluice_core::{Reducer, Result, Step, Transducer};

/// Delegates every item and terminates right after delegating the first item
/// for which `predicate` holds. Unlike [`TakeWhile`](crate::TakeWhile), the
/// matching item itself is kept.
#[derive(Debug, Clone, Copy)]
pub struct TakeUntil<P> {
    predicate: P,
}

impl<P> TakeUntil<P> {
    /// Delegates items up to and including the first one matching `predicate`.
    pub fn new<In>(predicate: P) -> Self
    where
        P: FnMut(&In) -> bool + Clone,
    {
        Self { predicate }
    }
}

impl<In, P> Transducer<In> for TakeUntil<P>
where
    P: FnMut(&In) -> bool + Clone,
{
    type Out = In;
    type Wrapped<R: Reducer<In>> = TakeUntilReducer<P, R>;

    fn apply<R: Reducer<In>>(&self, inner: R) -> TakeUntilReducer<P, R> {
        TakeUntilReducer {
            inner,
            predicate: self.predicate.clone(),
        }
    }
}

/// The stateful reducer built by [`TakeUntil`].
#[derive(Debug)]
pub struct TakeUntilReducer<P, R> {
    inner: R,
    predicate: P,
}

impl<In, P, R> Reducer<In> for TakeUntilReducer<P, R>
where
    P: FnMut(&In) -> bool,
    R: Reducer<In>,
{
    type Acc = R::Acc;
    type Output = R::Output;

    forward_lifecycle!();

    fn step(&mut self, acc: R::Acc, item: In) -> Result<Step<R::Acc>> {
        let stop = (self.predicate)(&item);
        let step = self.inner.step(acc, item)?;
        Ok(if stop { step.reduced() } else { step })
    }
}
