// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Take-while decorator that stops at the first item failing a predicate.

use sluice_core::{Reducer, Result, Step, Transducer};

/// Delegates items while `predicate` holds and terminates on the first item that
/// fails it. The failing item is not delegated.
#[derive(Debug, Clone, Copy)]
pub struct TakeWhile<P> {
    predicate: P,
}

impl<P> TakeWhile<P> {
    /// Delegates items until the first one failing `predicate`.
    pub fn new<In>(predicate: P) -> Self
    where
        P: FnMut(&In) -> bool + Clone,
    {
        Self { predicate }
    }
}

impl<In, P> Transducer<In> for TakeWhile<P>
where
    P: FnMut(&In) -> bool + Clone,
{
    type Out = In;
    type Wrapped<R: Reducer<In>> = TakeWhileReducer<P, R>;

    fn apply<R: Reducer<In>>(&self, inner: R) -> TakeWhileReducer<P, R> {
        TakeWhileReducer {
            inner,
            predicate: self.predicate.clone(),
        }
    }
}

/// The stateful reducer built by [`TakeWhile`].
#[derive(Debug)]
pub struct TakeWhileReducer<P, R> {
    inner: R,
    predicate: P,
}

impl<In, P, R> Reducer<In> for TakeWhileReducer<P, R>
where
    P: FnMut(&In) -> bool,
    R: Reducer<In>,
{
    type Acc = R::Acc;
    type Output = R::Output;

    forward_lifecycle!();

    fn step(&mut self, acc: R::Acc, item: In) -> Result<Step<R::Acc>> {
        if (self.predicate)(&item) {
            self.inner.step(acc, item)
        } else {
            Ok(Step::Reduced(acc))
        }
    }
}
