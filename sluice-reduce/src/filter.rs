// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use sluice_core::{Reducer, Result, Step, Transducer};

/// Delegates only the items for which `predicate` holds.
#[derive(Debug, Clone, Copy)]
pub struct Filter<P> {
    predicate: P,
}

impl<P> Filter<P> {
    /// Delegates only the items matching `predicate`.
    pub fn new<In>(predicate: P) -> Self
    where
        P: FnMut(&In) -> bool + Clone,
    {
        Self { predicate }
    }
}

impl<In, P> Transducer<In> for Filter<P>
where
    P: FnMut(&In) -> bool + Clone,
{
    type Out = In;
    type Wrapped<R: Reducer<In>> = FilterReducer<P, R>;

    fn apply<R: Reducer<In>>(&self, inner: R) -> FilterReducer<P, R> {
        FilterReducer {
            inner,
            predicate: self.predicate.clone(),
        }
    }
}

/// The reducer built by [`Filter`].
#[derive(Debug)]
pub struct FilterReducer<P, R> {
    inner: R,
    predicate: P,
}

impl<In, P, R> Reducer<In> for FilterReducer<P, R>
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
            Ok(Step::Continue(acc))
        }
    }
}
