// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Drop-while decorator that discards a leading run of matching items.

use sluice_core::{Reducer, Result, Step, Transducer};

/// Skips items while `predicate` holds; from the first failing item on, delegates
/// everything.
///
/// The switch is permanent: once an item fails the predicate, later items are
/// delegated even if they would match again.
///
/// ```rust
/// use sluice_core::{reduce, IntoSource, Transducer};
/// use sluice_reduce::{Collect, DropWhile};
///
/// let reducer = DropWhile::new(|x: &i32| *x < 3).apply(Collect);
/// let kept = reduce(vec![1, 2, 3, 4, 1].into_source(), reducer).unwrap();
/// assert_eq!(kept, vec![3, 4, 1]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DropWhile<P> {
    predicate: P,
}

impl<P> DropWhile<P> {
    /// Skips items while `predicate` holds, up to the first failure.
    pub fn new<In>(predicate: P) -> Self
    where
        P: FnMut(&In) -> bool + Clone,
    {
        Self { predicate }
    }
}

impl<In, P> Transducer<In> for DropWhile<P>
where
    P: FnMut(&In) -> bool + Clone,
{
    type Out = In;
    type Wrapped<R: Reducer<In>> = DropWhileReducer<P, R>;

    fn apply<R: Reducer<In>>(&self, inner: R) -> DropWhileReducer<P, R> {
        DropWhileReducer {
            inner,
            predicate: self.predicate.clone(),
            dropping: true,
        }
    }
}

/// The stateful reducer built by [`DropWhile`].
#[derive(Debug)]
pub struct DropWhileReducer<P, R> {
    inner: R,
    predicate: P,
    dropping: bool,
}

impl<In, P, R> Reducer<In> for DropWhileReducer<P, R>
where
    P: FnMut(&In) -> bool,
    R: Reducer<In>,
{
    type Acc = R::Acc;
    type Output = R::Output;

    forward_lifecycle!();

    fn step(&mut self, acc: R::Acc, item: In) -> Result<Step<R::Acc>> {
        if self.dropping {
            if (self.predicate)(&item) {
                return Ok(Step::Continue(acc));
            }
            self.dropping = false;
        }
        self.inner.step(acc, item)
    }
}
