// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Transducers: reusable descriptions of decorator reducers.

use crate::Reducer;

/// Builds a decorator reducer around an inner reducer.
///
/// A transducer is immutable configuration (a limit, a predicate, a probability).
/// [`apply`](Transducer::apply) constructs a fresh decorator holding its own
/// mutable state, so one transducer can back any number of independent runs.
///
/// The decorator consumes items of type `In` and feeds the inner reducer items
/// of type [`Out`](Transducer::Out); accumulator and result types pass through.
pub trait Transducer<In> {
    /// The item type handed to the inner reducer.
    type Out;

    /// The decorator produced around an inner reducer `R`.
    type Wrapped<R: Reducer<Self::Out>>: Reducer<In, Acc = R::Acc, Output = R::Output>;

    /// Wraps `inner` in a freshly initialized decorator.
    fn apply<R: Reducer<Self::Out>>(&self, inner: R) -> Self::Wrapped<R>;
}

/// The transducer that hands every item through untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl<In> Transducer<In> for Identity {
    type Out = In;
    type Wrapped<R: Reducer<In>> = R;

    fn apply<R: Reducer<In>>(&self, inner: R) -> R {
        inner
    }
}

/// Two transducers chained: items flow through `first`, then through `second`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Compose<A, B> {
    first: A,
    second: B,
}

impl<A, B> Compose<A, B> {
    /// Chains `second` after `first`.
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// The transducer items reach first.
    pub const fn first(&self) -> &A {
        &self.first
    }

    /// The transducer items reach second.
    pub const fn second(&self) -> &B {
        &self.second
    }
}

impl<In, A, B> Transducer<In> for Compose<A, B>
where
    A: Transducer<In>,
    B: Transducer<A::Out>,
{
    type Out = B::Out;
    type Wrapped<R: Reducer<B::Out>> = A::Wrapped<B::Wrapped<R>>;

    fn apply<R: Reducer<B::Out>>(&self, inner: R) -> Self::Wrapped<R> {
        self.first.apply(self.second.apply(inner))
    }
}
