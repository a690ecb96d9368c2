// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Fluent construction of a source, a decorator chain and a sink.

use crate::Execution;
use sluice_core::{Compose, Identity, Reducer, Result, Source, Transducer};

/// Marker for a [`Transformation`] with no source bound yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSource;

/// Marker for a [`Transformation`] with no sink bound yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSink;

/// A source, an ordered chain of decorators and a terminal sink.
///
/// The builder tracks what is bound in its type: [`execute`](Self::execute)
/// only exists once both a source and a sink were supplied, so an incomplete
/// transformation does not compile. Decorators are appended in the order items
/// will reach them.
///
/// The chain is kept as a [`Transducer`], so the stateful decorators are only
/// built when a run starts. Without a bound source, [`run`](Self::run) can be
/// called any number of times, each run against a fresh decorator chain.
///
/// # Examples
///
/// ```rust
/// use sluice_core::IntoSource;
/// use sluice_exec::Transformation;
/// use sluice_reduce::{Collect, TakeN};
///
/// let firsts = Transformation::new()
///     .with_source(vec![1, 2, 3, 4, 5].into_source())
///     .with_steps(TakeN::new(3))
///     .with_sink(Collect)
///     .execute()
///     .unwrap();
///
/// assert_eq!(firsts, vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Transformation<S = NoSource, X = Identity, K = NoSink> {
    source: S,
    steps: X,
    sink: K,
}

impl Transformation {
    /// An empty transformation: no source, no decorators, no sink.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            source: NoSource,
            steps: Identity,
            sink: NoSink,
        }
    }
}

impl<X, K> Transformation<NoSource, X, K> {
    /// Binds the source items are pulled from.
    pub fn with_source<S: Source>(self, source: S) -> Transformation<S, X, K> {
        Transformation {
            source,
            steps: self.steps,
            sink: self.sink,
        }
    }
}

impl<S, X> Transformation<S, X, NoSink> {
    /// Binds the terminal reducer.
    pub fn with_sink<K>(self, sink: K) -> Transformation<S, X, K> {
        Transformation {
            source: self.source,
            steps: self.steps,
            sink,
        }
    }
}

impl<S, X, K> Transformation<S, X, K> {
    /// Appends `steps` after the decorators already in the chain.
    pub fn with_steps<Y>(self, steps: Y) -> Transformation<S, Compose<X, Y>, K> {
        Transformation {
            source: self.source,
            steps: Compose::new(self.steps, steps),
            sink: self.sink,
        }
    }

    /// The decorator chain, outermost first.
    pub const fn steps(&self) -> &X {
        &self.steps
    }
}

impl<S, X, K> Transformation<S, X, K>
where
    S: Source,
    X: Transducer<S::Item>,
    K: Reducer<X::Out>,
{
    /// Pulls the source through the chain and returns the sink's result.
    ///
    /// Stops pulling as soon as a reducer terminates; unread items stay in the
    /// source.
    ///
    /// # Errors
    ///
    /// Propagates the first fault from the source or a reducer. No partial
    /// result is returned.
    pub fn execute(self) -> Result<K::Output> {
        self.into_execution().run()
    }

    /// Builds the decorator chain and returns the run without driving it.
    pub fn into_execution(self) -> Execution<S, X::Wrapped<K>> {
        Execution::new(self.source, self.steps.apply(self.sink))
    }
}

impl<X, K> Transformation<NoSource, X, K> {
    /// Runs `source` through a freshly built chain into the bound sink.
    ///
    /// The transformation stays usable: the next run gets new decorator state,
    /// while the sink itself is borrowed for each run.
    ///
    /// # Errors
    ///
    /// Propagates the first fault from `source` or a reducer.
    pub fn run<S>(&mut self, source: S) -> Result<<K as Reducer<X::Out>>::Output>
    where
        S: Source,
        X: Transducer<S::Item>,
        K: Reducer<X::Out>,
    {
        debug!("running reusable transformation");
        Execution::new(source, self.steps.apply(&mut self.sink)).run()
    }
}
