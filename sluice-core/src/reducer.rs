// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The reducer protocol and the reference driver that runs it.

use crate::{Source, Step};
use sluice_error::Result;

/// The atomic unit of computation: folds items of type `In` into an accumulator.
///
/// # Protocol
///
/// For one run, `init` is called once, then `step` zero or more times, then
/// `complete` exactly once. Once `step` returns [`Step::Reduced`] no further
/// `step` calls occur; `complete` receives the accumulator carried inside it.
///
/// Decorators hold counters, buffers and flags, so a reducer instance belongs to
/// a single run. Reusable pipelines rebuild their decorators through a
/// [`Transducer`](crate::Transducer) for every run.
///
/// # Examples
///
/// ```rust
/// use sluice_core::{reduce, IntoSource, Reducer, Result, Step};
///
/// struct Sum;
///
/// impl Reducer<u32> for Sum {
///     type Acc = u32;
///     type Output = u32;
///
///     fn init(&mut self) -> u32 {
///         0
///     }
///
///     fn step(&mut self, acc: u32, item: u32) -> Result<Step<u32>> {
///         Ok(Step::Continue(acc + item))
///     }
///
///     fn complete(&mut self, acc: u32) -> Result<u32> {
///         Ok(acc)
///     }
/// }
///
/// assert_eq!(reduce(vec![1, 2, 3].into_source(), Sum).unwrap(), 6);
/// ```
pub trait Reducer<In> {
    /// The intermediate value threaded through `step`.
    type Acc;
    /// The finalized result produced by `complete`.
    type Output;

    /// Produces the starting accumulator.
    fn init(&mut self) -> Self::Acc;

    /// Folds one item into the accumulator, or signals termination.
    ///
    /// # Errors
    ///
    /// Returns the reducer's fault; the driver propagates it and stops.
    fn step(&mut self, acc: Self::Acc, item: In) -> Result<Step<Self::Acc>>;

    /// Finalizes the accumulator into the result.
    ///
    /// # Errors
    ///
    /// Returns the reducer's fault, e.g. when flushing buffered state fails.
    fn complete(&mut self, acc: Self::Acc) -> Result<Self::Output>;
}

impl<In, R: Reducer<In> + ?Sized> Reducer<In> for &mut R {
    type Acc = R::Acc;
    type Output = R::Output;

    fn init(&mut self) -> Self::Acc {
        (**self).init()
    }

    fn step(&mut self, acc: Self::Acc, item: In) -> Result<Step<Self::Acc>> {
        (**self).step(acc, item)
    }

    fn complete(&mut self, acc: Self::Acc) -> Result<Self::Output> {
        (**self).complete(acc)
    }
}

impl<In, R: Reducer<In> + ?Sized> Reducer<In> for Box<R> {
    type Acc = R::Acc;
    type Output = R::Output;

    fn init(&mut self) -> Self::Acc {
        (**self).init()
    }

    fn step(&mut self, acc: Self::Acc, item: In) -> Result<Step<Self::Acc>> {
        (**self).step(acc, item)
    }

    fn complete(&mut self, acc: Self::Acc) -> Result<Self::Output> {
        (**self).complete(acc)
    }
}

/// Folds `source` with `reducer`, stopping at the first [`Step::Reduced`].
///
/// Items left in the source after termination are never pulled. A fault from the
/// source or the reducer is returned as is and `complete` is not called.
///
/// # Errors
///
/// Propagates the first fault raised by the source or the reducer.
pub fn reduce<S, R>(mut source: S, mut reducer: R) -> Result<R::Output>
where
    S: Source,
    R: Reducer<S::Item>,
{
    let mut acc = reducer.init();
    while let Some(item) = source.pull()? {
        match reducer.step(acc, item)? {
            Step::Continue(next) => acc = next,
            Step::Reduced(last) => {
                trace!("reducer requested early termination");
                acc = last;
                break;
            }
        }
    }
    reducer.complete(acc)
}
