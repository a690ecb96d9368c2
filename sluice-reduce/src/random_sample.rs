// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Probabilistic downsampling decorator.

use core::marker::PhantomData;
use sluice_core::{Reducer, Result, SluiceError, Step, Transducer};

/// Delegates each item independently with the given probability.
///
/// For every item a uniform value in `[0, 1)` is drawn and the item is delegated
/// iff the draw is below `probability`. `1.0` keeps everything, `0.0` nothing.
///
/// [`RandomSample::new`] draws from an unseeded generator. [`RandomSample::with_seed`]
/// seeds a fresh generator for every run built from it, so each run makes the same
/// choices for the same input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomSample {
    probability: f64,
    seed: Option<u64>,
}

impl RandomSample {
    /// # Errors
    ///
    /// Returns `SluiceError::InvalidArgument` if `probability` is not in `0.0..=1.0`.
    pub fn new(probability: f64) -> Result<Self> {
        Self::build(probability, None)
    }

    /// Like [`new`](Self::new), with a deterministic generator.
    ///
    /// # Errors
    ///
    /// Returns `SluiceError::InvalidArgument` if `probability` is not in `0.0..=1.0`.
    pub fn with_seed(probability: f64, seed: u64) -> Result<Self> {
        Self::build(probability, Some(seed))
    }

    fn build(probability: f64, seed: Option<u64>) -> Result<Self> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(SluiceError::invalid_argument(format!(
                "random_sample: probability must be between 0.0 and 1.0, got {probability}"
            )));
        }
        Ok(Self { probability, seed })
    }

    /// Chance of each item being delegated.
    #[must_use]
    pub const fn probability(&self) -> f64 {
        self.probability
    }
}

impl<In> Transducer<In> for RandomSample {
    type Out = In;
    type Wrapped<R: Reducer<In>> = RandomSampleReducer<R, In>;

    fn apply<R: Reducer<In>>(&self, inner: R) -> RandomSampleReducer<R, In> {
        let rng = match self.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        RandomSampleReducer {
            inner,
            probability: self.probability,
            rng,
            _item: PhantomData,
        }
    }
}

/// The stateful reducer built by [`RandomSample`].
#[derive(Debug)]
pub struct RandomSampleReducer<R, In> {
    inner: R,
    probability: f64,
    rng: fastrand::Rng,
    _item: PhantomData<fn(In)>,
}

impl<In, R: Reducer<In>> Reducer<In> for RandomSampleReducer<R, In> {
    type Acc = R::Acc;
    type Output = R::Output;

    forward_lifecycle!();

    fn step(&mut self, acc: R::Acc, item: In) -> Result<Step<R::Acc>> {
        if self.rng.f64() < self.probability {
            self.inner.step(acc, item)
        } else {
            Ok(Step::Continue(acc))
        }
    }
}
