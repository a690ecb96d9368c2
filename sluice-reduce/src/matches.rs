// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Short-circuiting quantifier sinks.
//!
//! Each sink terminates as soon as its answer is decided, so the driver stops
//! pulling from the source at that point. Over an empty source, [`MatchesAll`] and
//! [`MatchesNone`] are vacuously `true` and [`MatchesAny`] is `false`.

use sluice_core::{Reducer, Result, Step};

/// `true` as soon as one item satisfies the predicate.
#[derive(Debug, Clone, Copy)]
pub struct MatchesAny<P> {
    predicate: P,
}

impl<P> MatchesAny<P> {
    /// `true` as soon as one item matches `predicate`.
    pub fn new<In>(predicate: P) -> Self
    where
        P: FnMut(&In) -> bool,
    {
        Self { predicate }
    }
}

impl<In, P: FnMut(&In) -> bool> Reducer<In> for MatchesAny<P> {
    type Acc = bool;
    type Output = bool;

    fn init(&mut self) -> bool {
        false
    }

    fn step(&mut self, acc: bool, item: In) -> Result<Step<bool>> {
        if (self.predicate)(&item) {
            Ok(Step::Reduced(true))
        } else {
            Ok(Step::Continue(acc))
        }
    }

    fn complete(&mut self, acc: bool) -> Result<bool> {
        Ok(acc)
    }
}

/// `false` as soon as one item fails the predicate.
#[derive(Debug, Clone, Copy)]
pub struct MatchesAll<P> {
    predicate: P,
}

impl<P> MatchesAll<P> {
    /// `true` unless an item fails `predicate`.
    pub fn new<In>(predicate: P) -> Self
    where
        P: FnMut(&In) -> bool,
    {
        Self { predicate }
    }
}

impl<In, P: FnMut(&In) -> bool> Reducer<In> for MatchesAll<P> {
    type Acc = bool;
    type Output = bool;

    fn init(&mut self) -> bool {
        true
    }

    fn step(&mut self, acc: bool, item: In) -> Result<Step<bool>> {
        if (self.predicate)(&item) {
            Ok(Step::Continue(acc))
        } else {
            Ok(Step::Reduced(false))
        }
    }

    fn complete(&mut self, acc: bool) -> Result<bool> {
        Ok(acc)
    }
}

/// `false` as soon as one item satisfies the predicate.
#[derive(Debug, Clone, Copy)]
pub struct MatchesNone<P> {
    predicate: P,
}

impl<P> MatchesNone<P> {
    /// `true` unless an item matches `predicate`.
    pub fn new<In>(predicate: P) -> Self
    where
        P: FnMut(&In) -> bool,
    {
        Self { predicate }
    }
}

impl<In, P: FnMut(&In) -> bool> Reducer<In> for MatchesNone<P> {
    type Acc = bool;
    type Output = bool;

    fn init(&mut self) -> bool {
        true
    }

    fn step(&mut self, acc: bool, item: In) -> Result<Step<bool>> {
        if (self.predicate)(&item) {
            Ok(Step::Reduced(false))
        } else {
            Ok(Step::Continue(acc))
        }
    }

    fn complete(&mut self, acc: bool) -> Result<bool> {
        Ok(acc)
    }
}
