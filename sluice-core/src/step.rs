// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// The outcome of a single [`Reducer::step`](crate::Reducer::step).
///
/// `Reduced` is the early-termination sentinel: its presence, not its content,
/// tells the driver to stop pulling. The carried accumulator is the final one and
/// must be unwrapped before it is handed to `complete`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<A> {
    /// Keep pulling with this accumulator
    Continue(A),
    /// Stop pulling; this is the final accumulator
    Reduced(A),
}

impl<A> Step<A> {
    /// Returns `true` if this is the termination sentinel.
    pub const fn is_reduced(&self) -> bool {
        matches!(self, Step::Reduced(_))
    }

    /// Unwraps the accumulator regardless of the variant.
    pub fn into_inner(self) -> A {
        match self {
            Step::Continue(acc) | Step::Reduced(acc) => acc,
        }
    }

    /// Borrows the accumulator regardless of the variant.
    pub const fn get(&self) -> &A {
        match self {
            Step::Continue(acc) | Step::Reduced(acc) => acc,
        }
    }

    /// Maps the carried accumulator, keeping the variant.
    pub fn map<B, F>(self, f: F) -> Step<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Step::Continue(acc) => Step::Continue(f(acc)),
            Step::Reduced(acc) => Step::Reduced(f(acc)),
        }
    }

    /// Turns a `Continue` into `Reduced`; a `Reduced` stays as it is.
    pub fn reduced(self) -> Self {
        Step::Reduced(self.into_inner())
    }
}
