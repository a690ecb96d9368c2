// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt;
use core::iter::FusedIterator;
use sluice_core::{Reducer, Result, SluiceError, Source, Step};

/// Where an [`Execution`] stands.
///
/// `Ready -> Running -> {Reduced | Exhausted} -> Completed`, or `Failed` as soon
/// as the source or a reducer raises a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionState {
    /// Nothing pulled yet; `init` has not run
    Ready,
    /// Pulling items
    Running,
    /// A reducer requested termination; no more items will be pulled
    Reduced,
    /// The source ran dry
    Exhausted,
    /// `complete` ran; the result was handed out
    Completed,
    /// A fault was propagated to the caller
    Failed,
}

impl ExecutionState {
    /// `true` once the execution can no longer be used.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, ExecutionState::Completed | ExecutionState::Failed)
    }
}

/// One run of a source through a reducer chain.
///
/// An execution owns the source position and the current accumulator, so it is
/// single-use: once it completed or failed, every further call returns
/// [`SluiceError::ProtocolViolation`].
pub struct Execution<S, R>
where
    S: Source,
    R: Reducer<S::Item>,
{
    source: S,
    reducer: R,
    acc: Option<R::Acc>,
    state: ExecutionState,
    started: bool,
    pulled: usize,
}

impl<S, R> Execution<S, R>
where
    S: Source,
    R: Reducer<S::Item>,
{
    /// Binds `source` to a fully built reducer chain. Nothing is pulled yet.
    pub const fn new(source: S, reducer: R) -> Self {
        Self {
            source,
            reducer,
            acc: None,
            state: ExecutionState::Ready,
            started: false,
            pulled: 0,
        }
    }

    #[must_use]
    pub const fn state(&self) -> ExecutionState {
        self.state
    }

    /// Number of items pulled from the source so far.
    #[must_use]
    pub const fn pulled(&self) -> usize {
        self.pulled
    }

    /// Drives whatever is left of the run and returns the sink's result.
    ///
    /// Works on a fresh execution as well as on one partially consumed through
    /// [`start`](Self::start). `complete` runs exactly once.
    ///
    /// # Errors
    ///
    /// Propagates the first fault from the source or the reducer chain. Returns
    /// `SluiceError::ProtocolViolation` if the execution already completed or failed.
    pub fn run(&mut self) -> Result<R::Output> {
        while self.advance()? {}

        let acc = self.take_acc()?;
        match self.reducer.complete(acc) {
            Ok(output) => {
                debug!(pulled = self.pulled, "execution completed");
                self.state = ExecutionState::Completed;
                Ok(output)
            }
            Err(error) => {
                self.state = ExecutionState::Failed;
                Err(error)
            }
        }
    }

    /// Starts the run and exposes every `step` outcome as it happens.
    ///
    /// The returned [`Steps`] borrows the execution; once it is dropped,
    /// [`run`](Self::run) finishes what is left and produces the result.
    ///
    /// # Errors
    ///
    /// Returns `SluiceError::ProtocolViolation` on a second call, or once the run
    /// progressed by other means: the source cannot be rewound.
    pub fn start(&mut self) -> Result<Steps<'_, S, R>> {
        if self.started || self.state != ExecutionState::Ready {
            warn!(
                "attempt to restart a single-pass execution after {} pulls",
                self.pulled
            );
            return Err(SluiceError::protocol_violation(
                "execution already started; a single-pass run cannot be restarted",
            ));
        }
        self.started = true;
        Ok(Steps {
            execution: self,
            done: false,
        })
    }

    // Pulls and steps one item. `Ok(false)` means no further step will happen.
    fn advance(&mut self) -> Result<bool> {
        match self.state {
            ExecutionState::Ready => {
                self.acc = Some(self.reducer.init());
                self.state = ExecutionState::Running;
            }
            ExecutionState::Running => {}
            ExecutionState::Reduced | ExecutionState::Exhausted => return Ok(false),
            ExecutionState::Completed | ExecutionState::Failed => {
                warn!("execution used after it finished: {:?}", self.state);
                return Err(SluiceError::protocol_violation(format!(
                    "execution is {:?} and cannot be driven further",
                    self.state
                )));
            }
        }

        let item = match self.source.pull() {
            Ok(Some(item)) => item,
            Ok(None) => {
                debug!(pulled = self.pulled, "source exhausted");
                self.state = ExecutionState::Exhausted;
                return Ok(false);
            }
            Err(error) => {
                self.state = ExecutionState::Failed;
                return Err(error);
            }
        };
        self.pulled += 1;

        let acc = self.take_acc()?;
        match self.reducer.step(acc, item) {
            Ok(Step::Continue(acc)) => {
                self.acc = Some(acc);
                Ok(true)
            }
            Ok(Step::Reduced(acc)) => {
                debug!(pulled = self.pulled, "execution reduced early");
                self.acc = Some(acc);
                self.state = ExecutionState::Reduced;
                Ok(true)
            }
            Err(error) => {
                self.state = ExecutionState::Failed;
                Err(error)
            }
        }
    }

    fn take_acc(&mut self) -> Result<R::Acc> {
        self.acc.take().ok_or_else(|| {
            self.state = ExecutionState::Failed;
            SluiceError::protocol_violation("execution lost its accumulator")
        })
    }
}

impl<S, R> fmt::Debug for Execution<S, R>
where
    S: Source,
    R: Reducer<S::Item>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Execution")
            .field("state", &self.state)
            .field("started", &self.started)
            .field("pulled", &self.pulled)
            .finish_non_exhaustive()
    }
}

/// Forward-only view of an execution's intermediate accumulators.
///
/// Yields one `Step` per item that reached the reducer chain, carrying a clone
/// of the accumulator after that step. A `Reduced` outcome is the last item.
/// After the source ran dry, a reducer terminated, or a fault was yielded, the
/// iterator only returns `None`.
pub struct Steps<'a, S, R>
where
    S: Source,
    R: Reducer<S::Item>,
{
    execution: &'a mut Execution<S, R>,
    done: bool,
}

impl<S, R> Steps<'_, S, R>
where
    S: Source,
    R: Reducer<S::Item>,
{
    /// Number of items pulled from the source so far.
    #[must_use]
    pub fn pulled(&self) -> usize {
        self.execution.pulled
    }
}

impl<S, R> Iterator for Steps<'_, S, R>
where
    S: Source,
    R: Reducer<S::Item>,
    R::Acc: Clone,
{
    type Item = Result<Step<R::Acc>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.execution.advance() {
            Ok(true) => {
                let acc = self.execution.acc.clone()?;
                if self.execution.state == ExecutionState::Reduced {
                    self.done = true;
                    Some(Ok(Step::Reduced(acc)))
                } else {
                    Some(Ok(Step::Continue(acc)))
                }
            }
            Ok(false) => {
                self.done = true;
                None
            }
            Err(error) => {
                self.done = true;
                Some(Err(error))
            }
        }
    }
}

impl<S, R> FusedIterator for Steps<'_, S, R>
where
    S: Source,
    R: Reducer<S::Item>,
    R::Acc: Clone,
{
}

impl<S, R> fmt::Debug for Steps<'_, S, R>
where
    S: Source,
    R: Reducer<S::Item>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Steps")
            .field("execution", &self.execution)
            .field("done", &self.done)
            .finish()
    }
}
