// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use sluice_core::{Reducer, Result, Step};
use std::cell::RefCell;
use std::rc::Rc;

/// One protocol call observed by a [`RecordingReducer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event<T> {
    Init,
    Step(T),
    Complete,
}

/// A sink that records every protocol call and collects the items it receives.
///
/// The log is shared, so it can be inspected after the reducer moved into a
/// pipeline. With [`reduce_after`](RecordingReducer::reduce_after) it requests
/// termination itself, which lets tests check that decorators propagate an
/// inner `Reduced`.
#[derive(Debug)]
pub struct RecordingReducer<T> {
    log: Rc<RefCell<Vec<Event<T>>>>,
    reduce_after: Option<usize>,
}

impl<T: Clone> RecordingReducer<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            log: Rc::new(RefCell::new(Vec::new())),
            reduce_after: None,
        }
    }

    /// Returns `Reduced` once `n` items have been stepped.
    #[must_use]
    pub fn reduce_after(mut self, n: usize) -> Self {
        self.reduce_after = Some(n);
        self
    }

    /// A handle on the shared call log.
    #[must_use]
    pub fn log(&self) -> Rc<RefCell<Vec<Event<T>>>> {
        Rc::clone(&self.log)
    }

    /// The items stepped so far, in order.
    #[must_use]
    pub fn items(&self) -> Vec<T> {
        self.log
            .borrow()
            .iter()
            .filter_map(|event| match event {
                Event::Step(item) => Some(item.clone()),
                _ => None,
            })
            .collect()
    }

    /// How many times `complete` ran.
    #[must_use]
    pub fn completions(&self) -> usize {
        self.log
            .borrow()
            .iter()
            .filter(|event| matches!(event, Event::Complete))
            .count()
    }
}

impl<T: Clone> Default for RecordingReducer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Reducer<T> for RecordingReducer<T> {
    type Acc = Vec<T>;
    type Output = Vec<T>;

    fn init(&mut self) -> Vec<T> {
        self.log.borrow_mut().push(Event::Init);
        Vec::new()
    }

    fn step(&mut self, mut acc: Vec<T>, item: T) -> Result<Step<Vec<T>>> {
        self.log.borrow_mut().push(Event::Step(item.clone()));
        acc.push(item);
        match self.reduce_after {
            Some(n) if acc.len() >= n => Ok(Step::Reduced(acc)),
            _ => Ok(Step::Continue(acc)),
        }
    }

    fn complete(&mut self, acc: Vec<T>) -> Result<Vec<T>> {
        self.log.borrow_mut().push(Event::Complete);
        Ok(acc)
    }
}
