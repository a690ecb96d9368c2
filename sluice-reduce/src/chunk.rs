// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Chunk decorator for batching items into fixed-size windows.

use core::mem::take;
use sluice_core::{Reducer, Result, SluiceError, Step, Transducer};

/// Groups consecutive items into windows of `size` and delegates each full window
/// as a `Vec`. A trailing partial window is delegated on `complete`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    size: usize,
}

impl Chunk {
    /// # Errors
    ///
    /// Returns `SluiceError::InvalidArgument` if `size` is 0.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(SluiceError::invalid_argument(
                "chunk: window size must be at least 1",
            ));
        }
        Ok(Self { size })
    }
}

impl<In> Transducer<In> for Chunk {
    type Out = Vec<In>;
    type Wrapped<R: Reducer<Vec<In>>> = ChunkReducer<R, In>;

    fn apply<R: Reducer<Vec<In>>>(&self, inner: R) -> ChunkReducer<R, In> {
        ChunkReducer {
            inner,
            size: self.size,
            window: Vec::with_capacity(self.size),
        }
    }
}

/// The stateful reducer built by [`Chunk`].
#[derive(Debug)]
pub struct ChunkReducer<R, In> {
    inner: R,
    size: usize,
    window: Vec<In>,
}

impl<In, R: Reducer<Vec<In>>> Reducer<In> for ChunkReducer<R, In> {
    type Acc = R::Acc;
    type Output = R::Output;

    fn init(&mut self) -> R::Acc {
        self.inner.init()
    }

    fn step(&mut self, acc: R::Acc, item: In) -> Result<Step<R::Acc>> {
        self.window.push(item);
        if self.window.len() < self.size {
            return Ok(Step::Continue(acc));
        }
        let window = take(&mut self.window);
        self.window = Vec::with_capacity(self.size);
        self.inner.step(acc, window)
    }

    fn complete(&mut self, acc: R::Acc) -> Result<R::Output> {
        let acc = if self.window.is_empty() {
            acc
        } else {
            trace!(len = self.window.len(), "chunk flushing partial window");
            self.inner.step(acc, take(&mut self.window))?.into_inner()
        };
        self.inner.complete(acc)
    }
}
