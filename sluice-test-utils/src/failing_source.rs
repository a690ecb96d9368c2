// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities for fault injection in sources.

use sluice_core::{Result, SluiceError, Source};
use std::collections::VecDeque;

/// A source that yields `items` in order but fails when asked for the item at
/// position `fail_at` (0-indexed).
///
/// The faulty position is consumed by the failure, so pulling again resumes
/// with the item that follows it.
///
/// # Examples
///
/// ```rust
/// use sluice_test_utils::FailingSource;
/// use sluice_core::Source;
///
/// let mut source = FailingSource::new(vec![1, 2, 3], 1);
/// assert_eq!(source.pull().unwrap(), Some(1));
/// assert!(source.pull().is_err());
/// assert_eq!(source.pull().unwrap(), Some(3));
/// ```
#[derive(Debug)]
pub struct FailingSource<T> {
    items: VecDeque<T>,
    fail_at: Option<usize>,
    position: usize,
}

impl<T> FailingSource<T> {
    /// Creates a source that faults at `fail_at`.
    pub fn new(items: Vec<T>, fail_at: usize) -> Self {
        Self {
            items: items.into(),
            fail_at: Some(fail_at),
            position: 0,
        }
    }

    /// Number of positions consumed so far, faulty one included.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }
}

impl<T> Source for FailingSource<T> {
    type Item = T;

    fn has_more(&mut self) -> Result<bool> {
        Ok(!self.items.is_empty())
    }

    fn advance(&mut self) -> Result<Self::Item> {
        let position = self.position;
        let item = self.items.pop_front().ok_or(SluiceError::SourceExhausted)?;
        self.position += 1;
        if self.fail_at == Some(position) {
            self.fail_at = None;
            return Err(SluiceError::source_error(format!(
                "injected fault at position {position}"
            )));
        }
        Ok(item)
    }
}
