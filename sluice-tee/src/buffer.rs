// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use sluice_core::{Result, SluiceError, Source};
use std::collections::VecDeque;

/// The state every branch of one tee shares.
///
/// Logical positions count items from the start of the source. `items` holds
/// positions `head..tail`; a cursor is the position its branch reads next, and
/// `None` marks a deactivated branch.
///
/// A branch keeps the item it last received (position `cursor - 1`) until it
/// moves past it. Once it has read everything and the source is exhausted it
/// keeps nothing. `head` is the smallest position still kept by an active
/// branch.
pub(crate) struct TeeBuffer<S: Source> {
    source: Option<S>,
    items: VecDeque<S::Item>,
    head: usize,
    tail: usize,
    cursors: Vec<Option<usize>>,
}

impl<S: Source> TeeBuffer<S>
where
    S::Item: Clone,
{
    pub(crate) fn new(source: S, branches: usize) -> Self {
        Self {
            source: Some(source),
            items: VecDeque::new(),
            head: 0,
            tail: 0,
            cursors: vec![Some(0); branches],
        }
    }

    pub(crate) fn is_active(&self, id: usize) -> bool {
        self.cursor(id).is_some()
    }

    pub(crate) const fn window(&self) -> (usize, usize) {
        (self.head, self.tail)
    }

    pub(crate) fn buffered(&self) -> usize {
        self.items.len()
    }

    /// Items pulled from the source so far; every pull extends the tail by one.
    pub(crate) const fn pulled(&self) -> usize {
        self.tail
    }

    pub(crate) fn has_value(&mut self, id: usize) -> Result<bool> {
        let Some(cursor) = self.cursor(id) else {
            return Ok(false);
        };
        if cursor < self.tail {
            return Ok(true);
        }
        let exhausted = match self.source.as_mut() {
            Some(source) => !source.has_more()?,
            None => true,
        };
        if exhausted {
            if self.source.take().is_some() {
                debug!(pulled = self.tail, "tee source exhausted");
            }
            self.evict();
        }
        Ok(!exhausted)
    }

    pub(crate) fn next_value(&mut self, id: usize) -> Result<S::Item> {
        let cursor = self.cursor(id).ok_or_else(|| {
            SluiceError::protocol_violation(format!("branch {id} is no longer active"))
        })?;

        let item = if cursor < self.tail {
            self.items
                .get(cursor - self.head)
                .cloned()
                .ok_or_else(|| {
                    SluiceError::protocol_violation(format!(
                        "branch {id} points at evicted position {cursor}"
                    ))
                })?
        } else {
            let pulled = match self.source.as_mut() {
                Some(source) => source.pull()?,
                None => None,
            };
            let Some(item) = pulled else {
                self.source = None;
                self.evict();
                return Err(SluiceError::protocol_violation(format!(
                    "branch {id} has no value left to read"
                )));
            };
            self.items.push_back(item.clone());
            self.tail += 1;
            item
        };

        self.cursors[id] = Some(cursor + 1);
        self.evict();
        Ok(item)
    }

    pub(crate) fn deactivate(&mut self, id: usize) {
        if let Some(slot) = self.cursors.get_mut(id) {
            if slot.take().is_some() {
                debug!(branch = id, "tee branch deactivated");
                self.evict();
            }
        }
    }

    fn cursor(&self, id: usize) -> Option<usize> {
        self.cursors.get(id).copied().flatten()
    }

    // First position the branch at `cursor` still needs.
    fn kept_from(&self, cursor: usize) -> usize {
        if self.source.is_none() && cursor == self.tail {
            cursor
        } else {
            cursor.saturating_sub(1)
        }
    }

    // Drops everything before the oldest position an active branch keeps, or
    // the whole state once no branch is active.
    fn evict(&mut self) {
        let Some(slowest) = self
            .cursors
            .iter()
            .flatten()
            .map(|&cursor| self.kept_from(cursor))
            .min()
        else {
            self.release();
            return;
        };
        if slowest > self.head {
            self.items.drain(..slowest - self.head);
            self.head = slowest;
            trace!(head = self.head, tail = self.tail, "tee window shrunk");
        }
    }

    fn release(&mut self) {
        if self.source.is_some() || !self.items.is_empty() {
            debug!(
                pulled = self.tail,
                discarded = self.items.len(),
                "all tee branches inactive, releasing source"
            );
        }
        self.items.clear();
        self.head = self.tail;
        self.source = None;
    }
}
