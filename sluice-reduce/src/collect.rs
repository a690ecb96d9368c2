// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use sluice_core::{Reducer, Result, Step};

/// Collects every item into a `Vec`, in arrival order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Collect;

impl<In> Reducer<In> for Collect {
    type Acc = Vec<In>;
    type Output = Vec<In>;

    fn init(&mut self) -> Vec<In> {
        Vec::new()
    }

    fn step(&mut self, mut acc: Vec<In>, item: In) -> Result<Step<Vec<In>>> {
        acc.push(item);
        Ok(Step::Continue(acc))
    }

    fn complete(&mut self, acc: Vec<In>) -> Result<Vec<In>> {
        Ok(acc)
    }
}

/// Counts the items that reach it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Count;

impl<In> Reducer<In> for Count {
    type Acc = usize;
    type Output = usize;

    fn init(&mut self) -> usize {
        0
    }

    fn step(&mut self, acc: usize, _item: In) -> Result<Step<usize>> {
        Ok(Step::Continue(acc + 1))
    }

    fn complete(&mut self, acc: usize) -> Result<usize> {
        Ok(acc)
    }
}
