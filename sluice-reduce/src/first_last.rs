// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use sluice_core::{Reducer, Result, Step};

/// The first item to arrive, or `None`. Terminates after one item.
#[derive(Debug, Clone, Copy, Default)]
pub struct First;

impl<In> Reducer<In> for First {
    type Acc = Option<In>;
    type Output = Option<In>;

    fn init(&mut self) -> Option<In> {
        None
    }

    fn step(&mut self, _acc: Option<In>, item: In) -> Result<Step<Option<In>>> {
        Ok(Step::Reduced(Some(item)))
    }

    fn complete(&mut self, acc: Option<In>) -> Result<Option<In>> {
        Ok(acc)
    }
}

/// The last item to arrive, or `None`. Consumes the whole source.
#[derive(Debug, Clone, Copy, Default)]
pub struct Last;

impl<In> Reducer<In> for Last {
    type Acc = Option<In>;
    type Output = Option<In>;

    fn init(&mut self) -> Option<In> {
        None
    }

    fn step(&mut self, _acc: Option<In>, item: In) -> Result<Step<Option<In>>> {
        Ok(Step::Continue(Some(item)))
    }

    fn complete(&mut self, acc: Option<In>) -> Result<Option<In>> {
        Ok(acc)
    }
}
