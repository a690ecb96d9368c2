// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use sluice_core::{reduce, Compose, Identity, IntoSource, Reducer, Result, Step, Transducer};
use sluice_test_utils::RecordingReducer;

/// Hands `(index, item)` pairs to the inner reducer.
struct Enumerate;

struct EnumerateReducer<R> {
    inner: R,
    index: usize,
}

impl<In> Transducer<In> for Enumerate {
    type Out = (usize, In);
    type Wrapped<R: Reducer<(usize, In)>> = EnumerateReducer<R>;

    fn apply<R: Reducer<(usize, In)>>(&self, inner: R) -> EnumerateReducer<R> {
        EnumerateReducer { inner, index: 0 }
    }
}

impl<In, R: Reducer<(usize, In)>> Reducer<In> for EnumerateReducer<R> {
    type Acc = R::Acc;
    type Output = R::Output;

    fn init(&mut self) -> R::Acc {
        self.inner.init()
    }

    fn step(&mut self, acc: R::Acc, item: In) -> Result<Step<R::Acc>> {
        let index = self.index;
        self.index += 1;
        self.inner.step(acc, (index, item))
    }

    fn complete(&mut self, acc: R::Acc) -> Result<R::Output> {
        self.inner.complete(acc)
    }
}

#[test]
fn test_identity_passes_items_through() {
    let reducer = Transducer::<char>::apply(&Identity, RecordingReducer::new());
    let result = reduce(vec!['x', 'y'].into_source(), reducer).unwrap();
    assert_eq!(result, vec!['x', 'y']);
}

#[test]
fn test_apply_builds_fresh_state_per_run() {
    // Arrange
    let enumerate = Enumerate;

    // Act: two independent runs from the same transducer
    let first = reduce(
        vec!['a', 'b'].into_source(),
        enumerate.apply(RecordingReducer::new()),
    )
    .unwrap();
    let second = reduce(
        vec!['c'].into_source(),
        enumerate.apply(RecordingReducer::new()),
    )
    .unwrap();

    // Assert: the second run starts counting from zero again
    assert_eq!(first, vec![(0, 'a'), (1, 'b')]);
    assert_eq!(second, vec![(0, 'c')]);
}

#[test]
fn test_compose_runs_first_then_second() {
    let chain = Compose::new(Enumerate, Enumerate);
    let result = reduce(
        vec!["p", "q"].into_source(),
        chain.apply(RecordingReducer::new()),
    )
    .unwrap();
    assert_eq!(result, vec![(0, (0, "p")), (1, (1, "q"))]);
}

#[test]
fn test_compose_with_identity_is_neutral() {
    let chain = Compose::new(Identity, Compose::new(Enumerate, Identity));
    let result = reduce(
        vec![true].into_source(),
        chain.apply(RecordingReducer::new()),
    )
    .unwrap();
    assert_eq!(result, vec![(0, true)]);
}
