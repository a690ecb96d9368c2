// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use sluice_core::{reduce, IntoSource, Reducer, Source, Step};
use sluice_test_utils::{
    counting, drain_all, mixed, person_alice, CountingSource, Event, RecordingReducer, TestData,
};

#[test]
fn test_counting_source_counts_successful_pulls_only() {
    // Arrange
    let (mut source, pulls) = counting(vec![1, 2]);

    // Act
    source.has_more().unwrap();
    source.has_more().unwrap();
    source.pull().unwrap();

    // Assert: looking ahead is not pulling
    assert_eq!(pulls.get(), 1);
    assert_eq!(source.probes(), 3);
}

#[test]
fn test_counting_source_wraps_any_source() {
    let (mut source, pulls) = CountingSource::new(mixed().into_source());
    let first: Option<TestData> = source.pull().unwrap();
    assert_eq!(first, Some(person_alice()));
    assert_eq!(pulls.get(), 1);
}

#[test]
fn test_drain_all_keeps_source_order() {
    let mut sources = vec![vec![1, 2].into_source(), vec![3].into_source()];
    assert_eq!(drain_all(&mut sources).unwrap(), vec![vec![1, 2], vec![3]]);
}

#[test]
fn test_recording_reducer_logs_protocol() {
    // Arrange
    let recorder = RecordingReducer::new();
    let log = recorder.log();

    // Act
    let result = reduce(vec!["x", "y"].into_source(), recorder).unwrap();

    // Assert
    assert_eq!(result, vec!["x", "y"]);
    assert_eq!(
        *log.borrow(),
        vec![Event::Init, Event::Step("x"), Event::Step("y"), Event::Complete]
    );
}

#[test]
fn test_recording_reducer_requests_termination() {
    // Arrange
    let mut recorder = RecordingReducer::new().reduce_after(2);

    // Act
    let acc = recorder.init();
    let acc = recorder.step(acc, 1).unwrap().into_inner();
    let last = recorder.step(acc, 2).unwrap();

    // Assert
    assert_eq!(last, Step::Reduced(vec![1, 2]));
    assert_eq!(recorder.items(), vec![1, 2]);
    assert_eq!(recorder.completions(), 0);
}

#[test]
fn test_fixtures_display() {
    assert_eq!(person_alice().to_string(), "Person[name=Alice, age=25]");
    assert_eq!(mixed()[3].to_string(), "Animal[name=Spider, legs=8]");
}
