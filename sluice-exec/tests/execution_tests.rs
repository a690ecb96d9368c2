// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use sluice_core::{IntoSource, SluiceError, Step};
use sluice_exec::{ExecutionState, Transformation};
use sluice_reduce::{Collect, Count, Fold, TakeN};
use sluice_test_utils::{counting, Event, FailingSource, RecordingReducer};

#[test]
fn test_steps_expose_every_intermediate_accumulator() -> anyhow::Result<()> {
    // Arrange
    let mut execution = Transformation::new()
        .with_source(vec![1, 2, 3].into_source())
        .with_sink(Fold::new(0, |acc: i32, x: i32| acc + x))
        .into_execution();

    // Act
    let steps = execution.start()?.collect::<Result<Vec<_>, _>>()?;
    let total = execution.run()?;

    // Assert
    assert_eq!(
        steps,
        vec![Step::Continue(1), Step::Continue(3), Step::Continue(6)]
    );
    assert_eq!(total, 6);
    assert_eq!(execution.state(), ExecutionState::Completed);
    Ok(())
}

#[test]
fn test_steps_end_with_reduced_outcome() -> anyhow::Result<()> {
    // Arrange
    let (source, pulls) = counting(10..);
    let mut execution = Transformation::new()
        .with_source(source)
        .with_steps(TakeN::new(2))
        .with_sink(Count)
        .into_execution();

    // Act
    let steps = execution.start()?.collect::<Result<Vec<_>, _>>()?;

    // Assert
    assert_eq!(steps, vec![Step::Continue(1), Step::Reduced(2)]);
    assert_eq!(execution.state(), ExecutionState::Reduced);
    assert_eq!(pulls.get(), 2);
    assert_eq!(execution.run()?, 2);
    Ok(())
}

#[test]
fn test_second_start_is_a_protocol_violation() -> anyhow::Result<()> {
    // Arrange
    let mut execution = Transformation::new()
        .with_source(vec!['a', 'b', 'c'].into_source())
        .with_sink(Collect)
        .into_execution();

    // Act
    let first = execution.start()?.next();
    let restart = execution.start();

    // Assert
    assert_eq!(first.transpose()?, Some(Step::Continue(vec!['a'])));
    assert!(matches!(
        restart,
        Err(SluiceError::ProtocolViolation { .. })
    ));
    Ok(())
}

#[test]
fn test_partial_iteration_then_run_finishes_remaining_items() -> anyhow::Result<()> {
    // Arrange
    let recorder = RecordingReducer::new();
    let log = recorder.log();
    let mut execution = Transformation::new()
        .with_source(vec![1, 2, 3, 4].into_source())
        .with_sink(recorder)
        .into_execution();

    // Act
    let first_two = execution.start()?.take(2).count();
    let result = execution.run()?;

    // Assert: one init, every item stepped once, one complete
    assert_eq!(first_two, 2);
    assert_eq!(result, vec![1, 2, 3, 4]);
    assert_eq!(
        *log.borrow(),
        vec![
            Event::Init,
            Event::Step(1),
            Event::Step(2),
            Event::Step(3),
            Event::Step(4),
            Event::Complete
        ]
    );
    Ok(())
}

#[test]
fn test_start_after_run_is_rejected() -> anyhow::Result<()> {
    let mut execution = Transformation::new()
        .with_source((0..3).into_source())
        .with_sink(Count)
        .into_execution();

    assert_eq!(execution.run()?, 3);

    assert!(execution.start().is_err());
    assert!(matches!(
        execution.run(),
        Err(SluiceError::ProtocolViolation { .. })
    ));
    Ok(())
}

#[test]
fn test_fault_ends_iteration_and_poisons_execution() {
    // Arrange
    let mut execution = Transformation::new()
        .with_source(FailingSource::new(vec![1, 2, 3], 1))
        .with_sink(Collect)
        .into_execution();

    // Act
    let outcomes = match execution.start() {
        Ok(steps) => steps.collect::<Vec<_>>(),
        Err(error) => panic!("first start must succeed: {error}"),
    };

    // Assert: one good step, then the fault, then nothing
    assert_eq!(outcomes.len(), 2);
    assert!(matches!(outcomes[0], Ok(Step::Continue(_))));
    assert!(matches!(outcomes[1], Err(SluiceError::SourceError { .. })));
    assert_eq!(execution.state(), ExecutionState::Failed);
    assert!(matches!(
        execution.run(),
        Err(SluiceError::ProtocolViolation { .. })
    ));
}

#[test]
fn test_pulled_tracks_source_position() -> anyhow::Result<()> {
    let mut execution = Transformation::new()
        .with_source((0..5).into_source())
        .with_sink(Count)
        .into_execution();

    assert_eq!(execution.state(), ExecutionState::Ready);
    assert_eq!(execution.pulled(), 0);

    let mut steps = execution.start()?;
    steps.next();
    steps.next();
    assert_eq!(steps.pulled(), 2);
    drop(steps);

    execution.run()?;
    assert_eq!(execution.pulled(), 5);
    Ok(())
}

#[test]
fn test_exhausted_steps_stay_exhausted() -> anyhow::Result<()> {
    let mut execution = Transformation::new()
        .with_source(vec![1].into_source())
        .with_sink(Count)
        .into_execution();

    let mut steps = execution.start()?;
    assert!(steps.next().is_some());
    assert!(steps.next().is_none());
    assert!(steps.next().is_none());
    drop(steps);

    assert_eq!(execution.state(), ExecutionState::Exhausted);
    Ok(())
}
