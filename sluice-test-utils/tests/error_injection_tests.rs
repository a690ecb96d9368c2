// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use sluice_core::{SluiceError, Source};
use sluice_test_utils::{drain, FailingSource};

#[test]
fn test_failing_source_faults_at_position() {
    // Arrange
    let mut source = FailingSource::new(vec!['a', 'b', 'c'], 1);

    // Act
    let first = source.pull();
    let fault = source.pull();
    let resumed = source.pull();

    // Assert
    assert_eq!(first.unwrap(), Some('a'));
    assert!(matches!(fault, Err(SluiceError::SourceError { .. })));
    assert_eq!(resumed.unwrap(), Some('c'));
    assert_eq!(source.position(), 3);
}

#[test]
fn test_failing_source_faults_only_once() {
    let mut source = FailingSource::new(vec![1, 2], 0);
    assert!(drain(&mut source).is_err());
    assert_eq!(drain(&mut source).unwrap(), vec![2]);
}

#[test]
fn test_failing_source_beyond_end_never_faults() {
    let mut source = FailingSource::new(vec![1, 2], 5);
    assert_eq!(drain(&mut source).unwrap(), vec![1, 2]);
    assert!(matches!(source.advance(), Err(SluiceError::SourceExhausted)));
}
