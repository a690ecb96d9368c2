// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use sluice_core::{reduce, IntoSource, SluiceError};
use sluice_reduce::{Count, First, Fold, Last, MatchesAll, MatchesAny, MatchesNone, TryFold};
use sluice_test_utils::{counting, mixed, person_alice, TestData};
use std::num::ParseIntError;

#[test]
fn test_quantifiers_over_empty_source() {
    let empty = || Vec::<i32>::new().into_source();
    assert!(!reduce(empty(), MatchesAny::new(|_: &i32| true)).unwrap());
    assert!(reduce(empty(), MatchesAll::new(|_: &i32| false)).unwrap());
    assert!(reduce(empty(), MatchesNone::new(|_: &i32| true)).unwrap());
}

#[test]
fn test_matches_any_stops_at_first_match() {
    // Arrange
    let (source, pulls) = counting(vec![1, 3, 4, 5, 6]);

    // Act
    let found = reduce(source, MatchesAny::new(|x: &i32| x % 2 == 0)).unwrap();

    // Assert
    assert!(found);
    assert_eq!(pulls.get(), 3);
}

#[test]
fn test_matches_any_without_match() {
    let found = reduce(vec![1, 3].into_source(), MatchesAny::new(|x: &i32| *x > 10)).unwrap();
    assert!(!found);
}

#[test]
fn test_matches_all_stops_at_first_failure() {
    let (source, pulls) = counting(mixed());
    let all_people = reduce(source, MatchesAll::new(TestData::is_person)).unwrap();
    assert!(!all_people);
    assert_eq!(pulls.get(), 2);
}

#[test]
fn test_matches_all_true_when_every_item_passes() {
    let (source, pulls) = counting(1..=50);
    assert!(reduce(source, MatchesAll::new(|x: &i32| *x > 0)).unwrap());
    assert_eq!(pulls.get(), 50);
}

#[test]
fn test_matches_none() {
    let (source, pulls) = counting(mixed());
    let no_alice = reduce(source, MatchesNone::new(|d: &TestData| *d == person_alice())).unwrap();
    assert!(!no_alice);
    assert_eq!(pulls.get(), 1);

    let no_fish = reduce(
        mixed().into_source(),
        MatchesNone::new(|d: &TestData| d.name() == "Fish"),
    )
    .unwrap();
    assert!(no_fish);
}

#[test]
fn test_count_first_last() {
    assert_eq!(reduce((0..7).into_source(), Count).unwrap(), 7);
    assert_eq!(reduce(Vec::<u8>::new().into_source(), First).unwrap(), None);
    assert_eq!(reduce(Vec::<u8>::new().into_source(), Last).unwrap(), None);
    assert_eq!(reduce(vec!['a', 'b', 'c'].into_source(), Last).unwrap(), Some('c'));
}

#[test]
fn test_first_pulls_once() {
    let (source, pulls) = counting(10..);
    assert_eq!(reduce(source, First).unwrap(), Some(10));
    assert_eq!(pulls.get(), 1);
}

#[test]
fn test_fold_is_reusable() {
    let mut sum = Fold::new(0, |acc: i32, x: i32| acc + x);
    assert_eq!(reduce((1..=4).into_source(), &mut sum).unwrap(), 10);
    assert_eq!(reduce((1..=2).into_source(), &mut sum).unwrap(), 3);
}

#[test]
fn test_try_fold_propagates_closure_error() {
    // Arrange
    let (source, pulls) = counting(vec!["1", "2", "x", "4"]);
    let parse_sum = TryFold::new(0i64, |acc: i64, s: &str| {
        s.parse::<i64>().map(|n| acc + n)
    });

    // Act
    let err = reduce(source, parse_sum).unwrap_err();

    // Assert
    assert!(matches!(err, SluiceError::UserError(_)));
    assert_eq!(pulls.get(), 3);
}

#[test]
fn test_try_fold_success() {
    let parse_sum = TryFold::new(0i64, |acc: i64, s: &str| -> Result<i64, ParseIntError> {
        Ok(acc + s.parse::<i64>()?)
    });
    assert_eq!(reduce(vec!["4", "5"].into_source(), parse_sum).unwrap(), 9);
}
