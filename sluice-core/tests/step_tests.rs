// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use sluice_core::Step;

#[test]
fn test_into_inner_unwraps_both_variants() {
    assert_eq!(Step::Continue(3).into_inner(), 3);
    assert_eq!(Step::Reduced(4).into_inner(), 4);
}

#[test]
fn test_is_reduced() {
    assert!(Step::Reduced(()).is_reduced());
    assert!(!Step::Continue(()).is_reduced());
}

#[test]
fn test_map_keeps_variant() {
    assert_eq!(Step::Continue(2).map(|n| n * 10), Step::Continue(20));
    assert_eq!(Step::Reduced(2).map(|n| n + 1), Step::Reduced(3));
}

#[test]
fn test_reduced_promotes_continue() {
    assert_eq!(Step::Continue("acc").reduced(), Step::Reduced("acc"));
    assert_eq!(Step::Reduced("acc").reduced(), Step::Reduced("acc"));
    assert_eq!(*Step::Continue(9).get(), 9);
}
