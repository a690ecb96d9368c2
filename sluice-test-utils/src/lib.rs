// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the Sluice stream transformation engine.
//!
//! Designed for development and testing only, not for production code.
//!
//! # Key Types
//!
//! - [`CountingSource`] wraps any source and counts the items pulled from it,
//!   which is how tests assert that early termination stops pulling.
//! - [`FailingSource`] yields a fixed list of items and injects a fault at a
//!   chosen position.
//! - [`RecordingReducer`] logs every `init` / `step` / `complete` call it sees,
//!   so decorator tests can assert exactly what reached the inner reducer.
//! - [`TestData`] with the `person_*` / `animal_*` fixtures.
//!
//! # Examples
//!
//! ```rust
//! use sluice_test_utils::counting;
//! use sluice_core::Source;
//!
//! let (mut source, pulls) = counting(vec![1, 2, 3]);
//! source.pull().unwrap();
//! assert_eq!(pulls.get(), 1);
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod counting_source;
pub mod failing_source;
pub mod helpers;
pub mod recording_reducer;
pub mod test_data;

pub use counting_source::{counting, CountingSource, PullCounter};
pub use failing_source::FailingSource;
pub use helpers::{drain, drain_all};
pub use recording_reducer::{Event, RecordingReducer};
pub use test_data::{
    animal_cat, animal_dog, animal_spider, person_alice, person_bob, person_charlie, mixed,
    TestData,
};
