// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Drives a source through a decorator chain into a sink.
//!
//! [`Transformation`] is a type-state builder: `execute` only exists once a
//! source and a sink are bound. [`Execution`] is a single run, either driven to
//! completion at once or observed step by step through [`Steps`].

#[macro_use]
mod logging;

pub mod execution;
pub mod transform_ext;
pub mod transformation;

pub use execution::{Execution, ExecutionState, Steps};
pub use transform_ext::TransformExt;
pub use transformation::{NoSink, NoSource, Transformation};
