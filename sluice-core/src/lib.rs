// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Core traits of the Sluice stream transformation engine.
//!
//! - [`Source`] is the single-pass cursor every pipeline pulls from.
//! - [`Reducer`] is the `init` / `step` / `complete` protocol that folds items.
//! - [`Step`] is the sentinel a reducer returns to continue or to stop early.
//! - [`Transducer`] builds fresh decorator reducers around an inner reducer.

#[macro_use]
mod logging;

pub mod into_source;
pub mod iter_source;
pub mod reducer;
pub mod source;
pub mod step;
#[cfg(feature = "stream")]
pub mod stream_source;
pub mod transducer;

pub use self::into_source::{try_source, IntoSource};
pub use self::iter_source::{IterSource, TryIterSource};
pub use self::reducer::{reduce, Reducer};
pub use self::source::Source;
pub use self::step::Step;
#[cfg(feature = "stream")]
pub use self::stream_source::{stream_source, try_stream_source, StreamSource, TryStreamSource};
pub use self::transducer::{Compose, Identity, Transducer};
pub use sluice_error::{IntoSluiceError, Result, ResultExt, SluiceError};
