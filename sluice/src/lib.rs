// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Sluice
//!
//! A pull-based stream transformation engine: composable decorators over a
//! single-pass source, early termination without exceptions, and a tee that
//! lets several consumers read one source at their own pace.
//!
//! ## Overview
//!
//! - A [`Source`] is pulled forward one item at a time and never rewound.
//! - A [`Reducer`] folds items with `init` / `step` / `complete`; returning
//!   [`Step::Reduced`] from `step` stops the pulling.
//! - A [`Transducer`] describes a decorator (`TakeN`, `DropWhile`, ...) and
//!   builds fresh decorator state for every run.
//! - A [`Transformation`] binds a source, a decorator chain and a sink.
//! - [`tee`] splits one source into independent [`Branch`]es that pull each
//!   item from the source once.
//!
//! ## Quick Start
//!
//! ```rust
//! use sluice::prelude::*;
//!
//! # fn main() -> sluice::Result<()> {
//! let evens = (1..)
//!     .into_source()
//!     .transform()
//!     .with_steps(Filter::new(|x: &u32| x % 2 == 0))
//!     .with_steps(TakeN::new(3))
//!     .with_sink(Collect)
//!     .execute()?;
//!
//! assert_eq!(evens, vec![2, 4, 6]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! - `tracing` (default): emit `tracing` events from every crate.
//! - `stream` (default): adapt a blocking `futures::Stream` into a [`Source`].

// Re-export core types
pub use sluice_core::{
    reduce, try_source, Compose, Identity, IntoSluiceError, IntoSource, IterSource, Reducer,
    Result, ResultExt, SluiceError, Source, Step, Transducer, TryIterSource,
};
#[cfg(feature = "stream")]
pub use sluice_core::{stream_source, try_stream_source, StreamSource, TryStreamSource};

// Re-export the execution driver
pub use sluice_exec::{
    Execution, ExecutionState, NoSink, NoSource, Steps, TransformExt, Transformation,
};

// Re-export the tee
pub use sluice_tee::{tee, Branch, TeeExt};

/// Decorators and sinks.
pub mod reducers {
    pub use sluice_reduce::*;
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        IntoSource, Reducer, Result, SluiceError, Source, Step, TeeExt, TransformExt,
        Transducer, Transformation,
    };
    pub use sluice_reduce::{
        Chunk, Collect, Count, DropFirst, DropLast, DropWhile, Filter, First, Fold, Inspect, Last,
        Map, MatchesAll, MatchesAny, MatchesNone, RandomSample, TakeLast, TakeN, TakeNth,
        TakeUntil, TakeWhile, TryFold,
    };
}
