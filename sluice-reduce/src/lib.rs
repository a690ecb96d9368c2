// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Decorators and sinks for the Sluice reducer protocol.
//!
//! Every decorator comes as a pair: an immutable [`Transducer`](sluice_core::Transducer)
//! holding its configuration (`TakeN`, `DropWhile`, ...) and the stateful reducer it
//! builds on [`apply`](sluice_core::Transducer::apply) (`TakeNReducer`,
//! `DropWhileReducer`, ...). Sinks are terminal reducers.
//!
//! | Decorator | Delegates |
//! |---|---|
//! | [`DropFirst`] | everything after the first `k` items |
//! | [`DropLast`] | everything except the final `k` items |
//! | [`DropWhile`] | everything from the first item failing the predicate |
//! | [`TakeN`] | the first `k` items, then terminates |
//! | [`TakeLast`] | the final `k` items, at completion |
//! | [`TakeNth`] | items at index `0, n, 2n, ...` |
//! | [`TakeWhile`] | items until the predicate fails, then terminates |
//! | [`TakeUntil`] | items up to and including the first match, then terminates |
//! | [`RandomSample`] | each item with probability `p` |
//! | [`Map`] / [`Filter`] / [`Inspect`] | element-wise transform / selection / tap |
//! | [`Chunk`] | fixed-size `Vec` windows, partial window flushed at completion |

#[macro_use]
mod logging;

pub mod chunk;
pub mod collect;
pub mod drop_first;
pub mod drop_last;
pub mod drop_while;
pub mod filter;
pub mod first_last;
pub mod fold;
pub mod inspect;
pub mod map;
pub mod matches;
pub mod random_sample;
pub mod take_last;
pub mod take_n;
pub mod take_nth;
pub mod take_until;
pub mod take_while;

pub use chunk::{Chunk, ChunkReducer};
pub use collect::{Collect, Count};
pub use drop_first::{DropFirst, DropFirstReducer};
pub use drop_last::{DropLast, DropLastReducer};
pub use drop_while::{DropWhile, DropWhileReducer};
pub use filter::{Filter, FilterReducer};
pub use first_last::{First, Last};
pub use fold::{Fold, TryFold};
pub use inspect::{Inspect, InspectReducer};
pub use map::{Map, MapReducer};
pub use matches::{MatchesAll, MatchesAny, MatchesNone};
pub use random_sample::{RandomSample, RandomSampleReducer};
pub use take_last::{TakeLast, TakeLastReducer};
pub use take_n::{TakeN, TakeNReducer};
pub use take_nth::{TakeNth, TakeNthReducer};
pub use take_until::{TakeUntil, TakeUntilReducer};
pub use take_while::{TakeWhile, TakeWhileReducer};
