// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Blocking adapters for asynchronous producers.
//!
//! The engine is pull-based and single-threaded. When the producer is a
//! `futures::Stream`, the current thread blocks at each pull until the producer
//! yields its next item or ends.

use crate::{IterSource, TryIterSource};
use futures::executor::{block_on_stream, BlockingStream};
use futures::Stream;

/// A [`Source`](crate::Source) that blocks on a `Stream` for every pull.
pub type StreamSource<S> = IterSource<BlockingStream<S>>;

/// A [`Source`](crate::Source) that blocks on a `Stream` of `Result`s for every pull.
pub type TryStreamSource<S, T> = TryIterSource<BlockingStream<S>, T>;

/// Adapts a stream into a blocking source.
///
/// # Examples
///
/// ```rust
/// use sluice_core::{stream_source, Source};
///
/// let mut source = stream_source(futures::stream::iter(vec!['a', 'b']));
/// assert_eq!(source.pull().unwrap(), Some('a'));
/// ```
pub fn stream_source<S>(stream: S) -> StreamSource<S>
where
    S: Stream + Unpin,
{
    IterSource::new(block_on_stream(stream))
}

/// Adapts a stream of `Result`s into a blocking source whose errors propagate as faults.
pub fn try_stream_source<S, T, E>(stream: S) -> TryStreamSource<S, T>
where
    S: Stream<Item = core::result::Result<T, E>> + Unpin,
{
    TryIterSource::new(block_on_stream(stream))
}
