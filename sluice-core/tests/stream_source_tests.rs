// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::channel::mpsc;
use futures::stream;
use sluice_core::{stream_source, try_stream_source, SluiceError, Source};
use sluice_test_utils::drain;
use std::{io, thread};

#[test]
fn test_stream_source_drains_ready_stream() {
    let mut source = stream_source(stream::iter(vec![1, 2, 3]));
    assert_eq!(drain(&mut source).unwrap(), vec![1, 2, 3]);
}

#[test]
fn test_stream_source_blocks_on_external_producer() {
    // Arrange: an external producer pushing into an async channel
    let (tx, rx) = mpsc::unbounded::<u32>();
    let producer = thread::spawn(move || {
        for n in 0..4 {
            tx.unbounded_send(n).unwrap();
        }
    });

    // Act: each pull blocks until the producer delivers or hangs up
    let mut source = stream_source(rx);
    let items = drain(&mut source).unwrap();
    producer.join().unwrap();

    // Assert
    assert_eq!(items, vec![0, 1, 2, 3]);
}

#[test]
fn test_try_stream_source_surfaces_errors() {
    let items: Vec<Result<&str, io::Error>> = vec![Ok("a"), Err(io::Error::other("reset"))];
    let mut source = try_stream_source(stream::iter(items));

    assert_eq!(source.pull().unwrap(), Some("a"));
    assert!(matches!(source.pull(), Err(SluiceError::UserError(_))));
    assert_eq!(source.pull().unwrap(), None);
}
