// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use sluice_core::{Result, Source};

/// Pulls every remaining item out of `source`.
///
/// # Errors
///
/// Stops at and returns the first fault.
pub fn drain<S: Source>(source: &mut S) -> Result<Vec<S::Item>> {
    let mut items = Vec::new();
    while let Some(item) = source.pull()? {
        items.push(item);
    }
    Ok(items)
}

/// Drains each source in turn, returning one vector per source.
///
/// # Errors
///
/// Stops at and returns the first fault.
pub fn drain_all<S: Source>(sources: &mut [S]) -> Result<Vec<Vec<S::Item>>> {
    sources.iter_mut().map(drain).collect()
}
