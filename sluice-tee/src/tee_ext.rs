// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{tee, Branch};
use sluice_core::{Result, Source};

/// Extension trait providing the `tee` operator for sources.
pub trait TeeExt: Source + Sized
where
    Self::Item: Clone,
{
    /// Splits this source into `branches` independent cursors.
    ///
    /// # Errors
    ///
    /// Returns `SluiceError::InvalidArgument` if `branches` is 0.
    fn tee(self, branches: usize) -> Result<Vec<Branch<Self>>> {
        tee(self, branches)
    }
}

impl<S> TeeExt for S
where
    S: Source,
    S::Item: Clone,
{
}
