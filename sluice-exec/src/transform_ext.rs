// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{NoSink, Transformation};
use sluice_core::{Identity, Source};

/// Extension trait starting a [`Transformation`] from a source.
pub trait TransformExt: Source + Sized {
    /// A transformation with this source bound and no decorators yet.
    ///
    /// ```rust
    /// use sluice_core::IntoSource;
    /// use sluice_exec::TransformExt;
    /// use sluice_reduce::{Count, DropFirst};
    ///
    /// let rest = (0..10)
    ///     .into_source()
    ///     .transform()
    ///     .with_steps(DropFirst::new(4))
    ///     .with_sink(Count)
    ///     .execute()
    ///     .unwrap();
    /// assert_eq!(rest, 6);
    /// ```
    fn transform(self) -> Transformation<Self, Identity, NoSink> {
        Transformation::new().with_source(self)
    }
}

impl<S: Source> TransformExt for S {}
