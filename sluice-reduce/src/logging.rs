// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

// Conditional logging shim: uses `tracing` when enabled, compiles to nothing otherwise

#[cfg(feature = "tracing")]
macro_rules! trace {
    ($($arg:tt)*) => {{
        tracing::trace!($($arg)*);
    }};
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace {
    ($($arg:tt)*) => {{}};
}

// Decorators that only narrow the stream hand `init` and `complete` straight to
// the reducer they wrap.
macro_rules! forward_lifecycle {
    () => {
        fn init(&mut self) -> Self::Acc {
            self.inner.init()
        }

        fn complete(&mut self, acc: Self::Acc) -> Result<Self::Output> {
            self.inner.complete(acc)
        }
    };
}
