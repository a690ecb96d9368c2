// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions)]
//! Error types for the Sluice stream transformation engine
//!
//! Every fallible operation in the workspace returns [`SluiceError`]. The variants
//! fall into three groups:
//!
//! - **Construction errors** ([`SluiceError::InvalidArgument`]) are raised while a
//!   decorator, sink or tee is being built, never deferred to execution.
//! - **Execution faults** ([`SluiceError::SourceError`], [`SluiceError::UserError`],
//!   [`SluiceError::ProcessingError`]) are raised by a source or by user code and
//!   propagated unchanged to the caller.
//! - **Protocol misuse** ([`SluiceError::ProtocolViolation`],
//!   [`SluiceError::SourceExhausted`]) signals a programmer error such as restarting
//!   a single-pass iterator.
//!
//! # Examples
//!
//! ```
//! use sluice_error::{SluiceError, Result};
//!
//! fn window(size: usize) -> Result<usize> {
//!     if size == 0 {
//!         return Err(SluiceError::invalid_argument("window size must be at least 1"));
//!     }
//!     Ok(size)
//! }
//!
//! assert!(window(0).unwrap_err().is_construction());
//! ```

/// Root error type for all Sluice operations
#[derive(Debug, thiserror::Error)]
pub enum SluiceError {
    /// A constructor received a parameter it cannot work with
    ///
    /// Raised at build time, e.g. a zero branch count or a sampling
    /// probability outside `0.0..=1.0`.
    #[error("Invalid argument: {context}")]
    InvalidArgument {
        /// Which parameter was rejected and why
        context: String,
    },

    /// The caller broke the single-pass protocol
    ///
    /// Restarting an execution that already started, reading from a
    /// deactivated branch or finishing an execution twice all land here.
    #[error("Protocol violation: {context}")]
    ProtocolViolation {
        /// What the caller attempted
        context: String,
    },

    /// An item was requested from a source that has none left
    #[error("Source exhausted: no further items can be pulled")]
    SourceExhausted,

    /// The source failed while producing the next item
    #[error("Source error: {context}")]
    SourceError {
        /// Description of the failure
        context: String,
    },

    /// A step of a transformation failed with additional context
    #[error("Processing error: {context}")]
    ProcessingError {
        /// Description of what went wrong while processing
        context: String,
    },

    /// Custom error from user code
    ///
    /// Wraps errors produced by user-provided closures, fallible iterators and
    /// external producers so they propagate through the engine untouched.
    #[error("User error: {0}")]
    UserError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SluiceError {
    /// Create an invalid argument error with the given context
    pub fn invalid_argument(context: impl Into<String>) -> Self {
        Self::InvalidArgument {
            context: context.into(),
        }
    }

    /// Create a protocol violation error with the given context
    pub fn protocol_violation(context: impl Into<String>) -> Self {
        Self::ProtocolViolation {
            context: context.into(),
        }
    }

    /// Create a source error with the given context
    pub fn source_error(context: impl Into<String>) -> Self {
        Self::SourceError {
            context: context.into(),
        }
    }

    /// Create a processing error with the given context
    pub fn processing_error(context: impl Into<String>) -> Self {
        Self::ProcessingError {
            context: context.into(),
        }
    }

    /// Wrap a user error
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }

    /// Check if this error was raised while building a component
    #[must_use]
    pub const fn is_construction(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Check if this error is a programmer error rather than a runtime fault
    #[must_use]
    pub const fn is_misuse(&self) -> bool {
        matches!(self, Self::ProtocolViolation { .. } | Self::SourceExhausted)
    }

    /// Check if this error was raised by a source or by user code during a run
    #[must_use]
    pub const fn is_fault(&self) -> bool {
        matches!(
            self,
            Self::SourceError { .. } | Self::ProcessingError { .. } | Self::UserError(_)
        )
    }
}

/// Specialized Result type for Sluice operations
///
/// # Examples
///
/// ```
/// use sluice_error::Result;
///
/// fn pulled() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, SluiceError>;

/// Extension trait for converting errors into `SluiceError`
///
/// Implemented for every `std::error::Error + Send + Sync + 'static`.
pub trait IntoSluiceError {
    /// Convert this error into a `SluiceError` with additional context
    fn into_sluice_error(self, context: &str) -> SluiceError;

    /// Convert this error into a `SluiceError` without additional context
    fn into_sluice(self) -> SluiceError
    where
        Self: Sized,
    {
        self.into_sluice_error("")
    }
}

impl<E: std::error::Error + Send + Sync + 'static> IntoSluiceError for E {
    fn into_sluice_error(self, context: &str) -> SluiceError {
        if context.is_empty() {
            SluiceError::user_error(self)
        } else {
            SluiceError::processing_error(format!("{context}: {self}"))
        }
    }
}

/// Helper trait for adding context to `Result`s
pub trait ResultExt<T> {
    /// Add context to an error
    ///
    /// User errors are folded into a [`SluiceError::ProcessingError`] carrying the
    /// context; every other variant is preserved as is.
    ///
    /// # Errors
    /// Returns `Err(SluiceError)` if the underlying result is `Err`.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context to an error using a closure (lazy evaluation)
    ///
    /// # Errors
    /// Returns `Err(SluiceError)` if the underlying result is `Err`.
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<SluiceError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| attach(e.into(), context.into()))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| attach(e.into(), f()))
    }
}

fn attach(error: SluiceError, context: String) -> SluiceError {
    match error {
        SluiceError::UserError(inner) => SluiceError::ProcessingError {
            context: format!("{context}: {inner}"),
        },
        other => other,
    }
}
