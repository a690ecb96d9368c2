// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Splits one single-pass [`Source`](sluice_core::Source) into `n` independent
//! forward-only [`Branch`]es.
//!
//! Branches read at their own pace. The source is pulled at most once per item,
//! however many branches there are. Every active branch keeps the item it
//! last received; items older than the slowest branch's last item are evicted.
//!
//! # Examples
//!
//! ```rust
//! use sluice_core::IntoSource;
//! use sluice_tee::tee;
//!
//! let mut branches = tee(vec!['a', 'b', 'c'].into_source(), 2).unwrap();
//! let mut right = branches.pop().unwrap();
//! let mut left = branches.pop().unwrap();
//!
//! assert_eq!(left.next_value().unwrap(), 'a');
//! assert_eq!(right.next_value().unwrap(), 'a');
//! assert_eq!(right.next_value().unwrap(), 'b');
//! assert_eq!(left.buffer_window().unwrap(), (0, 2));
//!
//! assert_eq!(left.next_value().unwrap(), 'b');
//! assert_eq!(left.buffer_window().unwrap(), (1, 2));
//! ```
//!
//! # Threading
//!
//! The buffer is shared through `Rc<RefCell<_>>`: branches are `!Send` and
//! every branch of one tee must stay on the thread that created it.

#[macro_use]
mod logging;

pub mod branch;
mod buffer;
pub mod tee_ext;

pub use branch::{tee, Branch};
pub use tee_ext::TeeExt;
