//! # pullseq: Push Sequences and Pull Cursors
//!
//! Write producers as plain loops that hand values to a callback, then consume
//! them one value at a time, or merge several of them in order.
//!
//! ## Core Types
//!
//! - **[`Seq<T>`]**: Push sequences. The producer drives the loop and calls an
//!   acceptance callback per value, stopping when the callback returns `false`
//! - **[`Pull<T>`]**: Pull cursors. Wrap any `Seq` to get explicit `next()` and
//!   `stop()`, with the producer suspended in between
//! - **[`Merge`]**: The ordered union of two sorted sequences, built on two cursors
//!
//! ## Example
//!
//! ```
//! use pullseq::prelude::*;
//!
//! // Two sorted producers, merged lazily
//! let merged = merge(seq![1, 3, 5, 8], seq![2, 4, 6, 7]);
//!
//! // Consume until a value of 7 or more shows up; both inputs get stopped
//! let mut out = Vec::new();
//! merged.run(&mut |n| {
//!     if n >= 7 {
//!         return false;
//!     }
//!     out.push(n);
//!     true
//! });
//! assert_eq!(out, vec![1, 2, 3, 4, 5, 6]);
//!
//! // Or pull values on demand
//! let mut cursor = pull(merged);
//! assert_eq!(cursor.next(), Some(1));
//! assert_eq!(cursor.next(), Some(2));
//! cursor.stop();
//! ```
//!
//! ## Common Functions
//!
//! **Building Sequences:**
//! - [`values(items)`](build::values) / [`seq!`] - A fixed list of values
//! - [`from_iter(iterable)`](build::from_iter) - Replay a cloneable iterable, such as a range
//! - [`from_fn(f)`](build::from_fn) - A producer written as a closure
//!
//! **Consuming:**
//! - [`pull`] - Demand-driven cursor with `next()` / `stop()`
//! - [`Builder`] - Configure the producer context behind a cursor
//!
//! **Combining:**
//! - [`merge()`] / [`merge_by`] / [`merge_by_key`] - Stable sorted merge
//! - [`Seq::map`], [`Seq::filter`], [`Seq::take`], [`Seq::enumerate`], [`Seq::chain`]

pub mod build;
pub mod compose;
mod cursor;
mod error;
mod merge;
pub mod prelude;
mod sequence;
mod step;

pub use cursor::*;
pub use error::*;
pub use merge::*;
pub use sequence::*;
