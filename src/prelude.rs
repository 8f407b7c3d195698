//! Commonly used imports
//!
//! Use `use pullseq::prelude::*;` for quick access to the most common types and functions.

// Core types
pub use crate::{Pull, PullError, Seq};

// Most common constructors
pub use crate::build::{empty, from_fn, from_iter, values};
pub use crate::seq;

// Composition
pub use crate::compose::chain;

// Merging
pub use crate::merge::{merge, merge_by, merge_by_key};

// Execution
pub use crate::cursor::pull;
