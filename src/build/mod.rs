//! Building sequences from scratch
//!
//! This module provides functions and types for creating new push sequences.

mod func;
mod values;

// Re-export building blocks
pub use func::{empty, from_fn, Empty, FromFn};
pub use values::{from_iter, values, FromIter, Values};
