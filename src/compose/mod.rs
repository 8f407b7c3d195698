//! Combining sequences together
//!
//! This module provides the combinators behind the provided methods of
//! [`Seq`](crate::Seq): chaining, transforming, filtering and limiting.

mod chain;
mod map;
mod take;

// Re-export composition operations
pub use chain::{chain, Chain};
pub use map::{Enumerate, Filter, Map};
pub use take::Take;
