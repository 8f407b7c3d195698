//! Transforming the values a sequence produces.
//!
//! This module provides [`Map`], [`Filter`] and [`Enumerate`]. Each wraps a
//! producer and rewrites what reaches the consumer, passing the consumer's
//! refusal straight back to the producer.

use std::{fmt, marker::PhantomData};

use crate::Seq;

/// Transforms each value of the wrapped sequence.
///
/// Created via [`Seq::map`].
pub struct Map<S, F, T> {
    seq: S,
    f: F,
    _phantom: PhantomData<fn(T)>,
}

impl<S, F, T> Map<S, F, T> {
    pub(crate) fn new(seq: S, f: F) -> Self {
        Map {
            seq,
            f,
            _phantom: PhantomData,
        }
    }
}

impl<S: fmt::Debug, F, T> fmt::Debug for Map<S, F, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map").field("seq", &self.seq).finish_non_exhaustive()
    }
}

impl<T, U, S, F> Seq<U> for Map<S, F, T>
where
    S: Seq<T>,
    F: Fn(T) -> U,
{
    fn run(&self, accept: &mut dyn FnMut(U) -> bool) {
        self.seq.run(&mut |value| accept((self.f)(value)))
    }
}

/// Drops the values that do not match a predicate.
///
/// Created via [`Seq::filter`]. Dropped values do not count as refusals.
pub struct Filter<S, F> {
    seq: S,
    pred: F,
}

impl<S, F> Filter<S, F> {
    pub(crate) fn new(seq: S, pred: F) -> Self {
        Filter { seq, pred }
    }
}

impl<S: fmt::Debug, F> fmt::Debug for Filter<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter").field("seq", &self.seq).finish_non_exhaustive()
    }
}

impl<T, S, F> Seq<T> for Filter<S, F>
where
    S: Seq<T>,
    F: Fn(&T) -> bool,
{
    fn run(&self, accept: &mut dyn FnMut(T) -> bool) {
        self.seq
            .run(&mut |value| if (self.pred)(&value) { accept(value) } else { true })
    }
}

/// Pairs each value with its zero-based position.
///
/// Created via [`Seq::enumerate`]. The count restarts with every run.
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let pairs = seq!["a", "b"].enumerate();
/// assert_eq!(pairs.to_vec(), vec![(0, "a"), (1, "b")]);
/// ```
#[derive(Debug, Clone)]
pub struct Enumerate<S> {
    seq: S,
}

impl<S> Enumerate<S> {
    pub(crate) fn new(seq: S) -> Self {
        Enumerate { seq }
    }
}

impl<T, S> Seq<(usize, T)> for Enumerate<S>
where
    S: Seq<T>,
{
    fn run(&self, accept: &mut dyn FnMut((usize, T)) -> bool) {
        let mut index = 0;
        self.seq.run(&mut |value| {
            let pair = (index, value);
            index += 1;
            accept(pair)
        })
    }
}
