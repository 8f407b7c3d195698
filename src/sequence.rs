//! Core trait for producer-driven sequences.
//!
//! A [`Seq<T>`] is a push sequence: calling [`run`](Seq::run) makes the producer
//! hand each of its values to an acceptance callback, in order, until the callback
//! answers `false` or the producer runs out. Every call starts over from the
//! beginning, so a `Seq` describes *how* to produce values rather than holding
//! a position in them. Use [`pull`](crate::pull()) to get a position.
//!
//! # Examples
//!
//! ```rust
//! use pullseq::prelude::*;
//!
//! let evens = from_iter(0..10).filter(|n| n % 2 == 0).map(|n| n * 10);
//! assert_eq!(evens.to_vec(), vec![0, 20, 40, 60, 80]);
//!
//! // Refusing a value stops the producer.
//! let mut seen = Vec::new();
//! evens.run(&mut |n| {
//!     seen.push(n);
//!     n < 20
//! });
//! assert_eq!(seen, vec![0, 20]);
//! ```

use std::{cmp::Ordering, sync::Arc};

use either::Either;

use crate::{
    compose::{Chain, Enumerate, Filter, Map, Take},
    cursor::{pull, Pull},
    merge::{merge, merge_by, Merge},
};

/// A sequence that drives iteration itself.
///
/// Implementors call `accept` once per value, in order, and return as soon as
/// `accept` returns `false`. A [`Pull`] cursor answers any later `accept` call
/// with `false` as well, but other consumers may not.
pub trait Seq<T> {
    /// Produce values into `accept` until it refuses one or the values run out.
    fn run(&self, accept: &mut dyn FnMut(T) -> bool);

    /// Like [`run`](Seq::run), taking the callback by value.
    fn for_each_while<F>(&self, mut f: F)
    where
        Self: Sized,
        F: FnMut(T) -> bool,
    {
        self.run(&mut f)
    }

    /// Drain every value into a `Vec`.
    fn to_vec(&self) -> Vec<T> {
        let mut out = Vec::new();
        self.run(&mut |value| {
            out.push(value);
            true
        });
        out
    }

    /// Transform each value.
    fn map<U, F>(self, f: F) -> Map<Self, F, T>
    where
        Self: Sized,
        F: Fn(T) -> U,
    {
        Map::new(self, f)
    }

    /// Keep only the values matching `pred`.
    fn filter<F>(self, pred: F) -> Filter<Self, F>
    where
        Self: Sized,
        F: Fn(&T) -> bool,
    {
        Filter::new(self, pred)
    }

    /// Yield at most `n` values, stopping the producer once the last one is accepted.
    fn take(self, n: usize) -> Take<Self>
    where
        Self: Sized,
    {
        Take::new(self, n)
    }

    /// Pair each value with its position, giving a sequence of `(usize, T)`.
    fn enumerate(self) -> Enumerate<Self>
    where
        Self: Sized,
    {
        Enumerate::new(self)
    }

    /// Yield every value of `self`, then every value of `other`.
    fn chain<S>(self, other: S) -> Chain<Self, S>
    where
        Self: Sized,
        S: Seq<T>,
    {
        crate::compose::chain(self, other)
    }

    /// Merge two non-decreasing sequences. See [`merge`](crate::merge()).
    fn merge<S>(self, other: S) -> Merge<Self, S, fn(&T, &T) -> Ordering>
    where
        Self: Sized + Send + Sync + 'static,
        S: Seq<T> + Send + Sync + 'static,
        T: Ord + Send + 'static,
    {
        merge(self, other)
    }

    /// Merge two sequences sorted by `cmp`. See [`merge_by`](crate::merge_by).
    fn merge_by<S, C>(self, other: S, cmp: C) -> Merge<Self, S, C>
    where
        Self: Sized + Send + Sync + 'static,
        S: Seq<T> + Send + Sync + 'static,
        C: Fn(&T, &T) -> Ordering,
        T: Send + 'static,
    {
        merge_by(self, other, cmp)
    }

    /// Turn this sequence into a pull cursor. See [`pull`](crate::pull()).
    fn into_pull(self) -> Pull<T>
    where
        Self: Sized + Send + 'static,
        T: Send + 'static,
    {
        pull(self)
    }

    fn boxed(self) -> Box<dyn Seq<T> + Send + Sync>
    where
        Self: Sized + Send + Sync + 'static,
    {
        Box::new(self)
    }
}

impl<T, S> Seq<T> for &S
where
    S: Seq<T> + ?Sized,
{
    fn run(&self, accept: &mut dyn FnMut(T) -> bool) {
        (**self).run(accept)
    }
}

impl<T, S> Seq<T> for Box<S>
where
    S: Seq<T> + ?Sized,
{
    fn run(&self, accept: &mut dyn FnMut(T) -> bool) {
        (**self).run(accept)
    }
}

impl<T, S> Seq<T> for Arc<S>
where
    S: Seq<T> + ?Sized,
{
    fn run(&self, accept: &mut dyn FnMut(T) -> bool) {
        (**self).run(accept)
    }
}

impl<T, L, R> Seq<T> for Either<L, R>
where
    L: Seq<T>,
    R: Seq<T>,
{
    fn run(&self, accept: &mut dyn FnMut(T) -> bool) {
        match self {
            Either::Left(l) => l.run(accept),
            Either::Right(r) => r.run(accept),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{from_fn, from_iter, values};

    #[test]
    fn test_run_restarts_from_the_beginning() {
        let seq = values([1, 2, 3]);
        assert_eq!(seq.to_vec(), vec![1, 2, 3]);
        assert_eq!(seq.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_for_each_while_stops_on_refusal() {
        let mut seen = Vec::new();
        from_iter(1..).for_each_while(|n| {
            seen.push(n);
            n < 4
        });
        assert_eq!(seen, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_either_branches_share_a_type() {
        fn pick(small: bool) -> Either<impl Seq<i32>, impl Seq<i32>> {
            if small {
                Either::Left(values([1, 2]))
            } else {
                Either::Right(from_iter(10..13))
            }
        }

        assert_eq!(pick(true).to_vec(), vec![1, 2]);
        assert_eq!(pick(false).to_vec(), vec![10, 11, 12]);
    }

    #[test]
    fn test_boxed_and_shared_sequences() {
        let boxed = values(["a", "b"]).boxed();
        assert_eq!(boxed.to_vec(), vec!["a", "b"]);

        let shared = Arc::new(from_iter(0..3));
        assert_eq!(shared.to_vec(), vec![0, 1, 2]);
        assert_eq!((&shared).to_vec(), vec![0, 1, 2]);
    }

    #[test]
    fn test_closure_producer_with_early_stop() {
        let seq = from_fn(|accept| {
            let mut n = 0;
            loop {
                n += 1;
                if !accept(n) {
                    return;
                }
            }
        });

        let mut last = 0;
        seq.run(&mut |n| {
            last = n;
            n < 5
        });
        assert_eq!(last, 5);
    }
}
