//! Stable merge of two sorted sequences.
//!
//! [`merge()`] reads its inputs through two [`Pull`](crate::Pull) cursors and
//! always hands the smaller head to the consumer. The result is itself a
//! [`Seq`], so merges nest:
//!
//! ```rust
//! use pullseq::prelude::*;
//!
//! let merged = merge(merge(seq![1, 4], seq![2, 5]), seq![3, 6]);
//! assert_eq!(merged.to_vec(), vec![1, 2, 3, 4, 5, 6]);
//! ```

use std::{cmp::Ordering, fmt, sync::Arc};

use tracing::trace;

use crate::{cursor::pull, Seq};

/// Merge two non-decreasing sequences into one non-decreasing sequence.
///
/// Every value of both inputs appears in the output, duplicates included. When
/// the heads compare equal, `a`'s value comes first. The inputs are assumed to
/// be sorted already; unsorted input yields unsorted output, nothing is checked.
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let merged = merge(seq![1, 3, 5, 8], seq![2, 4, 6, 7]);
/// assert_eq!(merged.to_vec(), vec![1, 2, 3, 4, 5, 6, 7, 8]);
/// ```
pub fn merge<T, A, B>(a: A, b: B) -> Merge<A, B, fn(&T, &T) -> Ordering>
where
    A: Seq<T> + Send + Sync + 'static,
    B: Seq<T> + Send + Sync + 'static,
    T: Ord + Send + 'static,
{
    merge_by(a, b, Ord::cmp as fn(&T, &T) -> Ordering)
}

/// Merge two sequences sorted according to `cmp`.
///
/// `a`'s head is emitted whenever `cmp(a_head, b_head)` is not `Greater`.
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let desc = merge_by(seq![9, 4, 1], seq![8, 4], |x: &i32, y: &i32| y.cmp(x));
/// assert_eq!(desc.to_vec(), vec![9, 8, 4, 4, 1]);
/// ```
pub fn merge_by<T, A, B, C>(a: A, b: B, cmp: C) -> Merge<A, B, C>
where
    A: Seq<T> + Send + Sync + 'static,
    B: Seq<T> + Send + Sync + 'static,
    C: Fn(&T, &T) -> Ordering,
    T: Send + 'static,
{
    Merge {
        a: Arc::new(a),
        b: Arc::new(b),
        cmp,
    }
}

/// Merge two sequences sorted by the key `key` extracts.
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let words = merge_by_key(seq!["a", "ccc"], seq!["bb", "dddd"], |w: &&str| w.len());
/// assert_eq!(words.to_vec(), vec!["a", "bb", "ccc", "dddd"]);
/// ```
pub fn merge_by_key<T, K, A, B, F>(
    a: A,
    b: B,
    key: F,
) -> Merge<A, B, impl Fn(&T, &T) -> Ordering + Send + Sync>
where
    A: Seq<T> + Send + Sync + 'static,
    B: Seq<T> + Send + Sync + 'static,
    F: Fn(&T) -> K + Send + Sync,
    K: Ord,
    T: Send + 'static,
{
    merge_by(a, b, move |x: &T, y: &T| key(x).cmp(&key(y)))
}

/// The ordered union of two sorted sequences.
///
/// Created via [`merge`], [`merge_by`], [`merge_by_key`] or [`Seq::merge`]. Each
/// run opens a fresh cursor on both inputs and stops both before returning,
/// whether the inputs ran out or the consumer refused a value.
pub struct Merge<A, B, C> {
    a: Arc<A>,
    b: Arc<B>,
    cmp: C,
}

impl<A, B, C: Clone> Clone for Merge<A, B, C> {
    fn clone(&self) -> Self {
        Merge {
            a: Arc::clone(&self.a),
            b: Arc::clone(&self.b),
            cmp: self.cmp.clone(),
        }
    }
}

impl<A: fmt::Debug, B: fmt::Debug, C> fmt::Debug for Merge<A, B, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Merge")
            .field("a", &self.a)
            .field("b", &self.b)
            .finish_non_exhaustive()
    }
}

impl<T, A, B, C> Seq<T> for Merge<A, B, C>
where
    A: Seq<T> + Send + Sync + 'static,
    B: Seq<T> + Send + Sync + 'static,
    C: Fn(&T, &T) -> Ordering,
    T: Send + 'static,
{
    fn run(&self, accept: &mut dyn FnMut(T) -> bool) {
        // Dropping a cursor stops it, so an unwinding `accept` releases both too.
        let mut left = pull(Arc::clone(&self.a));
        let mut right = pull(Arc::clone(&self.b));
        let mut a = left.next();
        let mut b = right.next();

        loop {
            let from_left = match (&a, &b) {
                (Some(x), Some(y)) => (self.cmp)(x, y) != Ordering::Greater,
                (Some(_), None) => true,
                (None, Some(_)) => false,
                (None, None) => break,
            };
            let (head, cursor) = if from_left {
                (&mut a, &mut left)
            } else {
                (&mut b, &mut right)
            };
            let Some(value) = head.take() else {
                break;
            };

            if !accept(value) {
                trace!("merge refused by consumer");
                break;
            }
            *head = cursor.next();
        }

        left.stop();
        right.stop();
    }
}
