use std::{fmt, marker::PhantomData};

use crate::Seq;

/// A push sequence backed by a closure.
///
/// Created via [`from_fn`].
pub struct FromFn<F>(F);

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

impl<T, F> Seq<T> for FromFn<F>
where
    F: Fn(&mut dyn FnMut(T) -> bool),
{
    fn run(&self, accept: &mut dyn FnMut(T) -> bool) {
        (self.0)(accept)
    }
}

/// Create a push sequence from a closure.
///
/// The closure receives the acceptance callback and should return as soon as
/// the callback answers `false`. State the closure needs per run belongs inside
/// it; anything it captures is shared between runs.
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let squares = from_fn(|accept| {
///     for n in 1..=4 {
///         if !accept(n * n) {
///             return;
///         }
///     }
/// });
/// assert_eq!(squares.to_vec(), vec![1, 4, 9, 16]);
/// ```
pub fn from_fn<T, F>(f: F) -> FromFn<F>
where
    F: Fn(&mut dyn FnMut(T) -> bool),
{
    FromFn(f)
}

/// A sequence with no values. Created via [`empty`].
pub struct Empty<T>(PhantomData<fn() -> T>);

impl<T> fmt::Debug for Empty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Empty")
    }
}

impl<T> Seq<T> for Empty<T> {
    fn run(&self, _accept: &mut dyn FnMut(T) -> bool) {}
}

/// Create a sequence that never calls its acceptance callback.
pub fn empty<T>() -> Empty<T> {
    Empty(PhantomData)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn test_from_fn_respects_refusal() {
        let calls = AtomicUsize::new(0);
        let seq = from_fn(|accept| {
            for n in 0..100 {
                calls.fetch_add(1, Ordering::SeqCst);
                if !accept(n) {
                    return;
                }
            }
        });

        let mut taken = Vec::new();
        seq.run(&mut |n| {
            taken.push(n);
            taken.len() < 3
        });
        assert_eq!(taken, vec![0, 1, 2]);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_debug_skips_the_closure() {
        let seq = from_fn(|accept: &mut dyn FnMut(i32) -> bool| {
            accept(1);
        });
        assert_eq!(format!("{seq:?}"), "FromFn { .. }");
        assert_eq!(format!("{:?}", empty::<i32>()), "Empty");
    }

    #[test]
    fn test_empty_never_accepts() {
        let seq = empty::<u8>();
        seq.run(&mut |_| panic!("empty sequence produced a value"));
        assert!(seq.to_vec().is_empty());
    }
}
