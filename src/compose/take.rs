use crate::Seq;

/// Yields at most `n` values of the wrapped sequence.
///
/// Created via [`Seq::take`]. The producer is refused as soon as the `n`th value
/// is accepted, so it never produces an `n + 1`th one. With `n == 0` the
/// producer does not run at all.
#[derive(Debug, Clone)]
pub struct Take<S> {
    seq: S,
    n: usize,
}

impl<S> Take<S> {
    pub(crate) fn new(seq: S, n: usize) -> Self {
        Take { seq, n }
    }
}

impl<T, S> Seq<T> for Take<S>
where
    S: Seq<T>,
{
    fn run(&self, accept: &mut dyn FnMut(T) -> bool) {
        if self.n == 0 {
            return;
        }
        let mut remaining = self.n;
        self.seq.run(&mut |value| {
            if remaining == 0 {
                return false;
            }
            remaining -= 1;
            accept(value) && remaining > 0
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::build::{from_fn, from_iter};

    #[test]
    fn test_take_limits_infinite_producer() {
        assert_eq!(from_iter(5..).take(3).to_vec(), vec![5, 6, 7]);
    }

    #[test]
    fn test_take_never_asks_for_more_than_n() {
        let produced = AtomicUsize::new(0);
        let seq = from_fn(|accept| {
            for n in 0.. {
                produced.fetch_add(1, Ordering::SeqCst);
                if !accept(n) {
                    return;
                }
            }
        })
        .take(4);

        assert_eq!(seq.to_vec(), vec![0, 1, 2, 3]);
        assert_eq!(produced.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn test_take_zero_does_not_run_producer() {
        let seq = from_fn(|_accept: &mut dyn FnMut(i32) -> bool| {
            panic!("producer should not run");
        })
        .take(0);
        assert!(seq.to_vec().is_empty());
    }

    #[test]
    fn test_take_more_than_available() {
        assert_eq!(from_iter(0..2).take(10).to_vec(), vec![0, 1]);
    }
}
