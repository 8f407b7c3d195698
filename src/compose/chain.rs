use crate::Seq;

/// Run the first sequence to completion, then run the second.
///
/// If the consumer refuses a value from the first sequence, the second never runs.
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let both = chain(seq![1, 2], from_iter(7..9));
/// assert_eq!(both.to_vec(), vec![1, 2, 7, 8]);
/// ```
pub fn chain<T, A, B>(first: A, second: B) -> Chain<A, B>
where
    A: Seq<T>,
    B: Seq<T>,
{
    Chain { first, second }
}

/// Yields one sequence after another.
///
/// Created via [`chain`] or [`Seq::chain`].
#[derive(Debug, Clone)]
pub struct Chain<A, B> {
    first: A,
    second: B,
}

impl<T, A, B> Seq<T> for Chain<A, B>
where
    A: Seq<T>,
    B: Seq<T>,
{
    fn run(&self, accept: &mut dyn FnMut(T) -> bool) {
        let mut open = true;
        self.first.run(&mut |value| {
            open = accept(value);
            open
        });
        if open {
            self.second.run(accept);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};

    use super::*;
    use crate::build::{from_fn, values};

    #[test]
    fn test_chain_yields_first_then_second() {
        let seq = values([1, 2]).chain(values([3])).chain(values([4, 5]));
        assert_eq!(seq.to_vec(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_chain_skips_second_after_refusal_in_first() {
        let second_ran = AtomicBool::new(false);
        let seq = chain(
            values([1, 2, 3]),
            from_fn(|accept| {
                second_ran.store(true, Ordering::SeqCst);
                accept(4);
            }),
        );

        let mut seen = Vec::new();
        seq.run(&mut |n| {
            seen.push(n);
            n < 2
        });
        assert_eq!(seen, vec![1, 2]);
        assert!(!second_ran.load(Ordering::SeqCst));
    }
}
