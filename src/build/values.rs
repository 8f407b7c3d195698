use crate::Seq;

/// A finite sequence over an owned list of values.
///
/// Created via [`values`] or the [`seq!`](crate::seq) macro.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Values<T>(Vec<T>);

impl<T: Clone> Seq<T> for Values<T> {
    fn run(&self, accept: &mut dyn FnMut(T) -> bool) {
        for value in &self.0 {
            if !accept(value.clone()) {
                return;
            }
        }
    }
}

/// Create a sequence yielding exactly `items`, in order.
///
/// Each run clones the values out, so the sequence can be run any number of times.
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let seq = values(vec![1, 3, 5, 8]);
/// assert_eq!(seq.to_vec(), vec![1, 3, 5, 8]);
/// assert_eq!(seq.to_vec(), vec![1, 3, 5, 8]);
/// ```
pub fn values<T, I>(items: I) -> Values<T>
where
    I: IntoIterator<Item = T>,
{
    Values(items.into_iter().collect())
}

/// Build a [`Values`] sequence from a literal list.
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let a = seq![1, 3, 5, 8];
/// assert_eq!(a.to_vec(), vec![1, 3, 5, 8]);
/// ```
#[macro_export]
macro_rules! seq {
    ($($value:expr),* $(,)?) => {
        $crate::build::values([$($value),*])
    };
}

/// A sequence that replays a cloneable iterable on every run.
///
/// Created via [`from_iter`].
#[derive(Debug, Clone)]
pub struct FromIter<I>(I);

impl<I> Seq<I::Item> for FromIter<I>
where
    I: IntoIterator + Clone,
{
    fn run(&self, accept: &mut dyn FnMut(I::Item) -> bool) {
        for value in self.0.clone() {
            if !accept(value) {
                return;
            }
        }
    }
}

/// Create a sequence from anything that can be iterated and cloned, such as a range.
///
/// Infinite iterables are fine as long as the consumer eventually refuses a value.
///
/// ```rust
/// use pullseq::prelude::*;
///
/// assert_eq!(from_iter(2..5).to_vec(), vec![2, 3, 4]);
/// assert_eq!(from_iter(1..).take(3).to_vec(), vec![1, 2, 3]);
/// ```
pub fn from_iter<I>(iterable: I) -> FromIter<I>
where
    I: IntoIterator + Clone,
{
    FromIter(iterable)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_yields_in_order() {
        let seq = values(vec!["x".to_string(), "y".to_string()]);
        assert_eq!(seq.to_vec(), vec!["x".to_string(), "y".to_string()]);
        assert_eq!(format!("{seq:?}"), r#"Values(["x", "y"])"#);
    }

    #[test]
    fn test_values_stops_when_refused() {
        let seq = crate::seq![1, 3, 5, 8];
        let mut seen = Vec::new();
        seq.run(&mut |n| {
            seen.push(n);
            n != 3
        });
        assert_eq!(seen, vec![1, 3]);
    }

    #[test]
    fn test_seq_macro_allows_trailing_comma_and_empty() {
        let a = crate::seq![1, 2,];
        assert_eq!(a.to_vec(), vec![1, 2]);

        let b: Values<i32> = crate::seq![];
        assert!(b.to_vec().is_empty());
    }

    #[test]
    fn test_from_iter_replays_the_iterable() {
        let seq = from_iter(vec![4, 5]);
        assert_eq!(seq.to_vec(), vec![4, 5]);
        assert_eq!(seq.to_vec(), vec![4, 5]);
    }
}
