use std::time::{Duration, Instant};

use tracing::debug;

use crate::merge_insertion::merge_insertion_sort;
use crate::seq::{collect_into, InsertSeq};

/// Result of one timed sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measurement<T> {
    /// [`InsertSeq::NAME`] of the backing that was sorted.
    pub backing: &'static str,
    pub sorted: Vec<T>,
    pub elapsed: Duration,
}

impl<T> Measurement<T> {
    pub fn elapsed_micros(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1_000_000.0
    }
}

/// Copies `input` into an `S`, sorts it and times the sort call alone.
pub fn measure<T, S>(input: &[T]) -> Measurement<T>
where
    T: Ord + Clone,
    S: InsertSeq<T>,
{
    let seq: S = collect_into(input.iter().cloned());

    let start = Instant::now();
    let sorted = merge_insertion_sort(seq);
    let elapsed = start.elapsed();

    debug!(backing = S::NAME, len = input.len(), ?elapsed, "sorted");

    Measurement {
        backing: S::NAME,
        sorted: sorted.into_iter().collect(),
        elapsed,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;

    #[test]
    fn both_backings() {
        let input = [3u32, 5, 9, 7, 4];

        let vec = measure::<u32, Vec<u32>>(&input);
        let deque = measure::<u32, VecDeque<u32>>(&input);

        assert_eq!(vec.backing, "Vec");
        assert_eq!(deque.backing, "VecDeque");
        assert_eq!(vec.sorted, [3, 4, 5, 7, 9]);
        assert_eq!(vec.sorted, deque.sorted);
        assert!(vec.elapsed_micros() >= 0.0);
    }

    #[test]
    fn empty_input() {
        let m = measure::<u32, Vec<u32>>(&[]);
        assert!(m.sorted.is_empty());
    }
}
