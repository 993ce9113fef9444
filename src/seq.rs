use std::collections::VecDeque;
use std::ops::Index;

/// An ordered, randomly indexable sequence that can grow by insertion at any position.
///
/// This is everything merge-insertion needs from its working sequence. The working sequence is
/// only ever grown through [`InsertSeq::push`] while it is being built and
/// [`InsertSeq::insert`] while losers are merged back, never reordered by other means.
pub trait InsertSeq<T>: Index<usize, Output = T> + IntoIterator<Item = T> + Sized {
    /// Label used by reports and benchmark ids.
    const NAME: &'static str;

    fn with_capacity(capacity: usize) -> Self;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends `value` at the end.
    fn push(&mut self, value: T);

    /// Inserts `value` at `index`, shifting every element at or after `index` one slot to the
    /// right.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    fn insert(&mut self, index: usize, value: T);
}

impl<T> InsertSeq<T> for Vec<T> {
    const NAME: &'static str = "Vec";

    #[inline]
    fn with_capacity(capacity: usize) -> Self {
        Vec::with_capacity(capacity)
    }

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn push(&mut self, value: T) {
        Vec::push(self, value);
    }

    #[inline]
    fn insert(&mut self, index: usize, value: T) {
        Vec::insert(self, index, value);
    }
}

impl<T> InsertSeq<T> for VecDeque<T> {
    const NAME: &'static str = "VecDeque";

    #[inline]
    fn with_capacity(capacity: usize) -> Self {
        VecDeque::with_capacity(capacity)
    }

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn push(&mut self, value: T) {
        self.push_back(value);
    }

    #[inline]
    fn insert(&mut self, index: usize, value: T) {
        VecDeque::insert(self, index, value);
    }
}

/// Moves every element yielded by `iter` into a fresh `S`, in order.
pub fn collect_into<T, S, I>(iter: I) -> S
where
    S: InsertSeq<T>,
    I: IntoIterator<Item = T>,
{
    let iter = iter.into_iter();
    let mut seq = S::with_capacity(iter.size_hint().0);
    for value in iter {
        seq.push(value);
    }

    seq
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_and_insert<S: InsertSeq<i32>>() -> Vec<i32> {
        let mut seq: S = collect_into([10, 20, 30]);
        seq.insert(0, 5);
        seq.insert(2, 15);
        seq.insert(seq.len(), 35);

        assert_eq!(seq.len(), 6);
        assert_eq!(seq[1], 10);

        seq.into_iter().collect()
    }

    #[test]
    fn backings_agree() {
        let expected = vec![5, 10, 15, 20, 30, 35];
        assert_eq!(fill_and_insert::<Vec<i32>>(), expected);
        assert_eq!(fill_and_insert::<VecDeque<i32>>(), expected);
    }

    #[test]
    fn empty() {
        let seq: VecDeque<u8> = InsertSeq::with_capacity(4);
        assert!(InsertSeq::is_empty(&seq));
        assert_eq!(<Vec<u8> as InsertSeq<u8>>::NAME, "Vec");
        assert_eq!(<VecDeque<u8> as InsertSeq<u8>>::NAME, "VecDeque");
    }
}
