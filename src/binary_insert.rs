use crate::seq::InsertSeq;

/// Returns the leftmost index in `sorted[..end]` whose element is not less than `value`.
///
/// `sorted[..end]` must be ascending with respect to `is_less`. Performs at most
/// `ceil(log2(end + 1))` comparisons.
///
/// # Panics
///
/// Panics if `end > sorted.len()`.
pub fn lower_bound_by<T, S, F>(sorted: &S, end: usize, value: &T, is_less: &mut F) -> usize
where
    S: InsertSeq<T>,
    F: FnMut(&T, &T) -> bool,
{
    assert!(end <= sorted.len());

    let (mut lo, mut hi) = (0, end);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if is_less(&sorted[mid], value) {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }

    lo
}

/// Inserts `value` at its lower bound within `sorted[..end]` and returns the index it was placed
/// at.
///
/// Passing an `end` smaller than `sorted.len()` is only correct if `value` is known not to be
/// greater than `sorted[end]`.
#[inline]
pub fn binary_insert_by<T, S, F>(sorted: &mut S, end: usize, value: T, is_less: &mut F) -> usize
where
    S: InsertSeq<T>,
    F: FnMut(&T, &T) -> bool,
{
    let pos = lower_bound_by(sorted, end, &value, is_less);
    sorted.insert(pos, value);

    pos
}

/// Inserts `value` into the ascending `sorted`, keeping it ascending.
pub fn binary_insert<T, S>(sorted: &mut S, value: T)
where
    T: Ord,
    S: InsertSeq<T>,
{
    let end = sorted.len();
    binary_insert_by(sorted, end, value, &mut |a: &T, b: &T| a.lt(b));
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;

    fn ceil_log2(value: usize) -> usize {
        (usize::BITS - value.saturating_sub(1).leading_zeros()) as usize
    }

    #[test]
    fn into_empty() {
        let mut v: Vec<i32> = Vec::new();
        binary_insert(&mut v, 7);
        assert_eq!(v, [7]);

        let mut d: VecDeque<i32> = VecDeque::new();
        binary_insert(&mut d, -7);
        assert_eq!(d, [-7]);
    }

    #[test]
    fn keeps_order() {
        let mut v = vec![1, 4, 9];
        for x in [0, 10, 5, 4, 2] {
            binary_insert(&mut v, x);
        }
        assert_eq!(v, [0, 1, 2, 4, 4, 5, 9, 10]);
    }

    #[test]
    fn leftmost_among_equal() {
        let v = vec![1, 5, 5, 5, 9];
        assert_eq!(lower_bound_by(&v, v.len(), &5, &mut |a, b| a < b), 1);
        assert_eq!(lower_bound_by(&v, v.len(), &6, &mut |a, b| a < b), 4);
        assert_eq!(lower_bound_by(&v, v.len(), &10, &mut |a, b| a < b), 5);
    }

    #[test]
    fn bounded_prefix() {
        // 8 is known to be below the element at index 3.
        let mut v = vec![2, 6, 7, 11, 3];
        let pos = binary_insert_by(&mut v, 3, 8, &mut |a, b| a < b);
        assert_eq!(pos, 3);
        assert_eq!(v, [2, 6, 7, 8, 11, 3]);

        let pos = binary_insert_by(&mut v, 0, 1, &mut |a, b| a < b);
        assert_eq!(pos, 0);
    }

    #[test]
    fn comparison_bound() {
        for len in 0..70 {
            let sorted = (0..len as i32).map(|x| x * 2).collect::<Vec<_>>();

            for value in -1..=(len as i32 * 2) {
                let mut comps = 0;
                let pos = lower_bound_by(&sorted, len, &value, &mut |a, b| {
                    comps += 1;
                    a < b
                });

                assert_eq!(pos, sorted.partition_point(|&x| x < value));
                assert!(comps <= ceil_log2(len + 1), "len={len} value={value}");
            }
        }
    }

    #[test]
    #[should_panic]
    fn end_past_len() {
        let v = vec![1, 2];
        lower_bound_by(&v, 3, &0, &mut |a, b| a < b);
    }
}
