use crate::merge_insertion::merge_insertion_sort_by;
use crate::seq::{collect_into, InsertSeq};

/// Sorts the slice in place with merge-insertion, using `S` as the working sequence.
///
/// Element indices are sorted instead of the elements themselves, so `T` needs neither `Clone`
/// nor `Default`. The slice is only touched once the order is fully known: if `is_less` panics
/// the slice is left exactly as it was.
pub fn sort_by<S, T, F>(v: &mut [T], mut is_less: F)
where
    S: InsertSeq<usize>,
    F: FnMut(&T, &T) -> bool,
{
    if v.len() < 2 {
        return;
    }

    let handles: S = collect_into(0..v.len());
    let sorted = merge_insertion_sort_by(handles, &mut |&a: &usize, &b: &usize| {
        is_less(&v[a], &v[b])
    });

    let mut order = sorted.into_iter().collect::<Vec<_>>();
    apply_permutation(v, &mut order);
}

/// Rearranges `v` so that `v[k]` becomes the element previously at `order[k]`.
///
/// `order` must be a permutation of `0..v.len()` and is used as scratch space.
fn apply_permutation<T>(v: &mut [T], order: &mut [usize]) {
    debug_assert_eq!(v.len(), order.len());

    for start in 0..v.len() {
        let mut cur = start;
        loop {
            let src = order[cur];
            // Mark as placed.
            order[cur] = cur;
            if src == start {
                break;
            }

            v.swap(cur, src);
            cur = src;
        }
    }
}
