//! Merge-insertion (Ford-Johnson) sorting.
//!
//! One engine, generic over the element type and over the working sequence that elements get
//! inserted into. `Vec` and `VecDeque` are the two backings shipped here, both as whole-sequence
//! sorts and as in-place slice sorts plugged into the shared `sort_test_tools` suite.

macro_rules! sort_impl {
    ($name:expr, $backing:ty) => {
        use std::cmp::Ordering;

        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> Ordering,
            {
                sort_by(arr, compare);
            }
        }

        #[inline]
        pub fn sort<T>(v: &mut [T])
        where
            T: Ord,
        {
            $crate::slice::sort_by::<$backing, _, _>(v, |a, b| a.lt(b));
        }

        #[inline]
        pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
        where
            F: FnMut(&T, &T) -> Ordering,
        {
            $crate::slice::sort_by::<$backing, _, _>(v, |a, b| compare(a, b) == Ordering::Less);
        }
    };
}

pub mod backing;
pub mod binary_insert;
pub mod input;
pub mod jacobsthal;
pub mod measure;
pub mod merge_insertion;
pub mod report;
pub mod seq;
pub mod slice;

pub use crate::binary_insert::binary_insert;
pub use crate::jacobsthal::insertion_order;
pub use crate::merge_insertion::{
    max_comparisons, merge_insertion_sort, merge_insertion_sort_by, sort_vec, sort_vec_deque,
};
pub use crate::seq::InsertSeq;
