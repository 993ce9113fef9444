// In-place slice sorts, one per working sequence type.

/// Working sequence is a contiguous `Vec`: cheap indexing, insertion shifts the tail.
pub mod vec {
    sort_impl!("merge_insertion_vec", Vec<usize>);
}

/// Working sequence is a ring buffer `VecDeque`: insertion shifts whichever side is shorter.
pub mod vec_deque {
    sort_impl!("merge_insertion_vec_deque", std::collections::VecDeque<usize>);
}
