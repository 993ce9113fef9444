//! Merge-insertion sort, also known as the Ford-Johnson algorithm.
//!
//! Adjacent elements are paired, the larger element of every pair (the winner) is sorted
//! recursively, and the smaller elements (the losers) are merged back with binary insertion.
//! Losers are inserted in Jacobsthal order and each search is cut off at the current position of
//! the loser's own winner, which keeps every search range at `2^k - 1` elements or fewer. The
//! result uses at most `F(n) = sum(ceil(log2(3k / 4)))` comparisons for `k` in `1..=n`, see
//! [`max_comparisons`].

use std::collections::VecDeque;

use crate::binary_insert::binary_insert_by;
use crate::jacobsthal::insertion_order;
use crate::seq::InsertSeq;

/// Sorts `v` in ascending order.
///
/// This sort is not stable (i.e., may reorder equal elements) and consumes its input, returning
/// the same elements in a sequence of the same type.
#[inline]
pub fn merge_insertion_sort<T, S>(v: S) -> S
where
    T: Ord,
    S: InsertSeq<T>,
{
    merge_insertion_sort_by(v, &mut |a: &T, b: &T| a.lt(b))
}

/// Sorts `v` with the strict weak ordering `is_less`.
///
/// If `is_less` is not a strict weak ordering the output order is unspecified, but it is still
/// made up of exactly the input elements.
#[inline]
pub fn merge_insertion_sort_by<T, S, F>(v: S, is_less: &mut F) -> S
where
    S: InsertSeq<T>,
    F: FnMut(&T, &T) -> bool,
{
    merge_insertion(v, is_less).0
}

pub fn sort_vec<T: Ord>(v: Vec<T>) -> Vec<T> {
    merge_insertion_sort(v)
}

pub fn sort_vec_deque<T: Ord>(v: VecDeque<T>) -> VecDeque<T> {
    merge_insertion_sort(v)
}

/// Worst case number of comparisons merge-insertion performs for `n` elements.
///
/// This is `sum(ceil(log2(3k / 4)))` for `k` in `1..=n`, which matches the information
/// theoretic lower bound `ceil(log2(n!))` for every `n <= 11`.
pub fn max_comparisons(n: usize) -> usize {
    // ceil(log2(3k / 4)) == ceil(log2(3k)) - 2, clamped at zero.
    (1..=n)
        .map(|k| ceil_log2(3 * k).saturating_sub(2))
        .sum()
}

/// Worst case number of comparisons of plain binary insertion sort for `n` elements.
pub fn binary_insertion_comparisons(n: usize) -> usize {
    (1..n).map(|len| ceil_log2(len + 1)).sum()
}

fn ceil_log2(value: usize) -> usize {
    (usize::BITS - value.saturating_sub(1).leading_zeros()) as usize
}

/// Sorts `v` and returns the permutation it applied alongside: `origin[k]` is the input index of
/// the element that ended up at position `k`.
///
/// The permutation is what lets the caller one level up find the loser that belongs to each
/// sorted winner.
fn merge_insertion<T, S, F>(v: S, is_less: &mut F) -> (S, Vec<usize>)
where
    S: InsertSeq<T>,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len <= 1 {
        return (v, (0..len).collect());
    }

    let pair_count = len / 2;
    let mut winners = S::with_capacity(pair_count);
    let mut winner_origin = Vec::with_capacity(pair_count);
    let mut losers = Vec::with_capacity(pair_count);
    let mut loser_origin = Vec::with_capacity(pair_count);
    let mut pending = None;

    // Pair up neighbours, on ties the second element wins.
    let mut input = v.into_iter();
    while let Some(first) = input.next() {
        let Some(second) = input.next() else {
            pending = Some(first);
            break;
        };

        let first_idx = 2 * losers.len();
        if is_less(&second, &first) {
            winners.push(first);
            winner_origin.push(first_idx);
            losers.push(Some(second));
            loser_origin.push(first_idx + 1);
        } else {
            winners.push(second);
            winner_origin.push(first_idx + 1);
            losers.push(Some(first));
            loser_origin.push(first_idx);
        }
    }

    let pair_count = losers.len();
    let (mut chain, winner_rank) = merge_insertion(winners, is_less);

    // winner_rank[k] is the pair whose winner sits at sorted position k.
    let mut chain_origin = Vec::with_capacity(len);
    chain_origin.extend(winner_rank.iter().map(|&pair| winner_origin[pair]));

    // Current position of the k-th smallest winner inside the chain.
    let mut winner_pos = (0..pair_count).collect::<Vec<_>>();

    // The pending element is the loser without a winner, it takes the index after the last pair.
    let insert_count = pair_count + usize::from(pending.is_some());
    for k in insertion_order(insert_count) {
        let (value, origin, end) = if k < pair_count {
            let pair = winner_rank[k];
            let Some(loser) = losers[pair].take() else {
                continue;
            };
            (loser, loser_origin[pair], winner_pos[k])
        } else {
            let Some(last) = pending.take() else {
                continue;
            };
            (last, len - 1, chain.len())
        };

        let pos = binary_insert_by(&mut chain, end, value, is_less);
        chain_origin.insert(pos, origin);

        for p in winner_pos.iter_mut().filter(|p| **p >= pos) {
            *p += 1;
        }
    }

    (chain, chain_origin)
}
