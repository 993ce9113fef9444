//! Jacobsthal numbers and the loser insertion order derived from them.
//!
//! J(0) = 0, J(1) = 1, J(k) = J(k - 1) + 2 * J(k - 2), giving 0, 1, 1, 3, 5, 11, 21, 43, ...
//! Consecutive numbers split the losers into bands `[J(k - 1), J(k))`. Inserting each band
//! highest index first means every binary search in band `k` runs over at most `2^k - 1`
//! elements, which is what makes merge-insertion comparison optimal for small inputs.

/// Iterator over the Jacobsthal numbers, starting at J(0).
///
/// Ends once the next number would overflow `usize`.
#[derive(Clone, Debug)]
pub struct Jacobsthal {
    state: Option<(usize, usize)>,
}

impl Jacobsthal {
    pub fn new() -> Self {
        Self {
            state: Some((0, 1)),
        }
    }
}

impl Default for Jacobsthal {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Jacobsthal {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let (curr, next) = self.state?;
        self.state = curr
            .checked_mul(2)
            .and_then(|double| double.checked_add(next))
            .map(|after| (next, after));

        Some(curr)
    }
}

/// Returns J(k), or `None` if it does not fit into `usize`.
pub fn jacobsthal(k: usize) -> Option<usize> {
    Jacobsthal::new().nth(k)
}

/// Returns the order in which `n` losers are inserted, as a permutation of `0..n`.
///
/// Band `k` covers `[J(k - 1), min(J(k), n))` and is emitted in descending order. Indices past
/// the last representable band are appended in ascending order.
pub fn insertion_order(n: usize) -> Vec<usize> {
    let mut order = Vec::with_capacity(n);
    let mut lower = 0;

    for upper in Jacobsthal::new().skip(1) {
        if lower == n {
            break;
        }

        let upper = upper.min(n);
        if upper > lower {
            order.extend((lower..upper).rev());
            lower = upper;
        }
    }

    order.extend(lower..n);

    order
}
