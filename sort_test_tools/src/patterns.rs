//! Input patterns for testing and benchmarking sorts. Currently limited to i32 values.
//!
//! All random patterns draw from a seed that is fixed per process, so a failing run can be
//! reproduced by passing the printed seed back in via `OVERRIDE_SEED`.

use std::env;
use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::Lazy;
use rand::prelude::*;
use zipf::ZipfDistribution;

// --- Public ---

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    random_vec(len)
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    // :.:.:.::
    let mut rng = new_rng();

    // Abstracting over ranges in Rust :(
    let dist: rand::distributions::Uniform<i32> = range.into();

    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

/// Values the command line accepts, `1..=i32::MAX`.
pub fn random_positive(len: usize) -> Vec<i32> {
    random_uniform(len, 1..=i32::MAX)
}

/// A shuffled `1..=len`, every value distinct. This is what `shuf -i 1-N -n N` would produce.
pub fn random_distinct(len: usize) -> Vec<i32> {
    let mut vals = (1..=len as i32).collect::<Vec<_>>();
    vals.shuffle(&mut new_rng());

    vals
}

pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    // https://en.wikipedia.org/wiki/Zipf's_law
    let mut rng = new_rng();

    let Ok(dist) = ZipfDistribution::new(len, exponent) else {
        return Vec::new();
    };

    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

pub fn random_sorted(len: usize, sorted_percent: f64) -> Vec<i32> {
    //     .:
    //   .:::. :
    // .::::::.::
    // [----][--]
    // sorted  unsorted

    let mut v = random_vec(len);
    let sorted_len = ((len as f64) * (sorted_percent / 100.0)).round() as usize;

    v[0..sorted_len].sort_unstable();

    v
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect()
}

/// Ascending overall, but every adjacent pair is swapped: `1 0 3 2 5 4 ..`. The first element
/// of every pair is the larger one.
pub fn pairs_descending(len: usize) -> Vec<i32> {
    //  :  :  :
    // ::.::.::.

    (0..len as i32).map(|i| i ^ 1).map(|i| i.min(len as i32 - 1)).collect()
}

pub fn saw_ascending(len: usize, saw_count: usize) -> Vec<i32> {
    //   .:  .:
    // .:::.:::

    saw(len, saw_count, |_| false)
}

pub fn saw_descending(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.
    // :::.:::.

    saw(len, saw_count, |_| true)
}

pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    let directions = random_uniform(saw_count.max(1) + 1, 0..=1);
    saw(len, saw_count, |i| directions.get(i).copied() == Some(1))
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random_vec(len);

    let (first_half, second_half) = vals.split_at_mut(len / 2);
    first_half.sort_unstable();
    second_half.sort_unstable_by_key(|&e| std::cmp::Reverse(e));

    vals
}

/// Makes each call to a random pattern yield new values, instead of the same values per process.
///
/// Meant for benchmarks, where repeating the exact same input would skew the results.
///
/// # Panics
///
/// Panics if the seed is overridden via `OVERRIDE_SEED`, the two requests contradict each other.
pub fn use_random_seed_each_time() {
    if env::var_os("OVERRIDE_SEED").is_some() {
        panic!("Using use_random_seed_each_time conflicts with the external seed override.");
    }

    RANDOM_EACH_TIME.store(true, Ordering::Release);
}

pub fn random_init_seed() -> u64 {
    if RANDOM_EACH_TIME.load(Ordering::Acquire) {
        thread_rng().gen()
    } else {
        *PROCESS_SEED
    }
}

// --- Private ---

static RANDOM_EACH_TIME: AtomicBool = AtomicBool::new(false);

static PROCESS_SEED: Lazy<u64> = Lazy::new(|| {
    env::var("OVERRIDE_SEED")
        .ok()
        .and_then(|seed| seed.parse().ok())
        .unwrap_or_else(|| thread_rng().gen())
});

fn saw(len: usize, saw_count: usize, mut descending: impl FnMut(usize) -> bool) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let mut vals = random_vec(len);
    let chunk_len = (len / saw_count.max(1)).max(1);

    for (i, chunk) in vals.chunks_mut(chunk_len).enumerate() {
        if descending(i) {
            chunk.sort_unstable_by_key(|&e| std::cmp::Reverse(e));
        } else {
            chunk.sort_unstable();
        }
    }

    vals
}

fn new_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

fn random_vec(len: usize) -> Vec<i32> {
    let mut rng = new_rng();

    (0..len).map(|_| rng.gen::<i32>()).collect()
}
