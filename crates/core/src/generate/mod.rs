//! Synthetic payload generators.
//!
//! Every generator takes its randomness as `&mut impl Rng` and is otherwise a
//! pure function of its arguments.

pub mod fundamentals;
pub mod history;
pub mod market;
pub mod news;
pub mod portfolio;
pub mod prediction;
pub mod profile;
pub mod recommendations;
pub mod screener;
pub mod technical;

use rand::Rng;

/// Uniformly chosen element of a non-empty slice.
pub(crate) fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

/// `n` distinct elements in random order (fewer if the slice is shorter).
pub(crate) fn sample<T: Copy, R: Rng + ?Sized>(rng: &mut R, items: &[T], n: usize) -> Vec<T> {
    use rand::seq::SliceRandom;
    items.choose_multiple(rng, n).copied().collect()
}

/// Uniform draw on `[lo, hi]`; tolerates `lo == hi`.
pub(crate) fn uniform<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    if hi <= lo {
        return lo;
    }
    rng.gen_range(lo..=hi)
}

/// Uniform draw from an inclusive `(lo, hi)` range.
pub(crate) fn between<R: Rng + ?Sized>(rng: &mut R, range: (f64, f64)) -> f64 {
    uniform(rng, range.0, range.1)
}

#[cfg(test)]
pub(crate) mod testing {
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    pub fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    pub fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()
    }
}
