//! The instrumented divide and conquer algorithms

use crate::metrics::Metrics;

pub mod closest_pair;
pub mod insertionsort;
pub mod mergesort;
pub mod primitives;
pub mod quicksort;
pub mod select;

/// The default size below which the sorts fall back to insertion sort
pub const DEFAULT_INSERTION_THRESHOLD: usize = 16;

/// A trait for the instrumented sorting algorithms
pub trait Sort {
    /// Whether the sort is stable
    const IS_STABLE: bool;

    /// Sort `slice` ascending in place, recording everything in `metrics`.
    ///
    /// `rng` is only consulted by randomized sorts.
    fn sort<T: Ord + Copy, R: rand::Rng + ?Sized>(
        slice: &mut [T],
        rng: &mut R,
        metrics: &mut Metrics,
    );
}
