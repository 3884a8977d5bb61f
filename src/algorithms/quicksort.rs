//! The randomized quicksort implementation

use rand::Rng;

use super::primitives::{less, shuffle, swap};
use crate::metrics::Metrics;

/// The default `INSERTION_THRESHOLD` to use
pub const DEFAULT_INSERTION_THRESHOLD: usize = super::DEFAULT_INSERTION_THRESHOLD;

/// The Quicksort [`super::Sort`]
///
/// Shuffles the input once, then partitions around uniformly random pivots. Only the smaller
/// partition is sorted recursively, the larger one is handled by the same stack frame, which
/// keeps the recursion depth logarithmic.
pub struct QuickSort<const INSERTION_THRESHOLD: usize = DEFAULT_INSERTION_THRESHOLD>;

impl<const INSERTION_THRESHOLD: usize> super::Sort for QuickSort<INSERTION_THRESHOLD> {
    const IS_STABLE: bool = false;

    fn sort<T: Ord + Copy, R: Rng + ?Sized>(slice: &mut [T], rng: &mut R, metrics: &mut Metrics) {
        if slice.len() < 2 {
            return;
        }

        metrics.start_timing();
        shuffle(slice, rng, metrics);
        Self::quicksort(slice, rng, metrics);
        metrics.end_timing();
    }
}

impl<const INSERTION_THRESHOLD: usize> QuickSort<INSERTION_THRESHOLD> {
    /// Quicksort the given slice
    fn quicksort<T: Ord, R: Rng + ?Sized>(mut slice: &mut [T], rng: &mut R, metrics: &mut Metrics) {
        while slice.len() > 1 {
            // Use insertion sort for small slices
            if slice.len() <= INSERTION_THRESHOLD {
                super::insertionsort::insertion_sort(slice, metrics);
                return;
            }

            metrics.enter_recursion();

            let pivot = rng.random_range(0..slice.len());
            swap(slice, 0, pivot, metrics);
            let pivot = partition(slice, metrics);

            let (left, right) = std::mem::take(&mut slice).split_at_mut(pivot);
            let right = &mut right[1..];

            // Recurse into the smaller partition, continue with the larger one
            if left.len() < right.len() {
                Self::quicksort(left, rng, metrics);
                slice = right;
            } else {
                Self::quicksort(right, rng, metrics);
                slice = left;
            }

            metrics.exit_recursion();
        }
    }
}

/// Partition `slice` around the pivot `slice[0]` and return the final index of the pivot.
///
/// Afterwards every element left of the returned index is not greater than the pivot and every
/// element right of it is not less than the pivot. Requires `slice.len() >= 2`.
pub(crate) fn partition<T: Ord>(slice: &mut [T], metrics: &mut Metrics) -> usize {
    debug_assert!(slice.len() >= 2);

    let mut i = 1;
    let mut j = slice.len() - 1;
    loop {
        while i <= j && less(&slice[i], &slice[0], metrics) {
            i += 1;
        }
        while j >= i && less(&slice[0], &slice[j], metrics) {
            j -= 1;
        }

        if i >= j {
            break;
        }

        swap(slice, i, j, metrics);
        i += 1;
        j -= 1;
    }

    // Swap the pivot into place
    swap(slice, 0, j, metrics);
    j
}

/// Quicksort the given slice using the default [`QuickSort`] and `rng`
pub fn quick_sort<T: Ord + Copy, R: Rng + ?Sized>(slice: &mut [T], rng: &mut R, metrics: &mut Metrics) {
    <QuickSort as super::Sort>::sort(slice, rng, metrics);
}
