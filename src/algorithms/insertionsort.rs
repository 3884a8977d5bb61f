//! Instrumented insertion sort, used as the base case of the divide and conquer algorithms

use super::primitives::{less, swap};
use crate::metrics::Metrics;

/// The insertion [`super::Sort`]
pub struct InsertionSort;

impl super::Sort for InsertionSort {
    const IS_STABLE: bool = true;

    fn sort<T: Ord + Copy, R: rand::Rng + ?Sized>(
        slice: &mut [T],
        _rng: &mut R,
        metrics: &mut Metrics,
    ) {
        if slice.len() < 2 {
            return;
        }

        metrics.start_timing();
        insertion_sort(slice, metrics);
        metrics.end_timing();
    }
}

/// Sort `slice` using insertion sort, moving elements by adjacent swaps
pub fn insertion_sort<T: Ord>(slice: &mut [T], metrics: &mut Metrics) {
    for i in 1..slice.len() {
        for j in (0..i).rev() {
            if less(&slice[j + 1], &slice[j], metrics) {
                swap(slice, j + 1, j, metrics);
            } else {
                break;
            }
        }
    }
}
