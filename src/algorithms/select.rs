//! Deterministic selection using the median of medians

use super::primitives::{equal, swap};
use crate::{
    error::{Error, Result},
    metrics::Metrics,
};

/// The size of the groups whose medians are collected
pub const GROUP_SIZE: usize = 5;

/// Returns the element that would be at index `rank` if `slice` was sorted ascending.
///
/// Runs in worst case linear time. `slice` is reordered but not necessarily sorted.
///
/// # Errors
///
/// Returns [`Error::RankOutOfRange`] if `rank >= slice.len()`, before touching `slice` or
/// `metrics`.
pub fn select<T: Ord + Copy>(slice: &mut [T], rank: usize, metrics: &mut Metrics) -> Result<T> {
    if rank >= slice.len() {
        return Err(Error::RankOutOfRange {
            rank,
            len: slice.len(),
        });
    }

    metrics.start_timing();
    let result = median_of_medians_select(slice, rank, metrics);
    metrics.end_timing();

    Ok(result)
}

/// Returns the lower median of `slice`, see [`select`]
pub fn median<T: Ord + Copy>(slice: &mut [T], metrics: &mut Metrics) -> Result<T> {
    let rank = slice.len().saturating_sub(1) / 2;
    select(slice, rank, metrics)
}

/// The actual selection, requires `rank < slice.len()`
fn median_of_medians_select<T: Ord + Copy>(slice: &mut [T], rank: usize, metrics: &mut Metrics) -> T {
    debug_assert!(rank < slice.len());

    metrics.nested(|metrics| {
        if slice.len() <= GROUP_SIZE {
            super::insertionsort::insertion_sort(slice, metrics);
            return slice[rank];
        }

        // Collect the median of every group, the last group may be shorter
        let groups = slice.len().div_ceil(GROUP_SIZE);
        let mut medians = Vec::with_capacity(groups);
        metrics.record_allocation(groups);
        for group in slice.chunks_mut(GROUP_SIZE) {
            super::insertionsort::insertion_sort(group, metrics);
            medians.push(group[(group.len() - 1) / 2]);
        }

        let middle = medians.len() / 2;
        let pivot_value = median_of_medians_select(&mut medians, middle, metrics);

        // The first occurrence of the pivot value becomes the pivot, so equal elements are
        // always resolved the same way
        let mut pivot = 0;
        for (index, element) in slice.iter().enumerate() {
            if equal(element, &pivot_value, metrics) {
                pivot = index;
                break;
            }
        }

        swap(slice, 0, pivot, metrics);
        let pivot = super::quicksort::partition(slice, metrics);

        match rank.cmp(&pivot) {
            std::cmp::Ordering::Equal => slice[pivot],
            std::cmp::Ordering::Less => median_of_medians_select(&mut slice[..pivot], rank, metrics),
            std::cmp::Ordering::Greater => {
                median_of_medians_select(&mut slice[pivot + 1..], rank - pivot - 1, metrics)
            }
        }
    })
}
