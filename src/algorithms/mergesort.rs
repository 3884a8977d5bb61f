//! The top down mergesort implementation

use super::primitives::less;
use crate::metrics::Metrics;

/// The default `INSERTION_THRESHOLD` to use
pub const DEFAULT_INSERTION_THRESHOLD: usize = super::DEFAULT_INSERTION_THRESHOLD;

/// The default `CHECK_SORTED` to use
pub const DEFAULT_CHECK_SORTED: bool = true;

/// The Top-Down Mergesort [`super::Sort`]
///
/// - `INSERTION_THRESHOLD`: slices of at most this length are insertion sorted
/// - `CHECK_SORTED`: skip merging two halves that are already in order
pub struct TopDownMergeSort<
    const INSERTION_THRESHOLD: usize = DEFAULT_INSERTION_THRESHOLD,
    const CHECK_SORTED: bool = DEFAULT_CHECK_SORTED,
>;

impl<const INSERTION_THRESHOLD: usize, const CHECK_SORTED: bool> super::Sort
    for TopDownMergeSort<INSERTION_THRESHOLD, CHECK_SORTED>
{
    const IS_STABLE: bool = true;

    fn sort<T: Ord + Copy, R: rand::Rng + ?Sized>(
        slice: &mut [T],
        _rng: &mut R,
        metrics: &mut Metrics,
    ) {
        Self::sort_timed(slice, metrics);
    }
}

impl<const INSERTION_THRESHOLD: usize, const CHECK_SORTED: bool>
    TopDownMergeSort<INSERTION_THRESHOLD, CHECK_SORTED>
{
    /// Sort `slice`, measuring the time of the whole call
    pub fn sort_timed<T: Ord + Copy>(slice: &mut [T], metrics: &mut Metrics) {
        if slice.len() < 2 {
            return;
        }

        metrics.start_timing();
        Self::sort_untimed(slice, metrics);
        metrics.end_timing();
    }

    /// Sort `slice` without touching the timing marks of `metrics`, for use inside other
    /// algorithms
    pub(crate) fn sort_untimed<T: Ord + Copy>(slice: &mut [T], metrics: &mut Metrics) {
        if slice.len() < 2 {
            return;
        }

        // One buffer big enough to merge the complete slice, shared by all merges
        let mut buffer = slice.to_vec();
        metrics.record_allocation(buffer.len());

        Self::top_down_mergesort(slice, &mut buffer, metrics);
    }

    /// The actual top-down mergesort implementation, sorts `slice`
    fn top_down_mergesort<T: Ord + Copy>(slice: &mut [T], buffer: &mut [T], metrics: &mut Metrics) {
        debug_assert!(INSERTION_THRESHOLD >= 1);

        metrics.nested(|metrics| {
            if slice.len() <= INSERTION_THRESHOLD {
                super::insertionsort::insertion_sort(slice, metrics);
                return;
            }

            let middle = slice.len() / 2;

            let (left, right) = slice.split_at_mut(middle);
            Self::top_down_mergesort(left, buffer, metrics);
            Self::top_down_mergesort(right, buffer, metrics);

            if !CHECK_SORTED || less(&slice[middle], &slice[middle - 1], metrics) {
                merge(slice, middle, buffer, metrics);
            }
        })
    }
}

/// Merge the two sorted runs `0..run_length` and `run_length..slice.len()` through `buffer`.
///
/// Takes from the left run on ties, which keeps the merge stable.
fn merge<T: Ord + Copy>(slice: &mut [T], run_length: usize, buffer: &mut [T], metrics: &mut Metrics) {
    assert!(
        buffer.len() >= slice.len(),
        "Buffer needs to have at least the size of slice"
    );

    let buffer = &mut buffer[..slice.len()];
    buffer.copy_from_slice(slice);
    let (left, right) = buffer.split_at(run_length);

    let (mut i, mut j) = (0, 0);
    for output in slice.iter_mut() {
        if i == left.len() {
            *output = right[j];
            j += 1;
        } else if j == right.len() {
            *output = left[i];
            i += 1;
        } else if less(&right[j], &left[i], metrics) {
            *output = right[j];
            j += 1;
        } else {
            *output = left[i];
            i += 1;
        }
    }
}

/// Sort `slice` with the default [`TopDownMergeSort`]
pub fn merge_sort<T: Ord + Copy>(slice: &mut [T], metrics: &mut Metrics) {
    <TopDownMergeSort>::sort_timed(slice, metrics);
}

#[cfg(test)]
mod tests {
    use super::*;

    const RUNS: usize = 100;
    const TEST_SIZE: usize = 10_000;

    /// Default mergesort but always merging
    type TopDownMergeSortUnchecked = TopDownMergeSort<DEFAULT_INSERTION_THRESHOLD, false>;

    /// Mergesort without the insertion sort base case
    type TopDownMergeSortPure = TopDownMergeSort<1, true>;

    #[test]
    fn empty() {
        crate::test::test_empty::<TopDownMergeSort>();
        crate::test::test_empty::<TopDownMergeSortUnchecked>();
    }

    #[test]
    fn random() {
        crate::test::test_random_sorted::<RUNS, TEST_SIZE, TopDownMergeSort>();
        crate::test::test_random_sorted::<RUNS, TEST_SIZE, TopDownMergeSortUnchecked>();
        crate::test::test_random_sorted::<RUNS, TEST_SIZE, TopDownMergeSortPure>();
    }

    #[test]
    fn random_stable() {
        crate::test::test_random_stable_sorted::<RUNS, TEST_SIZE, TopDownMergeSort>();
        crate::test::test_random_stable_sorted::<RUNS, TEST_SIZE, TopDownMergeSortUnchecked>();
        crate::test::test_random_stable_sorted::<RUNS, TEST_SIZE, TopDownMergeSortPure>();
    }

    #[test]
    #[should_panic]
    fn zero_threshold_is_rejected() {
        let mut rng = crate::test::test_rng();
        let mut metrics = Metrics::new();
        <TopDownMergeSort<0, true> as crate::algorithms::Sort>::sort(&mut [2, 1], &mut rng, &mut metrics);
    }

    #[test]
    fn trivial_inputs_record_nothing() {
        let mut metrics = Metrics::new();
        merge_sort::<i64>(&mut [], &mut metrics);
        merge_sort(&mut [7], &mut metrics);
        assert_eq!(metrics.comparisons(), 0);
        assert_eq!(metrics.allocations(), 0);
        assert_eq!(metrics.max_depth(), 0);
    }

    #[test]
    fn sorted_input_skips_every_merge() {
        for size in [2, 17, 100, 1_000, 4_099] {
            let mut values: Vec<i64> = (0..size).collect();
            let mut metrics = Metrics::new();
            merge_sort(&mut values, &mut metrics);

            assert!(values.iter().copied().eq(0..size));
            // One comparison per insertion sorted element plus one per skipped merge
            assert_eq!(metrics.comparisons(), size as u64 - 1);
            assert_eq!(metrics.swaps(), 0);
            assert_eq!(metrics.allocations(), size as u64);
        }
    }

    #[test]
    fn reverse_sorted_input() {
        let mut values: Vec<i64> = (0..1_000).rev().collect();
        let mut metrics = Metrics::new();
        merge_sort(&mut values, &mut metrics);
        assert!(values.iter().copied().eq(0..1_000));
        assert_eq!(metrics.allocations(), 1_000);
    }

    #[test]
    fn idempotent_contents_accumulating_metrics() {
        let mut rng = crate::test::test_rng();
        let mut values = crate::test::random_values(TEST_SIZE, &mut rng);
        let mut metrics = Metrics::new();

        merge_sort(&mut values, &mut metrics);
        let sorted = values.clone();
        let first_comparisons = metrics.comparisons();

        merge_sort(&mut values, &mut metrics);
        assert_eq!(values, sorted);
        assert!(metrics.comparisons() > first_comparisons);
    }

    #[test]
    fn depth_returns_to_zero() {
        let mut rng = crate::test::test_rng();
        let mut values = crate::test::random_values(TEST_SIZE, &mut rng);
        let mut metrics = Metrics::new();

        merge_sort(&mut values, &mut metrics);
        assert_eq!(metrics.current_depth(), 0);
        // 10_000 halves down to 16 or less in 10 steps, plus the root
        assert_eq!(metrics.max_depth(), 11);
    }
}
