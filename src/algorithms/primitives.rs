//! The instrumented comparison and exchange operations.
//!
//! Every element comparison and exchange of the algorithms goes through here, so the counts
//! in [`Metrics`] are exact and comparable between algorithms.

use crate::metrics::Metrics;

/// Returns `a < b`, recording one comparison
#[inline]
pub fn less<T: Ord + ?Sized>(a: &T, b: &T, metrics: &mut Metrics) -> bool {
    metrics.record_comparison();
    a < b
}

/// Returns `a == b`, recording one comparison
#[inline]
pub fn equal<T: Ord + ?Sized>(a: &T, b: &T, metrics: &mut Metrics) -> bool {
    metrics.record_comparison();
    a == b
}

/// Exchange `slice[i]` and `slice[j]`, recording one swap
#[inline]
pub fn swap<T>(slice: &mut [T], i: usize, j: usize, metrics: &mut Metrics) {
    metrics.record_swap();
    slice.swap(i, j);
}

/// Uniformly permute `slice` (Fisher-Yates), recording every swap
pub fn shuffle<T, R: rand::Rng + ?Sized>(slice: &mut [T], rng: &mut R, metrics: &mut Metrics) {
    for i in (1..slice.len()).rev() {
        let j = rng.random_range(0..=i);
        swap(slice, i, j, metrics);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn less_counts() {
        let mut metrics = Metrics::new();
        assert!(less(&1, &2, &mut metrics));
        assert!(!less(&2, &2, &mut metrics));
        assert!(!less(&3, &2, &mut metrics));
        assert_eq!(metrics.comparisons(), 3);
        assert_eq!(metrics.swaps(), 0);
    }

    #[test]
    fn swap_counts() {
        let mut metrics = Metrics::new();
        let mut values = [1, 2, 3];
        swap(&mut values, 0, 2, &mut metrics);
        assert_eq!(values, [3, 2, 1]);
        assert_eq!(metrics.swaps(), 1);
        assert_eq!(metrics.comparisons(), 0);
    }

    #[test]
    fn shuffle_is_permutation() {
        let mut rng = crate::test::test_rng();
        let mut metrics = Metrics::new();
        let mut values: Vec<usize> = (0..1000).collect();

        shuffle(&mut values, &mut rng, &mut metrics);
        assert_eq!(metrics.swaps(), 999);

        values.sort_unstable();
        assert!(values.iter().copied().eq(0..1000));
    }
}
