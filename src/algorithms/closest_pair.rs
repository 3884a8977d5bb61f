//! The planar closest pair algorithm

use super::mergesort::TopDownMergeSort;
use crate::{
    error::{Error, Result},
    geometry::{ByX, ByY, Point, PointPair},
    metrics::Metrics,
};

/// Point sets of at most this size are solved by comparing all pairs
pub const BRUTE_FORCE_THRESHOLD: usize = 3;

/// The number of successors of a strip point that need to be checked.
///
/// Within a `min_dist x 2 min_dist` rectangle at most 8 points can have pairwise distance of
/// at least `min_dist`, so any closer partner is among the next 7 points in y order.
pub const STRIP_NEIGHBORS: usize = 7;

/// Returns the pair of `points` with the smallest Euclidean distance in `O(n log n)` time.
///
/// # Errors
///
/// Returns [`Error::TooFewPoints`] if `points` has less than two elements.
pub fn closest_pair(points: &[Point], metrics: &mut Metrics) -> Result<PointPair> {
    if points.len() < 2 {
        return Err(Error::TooFewPoints(points.len()));
    }

    metrics.start_timing();

    let mut by_x: Vec<ByX> = points.iter().copied().map(ByX).collect();
    metrics.record_allocation(by_x.len());
    <TopDownMergeSort>::sort_untimed(&mut by_x, metrics);

    // Every point remembers its index in `by_x`, which decides its side at every split
    let mut by_y: Vec<(ByY, usize)> = by_x
        .iter()
        .enumerate()
        .map(|(rank, point)| (ByY(point.0), rank))
        .collect();
    metrics.record_allocation(by_y.len());
    <TopDownMergeSort>::sort_untimed(&mut by_y, metrics);

    let result = closest_pair_recursive(&by_x, 0, &by_y, metrics);
    metrics.end_timing();

    Ok(result)
}

/// Returns only the smallest distance between two of `points`, see [`closest_pair`]
pub fn closest_distance(points: &[Point], metrics: &mut Metrics) -> Result<f64> {
    closest_pair(points, metrics).map(|pair| pair.distance())
}

/// Returns the closest pair by comparing all pairs of `points`, in `O(n²)` time
///
/// # Errors
///
/// Returns [`Error::TooFewPoints`] if `points` has less than two elements.
pub fn brute_force_closest_pair(points: &[Point], metrics: &mut Metrics) -> Result<PointPair> {
    if points.len() < 2 {
        return Err(Error::TooFewPoints(points.len()));
    }

    metrics.start_timing();
    let result = brute_force(points.iter().copied(), metrics);
    metrics.end_timing();

    result.ok_or(Error::TooFewPoints(points.len()))
}

/// Solve the problem for `by_x`, whose first element has index `offset` in the complete x
/// order, with `by_y` holding the same points sorted by y
fn closest_pair_recursive(
    by_x: &[ByX],
    offset: usize,
    by_y: &[(ByY, usize)],
    metrics: &mut Metrics,
) -> PointPair {
    debug_assert!(by_x.len() >= 2 && by_x.len() == by_y.len());

    metrics.nested(|metrics| {
        if by_x.len() <= BRUTE_FORCE_THRESHOLD {
            let closest = brute_force(by_x.iter().map(|point| point.0), metrics);
            debug_assert!(closest.is_some());
            return closest.unwrap_or_else(|| PointPair::new(by_x[0].0, by_x[1].0));
        }

        let middle = (by_x.len() - 1) / 2;
        let (left_x, right_x) = by_x.split_at(middle + 1);
        let divider = by_x[middle].0;

        // Split the y sorted points in one pass, keeping their order
        let mut left_y = Vec::with_capacity(left_x.len());
        let mut right_y = Vec::with_capacity(right_x.len());
        metrics.record_allocation(left_x.len() + right_x.len());
        for &(point, rank) in by_y {
            if rank < offset + left_x.len() {
                left_y.push((point, rank));
            } else {
                right_y.push((point, rank));
            }
        }

        let left = closest_pair_recursive(left_x, offset, &left_y, metrics);
        let right = closest_pair_recursive(right_x, offset + left_x.len(), &right_y, metrics);
        let closest = if left.distance() <= right.distance() {
            left
        } else {
            right
        };

        // Collect the points close to the dividing line, in y order
        let mut strip = Vec::with_capacity(by_y.len());
        metrics.record_allocation(by_y.len());
        strip.extend(
            by_y.iter()
                .map(|(point, _)| point.0)
                .filter(|point| (point.x - divider.x).abs() < closest.distance()),
        );

        match closest_in_strip(&strip, closest.distance(), metrics) {
            Some(candidate) if candidate.distance() < closest.distance() => candidate,
            _ => closest,
        }
    })
}

/// Returns the closest pair in `strip` (sorted by y) that is closer than `min_dist`, if any
fn closest_in_strip(strip: &[Point], mut min_dist: f64, metrics: &mut Metrics) -> Option<PointPair> {
    let mut closest = None;

    for (i, point) in strip.iter().enumerate() {
        for other in strip[i + 1..].iter().take(STRIP_NEIGHBORS) {
            if other.y - point.y >= min_dist {
                break;
            }

            metrics.record_comparison();
            let candidate = PointPair::new(*point, *other);
            if candidate.distance() < min_dist {
                min_dist = candidate.distance();
                closest = Some(candidate);
            }
        }
    }

    closest
}

/// Compare all pairs of `points`, returns `None` for less than two points
fn brute_force(points: impl Iterator<Item = Point> + Clone, metrics: &mut Metrics) -> Option<PointPair> {
    let mut closest: Option<PointPair> = None;

    let mut rest = points;
    while let Some(point) = rest.next() {
        for other in rest.clone() {
            metrics.record_comparison();
            let candidate = PointPair::new(point, other);
            if closest.is_none_or(|closest| candidate.distance() < closest.distance()) {
                closest = Some(candidate);
            }
        }
    }

    closest
}

#[cfg(test)]
mod tests {
    use rand::Rng as _;

    use super::*;

    fn points(coordinates: &[(f64, f64)]) -> Vec<Point> {
        coordinates.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn too_few_points() {
        let mut metrics = Metrics::new();
        assert_eq!(closest_pair(&[], &mut metrics), Err(Error::TooFewPoints(0)));
        assert_eq!(
            closest_pair(&points(&[(1.0, 1.0)]), &mut metrics),
            Err(Error::TooFewPoints(1))
        );
        assert_eq!(
            brute_force_closest_pair(&points(&[(1.0, 1.0)]), &mut metrics),
            Err(Error::TooFewPoints(1))
        );
        assert_eq!(metrics.comparisons(), 0);
        assert_eq!(metrics.allocations(), 0);
    }

    #[test]
    fn two_points() {
        let mut metrics = Metrics::new();
        let input = points(&[(0.0, 0.0), (3.0, 4.0)]);
        let pair = closest_pair(&input, &mut metrics).unwrap();

        assert_eq!(pair, PointPair::new(input[1], input[0]));
        approx::assert_abs_diff_eq!(pair.distance(), 5.0);
        assert_eq!(metrics.max_depth(), 1);
        assert_eq!(metrics.current_depth(), 0);
    }

    #[test]
    fn pair_straddling_the_strip() {
        let mut metrics = Metrics::new();
        let input = points(&[
            (0.0, 0.0),
            (1.0, 0.0),
            (4.9, 0.0),
            (5.1, 0.0),
            (10.0, 0.0),
            (11.0, 0.0),
        ]);
        let pair = closest_pair(&input, &mut metrics).unwrap();

        approx::assert_abs_diff_eq!(pair.distance(), 0.2, epsilon = 1e-9);
        assert_eq!(pair, PointPair::new(input[2], input[3]));
    }

    #[test]
    fn coincident_points() {
        let mut metrics = Metrics::new();
        let input = points(&[(1.0, 1.0), (2.0, 2.0), (1.0, 1.0), (3.0, 3.0)]);
        assert_eq!(closest_distance(&input, &mut metrics), Ok(0.0));

        let input = vec![Point::new(2.5, -1.0); 100];
        assert_eq!(closest_distance(&input, &mut metrics), Ok(0.0));
    }

    #[test]
    fn collinear_points() {
        let mut metrics = Metrics::new();

        let vertical: Vec<Point> = (0..500).map(|i| Point::new(7.0, (i * i) as f64)).collect();
        approx::assert_abs_diff_eq!(closest_distance(&vertical, &mut metrics).unwrap(), 1.0);

        let diagonal: Vec<Point> = (0..500)
            .rev()
            .map(|i| Point::new(i as f64 * 2.0, i as f64 * 2.0))
            .collect();
        approx::assert_abs_diff_eq!(
            closest_distance(&diagonal, &mut metrics).unwrap(),
            8.0_f64.sqrt(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn matches_brute_force() {
        let mut rng = crate::test::test_rng();

        for size in [2, 3, 4, 5, 7, 16, 100, 500, 2_000] {
            for _ in 0..10 {
                // Coarse coordinates to also get shared x and y values
                let input: Vec<Point> = (0..size)
                    .map(|_| {
                        Point::new(
                            rng.random_range(0..200) as f64 / 4.0,
                            rng.random_range(0.0..1_000.0),
                        )
                    })
                    .collect();

                let mut metrics = Metrics::new();
                let fast = closest_pair(&input, &mut metrics).unwrap();
                assert_eq!(metrics.current_depth(), 0);

                let mut brute_metrics = Metrics::new();
                let brute = brute_force_closest_pair(&input, &mut brute_metrics).unwrap();

                approx::assert_abs_diff_eq!(fast.distance(), brute.distance(), epsilon = 1e-9);
                assert_eq!(
                    brute_metrics.comparisons(),
                    (size * (size - 1) / 2) as u64
                );
            }
        }
    }

    #[test]
    fn fewer_distance_checks_than_brute_force() {
        let mut rng = crate::test::test_rng();
        let input: Vec<Point> = (0..2_000)
            .map(|_| Point::new(rng.random_range(0.0..1_000.0), rng.random_range(0.0..1_000.0)))
            .collect();

        let mut metrics = Metrics::new();
        closest_pair(&input, &mut metrics).unwrap();
        let mut brute_metrics = Metrics::new();
        brute_force_closest_pair(&input, &mut brute_metrics).unwrap();

        assert!(metrics.comparisons() < brute_metrics.comparisons() / 10);
        // 2_000 halves down to 3 or less in 10 steps, plus the root
        assert!(metrics.max_depth() <= 11);
        assert!(metrics.allocations() >= 2 * 2_000);
    }
}
