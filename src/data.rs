//! Input generation for the benchmark runs

use std::marker::PhantomData;

use divide_and_conquer_experiments::Point;
use rand::{Rng as _, rngs::StdRng, seq::SliceRandom as _};

/// A trait for generalizing input data creation
pub trait Data<T> {
    /// Initialize a vector of the given size
    fn initialize(size: usize, rng: &mut StdRng) -> Vec<T>;
}

/// Uniform values in `0..10 * size`
#[derive(Debug)]
pub struct UniformData<T>(PhantomData<T>);

/// The values `0..size` in ascending order
#[derive(Debug)]
pub struct SortedData<T>(PhantomData<T>);

/// The values `1..=size` in descending order
#[derive(Debug)]
pub struct ReverseData<T>(PhantomData<T>);

/// A shuffled slice with only [`FEW_UNIQUE_VALUES`] distinct values
#[derive(Debug)]
pub struct FewUniqueData<T>(PhantomData<T>);

/// The number of distinct values in [`FewUniqueData`]
pub const FEW_UNIQUE_VALUES: usize = 8;

macro_rules! impl_for_integers {
    ($($type:ty),*) => {
        $(
            impl_for_integers!(@single $type);
        )*
    };
    (@single $type:ty) => {
        impl Data<$type> for UniformData<$type> {
            fn initialize(size: usize, rng: &mut StdRng) -> Vec<$type> {
                let upper = size.saturating_mul(10).clamp(1, <$type>::MAX as usize) as $type;
                (0..size).map(|_| rng.random_range(0..upper)).collect()
            }
        }

        impl Data<$type> for SortedData<$type> {
            fn initialize(size: usize, _rng: &mut StdRng) -> Vec<$type> {
                (0..size).map(|value| value as $type).collect()
            }
        }

        impl Data<$type> for ReverseData<$type> {
            fn initialize(size: usize, _rng: &mut StdRng) -> Vec<$type> {
                (1..=size).rev().map(|value| value as $type).collect()
            }
        }

        impl Data<$type> for FewUniqueData<$type> {
            fn initialize(size: usize, rng: &mut StdRng) -> Vec<$type> {
                let mut values: Vec<$type> = (0..size)
                    .map(|index| (index % FEW_UNIQUE_VALUES) as $type)
                    .collect();
                values.shuffle(rng);
                values
            }
        }
    }
}

// Implement the Data traits for the default integer types
impl_for_integers!(i32, i64, u32, u64);

/// The side length of the square the points are placed in
pub const POINT_RANGE: f64 = 1_000.0;

/// Points uniformly distributed in a `POINT_RANGE x POINT_RANGE` square
#[derive(Debug)]
pub struct UniformPoints;

impl Data<Point> for UniformPoints {
    fn initialize(size: usize, rng: &mut StdRng) -> Vec<Point> {
        (0..size)
            .map(|_| {
                Point::new(
                    rng.random_range(0.0..POINT_RANGE),
                    rng.random_range(0.0..POINT_RANGE),
                )
            })
            .collect()
    }
}

/// The number of clusters in [`GaussianPoints`]
pub const CLUSTERS: usize = 8;
/// The standard deviation of each cluster in [`GaussianPoints`]
pub const CLUSTER_SPREAD: f64 = 20.0;

/// Points normally distributed around [`CLUSTERS`] uniformly placed centers
#[derive(Debug)]
pub struct GaussianPoints;

impl Data<Point> for GaussianPoints {
    fn initialize(size: usize, rng: &mut StdRng) -> Vec<Point> {
        let centers: Vec<Point> = UniformPoints::initialize(CLUSTERS, rng);

        (0..size)
            .map(|index| {
                let center = centers[index % CLUSTERS];
                let dx: f64 = rng.sample(rand_distr::StandardNormal);
                let dy: f64 = rng.sample(rand_distr::StandardNormal);
                Point::new(center.x + CLUSTER_SPREAD * dx, center.y + CLUSTER_SPREAD * dy)
            })
            .collect()
    }
}

/// Points on a single vertical line, all of them end up in every strip
#[derive(Debug)]
pub struct CollinearPoints;

impl Data<Point> for CollinearPoints {
    fn initialize(size: usize, rng: &mut StdRng) -> Vec<Point> {
        let x = rng.random_range(0.0..POINT_RANGE);
        (0..size)
            .map(|_| Point::new(x, rng.random_range(0.0..POINT_RANGE)))
            .collect()
    }
}
