//! Classical divide and conquer algorithms, instrumented to count comparisons, swaps,
//! auxiliary allocations and recursion depth.
//!
//! Every algorithm takes a [`Metrics`] recorder by mutable reference and routes all element
//! comparisons and exchanges through [`algorithms::primitives`].

pub mod algorithms;
pub mod error;
pub mod geometry;
pub mod metrics;


pub use algorithms::{
    Sort,
    closest_pair::{brute_force_closest_pair, closest_distance, closest_pair},
    mergesort::merge_sort,
    quicksort::quick_sort,
    select::{median, select},
};
pub use error::{Error, Result};
pub use geometry::{Point, PointPair};
pub use metrics::Metrics;
