//! Errors reported by the algorithm entry points

/// Invalid arguments passed to one of the algorithms.
///
/// Every variant is reported before the input is touched or any metric is recorded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The requested order statistic does not exist in the slice
    #[error("rank {rank} is out of range for a slice of length {len}")]
    RankOutOfRange { rank: usize, len: usize },
    /// A closest pair needs at least two points
    #[error("need at least 2 points to find a closest pair, got {0}")]
    TooFewPoints(usize),
}

/// Shorthand for results of this crate
pub type Result<T> = std::result::Result<T, Error>;
