//! Command line input handling

/// Command line arguments
#[derive(clap::Parser)]
#[command(author, version, about)]
pub struct Args {
    /// The algorithm to run
    #[arg()]
    pub algorithm: Algorithm,
    /// The integer input to sort or select from
    #[arg(short, long, default_value_t = DataType::Random)]
    pub data: DataType,
    /// The point distribution for the closest pair algorithm
    #[arg(short, long, default_value_t = PointDistribution::Uniform)]
    pub points: PointDistribution,
    /// The number of runs to do
    #[arg(short, long, default_value_t = 10)]
    pub runs: usize,
    /// The input sizes to run, as a comma separated list
    #[arg(short, long, value_delimiter = ',', num_args = 1.., default_values_t = [10_000])]
    pub sizes: Vec<usize>,
    /// The rank to select, defaults to the median of each size
    #[arg(short = 'k', long)]
    pub rank: Option<usize>,
    /// Seed for the rng
    #[arg(long)]
    pub seed: Option<u64>,
    /// Print one CSV row per run instead of the summaries
    #[arg(long)]
    pub csv: bool,
}

/// Available algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Algorithm {
    /// Top-down mergesort
    Mergesort,
    /// Randomized quicksort
    Quicksort,
    /// Median of medians selection
    Select,
    /// Divide and conquer closest pair of points
    ClosestPair,
    /// Median of medians selection timed against sorting with [`slice::sort_unstable`]
    SelectVsSort,
}

/// Available integer inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DataType {
    /// Uniform values in `0..10 * size`
    Random,
    /// Already sorted values
    Sorted,
    /// Values in descending order
    Reverse,
    /// Only a handful of distinct values
    FewUnique,
}

/// Available point distributions
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PointDistribution {
    /// Uniform in a square
    Uniform,
    /// Normally distributed clusters
    Gaussian,
    /// All on one vertical line
    Collinear,
}

macro_rules! display_value_enum {
    ($($name:ty),*) => {
        $(
            impl std::fmt::Display for $name {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    match clap::ValueEnum::to_possible_value(self) {
                        Some(value) => f.write_str(value.get_name()),
                        None => write!(f, "{self:?}"),
                    }
                }
            }
        )*
    };
}

display_value_enum!(Algorithm, DataType, PointDistribution);

impl Algorithm {
    /// Whether the algorithm works on points instead of integers
    pub fn uses_points(self) -> bool {
        self == Algorithm::ClosestPair
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser as _;

    use super::*;

    #[test]
    fn sizes_are_comma_separated() {
        let args = Args::try_parse_from(["bench", "select", "--sizes", "100,1000,5000"]).unwrap();
        assert_eq!(args.algorithm, Algorithm::Select);
        assert_eq!(args.sizes, [100, 1_000, 5_000]);
        assert_eq!(args.rank, None);
    }

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["bench", "select-vs-sort"]).unwrap();
        assert_eq!(args.algorithm, Algorithm::SelectVsSort);
        assert_eq!(args.sizes, [10_000]);
        assert_eq!(args.data, DataType::Random);
        assert_eq!(args.runs, 10);
        assert!(!args.csv);
    }

    #[test]
    fn display_matches_value_names() {
        assert_eq!(Algorithm::ClosestPair.to_string(), "closest-pair");
        assert_eq!(Algorithm::SelectVsSort.to_string(), "select-vs-sort");
        assert_eq!(DataType::FewUnique.to_string(), "few-unique");
    }
}
