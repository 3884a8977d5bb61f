use anyhow::Context as _;
use clap::Parser as _;
use divide_and_conquer_experiments::{
    Metrics, Point, brute_force_closest_pair, closest_pair, merge_sort, quick_sort, select,
};
use rand::{SeedableRng as _, rngs::StdRng};

mod cli;
mod data;

/// Point sets up to this size are verified against the brute force algorithm
const BRUTE_FORCE_VERIFY_LIMIT: usize = 2_000;

/// Program entry point
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli::Args {
        algorithm,
        data,
        points,
        runs,
        sizes,
        rank,
        seed,
        csv,
    } = cli::Args::parse();

    let input = if algorithm.uses_points() {
        points.to_string()
    } else {
        data.to_string()
    };
    log::info!("Running {algorithm} on {runs} runs of {input} input for sizes {sizes:?}");

    // Create rng
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => {
            log::info!("No seed provided, generating one using system rng");
            StdRng::from_os_rng()
        }
    };

    let bar = if csv {
        println!(
            "algorithm,size,input,time_ms,max_depth,comparisons,swaps,allocations,baseline_ms"
        );
        indicatif::ProgressBar::hidden()
    } else {
        indicatif::ProgressBar::new((runs * sizes.len()) as u64)
    };

    for size in sizes {
        let rank = rank.unwrap_or(size / 2);
        let experiment = Experiment {
            algorithm,
            data,
            points,
            size,
            rank,
        };

        let summary = perform_experiment(&experiment, runs, csv, &mut rng, &bar)?;

        if !csv {
            bar.suspend(|| summary.print(&experiment, &input));
        }
    }

    bar.finish_and_clear();

    Ok(())
}

/// The settings of one experiment, every run uses fresh input of `size` elements
#[derive(Debug, Clone, Copy)]
struct Experiment {
    algorithm: cli::Algorithm,
    data: cli::DataType,
    points: cli::PointDistribution,
    size: usize,
    rank: usize,
}

/// Run `experiment` `runs` times, plus one warm-up run, and aggregate the metrics
///
/// With `csv` every measured run is printed as one row.
fn perform_experiment(
    experiment: &Experiment,
    runs: usize,
    csv: bool,
    rng: &mut StdRng,
    bar: &indicatif::ProgressBar,
) -> anyhow::Result<Summary> {
    let Experiment {
        algorithm, size, ..
    } = *experiment;
    let mut summary = Summary::new();

    for run in 0..=runs {
        let mut metrics = Metrics::new();
        let mut baseline = None;

        run_once(experiment, rng, &mut metrics, &mut baseline)
            .with_context(|| format!("run {run} of {algorithm} on size {size} failed"))?;

        // NOTE: Skip first sample, it only warms up caches and the allocator
        if run == 0 {
            continue;
        }

        log::debug!(
            "size {size}, run {run}: {:.3} ms, depth {}, {} comparisons, {} swaps, {} allocations",
            metrics.elapsed_millis(),
            metrics.max_depth(),
            metrics.comparisons(),
            metrics.swaps(),
            metrics.allocations(),
        );

        if csv {
            let baseline_ms = baseline
                .as_ref()
                .map(|baseline: &Metrics| format!("{:.3}", baseline.elapsed_millis()))
                .unwrap_or_default();
            let input = if algorithm.uses_points() {
                experiment.points.to_string()
            } else {
                experiment.data.to_string()
            };
            println!(
                "{algorithm},{size},{input},{:.3},{},{},{},{},{baseline_ms}",
                metrics.elapsed_millis(),
                metrics.max_depth(),
                metrics.comparisons(),
                metrics.swaps(),
                metrics.allocations(),
            );
        }

        summary.update(&metrics, baseline.as_ref());
        bar.inc(1);
    }

    Ok(summary)
}

/// Generate the input of `experiment` and run its algorithm once
///
/// `baseline` receives the timing of the reference computation in the comparison mode.
fn run_once(
    experiment: &Experiment,
    rng: &mut StdRng,
    metrics: &mut Metrics,
    baseline: &mut Option<Metrics>,
) -> anyhow::Result<()> {
    let Experiment {
        algorithm,
        data,
        points,
        size,
        rank,
    } = *experiment;

    match algorithm {
        cli::Algorithm::ClosestPair => match points {
            cli::PointDistribution::Uniform => {
                run_points::<data::UniformPoints>(size, rng, metrics)
            }
            cli::PointDistribution::Gaussian => {
                run_points::<data::GaussianPoints>(size, rng, metrics)
            }
            cli::PointDistribution::Collinear => {
                run_points::<data::CollinearPoints>(size, rng, metrics)
            }
        },
        cli::Algorithm::SelectVsSort => {
            let mut sort_metrics = Metrics::new();
            let outcome = match data {
                cli::DataType::Random => run_select_comparison::<data::UniformData<i64>>(
                    size,
                    rank,
                    rng,
                    metrics,
                    &mut sort_metrics,
                ),
                cli::DataType::Sorted => run_select_comparison::<data::SortedData<i64>>(
                    size,
                    rank,
                    rng,
                    metrics,
                    &mut sort_metrics,
                ),
                cli::DataType::Reverse => run_select_comparison::<data::ReverseData<i64>>(
                    size,
                    rank,
                    rng,
                    metrics,
                    &mut sort_metrics,
                ),
                cli::DataType::FewUnique => run_select_comparison::<data::FewUniqueData<i64>>(
                    size,
                    rank,
                    rng,
                    metrics,
                    &mut sort_metrics,
                ),
            };
            *baseline = Some(sort_metrics);
            outcome
        }
        _ => match data {
            cli::DataType::Random => {
                run_integers::<data::UniformData<i64>>(algorithm, size, rank, rng, metrics)
            }
            cli::DataType::Sorted => {
                run_integers::<data::SortedData<i64>>(algorithm, size, rank, rng, metrics)
            }
            cli::DataType::Reverse => {
                run_integers::<data::ReverseData<i64>>(algorithm, size, rank, rng, metrics)
            }
            cli::DataType::FewUnique => {
                run_integers::<data::FewUniqueData<i64>>(algorithm, size, rank, rng, metrics)
            }
        },
    }
}

/// Generate integers with `D`, run the sorting or selection `algorithm` and verify the result
fn run_integers<D: data::Data<i64>>(
    algorithm: cli::Algorithm,
    size: usize,
    rank: usize,
    rng: &mut StdRng,
    metrics: &mut Metrics,
) -> anyhow::Result<()> {
    let mut values = D::initialize(size, rng);

    match algorithm {
        cli::Algorithm::Mergesort => {
            merge_sort(&mut values, metrics);
            verify_sorted(&values, algorithm);
        }
        cli::Algorithm::Quicksort => {
            quick_sort(&mut values, rng, metrics);
            verify_sorted(&values, algorithm);

            let bound = 2 * size.max(1).ilog2() as usize + 10;
            if metrics.max_depth() > bound {
                log::warn!(
                    "{algorithm} reached depth {}, above the expected bound {bound}",
                    metrics.max_depth()
                );
            }
        }
        cli::Algorithm::Select => {
            let mut sorted = values.clone();
            let selected = select(&mut values, rank, metrics)?;

            sorted.sort_unstable();
            if selected != sorted[rank] {
                log::error!("{algorithm} returned {selected}, expected {}", sorted[rank]);
            }
        }
        cli::Algorithm::ClosestPair | cli::Algorithm::SelectVsSort => {
            anyhow::bail!("{algorithm} is not a single algorithm on integers")
        }
    }

    Ok(())
}

/// Generate integers with `D` and find the element of `rank` twice: with [`select`] recording
/// into `metrics`, and by sorting a copy with [`slice::sort_unstable`] timed in `sort_metrics`
fn run_select_comparison<D: data::Data<i64>>(
    size: usize,
    rank: usize,
    rng: &mut StdRng,
    metrics: &mut Metrics,
    sort_metrics: &mut Metrics,
) -> anyhow::Result<()> {
    let mut values = D::initialize(size, rng);
    let mut sorted = values.clone();

    let selected = select(&mut values, rank, metrics)?;

    sort_metrics.start_timing();
    sorted.sort_unstable();
    let expected = sorted[rank];
    sort_metrics.end_timing();

    if selected != expected {
        log::error!("select returned {selected}, sorting found {expected}");
    }

    Ok(())
}

/// Generate points with `D`, find the closest pair and verify it for small inputs
fn run_points<D: data::Data<Point>>(
    size: usize,
    rng: &mut StdRng,
    metrics: &mut Metrics,
) -> anyhow::Result<()> {
    let points = D::initialize(size, rng);
    let pair = closest_pair(&points, metrics)?;
    log::trace!("closest pair {pair}");

    if size <= BRUTE_FORCE_VERIFY_LIMIT {
        let brute = brute_force_closest_pair(&points, &mut Metrics::new())?;
        if (pair.distance() - brute.distance()).abs() > 1e-9 {
            log::error!(
                "closest pair distance {} differs from brute force distance {}",
                pair.distance(),
                brute.distance()
            );
        }
    }

    Ok(())
}

fn verify_sorted(values: &[i64], algorithm: cli::Algorithm) {
    if !values.is_sorted() {
        log::error!("{algorithm} failed to sort the input");
    }
}

/// Streaming statistics over all measured runs of one experiment
#[derive(Debug)]
struct Summary {
    time_ms: rolling_stats::Stats<f64>,
    max_depth: rolling_stats::Stats<f64>,
    comparisons: rolling_stats::Stats<f64>,
    swaps: rolling_stats::Stats<f64>,
    allocations: rolling_stats::Stats<f64>,
    /// Only present in the comparison mode
    baseline_ms: Option<rolling_stats::Stats<f64>>,
}

impl Summary {
    fn new() -> Self {
        Self {
            time_ms: rolling_stats::Stats::new(),
            max_depth: rolling_stats::Stats::new(),
            comparisons: rolling_stats::Stats::new(),
            swaps: rolling_stats::Stats::new(),
            allocations: rolling_stats::Stats::new(),
            baseline_ms: None,
        }
    }

    fn update(&mut self, metrics: &Metrics, baseline: Option<&Metrics>) {
        self.time_ms.update(metrics.elapsed_millis());
        self.max_depth.update(metrics.max_depth() as f64);
        self.comparisons.update(metrics.comparisons() as f64);
        self.swaps.update(metrics.swaps() as f64);
        self.allocations.update(metrics.allocations() as f64);

        if let Some(baseline) = baseline {
            self.baseline_ms
                .get_or_insert_with(rolling_stats::Stats::new)
                .update(baseline.elapsed_millis());
        }
    }

    /// The mean baseline time divided by the mean measured time, if there is a baseline
    fn speedup(&self) -> Option<f64> {
        let baseline = self.baseline_ms.as_ref()?;
        (self.time_ms.mean > 0.0).then(|| baseline.mean / self.time_ms.mean)
    }

    fn print(&self, experiment: &Experiment, input: &str) {
        println!();
        println!("{} on {} {input} elements", experiment.algorithm, experiment.size);
        println!(
            "{:<12} {:>16} {:>16} {:>16} {:>16}",
            "metric", "mean", "std dev", "min", "max"
        );

        let mut rows = vec![
            ("time (ms)", &self.time_ms),
            ("max depth", &self.max_depth),
            ("comparisons", &self.comparisons),
            ("swaps", &self.swaps),
            ("allocations", &self.allocations),
        ];
        if let Some(baseline) = &self.baseline_ms {
            rows.push(("sort (ms)", baseline));
        }

        for (name, stats) in rows {
            println!(
                "{name:<12} {:>16.3} {:>16.3} {:>16.3} {:>16.3}",
                stats.mean, stats.std_dev, stats.min, stats.max
            );
        }

        if let Some(speedup) = self.speedup() {
            println!("select is {speedup:.2}x the speed of sorting");
        }
    }
}
