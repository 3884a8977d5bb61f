//! The metrics recorder threaded through every algorithm call

use std::time::{Duration, Instant};

/// Counts comparisons, swaps, allocations and recursion depth of a single call tree and
/// measures the time between [`Metrics::start_timing`] and [`Metrics::end_timing`].
///
/// A recorder is borrowed mutably by exactly one algorithm call at a time. To reuse it for
/// another run call [`Metrics::reset`].
#[derive(Debug, Clone, Default)]
pub struct Metrics {
    comparisons: u64,
    swaps: u64,
    allocations: u64,
    current_depth: usize,
    max_depth: usize,
    start: Option<Instant>,
    end: Option<Instant>,
}

impl Metrics {
    /// Create a fresh recorder with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all counters and timestamps
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Mark the start of the measured time window
    pub fn start_timing(&mut self) {
        self.start = Some(Instant::now());
        self.end = None;
    }

    /// Mark the end of the measured time window
    pub fn end_timing(&mut self) {
        self.end = Some(Instant::now());
    }

    /// Enter one level of recursion, updating the maximum depth
    pub fn enter_recursion(&mut self) {
        self.current_depth += 1;
        self.max_depth = self.max_depth.max(self.current_depth);
    }

    /// Leave one level of recursion
    pub fn exit_recursion(&mut self) {
        debug_assert!(self.current_depth > 0, "exit_recursion without matching enter");
        self.current_depth = self.current_depth.saturating_sub(1);
    }

    /// Run `f` one recursion level deeper, so enter and exit always come in pairs
    pub fn nested<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.enter_recursion();
        let result = f(self);
        self.exit_recursion();
        result
    }

    /// Record a single element comparison
    pub fn record_comparison(&mut self) {
        self.comparisons += 1;
    }

    /// Record a single element exchange
    pub fn record_swap(&mut self) {
        self.swaps += 1;
    }

    /// Record an auxiliary allocation of `count` elements
    pub fn record_allocation(&mut self, count: usize) {
        self.allocations += count as u64;
    }

    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    pub fn swaps(&self) -> u64 {
        self.swaps
    }

    /// The total number of elements allocated in auxiliary buffers
    pub fn allocations(&self) -> u64 {
        self.allocations
    }

    pub fn current_depth(&self) -> usize {
        self.current_depth
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// The time between the last start and end mark.
    ///
    /// Returns [`Duration::ZERO`] unless both marks were set, in that order.
    pub fn elapsed(&self) -> Duration {
        match (self.start, self.end) {
            (Some(start), Some(end)) => end.saturating_duration_since(start),
            _ => Duration::ZERO,
        }
    }

    pub fn elapsed_nanos(&self) -> u128 {
        self.elapsed().as_nanos()
    }

    /// The elapsed time in fractional milliseconds
    pub fn elapsed_millis(&self) -> f64 {
        self.elapsed().as_secs_f64() * 1_000.0
    }
}
