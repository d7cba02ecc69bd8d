//! Timing harness for the solver

use crate::batch::{generate, RateRange};
use crate::error::Result;
use crate::solver::solve;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Name under which solver timings are recorded
pub const SOLVE_TIMER: &str = "solve";

/// Accumulator of named wall-clock samples.
///
/// Nothing is global: callers own an instance and decide when to reset it.
#[derive(Debug, Default, Clone)]
pub struct Timers {
    samples: BTreeMap<String, Vec<Duration>>,
}
impl Timers {
    /// Creates an empty accumulator
    pub fn new() -> Self { Self::default() }

    /// Appends one sample to the timer `name`
    pub fn record(&mut self, name: &str, elapsed: Duration) {
        self.samples.entry(name.to_string()).or_default().push(elapsed);
    }

    /// Runs `f`, records its elapsed time under `name` and returns its output
    pub fn time<T>(&mut self, name: &str, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let out = f();
        self.record(name, start.elapsed());
        out
    }

    /// Drops every sample recorded under `name`
    pub fn reset(&mut self, name: &str) { self.samples.remove(name); }

    /// Drops all samples
    pub fn clear(&mut self) { self.samples.clear(); }

    /// Number of samples recorded under `name`
    pub fn count(&self, name: &str) -> usize {
        self.samples.get(name).map_or(0, Vec::len)
    }

    /// Sum of the samples recorded under `name`
    pub fn total(&self, name: &str) -> Duration {
        self.samples.get(name).map_or(Duration::ZERO, |s| s.iter().sum())
    }

    /// Arithmetic mean of the samples under `name`, `None` when there are none
    pub fn mean(&self, name: &str) -> Option<Duration> {
        let n = self.count(name);
        if n == 0 {
            return None;
        }
        let nanos = self.total(name).as_nanos() / n as u128;
        Some(Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX)))
    }
}

/// Parameters of a benchmark run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Stock sizes to time, in order
    pub sizes: Vec<usize>,
    /// Solver invocations per size
    pub repetitions: u32,
    /// Per-unit rates of the generated instances
    pub rates: RateRange,
    /// Seed of the instance generator
    pub seed: u64,
}
impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: vec![10, 50, 100, 150, 200, 250, 300],
            repetitions: 1000,
            rates: RateRange::default(),
            seed: 42,
        }
    }
}

/// Mean wall time of solving a fresh random instance of `n` units.
///
/// The `solve` timer is reset first so earlier sizes do not leak into the
/// mean. Instance generation is not timed.
pub fn mean_solve_time<R: Rng>(
    n: usize,
    repetitions: u32,
    rates: &RateRange,
    rng: &mut R,
    timers: &mut Timers,
) -> Result<Duration> {
    timers.reset(SOLVE_TIMER);
    for _ in 0..repetitions {
        let table = generate(n, rates, rng);
        timers.time(SOLVE_TIMER, || solve(&table))?;
    }
    let mean = timers.mean(SOLVE_TIMER).unwrap_or(Duration::ZERO);
    tracing::debug!(n, repetitions, mean_ns = mean.as_nanos() as u64, "timed size");
    Ok(mean)
}

/// Mean solve time for each size in `sizes`, in the same order
pub fn time_sets<R: Rng>(
    sizes: &[usize],
    repetitions: u32,
    rates: &RateRange,
    rng: &mut R,
    timers: &mut Timers,
) -> Result<Vec<Duration>> {
    sizes
        .iter()
        .map(|&n| mean_solve_time(n, repetitions, rates, rng, timers))
        .collect()
}
