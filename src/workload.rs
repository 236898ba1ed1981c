//! Synthetic process tables.
//!
//! `default_processes` reproduces the table a user starts from when they
//! pick a process count; `WorkloadGenerator` draws random, reproducible
//! workloads for experiments and tests.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::{Process, Time, MAX_PRIORITY, MIN_PRIORITY};
use crate::validation::MAX_PROCESSES;

/// Default process table of `count` processes.
///
/// Process `i` (0-based) arrives at `i`, bursts for `2(i + 1)` in both
/// phases, has no I/O wait, and the lowest priority. `count` is clamped
/// to `1..=100`.
///
/// ```
/// let table = cpu_sched::workload::default_processes(3);
/// assert_eq!(table[2].id, 3);
/// assert_eq!(table[2].arrival_time, 2.0);
/// assert_eq!(table[2].burst_time, 6.0);
/// ```
pub fn default_processes(count: usize) -> Vec<Process> {
    let count = count.clamp(1, MAX_PROCESSES);
    (0..count)
        .map(|i| {
            let burst = 2.0 * (i + 1) as Time;
            Process::new((i + 1) as u32, i as Time, burst)
                .with_priority(MIN_PRIORITY)
                .with_io(0.0, burst)
        })
        .collect()
}

/// Random workload generator.
///
/// All drawn times are rounded to one decimal place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadGenerator {
    /// Arrivals are drawn from `[0, arrival_span]`.
    pub arrival_span: Time,
    /// Inclusive range of first-burst lengths.
    pub burst_range: (Time, Time),
    /// Inclusive range of I/O waits.
    pub io_range: (Time, Time),
    /// Inclusive range of second-burst lengths.
    pub second_burst_range: (Time, Time),
    /// Inclusive range of priorities.
    pub priority_range: (i32, i32),
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self {
            arrival_span: 10.0,
            burst_range: (1.0, 10.0),
            io_range: (0.0, 5.0),
            second_burst_range: (0.0, 5.0),
            priority_range: (MIN_PRIORITY, 10),
        }
    }
}

impl WorkloadGenerator {
    /// Creates a generator with default ranges.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the arrival span.
    pub fn with_arrival_span(mut self, span: Time) -> Self {
        self.arrival_span = span.max(0.0);
        self
    }

    /// Sets the first-burst range.
    pub fn with_burst_range(mut self, min: Time, max: Time) -> Self {
        self.burst_range = ordered(min.max(0.1), max.max(0.1));
        self
    }

    /// Sets the I/O wait range.
    pub fn with_io_range(mut self, min: Time, max: Time) -> Self {
        self.io_range = ordered(min.max(0.0), max.max(0.0));
        self
    }

    /// Sets the second-burst range.
    pub fn with_second_burst_range(mut self, min: Time, max: Time) -> Self {
        self.second_burst_range = ordered(min.max(0.0), max.max(0.0));
        self
    }

    /// Sets the priority range, clamped to `1..=100`.
    pub fn with_priority_range(mut self, min: i32, max: i32) -> Self {
        let clamp = |p: i32| p.clamp(MIN_PRIORITY, MAX_PRIORITY);
        let (lo, hi) = (clamp(min), clamp(max));
        self.priority_range = (lo.min(hi), lo.max(hi));
        self
    }

    /// Draws `count` processes with IDs `1..=count` (clamped to `1..=100`).
    pub fn generate<R: Rng>(&self, count: usize, rng: &mut R) -> Vec<Process> {
        let count = count.clamp(1, MAX_PROCESSES);
        (0..count)
            .map(|i| {
                let arrival = round_tenth(rng.random_range(0.0..=self.arrival_span));
                let burst = round_tenth(draw(rng, self.burst_range)).max(0.1);
                let io = round_tenth(draw(rng, self.io_range));
                let burst2 = round_tenth(draw(rng, self.second_burst_range));
                let priority = rng.random_range(self.priority_range.0..=self.priority_range.1);
                Process::new((i + 1) as u32, arrival, burst)
                    .with_priority(priority)
                    .with_io(io, burst2)
            })
            .collect()
    }
}

fn ordered(a: Time, b: Time) -> (Time, Time) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

fn draw<R: Rng>(rng: &mut R, (min, max): (Time, Time)) -> Time {
    rng.random_range(min..=max)
}

fn round_tenth(t: Time) -> Time {
    (t * 10.0).round() / 10.0
}
