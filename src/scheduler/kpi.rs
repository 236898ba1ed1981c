//! Schedule quality metrics (KPIs).
//!
//! Computes aggregate performance indicators from a finished simulation.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Average Burst ("throughput") | Mean total CPU demand per process |
//! | Average Waiting | Mean of `turnaround - burst` |
//! | Average Turnaround | Mean of `completion - arrival` |
//! | Average Response | Mean of `first dispatch - arrival` |
//! | Makespan | Latest segment end |
//! | CPU Utilization | Busy time over makespan |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use super::SimulationResult;
use crate::error::{Result, SchedulingError};
use crate::models::Time;

/// Aggregate statistics of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    /// Number of processes aggregated.
    pub process_count: usize,
    /// Mean total CPU demand (reported as "throughput" in the domain vocabulary).
    pub average_burst: Time,
    /// Mean waiting time.
    pub average_waiting: Time,
    /// Mean turnaround time.
    pub average_turnaround: Time,
    /// Mean response time.
    pub average_response: Time,
    /// Latest segment end.
    pub makespan: Time,
    /// Time the CPU spent executing.
    pub busy_time: Time,
    /// Unoccupied time in `[0, makespan]`.
    pub idle_time: Time,
    /// `busy_time / makespan` (0.0..1.0), `0` for an empty timeline.
    pub cpu_utilization: f64,
}

impl ScheduleSummary {
    /// Computes aggregates from a finished run.
    ///
    /// # Errors
    /// `EmptyProcessSet` when the run had no processes.
    pub fn calculate(result: &SimulationResult) -> Result<Self> {
        let metrics = &result.metrics;
        if metrics.is_empty() {
            return Err(SchedulingError::EmptyProcessSet);
        }

        let count = metrics.len() as f64;
        let mut total_burst = 0.0;
        let mut total_waiting = 0.0;
        let mut total_turnaround = 0.0;
        let mut total_response = 0.0;

        for m in metrics {
            total_burst += m.burst_time;
            total_waiting += m.waiting_time;
            total_turnaround += m.turnaround_time;
            total_response += m.response_time;
        }

        let makespan = result.timeline.makespan();
        let busy_time = result.timeline.busy_time();
        let cpu_utilization = if makespan > 0.0 {
            busy_time / makespan
        } else {
            0.0
        };

        Ok(Self {
            process_count: metrics.len(),
            average_burst: total_burst / count,
            average_waiting: total_waiting / count,
            average_turnaround: total_turnaround / count,
            average_response: total_response / count,
            makespan,
            busy_time,
            idle_time: (makespan - busy_time).max(0.0),
            cpu_utilization,
        })
    }
}
