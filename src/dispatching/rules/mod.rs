//! Built-in dispatching rules.
//!
//! # Categories
//!
//! - **Arrival-based**: FCFS, FIFO
//! - **Time-based**: SJF, SRT
//! - **Priority**: HIGHEST-PRIORITY
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.
//!
//! # References
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

use super::{DispatchingRule, RuleScore, SchedulingContext};
use crate::models::ProcessRecord;

// ======================== Arrival-based rules ========================

/// First-Come, First-Served.
///
/// Prioritizes the process that arrived earliest.
#[derive(Debug, Clone, Copy)]
pub struct Fcfs;

impl DispatchingRule for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn evaluate(&self, record: &ProcessRecord, _context: &SchedulingContext) -> RuleScore {
        record.process.arrival_time
    }

    fn description(&self) -> &'static str {
        "First-Come, First-Served"
    }
}

/// Ready-queue order.
///
/// Scores every process equally so that the engine's queue-order
/// tie-breaker decides. Used by round robin.
#[derive(Debug, Clone, Copy)]
pub struct Fifo;

impl DispatchingRule for Fifo {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn evaluate(&self, _record: &ProcessRecord, _context: &SchedulingContext) -> RuleScore {
        0.0
    }

    fn description(&self) -> &'static str {
        "First In, First Out"
    }
}

// ======================== Time-based rules ========================

/// Shortest Job First.
///
/// Prioritizes processes with the smallest total first-burst demand.
/// Minimizes average waiting time among non-preemptive policies.
#[derive(Debug, Clone, Copy)]
pub struct Sjf;

impl DispatchingRule for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, record: &ProcessRecord, _context: &SchedulingContext) -> RuleScore {
        record.process.burst_time
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Shortest Remaining Time.
///
/// Prioritizes processes closest to finishing their current burst.
#[derive(Debug, Clone, Copy)]
pub struct Srt;

impl DispatchingRule for Srt {
    fn name(&self) -> &'static str {
        "SRT"
    }

    fn evaluate(&self, record: &ProcessRecord, _context: &SchedulingContext) -> RuleScore {
        record.remaining_in_phase()
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time"
    }
}

// ======================== Priority rules ========================

/// Highest priority value first.
///
/// Priorities follow the "higher = more urgent" convention, so the
/// score is the negated priority.
#[derive(Debug, Clone, Copy)]
pub struct HighestPriority;

impl DispatchingRule for HighestPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, record: &ProcessRecord, _context: &SchedulingContext) -> RuleScore {
        -(record.process.priority as f64)
    }

    fn description(&self) -> &'static str {
        "Highest Priority First"
    }
}
