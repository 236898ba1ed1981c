//! Process descriptor model.
//!
//! A process is the unit of work handed to the simulator: when it arrives,
//! how much CPU it needs, and how urgent it is. Two-phase processes (used by
//! the I/O policy) additionally carry an I/O wait and a second CPU burst.

use serde::{Deserialize, Serialize};

use super::Time;

/// Lowest accepted priority.
pub const MIN_PRIORITY: i32 = 1;
/// Highest accepted priority.
pub const MAX_PRIORITY: i32 = 100;

/// Immutable input facts for one process.
///
/// # Time Representation
/// All times are in abstract time units relative to the simulation start (t=0).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Process {
    /// Unique, positive process identifier.
    pub id: u32,
    /// Time the process becomes ready.
    pub arrival_time: Time,
    /// CPU demand of the first (or only) phase.
    pub burst_time: Time,
    /// CPU demand of the second phase. Only read by the I/O policy.
    #[serde(default)]
    pub burst_time2: Option<Time>,
    /// I/O wait between the two phases. Only read by the I/O policy.
    #[serde(default)]
    pub io_time: Option<Time>,
    /// Scheduling priority (higher = more urgent).
    #[serde(default = "default_priority")]
    pub priority: i32,
}

fn default_priority() -> i32 {
    MIN_PRIORITY
}

impl Process {
    /// Creates a single-phase process with the lowest priority.
    pub fn new(id: u32, arrival_time: Time, burst_time: Time) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            burst_time2: None,
            io_time: None,
            priority: MIN_PRIORITY,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the I/O wait and the second CPU burst.
    pub fn with_io(mut self, io_time: Time, burst_time2: Time) -> Self {
        self.io_time = Some(io_time);
        self.burst_time2 = Some(burst_time2);
        self
    }

    /// Second-phase demand, zero when absent.
    #[inline]
    pub fn second_burst(&self) -> Time {
        self.burst_time2.unwrap_or(0.0)
    }

    /// I/O wait, zero when absent.
    #[inline]
    pub fn io_wait(&self) -> Time {
        self.io_time.unwrap_or(0.0)
    }

    /// Total CPU demand under a one- or two-phase policy.
    pub fn total_burst(&self, two_phase: bool) -> Time {
        if two_phase {
            self.burst_time + self.second_burst()
        } else {
            self.burst_time
        }
    }
}
