//! Process registry: per-run mutable simulation state.
//!
//! Each simulation run owns one registry built from the caller's process
//! list. Records are addressed by their registration index, so the ready set,
//! the I/O-waiting set, and the finished set only ever hold indices and a
//! process moves between them by explicit transfer.

use serde::{Deserialize, Serialize};

use super::{snap_zero, Process, Time};

/// Where a process currently is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Running (or waiting to run) its first CPU burst.
    CpuFirst,
    /// Blocked on simulated I/O between the two bursts.
    IoWait,
    /// Running (or waiting to run) its second CPU burst.
    CpuSecond,
    /// Finalized; all four derived metrics are set.
    Done,
}

/// Outcome of consuming one execution slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// CPU demand remains in the current phase.
    Running,
    /// The first burst finished and the process must wait for I/O.
    BlockedOnIo,
    /// All CPU demand is satisfied.
    Finished,
}

/// Identity plus mutable simulation state for one process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessRecord {
    /// Input facts (never mutated during a run).
    pub process: Process,
    /// First-burst countdown.
    pub remaining_time: Time,
    /// Second-burst countdown.
    pub remaining_time2: Time,
    /// Set on first dispatch.
    pub started: bool,
    /// Lifecycle phase.
    pub phase: Phase,
    /// Completion time, set on finalization.
    pub completion_time: Option<Time>,
    /// `completion - arrival`, set on finalization.
    pub turnaround_time: Option<Time>,
    /// `turnaround - total burst`, set on finalization.
    pub waiting_time: Option<Time>,
    /// `first dispatch - arrival`, set on first dispatch.
    pub response_time: Option<Time>,
}

impl ProcessRecord {
    /// Creates a record with countdowns reset from the burst fields.
    pub fn new(process: Process) -> Self {
        Self {
            remaining_time: process.burst_time,
            remaining_time2: process.second_burst(),
            started: false,
            phase: Phase::CpuFirst,
            completion_time: None,
            turnaround_time: None,
            waiting_time: None,
            response_time: None,
            process,
        }
    }

    /// Whether all derived metrics are set.
    pub fn is_finalized(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Remaining CPU demand of the current phase.
    pub fn remaining_in_phase(&self) -> Time {
        match self.phase {
            Phase::CpuFirst => self.remaining_time,
            Phase::CpuSecond => self.remaining_time2,
            Phase::IoWait | Phase::Done => 0.0,
        }
    }

    /// Finalized metrics, or `None` while the process is still running.
    pub fn metrics(&self, two_phase: bool) -> Option<ProcessMetrics> {
        Some(ProcessMetrics {
            id: self.process.id,
            arrival_time: self.process.arrival_time,
            burst_time: self.process.total_burst(two_phase),
            completion_time: self.completion_time?,
            turnaround_time: self.turnaround_time?,
            waiting_time: self.waiting_time?,
            response_time: self.response_time?,
        })
    }
}

/// Finalized per-process timing row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// Process ID.
    pub id: u32,
    /// Arrival time.
    pub arrival_time: Time,
    /// Total CPU demand (both bursts under the I/O policy).
    pub burst_time: Time,
    /// Time the last CPU slice ended.
    pub completion_time: Time,
    /// `completion_time - arrival_time`.
    pub turnaround_time: Time,
    /// `turnaround_time - burst_time`.
    pub waiting_time: Time,
    /// Delay from arrival to first dispatch.
    pub response_time: Time,
}

/// All process records of one simulation run, in registration order.
#[derive(Debug, Clone, Default)]
pub struct ProcessRegistry {
    records: Vec<ProcessRecord>,
    two_phase: bool,
}

impl ProcessRegistry {
    /// Registers the processes with fresh simulation state.
    ///
    /// `two_phase` selects whether the second burst and I/O wait are honored.
    pub fn new(processes: &[Process], two_phase: bool) -> Self {
        Self {
            records: processes.iter().cloned().map(ProcessRecord::new).collect(),
            two_phase,
        }
    }

    /// Number of registered processes.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no processes are registered.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether the registry runs two-phase (CPU, I/O, CPU) processes.
    pub fn is_two_phase(&self) -> bool {
        self.two_phase
    }

    /// Record at a registration index.
    ///
    /// # Panics
    /// Panics if `index` was not produced by this registry.
    #[inline]
    pub fn record(&self, index: usize) -> &ProcessRecord {
        &self.records[index]
    }

    /// Iterates records in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ProcessRecord> {
        self.records.iter()
    }

    /// Marks a dispatch at `clock`. Returns `true` on the first dispatch,
    /// which is when the response time is captured.
    pub fn dispatch(&mut self, index: usize, clock: Time) -> bool {
        let record = &mut self.records[index];
        if record.started {
            return false;
        }
        record.started = true;
        record.response_time = Some(snap_zero(clock - record.process.arrival_time));
        true
    }

    /// Deducts an executed slice from the current phase.
    ///
    /// Countdowns are clamped at zero. Under a single-phase registry the
    /// first burst reaching zero finishes the process; under a two-phase
    /// registry it either blocks on I/O or, with no I/O wait, moves straight
    /// to the second burst.
    pub fn consume(&mut self, index: usize, slice: Time) -> Progress {
        let two_phase = self.two_phase;
        let record = &mut self.records[index];
        match record.phase {
            Phase::CpuFirst => {
                record.remaining_time = snap_zero((record.remaining_time - slice).max(0.0));
                if record.remaining_time > 0.0 {
                    Progress::Running
                } else if !two_phase {
                    Progress::Finished
                } else if record.process.io_wait() > 0.0 {
                    record.phase = Phase::IoWait;
                    Progress::BlockedOnIo
                } else {
                    record.phase = Phase::CpuSecond;
                    if record.remaining_time2 > 0.0 {
                        Progress::Running
                    } else {
                        Progress::Finished
                    }
                }
            }
            Phase::CpuSecond => {
                record.remaining_time2 = snap_zero((record.remaining_time2 - slice).max(0.0));
                if record.remaining_time2 > 0.0 {
                    Progress::Running
                } else {
                    Progress::Finished
                }
            }
            Phase::IoWait => Progress::BlockedOnIo,
            Phase::Done => Progress::Finished,
        }
    }

    /// Ends the I/O wait. Returns `Finished` when no second burst remains.
    pub fn complete_io(&mut self, index: usize) -> Progress {
        let record = &mut self.records[index];
        record.phase = Phase::CpuSecond;
        if record.remaining_time2 > 0.0 {
            Progress::Running
        } else {
            Progress::Finished
        }
    }

    /// Sets the derived metrics of a finished process.
    pub fn finalize(&mut self, index: usize, clock: Time) {
        let two_phase = self.two_phase;
        let record = &mut self.records[index];
        let turnaround = snap_zero(clock - record.process.arrival_time);
        record.completion_time = Some(clock);
        record.turnaround_time = Some(turnaround);
        record.waiting_time = Some(snap_zero(turnaround - record.process.total_burst(two_phase)));
        record.response_time.get_or_insert(0.0);
        record.phase = Phase::Done;
    }

    /// Whether every registered process is finalized.
    pub fn all_finalized(&self) -> bool {
        self.records.iter().all(ProcessRecord::is_finalized)
    }

    /// Finalized metrics in registration order.
    pub fn metrics(&self) -> Vec<ProcessMetrics> {
        self.records
            .iter()
            .filter_map(|r| r.metrics(self.two_phase))
            .collect()
    }
}
