//! Clock-driven CPU scheduling simulator.
//!
//! # Algorithm
//!
//! One loop serves all seven policies:
//!
//! 1. Admit every process whose arrival time has been reached.
//! 2. If nothing is ready, either tick the clock while processes sit in I/O
//!    or fast-forward to the next arrival; stop when neither exists.
//! 3. Select a candidate with the policy's rule engine and take it out of
//!    the ready set.
//! 4. Run it for one slice (full burst, quantum, time to next arrival, or
//!    I/O tick depending on the policy) and append a timeline segment.
//! 5. Admit arrivals that happened during the slice and return finished I/O
//!    waiters, *then* requeue, block, or finalize the process that just ran.
//!
//! Under round robin, arrivals during a slice therefore queue ahead of the
//! process that was just preempted.
//!
//! # Complexity
//! O(s * n) where s = number of slices and n = ready-set size.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace, warn};

use super::{AdmissionQueue, ScheduleSummary};
use crate::dispatching::{Policy, RuleEngine, SchedulingContext};
use crate::error::{Result, SchedulingError};
use crate::models::{
    GanttSegment, Process, ProcessMetrics, ProcessRegistry, Progress, Time, Timeline,
    TIME_EPSILON,
};
use crate::validation::{validate_input, ValidationError, ValidationErrorKind};

/// Fixed slice length of the I/O policy.
pub const DEFAULT_IO_TICK: Time = 0.5;

fn default_io_tick() -> Time {
    DEFAULT_IO_TICK
}

/// Input container for one simulation run.
///
/// Deserializable, so a run can be described in JSON:
///
/// ```
/// use cpu_sched::scheduler::SimulationRequest;
/// use cpu_sched::dispatching::Policy;
///
/// let request = SimulationRequest::from_json(r#"{
///     "policy": "RR",
///     "quantum": 2.0,
///     "processes": [
///         { "id": 1, "arrival_time": 0.0, "burst_time": 4.0 },
///         { "id": 2, "arrival_time": 1.0, "burst_time": 3.0 }
///     ]
/// }"#).unwrap();
/// assert_eq!(request.policy, Policy::RoundRobin);
/// assert_eq!(request.io_tick, 0.5);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes in registration order.
    pub processes: Vec<Process>,
    /// Scheduling policy.
    pub policy: Policy,
    /// Round-robin quantum. Ignored by other policies.
    #[serde(default)]
    pub quantum: Option<Time>,
    /// Tick length of the I/O policy.
    #[serde(default = "default_io_tick")]
    pub io_tick: Time,
}

impl SimulationRequest {
    /// Creates a request with the default I/O tick and no quantum.
    pub fn new(processes: Vec<Process>, policy: Policy) -> Self {
        Self {
            processes,
            policy,
            quantum: None,
            io_tick: DEFAULT_IO_TICK,
        }
    }

    /// Sets the round-robin quantum.
    pub fn with_quantum(mut self, quantum: Time) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Sets the I/O policy tick.
    pub fn with_io_tick(mut self, io_tick: Time) -> Self {
        self.io_tick = io_tick;
        self
    }

    /// Parses a request from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Timeline and finalized metrics of one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Policy that produced this result.
    pub policy: Policy,
    /// Execution slices in time order.
    pub timeline: Timeline,
    /// Per-process metrics in registration order.
    pub metrics: Vec<ProcessMetrics>,
}

impl SimulationResult {
    /// Metrics of one process.
    pub fn metrics_for(&self, process_id: u32) -> Option<&ProcessMetrics> {
        self.metrics.iter().find(|m| m.id == process_id)
    }

    /// Aggregate statistics. Fails on an empty process set.
    pub fn summary(&self) -> Result<ScheduleSummary> {
        ScheduleSummary::calculate(self)
    }
}

/// A process blocked on simulated I/O.
#[derive(Debug, Clone, Copy)]
struct IoWaiter {
    index: usize,
    ready_at: Time,
}

/// CPU scheduling simulator for one policy.
///
/// # Example
///
/// ```
/// use cpu_sched::scheduler::Simulator;
/// use cpu_sched::dispatching::Policy;
/// use cpu_sched::models::Process;
///
/// let processes = vec![
///     Process::new(1, 0.0, 4.0),
///     Process::new(2, 1.0, 3.0),
///     Process::new(3, 2.0, 1.0),
/// ];
/// let result = Simulator::new(Policy::Fcfs).run(&processes).unwrap();
/// assert_eq!(result.timeline.len(), 3);
/// assert_eq!(result.metrics_for(3).unwrap().completion_time, 8.0);
/// ```
#[derive(Debug, Clone)]
pub struct Simulator {
    policy: Policy,
    quantum: Option<Time>,
    io_tick: Time,
    engine: RuleEngine,
}

impl Simulator {
    /// Creates a simulator for a policy.
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            quantum: None,
            io_tick: DEFAULT_IO_TICK,
            engine: policy.rule_engine(),
        }
    }

    /// Creates a simulator configured from a request.
    pub fn from_request(request: &SimulationRequest) -> Self {
        let mut simulator = Self::new(request.policy).with_io_tick(request.io_tick);
        simulator.quantum = request.quantum;
        simulator
    }

    /// Sets the round-robin quantum.
    pub fn with_quantum(mut self, quantum: Time) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Sets the I/O policy tick.
    pub fn with_io_tick(mut self, io_tick: Time) -> Self {
        self.io_tick = io_tick;
        self
    }

    /// Configured policy.
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Validates and simulates a request.
    pub fn run_request(request: &SimulationRequest) -> Result<SimulationResult> {
        Self::from_request(request).run(&request.processes)
    }

    /// Validates the input and runs one complete simulation.
    ///
    /// The caller's processes are never mutated; the run works on its own
    /// registry.
    #[tracing::instrument(skip_all, fields(policy = %self.policy, processes = processes.len()))]
    pub fn run(&self, processes: &[Process]) -> Result<SimulationResult> {
        self.validate(processes)?;
        Ok(self.execute(processes))
    }

    fn validate(&self, processes: &[Process]) -> Result<()> {
        let mut errors = validate_input(processes, self.policy, self.quantum)
            .err()
            .unwrap_or_default();

        if self.policy.is_two_phase() && !(self.io_tick.is_finite() && self.io_tick > TIME_EPSILON) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidIoTick,
                format!("I/O tick must be greater than 0, got {}", self.io_tick),
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            warn!(count = errors.len(), "rejected simulation input");
            Err(SchedulingError::InvalidInput(errors))
        }
    }

    fn execute(&self, processes: &[Process]) -> SimulationResult {
        let mut registry = ProcessRegistry::new(processes, self.policy.is_two_phase());
        let mut admission = AdmissionQueue::new(&registry);
        let mut ready: VecDeque<usize> = VecDeque::with_capacity(registry.len());
        let mut io_wait: Vec<IoWaiter> = Vec::new();
        let mut timeline = Timeline::new();
        let mut clock: Time = 0.0;

        info!("starting simulation");

        loop {
            let admitted = admission.admit_due(clock + TIME_EPSILON, &registry, &mut ready);
            if admitted > 0 {
                trace!(clock, admitted, "admitted arrivals");
            }

            if ready.is_empty() {
                let next_arrival = admission.next_arrival(&registry);
                if !io_wait.is_empty() {
                    let mut next = clock + self.io_tick;
                    if let Some(arrival) = next_arrival {
                        next = next.min(arrival);
                    }
                    clock = next;
                    sweep_io(clock, &mut io_wait, &mut registry, &mut ready);
                    continue;
                }
                match next_arrival {
                    Some(arrival) => {
                        trace!(from = clock, to = arrival, "cpu idle, jumping to next arrival");
                        clock = clock.max(arrival);
                        continue;
                    }
                    None => break,
                }
            }

            let ctx = SchedulingContext::at_time(clock)
                .with_next_arrival(admission.next_arrival(&registry));
            let Some(pos) = self
                .engine
                .select_best(ready.make_contiguous(), &registry, &ctx)
            else {
                break;
            };
            let Some(index) = ready.remove(pos) else {
                break;
            };

            if registry.dispatch(index, clock) {
                debug!(process = registry.record(index).process.id, clock, "first dispatch");
            }

            let record = registry.record(index);
            let (slice, end) = self.slice(clock, record.remaining_in_phase(), &ctx);
            debug!(
                process = record.process.id,
                start = clock,
                end,
                phase = ?record.phase,
                "running slice"
            );
            timeline.push(GanttSegment::new(record.process.id, clock, end).with_phase(record.phase));
            clock = end;

            admission.admit_due(clock + TIME_EPSILON, &registry, &mut ready);
            sweep_io(clock, &mut io_wait, &mut registry, &mut ready);

            match registry.consume(index, slice) {
                Progress::Running => ready.push_back(index),
                Progress::BlockedOnIo => {
                    let ready_at = clock + registry.record(index).process.io_wait();
                    debug!(process = registry.record(index).process.id, clock, ready_at, "blocked on I/O");
                    io_wait.push(IoWaiter { index, ready_at });
                }
                Progress::Finished => {
                    debug!(process = registry.record(index).process.id, clock, "finished");
                    registry.finalize(index, clock);
                }
            }
        }

        debug_assert!(registry.all_finalized());
        info!(
            segments = timeline.len(),
            makespan = timeline.makespan(),
            "simulation finished"
        );

        SimulationResult {
            policy: self.policy,
            metrics: registry.metrics(),
            timeline,
        }
    }

    /// Slice length and end time for a dispatch at `clock`.
    fn slice(&self, clock: Time, remaining: Time, ctx: &SchedulingContext) -> (Time, Time) {
        let capped = |limit: Time| {
            if remaining <= limit + TIME_EPSILON {
                remaining
            } else {
                limit
            }
        };

        match self.policy {
            Policy::RoundRobin => {
                let slice = capped(self.quantum.unwrap_or(remaining));
                (slice, clock + slice)
            }
            Policy::Io => {
                let slice = capped(self.io_tick);
                (slice, clock + slice)
            }
            policy if policy.preempts_on_arrival() => match ctx.time_until_next_arrival() {
                // Stop at the arrival instant so it is admitted next round.
                Some(gap) if gap < remaining - TIME_EPSILON => (gap, clock + gap),
                _ => (remaining, clock + remaining),
            },
            _ => (remaining, clock + remaining),
        }
    }
}

/// Returns every I/O waiter whose wait has elapsed to the ready set.
///
/// A process with no second burst is finalized on the spot.
fn sweep_io(
    clock: Time,
    io_wait: &mut Vec<IoWaiter>,
    registry: &mut ProcessRegistry,
    ready: &mut VecDeque<usize>,
) {
    io_wait.retain(|waiter| {
        if waiter.ready_at > clock + TIME_EPSILON {
            return true;
        }
        match registry.complete_io(waiter.index) {
            Progress::Finished => registry.finalize(waiter.index, clock),
            _ => ready.push_back(waiter.index),
        }
        trace!(process = registry.record(waiter.index).process.id, clock, "I/O complete");
        false
    });
}

/// Simulates `processes` under `policy`.
///
/// `quantum` is required (and must be positive) for round robin and ignored
/// otherwise.
///
/// ```
/// use cpu_sched::{simulate, dispatching::Policy, models::Process};
///
/// let processes = vec![
///     Process::new(1, 0.0, 4.0),
///     Process::new(2, 1.0, 3.0),
///     Process::new(3, 2.0, 1.0),
/// ];
/// let result = simulate(&processes, Policy::RoundRobin, Some(2.0)).unwrap();
/// let ids: Vec<u32> = result.timeline.segments.iter().map(|s| s.process_id).collect();
/// assert_eq!(ids, vec![1, 2, 3, 1, 2]);
/// ```
pub fn simulate(
    processes: &[Process],
    policy: Policy,
    quantum: Option<Time>,
) -> Result<SimulationResult> {
    let mut simulator = Simulator::new(policy);
    simulator.quantum = quantum;
    simulator.run(processes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Phase;

    fn spans(result: &SimulationResult) -> Vec<(u32, f64, f64)> {
        result
            .timeline
            .segments
            .iter()
            .map(|s| (s.process_id, s.start_time, s.end_time))
            .collect()
    }

    fn three() -> Vec<Process> {
        vec![
            Process::new(1, 0.0, 4.0),
            Process::new(2, 1.0, 3.0),
            Process::new(3, 2.0, 1.0),
        ]
    }

    #[test]
    fn test_fcfs_three_processes() {
        let result = simulate(&three(), Policy::Fcfs, None).unwrap();
        assert_eq!(spans(&result), vec![(1, 0.0, 4.0), (2, 4.0, 7.0), (3, 7.0, 8.0)]);

        let completions: Vec<f64> = result.metrics.iter().map(|m| m.completion_time).collect();
        let waits: Vec<f64> = result.metrics.iter().map(|m| m.waiting_time).collect();
        assert_eq!(completions, vec![4.0, 7.0, 8.0]);
        assert_eq!(waits, vec![0.0, 3.0, 5.0]);
        for m in &result.metrics {
            assert_eq!(m.response_time, m.waiting_time);
        }
    }

    #[test]
    fn test_round_robin_new_arrivals_queue_ahead() {
        let result = simulate(&three(), Policy::RoundRobin, Some(2.0)).unwrap();
        assert_eq!(
            spans(&result),
            vec![
                (1, 0.0, 2.0),
                (2, 2.0, 4.0),
                (3, 4.0, 5.0),
                (1, 5.0, 7.0),
                (2, 7.0, 8.0)
            ]
        );

        let p1 = result.metrics_for(1).unwrap();
        assert_eq!((p1.completion_time, p1.waiting_time, p1.response_time), (7.0, 3.0, 0.0));
        let p2 = result.metrics_for(2).unwrap();
        assert_eq!((p2.completion_time, p2.waiting_time, p2.response_time), (8.0, 4.0, 1.0));
        let p3 = result.metrics_for(3).unwrap();
        assert_eq!((p3.completion_time, p3.waiting_time, p3.response_time), (5.0, 2.0, 2.0));
    }

    #[test]
    fn test_sjf_is_non_preemptive() {
        let processes = vec![
            Process::new(1, 0.0, 7.0),
            Process::new(2, 2.0, 4.0),
            Process::new(3, 4.0, 1.0),
            Process::new(4, 5.0, 4.0),
        ];
        let result = simulate(&processes, Policy::Sjf, None).unwrap();
        assert_eq!(
            spans(&result),
            vec![(1, 0.0, 7.0), (3, 7.0, 8.0), (2, 8.0, 12.0), (4, 12.0, 16.0)]
        );
    }

    #[test]
    fn test_priority_non_preemptive() {
        let processes = vec![
            Process::new(1, 0.0, 3.0).with_priority(1),
            Process::new(2, 1.0, 2.0).with_priority(5),
            Process::new(3, 1.0, 2.0).with_priority(9),
        ];
        let result = simulate(&processes, Policy::Priority, None).unwrap();
        assert_eq!(spans(&result), vec![(1, 0.0, 3.0), (3, 3.0, 5.0), (2, 5.0, 7.0)]);
    }

    #[test]
    fn test_srtf_preempts_at_arrival() {
        let processes = vec![
            Process::new(1, 0.0, 7.0),
            Process::new(2, 2.0, 4.0),
            Process::new(3, 4.0, 1.0),
            Process::new(4, 5.0, 4.0),
        ];
        let result = simulate(&processes, Policy::Srtf, None).unwrap();
        assert_eq!(
            spans(&result),
            vec![
                (1, 0.0, 2.0),
                (2, 2.0, 4.0),
                (3, 4.0, 5.0),
                (2, 5.0, 7.0),
                (4, 7.0, 11.0),
                (1, 11.0, 16.0)
            ]
        );
        let p1 = result.metrics_for(1).unwrap();
        assert_eq!(p1.completion_time, 16.0);
        assert_eq!(p1.waiting_time, 9.0);
        assert_eq!(p1.response_time, 0.0);
        let p4 = result.metrics_for(4).unwrap();
        assert_eq!(p4.response_time, 2.0);
    }

    #[test]
    fn test_preemptive_priority() {
        let processes = vec![
            Process::new(1, 0.0, 5.0).with_priority(1),
            Process::new(2, 1.0, 2.0).with_priority(10),
        ];
        let result = simulate(&processes, Policy::PriorityPreemptive, None).unwrap();
        assert_eq!(spans(&result), vec![(1, 0.0, 1.0), (2, 1.0, 3.0), (1, 3.0, 7.0)]);
        let p1 = result.metrics_for(1).unwrap();
        assert_eq!(p1.waiting_time, 2.0);
        assert_eq!(p1.response_time, 0.0);
    }

    #[test]
    fn test_idle_gap_fast_forwards() {
        let processes = vec![Process::new(1, 0.0, 1.0), Process::new(2, 5.0, 2.0)];
        let result = simulate(&processes, Policy::Fcfs, None).unwrap();
        assert_eq!(spans(&result), vec![(1, 0.0, 1.0), (2, 5.0, 7.0)]);
        assert_eq!(result.metrics_for(2).unwrap().waiting_time, 0.0);
    }

    #[test]
    fn test_io_policy_single_process() {
        let processes = vec![Process::new(1, 0.0, 2.0).with_io(3.0, 1.0)];
        let result = simulate(&processes, Policy::Io, None).unwrap();

        let first: f64 = result
            .timeline
            .segments
            .iter()
            .filter(|s| s.phase == Phase::CpuFirst)
            .map(GanttSegment::duration)
            .sum();
        let second: f64 = result
            .timeline
            .segments
            .iter()
            .filter(|s| s.phase == Phase::CpuSecond)
            .map(GanttSegment::duration)
            .sum();
        assert!((first - 2.0).abs() < 1e-9);
        assert!((second - 1.0).abs() < 1e-9);
        assert_eq!(result.timeline.idle_intervals(), vec![(2.0, 5.0)]);

        let m = result.metrics_for(1).unwrap();
        assert_eq!(m.completion_time, 6.0);
        assert_eq!(m.waiting_time, m.turnaround_time - 3.0);
    }

    #[test]
    fn test_io_policy_overlaps_cpu_and_io() {
        let processes = vec![
            Process::new(1, 0.0, 1.0).with_io(2.0, 1.0).with_priority(9),
            Process::new(2, 0.0, 2.0).with_io(0.0, 0.0).with_priority(1),
        ];
        let result = simulate(&processes, Policy::Io, None).unwrap();
        assert_eq!(
            spans(&result),
            vec![
                (1, 0.0, 0.5),
                (1, 0.5, 1.0),
                (2, 1.0, 1.5),
                (2, 1.5, 2.0),
                (2, 2.0, 2.5),
                (2, 2.5, 3.0),
                (1, 3.0, 3.5),
                (1, 3.5, 4.0)
            ]
        );
        assert_eq!(result.metrics_for(2).unwrap().completion_time, 3.0);
        assert_eq!(result.metrics_for(1).unwrap().completion_time, 4.0);
    }

    #[test]
    fn test_io_without_second_burst_finishes_at_io_end() {
        let processes = vec![Process::new(1, 0.0, 1.0).with_io(2.0, 0.0)];
        let result = simulate(&processes, Policy::Io, None).unwrap();
        let m = result.metrics_for(1).unwrap();
        assert_eq!(m.completion_time, 3.0);
        assert_eq!(m.waiting_time, 2.0);
        assert!((result.timeline.busy_time() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_io_slices_are_clamped() {
        let processes = vec![Process::new(1, 0.0, 0.7).with_io(0.0, 0.2)];
        let result = simulate(&processes, Policy::Io, None).unwrap();
        let durations: Vec<f64> = result.timeline.segments.iter().map(GanttSegment::duration).collect();
        assert_eq!(durations.len(), 3);
        assert!((durations[1] - 0.2).abs() < 1e-9);
        assert!((result.metrics_for(1).unwrap().completion_time - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_empty_input_yields_empty_timeline() {
        let result = simulate(&[], Policy::Srtf, None).unwrap();
        assert!(result.timeline.is_empty());
        assert!(result.metrics.is_empty());
        assert!(matches!(result.summary(), Err(SchedulingError::EmptyProcessSet)));
    }

    #[test]
    fn test_round_robin_requires_quantum() {
        let err = simulate(&three(), Policy::RoundRobin, None).unwrap_err();
        assert!(err
            .validation_errors()
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidQuantum));
    }

    #[test]
    fn test_invalid_io_tick() {
        let processes = vec![Process::new(1, 0.0, 1.0).with_io(1.0, 1.0)];
        let err = Simulator::new(Policy::Io)
            .with_io_tick(0.0)
            .run(&processes)
            .unwrap_err();
        assert!(err
            .validation_errors()
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidIoTick));
    }

    #[test]
    fn test_io_tick_must_advance_clock() {
        let processes = vec![Process::new(1, 1.0, 1.0).with_io(0.0, 0.0)];
        for tick in [1e-300, TIME_EPSILON] {
            let err = Simulator::new(Policy::Io)
                .with_io_tick(tick)
                .run(&processes)
                .unwrap_err();
            assert!(err
                .validation_errors()
                .iter()
                .any(|e| e.kind == ValidationErrorKind::InvalidIoTick));
        }
    }

    #[test]
    fn test_round_robin_rejects_vanishing_quantum() {
        let processes = vec![Process::new(1, 1.0, 1.0)];
        let err = simulate(&processes, Policy::RoundRobin, Some(1e-300)).unwrap_err();
        assert!(err
            .validation_errors()
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidQuantum));
    }

    #[test]
    fn test_io_idle_tick_stops_at_arrival() {
        let processes = vec![
            Process::new(1, 0.0, 1.0).with_io(3.0, 1.0),
            Process::new(2, 1.2, 1.0).with_io(0.0, 0.0),
        ];
        let result = simulate(&processes, Policy::Io, None).unwrap();

        // P1 blocks at 1.0; the idle tick toward 1.5 stops at P2's arrival
        let first_p2 = result.timeline.segments_for(2)[0];
        assert!((first_p2.start_time - 1.2).abs() < 1e-9);
        let p2 = result.metrics_for(2).unwrap();
        assert_eq!(p2.response_time, 0.0);
        assert!((p2.completion_time - 2.2).abs() < 1e-9);

        // P1 returns at the first tick past 4.0
        let p1_second = result.timeline.segments_for(1)[2];
        assert_eq!(p1_second.phase, Phase::CpuSecond);
        assert!((p1_second.start_time - 4.2).abs() < 1e-9);
        assert!((result.metrics_for(1).unwrap().completion_time - 5.2).abs() < 1e-9);
    }

    #[test]
    fn test_tiny_burst_keeps_its_segment() {
        let processes = vec![Process::new(1, 0.0, 1e-10), Process::new(2, 0.0, 1.0)];
        let result = simulate(&processes, Policy::Fcfs, None).unwrap();
        assert_eq!(result.timeline.len(), 2);
        assert_eq!(result.timeline.segments[0].process_id, 1);
        assert!((result.timeline.busy_time_for(1) - 1e-10).abs() < 1e-15);
        assert!(result.timeline.is_well_formed());
    }

    #[test]
    fn test_deterministic_reruns() {
        let processes = vec![
            Process::new(1, 0.0, 5.0).with_priority(3),
            Process::new(2, 0.0, 5.0).with_priority(3),
            Process::new(3, 1.5, 2.5).with_priority(3),
        ];
        for policy in Policy::ALL {
            let processes: Vec<Process> = processes
                .iter()
                .cloned()
                .map(|p| p.with_io(1.0, 1.0))
                .collect();
            let a = simulate(&processes, policy, Some(1.5)).unwrap();
            let b = simulate(&processes, policy, Some(1.5)).unwrap();
            assert_eq!(a, b, "{policy} is not deterministic");
        }
    }

    #[test]
    fn test_ties_go_to_first_registered() {
        let processes = vec![
            Process::new(2, 0.0, 3.0).with_priority(4),
            Process::new(1, 0.0, 3.0).with_priority(4),
        ];
        for policy in [Policy::Fcfs, Policy::Sjf, Policy::Priority, Policy::Srtf] {
            let result = simulate(&processes, policy, None).unwrap();
            assert_eq!(result.timeline.segments[0].process_id, 2, "{policy}");
        }
    }

    #[test]
    fn test_run_request_from_json() {
        let request = SimulationRequest::from_json(
            r#"{
                "policy": "SJF",
                "processes": [
                    { "id": 1, "arrival_time": 0.0, "burst_time": 7.0 },
                    { "id": 2, "arrival_time": 2.0, "burst_time": 4.0 }
                ]
            }"#,
        )
        .unwrap();
        let result = Simulator::run_request(&request).unwrap();
        assert_eq!(result.policy, Policy::Sjf);
        assert_eq!(result.metrics_for(2).unwrap().completion_time, 11.0);
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let err = SimulationRequest::from_json("{ \"policy\": \"XYZ\" }").unwrap_err();
        assert!(matches!(err, SchedulingError::Config(_)));
    }

    #[test]
    fn test_caller_processes_untouched() {
        let processes = three();
        let before = processes.clone();
        let _ = simulate(&processes, Policy::Srtf, None).unwrap();
        assert_eq!(processes, before);
    }
}
