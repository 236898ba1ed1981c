//! CPU scheduling simulator.
//!
//! Computes the execution timeline (Gantt chart) and per-process metrics
//! that a classical CPU-scheduling policy produces for a set of synthetic
//! processes. The core is a pure function of its input: one call owns its
//! process registry and timeline from start to finish.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `ProcessRecord`, `ProcessRegistry`,
//!   `ProcessMetrics`, `GanttSegment`, `Timeline`
//! - **`dispatching`**: `Policy` selector, dispatching rules, and `RuleEngine`
//! - **`scheduler`**: `Simulator`, `AdmissionQueue`, `ScheduleSummary`
//! - **`validation`**: Input integrity checks (ranges, IDs, per-policy fields)
//! - **`workload`**: Default and random process tables
//!
//! # Policies
//!
//! | Code | Policy | Preemptive |
//! |------|--------|------------|
//! | FCFS | First-come, first-served | no |
//! | SJF | Shortest job first | no |
//! | PR | Priority | no |
//! | RR | Round robin | quantum |
//! | SRTF | Shortest remaining time first | at arrivals |
//! | PRP | Preemptive priority | at arrivals |
//! | IO | Priority over CPU/I-O/CPU bursts | every tick |
//!
//! # Example
//!
//! ```
//! use cpu_sched::{simulate, dispatching::Policy, models::Process};
//!
//! let processes = vec![
//!     Process::new(1, 0.0, 4.0),
//!     Process::new(2, 1.0, 3.0),
//!     Process::new(3, 2.0, 1.0),
//! ];
//! let result = simulate(&processes, Policy::Fcfs, None).unwrap();
//! let summary = result.summary().unwrap();
//! assert!((summary.average_waiting - 8.0 / 3.0).abs() < 1e-9);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{Result, SchedulingError};
pub use scheduler::simulate;
