//! Simulation loop, admission, and KPI evaluation.
//!
//! # Algorithm
//!
//! `Simulator` advances a simulated clock, admitting arrivals through an
//! `AdmissionQueue`, selecting from the ready set with the policy's rule
//! engine, and appending one timeline segment per execution slice.
//!
//! # KPI
//!
//! `ScheduleSummary` computes the per-run averages (burst, waiting,
//! turnaround, response) plus makespan and CPU utilization.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod admission;
mod kpi;
mod simulator;

pub use admission::AdmissionQueue;
pub use kpi::ScheduleSummary;
pub use simulator::{
    simulate, SimulationRequest, SimulationResult, Simulator, DEFAULT_IO_TICK,
};
