//! Policies, dispatching rules, and the rule engine.
//!
//! Each [`Policy`] maps to a [`RuleEngine`] that picks the next process
//! from the ready set. The simulation loop itself is shared by all policies;
//! only the selection step and the slice length differ.
//!
//! # Usage
//!
//! ```
//! use cpu_sched::dispatching::{Policy, SchedulingContext};
//! use cpu_sched::models::{Process, ProcessRegistry};
//!
//! let registry = ProcessRegistry::new(
//!     &[
//!         Process::new(1, 0.0, 3.0).with_priority(2),
//!         Process::new(2, 0.0, 3.0).with_priority(8),
//!     ],
//!     false,
//! );
//! let engine = Policy::Priority.rule_engine();
//! let ctx = SchedulingContext::at_time(0.0);
//! assert_eq!(engine.select_best(&[0, 1], &registry, &ctx), Some(1));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

mod context;
mod engine;
mod policy;
pub mod rules;

pub use context::SchedulingContext;
pub use engine::{RuleEngine, TieBreaker};
pub use policy::{ParsePolicyError, Policy};

use crate::models::ProcessRecord;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (dispatched first).
pub type RuleScore = f64;

/// A dispatching rule that evaluates how soon a ready process should run.
///
/// # Score Convention
/// **Lower score = runs first.** Rules should return smaller values
/// for processes that should be dispatched first.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF", "FCFS").
    fn name(&self) -> &'static str;

    /// Evaluates a ready process given the current scheduling context.
    ///
    /// Returns a score where lower = higher priority.
    fn evaluate(&self, record: &ProcessRecord, context: &SchedulingContext) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
