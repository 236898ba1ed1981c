//! CPU scheduling domain models.
//!
//! Provides the input descriptor (`Process`), the per-run mutable state
//! (`ProcessRecord`, `ProcessRegistry`), and the run outputs (`Timeline`,
//! `ProcessMetrics`).
//!
//! # Time Representation
//!
//! All times are `f64` units relative to the simulation start (t=0).
//! Computed times are compared with an absolute tolerance of [`TIME_EPSILON`].

mod process;
mod registry;
mod timeline;

pub use process::{Process, MAX_PRIORITY, MIN_PRIORITY};
pub use registry::{Phase, ProcessMetrics, ProcessRecord, ProcessRegistry, Progress};
pub use timeline::{GanttSegment, Timeline};

/// Simulated time, in abstract units.
pub type Time = f64;

/// Tolerance for comparing computed times.
pub const TIME_EPSILON: Time = 1e-9;

/// Rounds values within [`TIME_EPSILON`] of zero to exactly zero.
#[inline]
pub(crate) fn snap_zero(t: Time) -> Time {
    if t.abs() <= TIME_EPSILON {
        0.0
    } else {
        t
    }
}
