//! Scheduling context for dispatching rule evaluation.

use crate::models::Time;

/// Runtime scheduling state passed to dispatching rules.
#[derive(Debug, Clone, Default)]
pub struct SchedulingContext {
    /// Current simulation clock.
    pub current_time: Time,
    /// Arrival time of the next not-yet-admitted process, if any.
    pub next_arrival: Option<Time>,
}

impl SchedulingContext {
    /// Creates a context at the given time.
    pub fn at_time(current_time: Time) -> Self {
        Self {
            current_time,
            ..Default::default()
        }
    }

    /// Sets the next pending arrival.
    pub fn with_next_arrival(mut self, next_arrival: Option<Time>) -> Self {
        self.next_arrival = next_arrival;
        self
    }

    /// Time left until the next pending arrival.
    pub fn time_until_next_arrival(&self) -> Option<Time> {
        self.next_arrival.map(|t| (t - self.current_time).max(0.0))
    }
}
