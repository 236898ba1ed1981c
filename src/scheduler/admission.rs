//! Admission queue: moves arrived processes into the ready set.
//!
//! Pending processes are ordered once by arrival time (stable, so equal
//! arrivals keep registration order) and then consumed front to back as
//! the clock passes their arrival.

use std::collections::VecDeque;

use crate::models::{ProcessRegistry, Time};

/// Not-yet-admitted processes, in admission order.
#[derive(Debug, Clone, Default)]
pub struct AdmissionQueue {
    pending: VecDeque<usize>,
}

impl AdmissionQueue {
    /// Queues every registered process by ascending arrival time.
    pub fn new(registry: &ProcessRegistry) -> Self {
        let mut order: Vec<usize> = (0..registry.len()).collect();
        order.sort_by(|&a, &b| {
            let (ta, tb) = (
                registry.record(a).process.arrival_time,
                registry.record(b).process.arrival_time,
            );
            ta.total_cmp(&tb)
        });
        Self {
            pending: order.into(),
        }
    }

    /// Moves every process with `arrival_time <= clock` to the back of `ready`.
    ///
    /// Returns the number of processes admitted.
    pub fn admit_due(
        &mut self,
        clock: Time,
        registry: &ProcessRegistry,
        ready: &mut VecDeque<usize>,
    ) -> usize {
        let mut admitted = 0;
        while let Some(&index) = self.pending.front() {
            if registry.record(index).process.arrival_time > clock {
                break;
            }
            self.pending.pop_front();
            ready.push_back(index);
            admitted += 1;
        }
        admitted
    }

    /// Arrival time of the next pending process.
    pub fn next_arrival(&self, registry: &ProcessRegistry) -> Option<Time> {
        self.pending
            .front()
            .map(|&index| registry.record(index).process.arrival_time)
    }

    /// Number of processes still pending.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether no processes are pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
