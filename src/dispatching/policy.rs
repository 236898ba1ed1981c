//! Scheduling policy selector.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{rules, RuleEngine, TieBreaker};

/// The seven supported CPU-scheduling policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Policy {
    /// First-come, first-served.
    #[serde(rename = "FCFS")]
    Fcfs,
    /// Shortest job first (non-preemptive).
    #[serde(rename = "SJF")]
    Sjf,
    /// Priority (non-preemptive).
    #[serde(rename = "PR")]
    Priority,
    /// Round robin with a fixed quantum.
    #[serde(rename = "RR")]
    RoundRobin,
    /// Shortest remaining time first.
    #[serde(rename = "SRTF")]
    Srtf,
    /// Priority, preempted at arrivals.
    #[serde(rename = "PRP")]
    PriorityPreemptive,
    /// Priority over two CPU bursts separated by I/O, tick driven.
    #[serde(rename = "IO")]
    Io,
}

impl Policy {
    /// All policies, in menu order.
    pub const ALL: [Policy; 7] = [
        Policy::Fcfs,
        Policy::Sjf,
        Policy::Priority,
        Policy::RoundRobin,
        Policy::Srtf,
        Policy::PriorityPreemptive,
        Policy::Io,
    ];

    /// Short code (`FCFS`, `SJF`, `PR`, `RR`, `SRTF`, `PRP`, `IO`).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::Priority => "PR",
            Self::RoundRobin => "RR",
            Self::Srtf => "SRTF",
            Self::PriorityPreemptive => "PRP",
            Self::Io => "IO",
        }
    }

    /// Human-readable name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Fcfs => "First-Come, First-Served",
            Self::Sjf => "Shortest Job First",
            Self::Priority => "Priority (non-preemptive)",
            Self::RoundRobin => "Round Robin",
            Self::Srtf => "Shortest Remaining Time First",
            Self::PriorityPreemptive => "Priority (preemptive)",
            Self::Io => "Priority with I/O",
        }
    }

    /// Whether a running process can lose the CPU before finishing.
    pub const fn is_preemptive(&self) -> bool {
        matches!(
            self,
            Self::RoundRobin | Self::Srtf | Self::PriorityPreemptive | Self::Io
        )
    }

    /// Whether a time quantum must be supplied.
    pub const fn requires_quantum(&self) -> bool {
        matches!(self, Self::RoundRobin)
    }

    /// Whether selection reads process priorities.
    pub const fn uses_priority(&self) -> bool {
        matches!(self, Self::Priority | Self::PriorityPreemptive | Self::Io)
    }

    /// Whether processes run two CPU bursts separated by I/O.
    pub const fn is_two_phase(&self) -> bool {
        matches!(self, Self::Io)
    }

    /// Whether slices are capped at the next pending arrival.
    pub const fn preempts_on_arrival(&self) -> bool {
        matches!(self, Self::Srtf | Self::PriorityPreemptive)
    }

    /// Rule engine implementing this policy's selection rule.
    pub fn rule_engine(&self) -> RuleEngine {
        match self {
            Self::Fcfs => RuleEngine::new().with_rule(rules::Fcfs),
            Self::Sjf => RuleEngine::new().with_rule(rules::Sjf),
            Self::Priority | Self::PriorityPreemptive | Self::Io => {
                RuleEngine::new().with_rule(rules::HighestPriority)
            }
            Self::RoundRobin => RuleEngine::new()
                .with_rule(rules::Fifo)
                .with_final_tie_breaker(TieBreaker::QueueOrder),
            Self::Srtf => RuleEngine::new().with_rule(rules::Srt),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a policy name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid policy '{0}'. Valid: FCFS, SJF, PR, RR, SRTF, PRP, IO")]
pub struct ParsePolicyError(pub String);

impl FromStr for Policy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fcfs" | "fifo" => Ok(Self::Fcfs),
            "sjf" | "shortest_job_first" => Ok(Self::Sjf),
            "pr" | "priority" => Ok(Self::Priority),
            "rr" | "round_robin" | "roundrobin" => Ok(Self::RoundRobin),
            "srtf" | "shortest_remaining_time_first" => Ok(Self::Srtf),
            "prp" | "priority_preemptive" => Ok(Self::PriorityPreemptive),
            "io" | "priority_io" => Ok(Self::Io),
            _ => Err(ParsePolicyError(s.to_string())),
        }
    }
}
