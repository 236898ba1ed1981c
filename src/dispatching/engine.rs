//! Rule engine for ready-set selection.
//!
//! Composes dispatching rules lexicographically and resolves exhausted
//! ties with a deterministic final tie-breaker.
//!
//! # Reference
//! Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

use std::cmp::Ordering;
use std::sync::Arc;

use super::{DispatchingRule, SchedulingContext};
use crate::models::{ProcessRegistry, TIME_EPSILON};

/// How ties are broken after all rules are exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreaker {
    /// Earlier registration (input order) wins.
    #[default]
    Registration,
    /// Earlier position in the ready queue wins.
    QueueOrder,
}

/// A composable rule engine for process selection.
///
/// Rules are applied in sequence; a later rule is consulted only when all
/// earlier rules score the two candidates within [`TIME_EPSILON`] of each other.
///
/// # Example
/// ```
/// use cpu_sched::dispatching::{rules, RuleEngine, SchedulingContext, TieBreaker};
/// use cpu_sched::models::{Process, ProcessRegistry};
///
/// let registry = ProcessRegistry::new(
///     &[Process::new(1, 0.0, 5.0), Process::new(2, 0.0, 2.0)],
///     false,
/// );
/// let engine = RuleEngine::new()
///     .with_rule(rules::Sjf)
///     .with_final_tie_breaker(TieBreaker::Registration);
///
/// let ready = [0usize, 1];
/// let ctx = SchedulingContext::at_time(0.0);
/// assert_eq!(engine.select_best(&ready, &registry, &ctx), Some(1));
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
    tie_breaker: TieBreaker,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            tie_breaker: TieBreaker::Registration,
        }
    }

    /// Adds a rule. Rules added later only break ties of earlier ones.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_final_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Final tie-breaker.
    pub fn tie_breaker(&self) -> TieBreaker {
        self.tie_breaker
    }

    /// Returns the position (within `ready`) of the process to run next.
    ///
    /// `ready` holds registry indices in ready-queue order.
    pub fn select_best(
        &self,
        ready: &[usize],
        registry: &ProcessRegistry,
        context: &SchedulingContext,
    ) -> Option<usize> {
        let mut best: Option<usize> = None;
        for pos in 0..ready.len() {
            best = match best {
                None => Some(pos),
                Some(current) => {
                    if self.compare(ready, pos, current, registry, context) == Ordering::Less {
                        Some(pos)
                    } else {
                        Some(current)
                    }
                }
            };
        }
        best
    }

    fn compare(
        &self,
        ready: &[usize],
        pos_a: usize,
        pos_b: usize,
        registry: &ProcessRegistry,
        context: &SchedulingContext,
    ) -> Ordering {
        let (a, b) = (ready[pos_a], ready[pos_b]);
        let (rec_a, rec_b) = (registry.record(a), registry.record(b));

        for rule in &self.rules {
            let score_a = rule.evaluate(rec_a, context);
            let score_b = rule.evaluate(rec_b, context);

            if (score_a - score_b).abs() > TIME_EPSILON {
                return score_a.partial_cmp(&score_b).unwrap_or(Ordering::Equal);
            }
        }

        // All rules tied → use final tie-breaker
        match self.tie_breaker {
            TieBreaker::Registration => a.cmp(&b),
            TieBreaker::QueueOrder => pos_a.cmp(&pos_b),
        }
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .field("tie_breaker", &self.tie_breaker)
            .finish()
    }
}
