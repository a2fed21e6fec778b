//! Rule engine for multi-key process selection.
//!
//! Chains selection rules lexicographically: the next rule is consulted only
//! when all previous rules tie, and a final deterministic tie-breaker
//! guarantees a total order.

use std::cmp::Ordering;
use std::sync::Arc;

use super::rules::ArrivalOrder;
use super::{RuleScore, SchedulingContext, SelectionRule};

/// How ties are broken after all rules are exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreaker {
    /// Position in the input process list (default).
    #[default]
    InputOrder,
    /// Numeric process id.
    ById,
}

/// A composable rule engine for process selection.
///
/// # Example
/// ```
/// use u_cpusched::dispatching::{rules, RuleEngine};
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::ShortestBurst)
///     .with_rule(rules::ArrivalOrder);
/// assert_eq!(engine.rule_names(), vec!["SJF", "ARRIVAL"]);
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn SelectionRule>>,
    tie_breaker: TieBreaker,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            tie_breaker: TieBreaker::InputOrder,
        }
    }

    /// Engine with `primary` followed by the standard arrival tie-break.
    ///
    /// Arrival is not repeated when `primary` already orders by arrival.
    pub fn with_primary<R: SelectionRule + 'static>(primary: R) -> Self {
        let arrival_is_primary = primary.name() == ArrivalOrder.name();
        let engine = Self::new().with_rule(primary);
        if arrival_is_primary {
            engine
        } else {
            engine.with_rule(ArrivalOrder)
        }
    }

    /// Appends a rule to the chain.
    pub fn with_rule<R: SelectionRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_final_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Names of the chained rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Sorts candidate indices, best first.
    pub fn sort_indices(&self, candidates: &[usize], context: &SchedulingContext<'_>) -> Vec<usize> {
        let mut sorted = candidates.to_vec();
        sorted.sort_by(|&a, &b| self.compare(a, b, context));
        sorted
    }

    /// Returns the best candidate, or `None` when there are none.
    pub fn select_best(&self, candidates: &[usize], context: &SchedulingContext<'_>) -> Option<usize> {
        candidates
            .iter()
            .copied()
            .min_by(|&a, &b| self.compare(a, b, context))
    }

    /// Scores of one process under each rule.
    pub fn evaluate(&self, index: usize, context: &SchedulingContext<'_>) -> Vec<RuleScore> {
        self.rules
            .iter()
            .map(|r| r.evaluate(index, context))
            .collect()
    }

    /// Total order over process indices.
    pub fn compare(&self, a: usize, b: usize, context: &SchedulingContext<'_>) -> Ordering {
        for rule in &self.rules {
            let ord = rule.evaluate(a, context).cmp(&rule.evaluate(b, context));
            if ord != Ordering::Equal {
                return ord;
            }
        }

        match self.tie_breaker {
            TieBreaker::InputOrder => a.cmp(&b),
            TieBreaker::ById => context
                .process(a)
                .id
                .cmp(&context.process(b).id)
                .then(a.cmp(&b)),
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
