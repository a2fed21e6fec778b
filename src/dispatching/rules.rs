//! Built-in selection rules.
//!
//! Each rule supplies one sort key for a ready process. The scheduling
//! policies chain them: primary key, then arrival, then input order.
//!
//! | Rule | Key | Used by |
//! |------|-----|---------|
//! | `ArrivalOrder` | arrival time | FCFS, tie-break for all |
//! | `ShortestBurst` | total burst | SJF |
//! | `HighestPriority` | priority value | PRIORITY |
//! | `ShortestRemaining` | remaining burst | SRTF |
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.

use super::{RuleScore, SchedulingContext, SelectionRule};

/// First come, first served.
///
/// Prioritizes processes by arrival time.
#[derive(Debug, Clone, Copy)]
pub struct ArrivalOrder;

impl SelectionRule for ArrivalOrder {
    fn name(&self) -> &'static str {
        "ARRIVAL"
    }

    fn evaluate(&self, index: usize, context: &SchedulingContext<'_>) -> RuleScore {
        context.process(index).arrival
    }

    fn description(&self) -> &'static str {
        "Earliest Arrival"
    }
}

/// Shortest job first.
///
/// Uses the total burst length, not the remaining work, so a partially
/// run process keeps its original rank.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl SelectionRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, index: usize, context: &SchedulingContext<'_>) -> RuleScore {
        context.process(index).burst
    }

    fn description(&self) -> &'static str {
        "Shortest Burst"
    }
}

/// Lowest priority value first.
#[derive(Debug, Clone, Copy)]
pub struct HighestPriority;

impl SelectionRule for HighestPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, index: usize, context: &SchedulingContext<'_>) -> RuleScore {
        context.process(index).priority as RuleScore
    }

    fn description(&self) -> &'static str {
        "Highest Priority (lowest value)"
    }
}

/// Shortest remaining time.
///
/// Re-evaluated at every tick by the preemptive policy.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl SelectionRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRT"
    }

    fn evaluate(&self, index: usize, context: &SchedulingContext<'_>) -> RuleScore {
        context.remaining(index)
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Process, RuntimeState};

    fn fixture() -> (Vec<Process>, Vec<RuntimeState>) {
        let procs = vec![
            Process::new(1, 0, 7).with_priority(2),
            Process::new(2, 2, 4).with_priority(1),
            Process::new(3, 4, 1).with_priority(3),
        ];
        let state = procs.iter().map(RuntimeState::new).collect();
        (procs, state)
    }

    #[test]
    fn test_arrival_order() {
        let (procs, state) = fixture();
        let ctx = SchedulingContext::new(5, &procs, &state);
        assert!(ArrivalOrder.evaluate(0, &ctx) < ArrivalOrder.evaluate(1, &ctx));
        assert_eq!(ArrivalOrder.evaluate(2, &ctx), 4);
    }

    #[test]
    fn test_shortest_burst_ignores_progress() {
        let (procs, mut state) = fixture();
        state[0].record_slice(0, 6);
        let ctx = SchedulingContext::new(6, &procs, &state);
        // P1 has 1 unit left but still ranks by its burst of 7
        assert_eq!(ShortestBurst.evaluate(0, &ctx), 7);
        assert!(ShortestBurst.evaluate(2, &ctx) < ShortestBurst.evaluate(1, &ctx));
    }

    #[test]
    fn test_highest_priority() {
        let (procs, state) = fixture();
        let ctx = SchedulingContext::new(5, &procs, &state);
        assert!(HighestPriority.evaluate(1, &ctx) < HighestPriority.evaluate(0, &ctx));
        assert!(HighestPriority.evaluate(0, &ctx) < HighestPriority.evaluate(2, &ctx));
    }

    #[test]
    fn test_shortest_remaining_tracks_progress() {
        let (procs, mut state) = fixture();
        state[0].record_slice(0, 5);
        let ctx = SchedulingContext::new(5, &procs, &state);
        assert_eq!(ShortestRemaining.evaluate(0, &ctx), 2);
        assert!(ShortestRemaining.evaluate(0, &ctx) < ShortestRemaining.evaluate(1, &ctx));
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(ArrivalOrder.name(), "ARRIVAL");
        assert_eq!(ShortestRemaining.description(), "Shortest Remaining Time");
    }
}
