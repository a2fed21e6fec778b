//! Scheduling policies.
//!
//! A [`Policy`] is the closed set of selectable disciplines. Each one builds
//! a [`Dispatcher`], the stateful strategy the simulator consults at every
//! decision point.
//!
//! | Policy | Dispatcher | Slice |
//! |--------|------------|-------|
//! | FCFS | rule-based, arrival | to completion |
//! | SJF | rule-based, burst | to completion |
//! | PRIORITY | rule-based, priority | to completion |
//! | SRTF | rule-based, remaining | one tick |
//! | RR | FIFO queue | min(quantum, remaining) |

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::rules::{ArrivalOrder, HighestPriority, ShortestBurst, ShortestRemaining};
use super::{RuleEngine, SchedulingContext};
use crate::models::Time;

/// CPU scheduling discipline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Policy {
    /// First come, first served.
    #[default]
    #[serde(rename = "FCFS")]
    Fcfs,
    /// Shortest job first, non-preemptive.
    #[serde(rename = "SJF")]
    Sjf,
    /// Priority, non-preemptive (lower value wins).
    #[serde(rename = "PRIORITY")]
    Priority,
    /// Shortest remaining time first, preemptive.
    #[serde(rename = "SRTF")]
    Srtf,
    /// Round-Robin with a fixed quantum.
    #[serde(rename = "RR")]
    RoundRobin,
}

impl Policy {
    /// All policies, in selector order.
    pub const ALL: [Policy; 5] = [
        Policy::Fcfs,
        Policy::Sjf,
        Policy::Priority,
        Policy::Srtf,
        Policy::RoundRobin,
    ];

    /// Selector name (`FCFS`, `SJF`, `PRIORITY`, `SRTF`, `RR`).
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fcfs => "FCFS",
            Policy::Sjf => "SJF",
            Policy::Priority => "PRIORITY",
            Policy::Srtf => "SRTF",
            Policy::RoundRobin => "RR",
        }
    }

    /// Whether a running process can lose the CPU before it finishes.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Policy::Srtf | Policy::RoundRobin)
    }

    /// Whether the time quantum is meaningful for this policy.
    pub fn uses_quantum(&self) -> bool {
        matches!(self, Policy::RoundRobin)
    }

    /// Builds the dispatcher for one run.
    ///
    /// `quantum` is only read by Round-Robin.
    pub fn dispatcher(&self, quantum: Time) -> Box<dyn Dispatcher> {
        match self {
            Policy::Fcfs => Box::new(RuleDispatcher::new(
                *self,
                RuleEngine::with_primary(ArrivalOrder),
                SliceMode::ToCompletion,
            )),
            Policy::Sjf => Box::new(RuleDispatcher::new(
                *self,
                RuleEngine::with_primary(ShortestBurst),
                SliceMode::ToCompletion,
            )),
            Policy::Priority => Box::new(RuleDispatcher::new(
                *self,
                RuleEngine::with_primary(HighestPriority),
                SliceMode::ToCompletion,
            )),
            Policy::Srtf => Box::new(RuleDispatcher::new(
                *self,
                RuleEngine::with_primary(ShortestRemaining),
                SliceMode::SingleTick,
            )),
            Policy::RoundRobin => Box::new(RoundRobin::new(quantum)),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown policy name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePolicyError {
    /// The rejected input.
    pub input: String,
}

impl fmt::Display for ParsePolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown scheduling policy '{}' (expected FCFS, SJF, PRIORITY, SRTF or RR)",
            self.input
        )
    }
}

impl std::error::Error for ParsePolicyError {}

impl FromStr for Policy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Policy::ALL
            .into_iter()
            .find(|p| p.name() == upper)
            .ok_or_else(|| ParsePolicyError {
                input: s.to_string(),
            })
    }
}

/// What the dispatcher wants the simulator to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Run the process at `index` for `slice` time units.
    Run { index: usize, slice: Time },
    /// Nothing is ready; the CPU idles until the given arrival.
    Idle { until: Time },
    /// No unfinished process remains.
    Exhausted,
}

/// Stateful per-run selection strategy.
pub trait Dispatcher: fmt::Debug {
    /// Policy this dispatcher implements.
    fn policy(&self) -> Policy;

    /// Called once before the first decision of a run.
    fn start(&mut self, _context: &SchedulingContext<'_>) {}

    /// Chooses what happens at the current decision point.
    fn next(&mut self, context: &SchedulingContext<'_>) -> Decision;

    /// Called after the process at `index` ran a slice; `context.now` is the
    /// end of that slice.
    fn after_slice(&mut self, _index: usize, _context: &SchedulingContext<'_>) {}
}

/// How long a rule-selected process runs per dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceMode {
    /// Until its remaining burst is exhausted (non-preemptive).
    ToCompletion,
    /// One time unit, then reselect (preemptive).
    SingleTick,
}

/// Dispatcher that ranks the recomputed ready set with a [`RuleEngine`].
#[derive(Debug, Clone)]
pub struct RuleDispatcher {
    policy: Policy,
    engine: RuleEngine,
    slice: SliceMode,
}

impl RuleDispatcher {
    /// Creates a rule-based dispatcher.
    pub fn new(policy: Policy, engine: RuleEngine, slice: SliceMode) -> Self {
        Self {
            policy,
            engine,
            slice,
        }
    }
}

impl Dispatcher for RuleDispatcher {
    fn policy(&self) -> Policy {
        self.policy
    }

    fn next(&mut self, context: &SchedulingContext<'_>) -> Decision {
        let ready = context.ready_indices();
        if let Some(index) = self.engine.select_best(&ready, context) {
            let slice = match self.slice {
                SliceMode::ToCompletion => context.remaining(index),
                SliceMode::SingleTick => 1,
            };
            return Decision::Run { index, slice };
        }

        match context.next_arrival() {
            Some(until) => Decision::Idle { until },
            None => Decision::Exhausted,
        }
    }
}

/// Round-Robin over an explicit FIFO ready queue.
///
/// Arrivals that happen during a slice are enqueued before the preempted
/// process goes back to the tail.
#[derive(Debug, Clone)]
pub struct RoundRobin {
    quantum: Time,
    queue: VecDeque<usize>,
    by_arrival: Vec<usize>,
    cursor: usize,
}

impl RoundRobin {
    /// Creates a Round-Robin dispatcher with the given quantum.
    pub fn new(quantum: Time) -> Self {
        Self {
            quantum,
            queue: VecDeque::new(),
            by_arrival: Vec::new(),
            cursor: 0,
        }
    }

    /// Time quantum.
    pub fn quantum(&self) -> Time {
        self.quantum
    }

    /// Current queue contents, head first.
    pub fn queued(&self) -> Vec<usize> {
        self.queue.iter().copied().collect()
    }

    fn admit(&mut self, context: &SchedulingContext<'_>) {
        while let Some(&index) = self.by_arrival.get(self.cursor) {
            if context.process(index).arrival > context.now {
                break;
            }
            self.queue.push_back(index);
            self.cursor += 1;
        }
    }
}

impl Dispatcher for RoundRobin {
    fn policy(&self) -> Policy {
        Policy::RoundRobin
    }

    fn start(&mut self, context: &SchedulingContext<'_>) {
        let mut order: Vec<usize> = (0..context.len()).collect();
        order.sort_by_key(|&i| (context.process(i).arrival, i));
        self.by_arrival = order;
        self.queue.clear();
        self.cursor = 0;
        self.admit(context);
    }

    fn next(&mut self, context: &SchedulingContext<'_>) -> Decision {
        self.admit(context);

        while let Some(index) = self.queue.pop_front() {
            let remaining = context.remaining(index);
            if remaining > 0 {
                return Decision::Run {
                    index,
                    slice: self.quantum.min(remaining),
                };
            }
        }

        match self.by_arrival.get(self.cursor) {
            Some(&index) => Decision::Idle {
                until: context.process(index).arrival,
            },
            None => Decision::Exhausted,
        }
    }

    fn after_slice(&mut self, index: usize, context: &SchedulingContext<'_>) {
        self.admit(context);
        if context.state(index).is_pending() {
            self.queue.push_back(index);
        }
    }
}
