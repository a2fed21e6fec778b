//! Selection rules, rule engine and scheduling policies.
//!
//! Provides the per-policy decision procedures the simulator consults at
//! every decision point. Rule-based policies (FCFS, SJF, PRIORITY, SRTF)
//! rank the recomputed ready set; Round-Robin keeps its own FIFO queue.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::{Decision, Policy, SchedulingContext};
//! use u_cpusched::models::{Process, RuntimeState};
//!
//! let procs = vec![Process::new(1, 0, 5), Process::new(2, 0, 2)];
//! let state: Vec<RuntimeState> = procs.iter().map(RuntimeState::new).collect();
//! let context = SchedulingContext::new(0, &procs, &state);
//!
//! let mut sjf = Policy::Sjf.dispatcher(1);
//! assert_eq!(sjf.next(&context), Decision::Run { index: 1, slice: 2 });
//! ```
//!
//! # Tie-breaking
//!
//! Every policy orders by its primary key, then arrival time, then input
//! order, so a run is fully deterministic.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod context;
mod engine;
mod policy;
pub mod rules;

pub use context::SchedulingContext;
pub use engine::{RuleEngine, TieBreaker};
pub use policy::{
    Decision, Dispatcher, ParsePolicyError, Policy, RoundRobin, RuleDispatcher, SliceMode,
};

use std::fmt::Debug;

/// Score returned by a selection rule.
///
/// Lower scores = selected first.
pub type RuleScore = i64;

/// A selection rule that supplies one sort key for a ready process.
///
/// # Score Convention
/// **Lower score = higher priority.**
pub trait SelectionRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF", "ARRIVAL").
    fn name(&self) -> &'static str;

    /// Scores the process at `index` in the given context.
    fn evaluate(&self, index: usize, context: &SchedulingContext<'_>) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
