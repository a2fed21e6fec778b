//! Discrete-event simulation driver.
//!
//! # Algorithm
//!
//! 1. Validate the config and the process set; reject the run on any error.
//! 2. Ask the policy's dispatcher what to do at the current time.
//! 3. Idle: emit an idle segment and jump straight to the next arrival.
//! 4. Run: if the selected process differs from the last one that ran,
//!    count a context switch and emit its overhead segment (when the cost
//!    is nonzero); then emit the execution slice and update runtime state.
//! 5. Repeat until every process has completed.
//!
//! # Complexity
//! O((B + S) * n) decisions for rule-based policies, where B is the total
//! burst, S the number of switches and n the process count. Idle gaps cost
//! one decision each, never one per tick.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::metrics::{self, ProcessMetrics, Summary};
use super::{SimulationConfig, SimulationError};
use crate::dispatching::{Decision, Policy, SchedulingContext};
use crate::models::{Process, ProcessId, RuntimeState, Time, Timeline};
use crate::validation::validate_processes;

/// Output of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Configuration the run used.
    pub config: SimulationConfig,
    /// Coalesced, gap-free execution timeline.
    pub timeline: Timeline,
    /// Per-process metrics, in input order.
    pub metrics: Vec<ProcessMetrics>,
    /// Aggregate statistics.
    pub summary: Summary,
}

impl SimulationResult {
    /// Metrics of the process with the given id.
    pub fn metrics_for(&self, id: ProcessId) -> Option<&ProcessMetrics> {
        self.metrics.iter().find(|m| m.id == id)
    }
}

/// Single-CPU scheduling simulator.
///
/// # Example
///
/// ```
/// use u_cpusched::dispatching::Policy;
/// use u_cpusched::simulation::{SimulationConfig, Simulator};
/// use u_cpusched::workload::demo_processes;
///
/// let simulator = Simulator::new(SimulationConfig::new(Policy::Sjf));
/// let result = simulator.run(&demo_processes()).unwrap();
/// assert_eq!(result.summary.total_time, 16);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    /// Creates a simulator for the given configuration.
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Run configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Simulates `processes` to completion.
    ///
    /// Runs are independent and deterministic: the same input always
    /// produces the same result.
    pub fn run(&self, processes: &[Process]) -> Result<SimulationResult, SimulationError> {
        self.config.validate()?;
        validate_processes(processes)?;

        let policy = self.config.policy;
        let switch_cost = self.config.context_switch;
        debug!(
            "simulating {} processes with {} (quantum={}, context_switch={})",
            processes.len(),
            policy,
            self.config.quantum,
            switch_cost
        );

        let mut state: Vec<RuntimeState> = processes.iter().map(RuntimeState::new).collect();
        let mut dispatcher = policy.dispatcher(self.config.quantum);
        let mut timeline = Timeline::new();
        let mut clock: Time = 0;
        let mut last_run: Option<usize> = None;
        let mut context_switches = 0usize;
        let mut unfinished = processes.len();

        dispatcher.start(&SchedulingContext::new(clock, processes, &state));

        while unfinished > 0 {
            let decision = dispatcher.next(&SchedulingContext::new(clock, processes, &state));

            match decision {
                Decision::Idle { until } => {
                    debug_assert!(until > clock, "idle jump must move forward");
                    trace!("t={clock}: idle until {until}");
                    timeline.push_idle(clock, until);
                    clock = until;
                }
                Decision::Run { index, slice } => {
                    let process = &processes[index];

                    if last_run.is_some_and(|prev| prev != index) {
                        context_switches += 1;
                        if switch_cost > 0 {
                            timeline.push_context_switch(clock, clock + switch_cost);
                            clock += switch_cost;
                        }
                    }

                    debug!(
                        "t={clock}: {} runs {} for {slice} (remaining {})",
                        policy, process.name, state[index].remaining
                    );
                    timeline.push_execution(process, clock, clock + slice);
                    if state[index].record_slice(clock, slice) {
                        unfinished -= 1;
                        trace!("t={}: {} completed", clock + slice, process.name);
                    }
                    clock += slice;
                    last_run = Some(index);

                    dispatcher.after_slice(index, &SchedulingContext::new(clock, processes, &state));
                }
                Decision::Exhausted => {
                    debug_assert_eq!(unfinished, 0, "dispatcher ran out of work early");
                    break;
                }
            }
        }

        let (metrics, summary) = metrics::calculate(processes, &state, &timeline, context_switches);
        debug!(
            "{} finished at t={} with {} context switches",
            policy, summary.total_time, summary.context_switches
        );

        Ok(SimulationResult {
            config: self.config.clone(),
            timeline,
            metrics,
            summary,
        })
    }
}

/// Runs one simulation with the given policy parameters.
pub fn simulate(
    policy: Policy,
    processes: &[Process],
    quantum: Time,
    context_switch: Time,
) -> Result<SimulationResult, SimulationError> {
    let config = SimulationConfig::new(policy)
        .with_quantum(quantum)
        .with_context_switch(context_switch);
    Simulator::new(config).run(processes)
}
