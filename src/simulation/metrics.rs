//! Run performance metrics.
//!
//! Computes per-process and aggregate statistics from a finished run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//! | Response | first dispatch - arrival |
//! | Throughput | processes / total time |
//! | CPU Utilization | sum(burst) / total time |
//! | Total Time | end of the last timeline segment |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::models::{Process, ProcessId, RuntimeState, Time, Timeline};

/// Metrics of one process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// Process identifier.
    pub id: ProcessId,
    /// Display name.
    pub name: String,
    /// Arrival time.
    pub arrival: Time,
    /// Burst length.
    pub burst: Time,
    /// Completion time.
    pub completion: Time,
    /// Completion - arrival.
    pub turnaround: Time,
    /// Turnaround - burst.
    pub waiting: Time,
    /// First dispatch - arrival.
    pub response: Time,
}

impl ProcessMetrics {
    /// Derives metrics from a process and its final runtime state.
    ///
    /// A process that never completed reports all-zero timings.
    pub fn from_run(process: &Process, state: &RuntimeState) -> Self {
        let (completion, turnaround, waiting) = match state.completion {
            Some(completion) => {
                let turnaround = completion - process.arrival;
                (completion, turnaround, turnaround - process.burst)
            }
            None => (0, 0, 0),
        };
        let response = state
            .first_start
            .map(|start| start - process.arrival)
            .unwrap_or(0);

        Self {
            id: process.id,
            name: process.name.clone(),
            arrival: process.arrival,
            burst: process.burst,
            completion,
            turnaround,
            waiting,
            response,
        }
    }
}

/// Aggregate run statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Mean turnaround time.
    pub average_turnaround: f64,
    /// Mean waiting time.
    pub average_waiting: f64,
    /// Mean response time.
    pub average_response: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
    /// Fraction of total time spent executing (0.0..1.0).
    pub cpu_utilization: f64,
    /// End of the last timeline segment.
    pub total_time: Time,
    /// Total idle time.
    pub idle_time: Time,
    /// Total context-switch overhead.
    pub switch_time: Time,
    /// Number of switches between different processes.
    pub context_switches: usize,
}

impl Summary {
    /// Computes aggregate statistics.
    ///
    /// Zero elapsed time or an empty metric list yields zeros instead of
    /// dividing by zero.
    pub fn calculate(
        metrics: &[ProcessMetrics],
        processes: &[Process],
        timeline: &Timeline,
        context_switches: usize,
    ) -> Self {
        let count = metrics.len();
        let mean = |f: fn(&ProcessMetrics) -> Time| -> f64 {
            if count == 0 {
                0.0
            } else {
                metrics.iter().map(f).sum::<Time>() as f64 / count as f64
            }
        };

        let total_time = timeline.end();
        let total_burst: Time = processes.iter().map(|p| p.burst).sum();
        let (throughput, cpu_utilization) = if total_time > 0 {
            (
                processes.len() as f64 / total_time as f64,
                total_burst as f64 / total_time as f64,
            )
        } else {
            (0.0, 0.0)
        };

        Self {
            average_turnaround: mean(|m| m.turnaround),
            average_waiting: mean(|m| m.waiting),
            average_response: mean(|m| m.response),
            throughput,
            cpu_utilization,
            total_time,
            idle_time: timeline.idle_time(),
            switch_time: timeline.switch_time(),
            context_switches,
        }
    }
}

/// Computes per-process metrics (input order) and the run summary.
///
/// `state[i]` must be the final runtime state of `processes[i]`.
pub fn calculate(
    processes: &[Process],
    state: &[RuntimeState],
    timeline: &Timeline,
    context_switches: usize,
) -> (Vec<ProcessMetrics>, Summary) {
    let metrics: Vec<ProcessMetrics> = processes
        .iter()
        .zip(state)
        .map(|(p, st)| ProcessMetrics::from_run(p, st))
        .collect();
    let summary = Summary::calculate(&metrics, processes, timeline, context_switches);
    (metrics, summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finished(first_start: Time, completion: Time) -> RuntimeState {
        RuntimeState {
            remaining: 0,
            completion: Some(completion),
            first_start: Some(first_start),
        }
    }

    #[test]
    fn test_process_metrics() {
        let p = Process::new(2, 2, 4);
        let m = ProcessMetrics::from_run(&p, &finished(7, 11));
        assert_eq!(m.completion, 11);
        assert_eq!(m.turnaround, 9);
        assert_eq!(m.waiting, 5);
        assert_eq!(m.response, 5);
    }

    #[test]
    fn test_summary_basic() {
        let procs = vec![Process::new(1, 0, 2), Process::new(2, 0, 2)];
        let state = vec![finished(0, 2), finished(3, 5)];
        let mut timeline = Timeline::new();
        timeline.push_execution(&procs[0], 0, 2);
        timeline.push_context_switch(2, 3);
        timeline.push_execution(&procs[1], 3, 5);

        let (metrics, summary) = calculate(&procs, &state, &timeline, 1);
        assert_eq!(metrics.len(), 2);
        assert_eq!(summary.total_time, 5);
        assert_eq!(summary.switch_time, 1);
        assert_eq!(summary.idle_time, 0);
        assert_eq!(summary.context_switches, 1);
        // turnaround (2 + 5) / 2
        assert!((summary.average_turnaround - 3.5).abs() < 1e-10);
        assert!((summary.average_waiting - 1.5).abs() < 1e-10);
        assert!((summary.average_response - 1.5).abs() < 1e-10);
        assert!((summary.throughput - 0.4).abs() < 1e-10);
        assert!((summary.cpu_utilization - 0.8).abs() < 1e-10);
    }

    #[test]
    fn test_summary_degenerate() {
        let summary = Summary::calculate(&[], &[], &Timeline::new(), 0);
        assert_eq!(summary.total_time, 0);
        assert_eq!(summary.throughput, 0.0);
        assert_eq!(summary.cpu_utilization, 0.0);
        assert_eq!(summary.average_turnaround, 0.0);
        assert_eq!(summary.average_waiting, 0.0);
        assert_eq!(summary.average_response, 0.0);
    }

    #[test]
    fn test_unfinished_process_reports_zero() {
        let p = Process::new(1, 3, 4);
        let m = ProcessMetrics::from_run(&p, &RuntimeState::new(&p));
        assert_eq!(m.completion, 0);
        assert_eq!(m.turnaround, 0);
        assert_eq!(m.waiting, 0);
        assert_eq!(m.response, 0);
    }
}
