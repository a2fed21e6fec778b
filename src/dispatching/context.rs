//! Scheduling context for selection rule evaluation.

use crate::models::{Process, RuntimeState, Time};

/// Read-only snapshot of a run at one decision point.
///
/// Processes are addressed by their index in the input slice; that index is
/// also the final tie-breaker (input order).
#[derive(Debug, Clone, Copy)]
pub struct SchedulingContext<'a> {
    /// Current simulation time.
    pub now: Time,
    processes: &'a [Process],
    state: &'a [RuntimeState],
}

impl<'a> SchedulingContext<'a> {
    /// Creates a snapshot at `now`.
    ///
    /// `state[i]` must describe `processes[i]`.
    pub fn new(now: Time, processes: &'a [Process], state: &'a [RuntimeState]) -> Self {
        debug_assert_eq!(processes.len(), state.len());
        Self {
            now,
            processes,
            state,
        }
    }

    /// Input process at `index`.
    #[inline]
    pub fn process(&self, index: usize) -> &'a Process {
        &self.processes[index]
    }

    /// Runtime state at `index`.
    #[inline]
    pub fn state(&self, index: usize) -> &'a RuntimeState {
        &self.state[index]
    }

    /// Remaining burst at `index`.
    #[inline]
    pub fn remaining(&self, index: usize) -> Time {
        self.state[index].remaining
    }

    /// Number of processes in the run.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the run has no processes.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Whether the process has arrived and still has work.
    pub fn is_ready(&self, index: usize) -> bool {
        self.processes[index].arrival <= self.now && self.state[index].is_pending()
    }

    /// Indices of all ready processes, in input order.
    pub fn ready_indices(&self) -> Vec<usize> {
        (0..self.processes.len())
            .filter(|&i| self.is_ready(i))
            .collect()
    }

    /// Earliest arrival among unfinished processes that have not arrived yet.
    pub fn next_arrival(&self) -> Option<Time> {
        self.processes
            .iter()
            .zip(self.state)
            .filter(|(p, st)| st.is_pending() && p.arrival > self.now)
            .map(|(p, _)| p.arrival)
            .min()
    }

    /// Number of processes that still have work.
    pub fn pending_count(&self) -> usize {
        self.state.iter().filter(|st| st.is_pending()).count()
    }
}
