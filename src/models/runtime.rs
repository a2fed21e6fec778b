//! Per-run process bookkeeping.

use serde::{Deserialize, Serialize};

use super::{Process, Time};

/// Mutable state of one process during a single simulation run.
///
/// Created at run start from the input process and discarded when the
/// run's metrics have been computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeState {
    /// Burst time still to execute.
    pub remaining: Time,
    /// Time the process finished, once it has.
    pub completion: Option<Time>,
    /// Time the process was first dispatched, once it has been.
    pub first_start: Option<Time>,
}

impl RuntimeState {
    /// Fresh state for a process that has not run yet.
    pub fn new(process: &Process) -> Self {
        Self {
            remaining: process.burst,
            completion: None,
            first_start: None,
        }
    }

    /// Whether the process still has work.
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.remaining > 0
    }

    /// Records execution of `[start, start + duration)`.
    ///
    /// Returns `true` when this slice finished the process.
    pub fn record_slice(&mut self, start: Time, duration: Time) -> bool {
        if self.first_start.is_none() {
            self.first_start = Some(start);
        }
        self.remaining -= duration;
        debug_assert!(self.remaining >= 0, "slice exceeds remaining burst");
        if self.remaining == 0 {
            self.completion = Some(start + duration);
            true
        } else {
            false
        }
    }
}
