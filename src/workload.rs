//! Process set fixtures and random workload generation.
//!
//! The generator only draws from the RNG it is handed; pass a seeded RNG
//! (e.g. `StdRng::seed_from_u64`) for reproducible workloads.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::{Process, ProcessId, Time};

/// The four-process reference workload.
///
/// | Process | Arrival | Burst | Priority |
/// |---------|---------|-------|----------|
/// | P1 | 0 | 7 | 2 |
/// | P2 | 2 | 4 | 1 |
/// | P3 | 4 | 1 | 3 |
/// | P4 | 5 | 4 | 2 |
pub fn demo_processes() -> Vec<Process> {
    vec![
        Process::new(1, 0, 7).with_priority(2).with_color("#f59e0b"),
        Process::new(2, 2, 4).with_priority(1).with_color("#2dd4bf"),
        Process::new(3, 4, 1).with_priority(3).with_color("#60a5fa"),
        Process::new(4, 5, 4).with_priority(2).with_color("#fb7185"),
    ]
}

/// Random process set generator.
///
/// Every generated set passes [`validate_processes`](crate::validation::validate_processes):
/// ids are `1..=count`, arrivals are in `0..=max_arrival`, bursts in
/// `1..=max_burst` and priorities in `1..=max_priority`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadGenerator {
    /// Number of processes.
    pub count: usize,
    /// Latest possible arrival.
    pub max_arrival: Time,
    /// Longest possible burst.
    pub max_burst: Time,
    /// Largest priority value.
    pub max_priority: i32,
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self {
            count: 5,
            max_arrival: 10,
            max_burst: 8,
            max_priority: 5,
        }
    }
}

impl WorkloadGenerator {
    /// Creates a generator with default bounds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of processes.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Sets the latest arrival.
    pub fn with_max_arrival(mut self, max_arrival: Time) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the longest burst.
    pub fn with_max_burst(mut self, max_burst: Time) -> Self {
        self.max_burst = max_burst;
        self
    }

    /// Sets the largest priority value.
    pub fn with_max_priority(mut self, max_priority: i32) -> Self {
        self.max_priority = max_priority;
        self
    }

    /// Draws a process set.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Process> {
        let max_arrival = self.max_arrival.max(0);
        let max_burst = self.max_burst.max(1);
        let max_priority = self.max_priority.max(1);

        (1..=self.count)
            .map(|n| {
                Process::new(
                    n as ProcessId,
                    rng.random_range(0..=max_arrival),
                    rng.random_range(1..=max_burst),
                )
                .with_priority(rng.random_range(1..=max_priority))
            })
            .collect()
    }
}
