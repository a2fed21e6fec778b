//! Process model.
//!
//! A process is the unit of work fed to the simulator: it arrives at a
//! point on the simulated clock and needs a fixed amount of CPU time.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// Simulated clock value (integer time units, t=0 is the start of a run).
pub type Time = i64;

/// Caller-supplied process identifier.
pub type ProcessId = u32;

/// A process to be scheduled.
///
/// Immutable once a run starts. The engine never reads `color`; it is
/// passed through to execution segments for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: ProcessId,
    /// Display name.
    pub name: String,
    /// Arrival time on the simulated clock (>= 0).
    pub arrival: Time,
    /// Total CPU time required (>= 1).
    pub burst: Time,
    /// Scheduling priority (lower value = more important).
    pub priority: i32,
    /// Display color, opaque to the engine.
    #[serde(default)]
    pub color: Option<String>,
}

impl Process {
    /// Creates a process named `P<id>` with the given arrival and burst.
    ///
    /// Priority defaults to 1.
    pub fn new(id: ProcessId, arrival: Time, burst: Time) -> Self {
        Self {
            id,
            name: format!("P{id}"),
            arrival,
            burst,
            priority: 1,
            color: None,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the display color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Earliest possible completion time (arrival + burst).
    #[inline]
    pub fn earliest_completion(&self) -> Time {
        self.arrival + self.burst
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new(3, 4, 1)
            .with_name("editor")
            .with_priority(3)
            .with_color("#60a5fa");

        assert_eq!(p.id, 3);
        assert_eq!(p.name, "editor");
        assert_eq!(p.arrival, 4);
        assert_eq!(p.burst, 1);
        assert_eq!(p.priority, 3);
        assert_eq!(p.color.as_deref(), Some("#60a5fa"));
    }

    #[test]
    fn test_process_defaults() {
        let p = Process::new(7, 0, 5);
        assert_eq!(p.name, "P7");
        assert_eq!(p.priority, 1);
        assert!(p.color.is_none());
        assert_eq!(p.earliest_completion(), 5);
    }

    #[test]
    fn test_process_deserialize_without_color() {
        let json = r#"{"id":1,"name":"P1","arrival":0,"burst":7,"priority":2}"#;
        let p: Process = serde_json::from_str(json).unwrap();
        assert_eq!(p, Process::new(1, 0, 7).with_priority(2));
    }
}
