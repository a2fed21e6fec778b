//! Simulation run configuration.

use serde::{Deserialize, Serialize};

use super::SimulationError;
use crate::dispatching::Policy;
use crate::models::Time;

/// Default Round-Robin quantum.
pub const DEFAULT_QUANTUM: Time = 2;

/// Parameters of one simulation run.
///
/// # Example
/// ```
/// use u_cpusched::dispatching::Policy;
/// use u_cpusched::simulation::SimulationConfig;
///
/// let config = SimulationConfig::new(Policy::RoundRobin)
///     .with_quantum(3)
///     .with_context_switch(1);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Scheduling policy.
    pub policy: Policy,
    /// Round-Robin time quantum (ignored by other policies).
    pub quantum: Time,
    /// Fixed cost of switching between two different processes.
    pub context_switch: Time,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            policy: Policy::default(),
            quantum: DEFAULT_QUANTUM,
            context_switch: 0,
        }
    }
}

impl SimulationConfig {
    /// Creates a config for `policy` with default parameters.
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            ..Default::default()
        }
    }

    /// Sets the Round-Robin quantum.
    pub fn with_quantum(mut self, quantum: Time) -> Self {
        self.quantum = quantum;
        self
    }

    /// Sets the context-switch cost.
    pub fn with_context_switch(mut self, cost: Time) -> Self {
        self.context_switch = cost;
        self
    }

    /// Rejects parameter combinations that cannot produce a sensible timeline.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.policy.uses_quantum() && self.quantum < 1 {
            return Err(SimulationError::invalid_parameter(
                self.policy,
                format!("quantum must be >= 1, got {}", self.quantum),
            ));
        }
        if self.context_switch < 0 {
            return Err(SimulationError::invalid_parameter(
                self.policy,
                format!("context switch cost must be >= 0, got {}", self.context_switch),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = SimulationConfig::default();
        assert_eq!(c.policy, Policy::Fcfs);
        assert_eq!(c.quantum, DEFAULT_QUANTUM);
        assert_eq!(c.context_switch, 0);
    }

    #[test]
    fn test_rr_rejects_zero_quantum() {
        let c = SimulationConfig::new(Policy::RoundRobin).with_quantum(0);
        assert!(matches!(
            c.validate(),
            Err(SimulationError::InvalidPolicyParameter {
                policy: Policy::RoundRobin,
                ..
            })
        ));
    }

    #[test]
    fn test_quantum_ignored_outside_rr() {
        let c = SimulationConfig::new(Policy::Sjf).with_quantum(0);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_negative_switch_cost() {
        let c = SimulationConfig::new(Policy::Fcfs).with_context_switch(-1);
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_deserialize_partial() {
        let c: SimulationConfig =
            serde_json::from_str(r#"{"policy":"RR","context_switch":1}"#).unwrap();
        assert_eq!(c.policy, Policy::RoundRobin);
        assert_eq!(c.quantum, DEFAULT_QUANTUM);
        assert_eq!(c.context_switch, 1);
    }
}
