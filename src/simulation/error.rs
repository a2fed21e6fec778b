//! Simulation errors.
//!
//! A run either produces a complete result or one of these errors; no
//! partial timeline is ever returned.

use std::fmt;

use crate::dispatching::Policy;
use crate::validation::ValidationError;

/// Reasons a simulation run is rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// The process set failed validation (empty, duplicate ids, bad values).
    InvalidInput(Vec<ValidationError>),
    /// A policy parameter is out of range (e.g. RR quantum < 1).
    InvalidPolicyParameter {
        /// Policy the parameter was supplied for.
        policy: Policy,
        /// Human-readable description.
        message: String,
    },
}

impl SimulationError {
    /// Shorthand for a policy parameter error.
    pub fn invalid_parameter(policy: Policy, message: impl Into<String>) -> Self {
        SimulationError::InvalidPolicyParameter {
            policy,
            message: message.into(),
        }
    }
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::InvalidInput(errors) => {
                write!(f, "invalid process set: ")?;
                for (i, e) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{e}")?;
                }
                Ok(())
            }
            SimulationError::InvalidPolicyParameter { policy, message } => {
                write!(f, "invalid {policy} parameter: {message}")
            }
        }
    }
}

impl std::error::Error for SimulationError {}

impl From<Vec<ValidationError>> for SimulationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        SimulationError::InvalidInput(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;
    use crate::validation::validate_processes;

    #[test]
    fn test_display_invalid_input() {
        let errors = validate_processes(&[Process::new(1, 0, 0), Process::new(1, 0, 2)])
            .unwrap_err();
        let err = SimulationError::from(errors);
        let msg = err.to_string();
        assert!(msg.starts_with("invalid process set: "));
        assert!(msg.contains("burst 0"));
        assert!(msg.contains("Duplicate process ID: 1"));
    }

    #[test]
    fn test_display_invalid_parameter() {
        let err = SimulationError::invalid_parameter(Policy::RoundRobin, "quantum must be >= 1");
        assert_eq!(err.to_string(), "invalid RR parameter: quantum must be >= 1");
    }
}
