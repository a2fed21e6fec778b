//! Input validation for simulation runs.
//!
//! Checks the structural integrity of a process set before it is
//! simulated. Detects:
//! - Empty process sets
//! - Duplicate process IDs
//! - Negative arrival times
//! - Bursts shorter than one time unit
//!
//! Sanitizing raw user input into range is the caller's job; these checks
//! only reject sets the engine cannot simulate meaningfully.

use std::collections::HashSet;
use std::fmt;

use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No processes were supplied.
    EmptyProcessSet,
    /// Two processes share the same ID.
    DuplicateId,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process has a burst below 1.
    InvalidBurst,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a process set.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    if processes.is_empty() {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::EmptyProcessSet,
            "At least one process is required",
        )]);
    }

    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for p in processes {
        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process '{}' arrives at negative time {}", p.name, p.arrival),
            ));
        }

        if p.burst < 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidBurst,
                format!("Process '{}' has burst {} (must be >= 1)", p.name, p.burst),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
