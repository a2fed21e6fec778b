//! Simulation driver, run configuration and metrics.
//!
//! # Algorithm
//!
//! `Simulator` runs a discrete-event loop over integer time. At every
//! decision point it consults the configured policy's dispatcher, inserts
//! idle and context-switch segments as needed, and records execution
//! slices into a coalescing [`Timeline`](crate::models::Timeline).
//!
//! # Metrics
//!
//! `metrics::calculate` derives completion, turnaround, waiting and
//! response times per process plus the run summary.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Banks et al. (2010), "Discrete-Event System Simulation"

mod config;
mod driver;
mod error;
pub mod metrics;

pub use config::{SimulationConfig, DEFAULT_QUANTUM};
pub use driver::{simulate, SimulationResult, Simulator};
pub use error::SimulationError;
pub use metrics::{ProcessMetrics, Summary};
