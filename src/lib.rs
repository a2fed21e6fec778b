//! Single-CPU scheduling simulator for the U-Engine ecosystem.
//!
//! Simulates FCFS, SJF, Priority, SRTF and Round-Robin scheduling over a
//! finite process set in integer time, producing a coalesced, gap-free
//! execution timeline plus per-process and aggregate metrics.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `RuntimeState`, `Segment`, `Timeline`
//! - **`dispatching`**: Selection rules, `RuleEngine`, `Policy` and its dispatchers
//! - **`simulation`**: `Simulator` driver, `SimulationConfig`, metrics, errors
//! - **`validation`**: Input integrity checks (empty sets, duplicate IDs, bad bursts)
//! - **`trace`**: Tick-by-tick replay of a finished timeline
//! - **`workload`**: Reference process set and seeded random workloads
//!
//! # Example
//!
//! ```
//! use u_cpusched::dispatching::Policy;
//! use u_cpusched::simulation::simulate;
//! use u_cpusched::workload::demo_processes;
//!
//! let result = simulate(Policy::RoundRobin, &demo_processes(), 2, 0).unwrap();
//! assert_eq!(result.summary.total_time, 16);
//! assert!(result.timeline.is_contiguous());
//! ```
//!
//! # Determinism
//!
//! A run has no randomness, no clock dependence and no shared state:
//! identical inputs always yield identical timelines and metrics.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod dispatching;
pub mod models;
pub mod simulation;
pub mod trace;
pub mod validation;
pub mod workload;
