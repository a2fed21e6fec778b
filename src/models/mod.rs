//! CPU scheduling domain models.
//!
//! Provides the input and output data types of a simulation run, plus the
//! per-run bookkeeping the simulator keeps for each process.
//!
//! # Domain Mappings
//!
//! | u-cpusched | Operating system | Batch system |
//! |------------|------------------|--------------|
//! | Process | Thread/Task | Job |
//! | Segment | Run slice | Execution window |
//! | Timeline | Gantt chart | Run log |

mod process;
mod runtime;
mod timeline;

pub use process::{Process, ProcessId, Time};
pub use runtime::RuntimeState;
pub use timeline::{Segment, SegmentKind, Timeline, CONTEXT_SWITCH_LABEL, IDLE_LABEL};
