//! Simulation domain models.
//!
//! Provides the core data types for describing a workload and the
//! schedule an algorithm produces for it.
//!
//! # Lifecycle
//!
//! | Type | Role |
//! |------|------|
//! | Process | Input descriptor (arrival, burst, priority) |
//! | Workload | Validated set of processes for one session |
//! | Schedule | Completion entries + execution timeline of one run |

mod process;
mod schedule;
mod workload;

pub use process::{Process, ProcessId, PRIORITY_LEVELS};
pub use schedule::{Demotion, Schedule, ScheduleEntry, Slice};
pub use workload::Workload;

pub(crate) use workload::snapshot;
