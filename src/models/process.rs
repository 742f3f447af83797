//! Process (job descriptor) model.
//!
//! A process is a declarative request for CPU time: when it becomes
//! eligible, how many ticks it needs, and which MLFQ level it starts in.
//! Nothing here models a real OS process.

use serde::{Deserialize, Serialize};

/// Process identifier. Positive and unique within a workload.
pub type ProcessId = u32;

/// Number of MLFQ priority levels (0 = highest).
pub const PRIORITY_LEVELS: i32 = 3;

/// A synthetic process descriptor.
///
/// # Time Representation
/// All times are integer ticks relative to the simulation start (t=0).
///
/// `remaining_time` is a private simulation counter. Preemptive algorithms
/// reset it to `burst_time` on their own copy before running, so the value
/// carried by a caller's process is never consulted or modified. It is
/// never serialized, and defaults to 0 when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: ProcessId,
    /// Tick at which the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU ticks required.
    pub burst_time: i64,
    /// Initial MLFQ queue selector (1 = highest). Clamped into `1..=3`.
    pub priority: i32,
    #[serde(default, skip_serializing)]
    pub(crate) remaining_time: i64,
}

impl Process {
    /// Creates a process with priority 1.
    pub fn new(id: ProcessId, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            priority: 1,
            remaining_time: burst_time,
        }
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Ticks still needed by this copy of the process.
    #[inline]
    pub fn remaining_time(&self) -> i64 {
        self.remaining_time
    }

    /// Whether the process has consumed all of its burst.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.remaining_time <= 0
    }

    /// Restores `remaining_time` to the full burst.
    pub fn reset(&mut self) {
        self.remaining_time = self.burst_time;
    }

    /// Consumes up to `ticks` of remaining work and returns the ticks used.
    pub(crate) fn consume(&mut self, ticks: i64) -> i64 {
        let used = ticks.min(self.remaining_time).max(0);
        self.remaining_time -= used;
        used
    }

    /// Whether the priority lies outside `1..=3`.
    pub fn priority_out_of_range(&self) -> bool {
        !(1..=PRIORITY_LEVELS).contains(&self.priority)
    }

    /// Initial MLFQ level: `clamp(priority - 1, 0, 2)`.
    pub fn mlfq_level(&self) -> usize {
        (self.priority.saturating_sub(1)).clamp(0, PRIORITY_LEVELS - 1) as usize
    }

    /// Earliest completion time any schedule can give this process.
    #[inline]
    pub fn earliest_completion(&self) -> i64 {
        self.arrival_time + self.burst_time
    }
}
