//! Schedule (simulation output) model.
//!
//! A schedule lists one completion entry per process in completion order,
//! together with the execution timeline that produced it. MLFQ runs also
//! record every demotion between queue levels.

use serde::{Deserialize, Serialize};

use super::ProcessId;

/// Completion record for one process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Completed process.
    pub process_id: ProcessId,
    /// Tick at which its last unit of work finished.
    pub completion_time: i64,
}

/// A contiguous run of one process on the CPU, `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    pub process_id: ProcessId,
    pub start: i64,
    pub end: i64,
    /// MLFQ level the slice ran at. `None` for single-queue disciplines.
    pub level: Option<usize>,
}

/// An MLFQ demotion from one level to the next lower one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Demotion {
    pub process_id: ProcessId,
    pub from_level: usize,
    pub to_level: usize,
    /// Clock value when the demotion happened (end of the exhausted slice).
    pub time: i64,
}

/// Output of one algorithm run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Completion entries, in completion order.
    pub entries: Vec<ScheduleEntry>,
    /// Execution timeline, in dispatch order.
    pub slices: Vec<Slice>,
    /// MLFQ demotions, in the order they happened.
    pub demotions: Vec<Demotion>,
}

impl ScheduleEntry {
    /// Creates a completion entry.
    pub fn new(process_id: ProcessId, completion_time: i64) -> Self {
        Self {
            process_id,
            completion_time,
        }
    }
}

impl Slice {
    /// Ticks covered by this slice.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a completion.
    pub fn record_completion(&mut self, process_id: ProcessId, completion_time: i64) {
        self.entries
            .push(ScheduleEntry::new(process_id, completion_time));
    }

    /// Records a run of `process_id` over `[start, end)`.
    ///
    /// Extends the previous slice instead when it belongs to the same
    /// process at the same level and ends exactly at `start`.
    pub fn record_slice(
        &mut self,
        process_id: ProcessId,
        start: i64,
        end: i64,
        level: Option<usize>,
    ) {
        if end <= start {
            return;
        }
        if let Some(last) = self.slices.last_mut() {
            if last.process_id == process_id && last.level == level && last.end == start {
                last.end = end;
                return;
            }
        }
        self.slices.push(Slice {
            process_id,
            start,
            end,
            level,
        });
    }

    /// Records a demotion.
    pub fn record_demotion(
        &mut self,
        process_id: ProcessId,
        from_level: usize,
        to_level: usize,
        time: i64,
    ) {
        self.demotions.push(Demotion {
            process_id,
            from_level,
            to_level,
            time,
        });
    }

    /// Number of completion entries.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was scheduled.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Process ids in completion order.
    pub fn completion_order(&self) -> Vec<ProcessId> {
        self.entries.iter().map(|e| e.process_id).collect()
    }

    /// Completion time of a process.
    pub fn completion_time(&self, process_id: ProcessId) -> Option<i64> {
        self.entries
            .iter()
            .find(|e| e.process_id == process_id)
            .map(|e| e.completion_time)
    }

    /// Makespan: latest completion time.
    pub fn makespan(&self) -> i64 {
        self.entries
            .iter()
            .map(|e| e.completion_time)
            .max()
            .unwrap_or(0)
    }

    /// Ticks the CPU spent running processes.
    pub fn busy_time(&self) -> i64 {
        self.slices.iter().map(Slice::duration).sum()
    }

    /// Ticks the CPU sat idle between t=0 and the makespan.
    pub fn idle_time(&self) -> i64 {
        (self.makespan() - self.busy_time()).max(0)
    }

    /// All slices for a process, in dispatch order.
    pub fn slices_for(&self, process_id: ProcessId) -> Vec<&Slice> {
        self.slices
            .iter()
            .filter(|s| s.process_id == process_id)
            .collect()
    }

    /// Tick at which a process was first dispatched.
    pub fn first_start(&self, process_id: ProcessId) -> Option<i64> {
        self.slices
            .iter()
            .filter(|s| s.process_id == process_id)
            .map(|s| s.start)
            .min()
    }

    /// All demotions of a process.
    pub fn demotions_for(&self, process_id: ProcessId) -> Vec<&Demotion> {
        self.demotions
            .iter()
            .filter(|d| d.process_id == process_id)
            .collect()
    }
}
