//! Workload model.
//!
//! A workload is the validated set of processes a simulation session runs
//! every algorithm against. Algorithms never receive the workload itself,
//! only private snapshots of it.

use serde::{Deserialize, Serialize};

use super::{Process, ProcessId};
use crate::error::{SimResult, SimulationError};
use crate::validation::validate_workload;

/// A validated, owned collection of processes.
///
/// Construction rejects duplicate or zero ids, negative arrival times and
/// non-positive burst times. An empty workload is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Process>", into = "Vec<Process>")]
pub struct Workload {
    processes: Vec<Process>,
}

impl Workload {
    /// Validates and wraps the given processes.
    pub fn new(processes: Vec<Process>) -> SimResult<Self> {
        validate_workload(&processes)?;
        Ok(Self { processes })
    }

    /// Wraps processes already known to be valid.
    pub(crate) fn from_valid(processes: Vec<Process>) -> Self {
        debug_assert!(validate_workload(&processes).is_ok());
        Self { processes }
    }

    /// Creates an empty workload.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The processes, in construction order.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the workload has no processes.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Finds a process by id.
    pub fn get(&self, id: ProcessId) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Sum of all burst times (ticks of CPU work in the workload).
    pub fn total_burst_time(&self) -> i64 {
        self.processes.iter().map(|p| p.burst_time).sum()
    }

    /// Deep copy with every `remaining_time` restored to its burst.
    pub fn snapshot(&self) -> Vec<Process> {
        snapshot(&self.processes)
    }

    /// Unwraps into the process list.
    pub fn into_processes(self) -> Vec<Process> {
        self.processes
    }
}

impl TryFrom<Vec<Process>> for Workload {
    type Error = SimulationError;

    fn try_from(processes: Vec<Process>) -> SimResult<Self> {
        Self::new(processes)
    }
}

impl From<Workload> for Vec<Process> {
    fn from(workload: Workload) -> Self {
        workload.processes
    }
}

/// Deep copy of `processes` with every `remaining_time` restored to its burst.
pub(crate) fn snapshot(processes: &[Process]) -> Vec<Process> {
    processes
        .iter()
        .cloned()
        .map(|mut p| {
            p.reset();
            p
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workload_valid() {
        let w = Workload::new(vec![Process::new(1, 0, 5), Process::new(2, 1, 3)]).unwrap();
        assert_eq!(w.len(), 2);
        assert!(!w.is_empty());
        assert_eq!(w.total_burst_time(), 8);
        assert_eq!(w.get(2).map(|p| p.burst_time), Some(3));
        assert!(w.get(9).is_none());
    }

    #[test]
    fn test_workload_empty_is_valid() {
        let w = Workload::new(Vec::new()).unwrap();
        assert!(w.is_empty());
        assert_eq!(w, Workload::empty());
    }

    #[test]
    fn test_workload_rejects_duplicates() {
        let err = Workload::new(vec![Process::new(1, 0, 5), Process::new(1, 2, 3)]).unwrap_err();
        assert_eq!(err, SimulationError::DuplicateProcessId(1));
    }

    #[test]
    fn test_workload_rejects_bad_burst() {
        let err = Workload::new(vec![Process::new(4, 0, 0)]).unwrap_err();
        assert_eq!(err, SimulationError::InvalidBurstTime { id: 4, burst_time: 0 });
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Workload =
            serde_json::from_str(r#"[{"id":1,"arrival_time":0,"burst_time":3,"priority":1}]"#)
                .unwrap();
        assert_eq!(ok.len(), 1);

        let dup = serde_json::from_str::<Workload>(
            r#"[{"id":1,"arrival_time":0,"burst_time":3,"priority":1},
                {"id":1,"arrival_time":2,"burst_time":1,"priority":2}]"#,
        );
        assert!(dup.is_err());
    }

    #[test]
    fn test_snapshot_resets_remaining() {
        let mut p = Process::new(1, 0, 6);
        p.consume(4);
        let w = Workload::new(vec![p]).unwrap();
        assert_eq!(w.processes()[0].remaining_time(), 2);

        let snap = w.snapshot();
        assert_eq!(snap[0].remaining_time(), 6);
        // Original untouched
        assert_eq!(w.processes()[0].remaining_time(), 2);
    }
}
