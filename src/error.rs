//! Error types for workload construction and simulation.

use thiserror::Error;

use crate::models::ProcessId;

/// Simulation operation result.
pub type SimResult<T> = Result<T, SimulationError>;

/// Simulation errors.
///
/// An empty workload is not an error: every algorithm returns an empty
/// schedule for it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    #[error("Invalid quantum: {quantum} (must be > 0)")]
    InvalidQuantum { quantum: i64 },

    #[error("Duplicate process ID: {0}")]
    DuplicateProcessId(ProcessId),

    #[error("Invalid process ID: {0} (must be > 0)")]
    InvalidProcessId(ProcessId),

    #[error("Process {id} has negative arrival time {arrival_time}")]
    InvalidArrivalTime { id: ProcessId, arrival_time: i64 },

    #[error("Process {id} has non-positive burst time {burst_time}")]
    InvalidBurstTime { id: ProcessId, burst_time: i64 },

    #[error("Process {id} pushes the simulation horizon past i64::MAX")]
    TimeOverflow { id: ProcessId },

    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl SimulationError {
    /// Whether this error was caused by a malformed workload (as opposed to
    /// a bad algorithm parameter or configuration).
    pub fn is_workload_error(&self) -> bool {
        matches!(
            self,
            Self::DuplicateProcessId(_)
                | Self::InvalidProcessId(_)
                | Self::InvalidArrivalTime { .. }
                | Self::InvalidBurstTime { .. }
                | Self::TimeOverflow { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SimulationError::InvalidQuantum { quantum: 0 }.to_string(),
            "Invalid quantum: 0 (must be > 0)"
        );
        assert_eq!(
            SimulationError::DuplicateProcessId(3).to_string(),
            "Duplicate process ID: 3"
        );
        assert_eq!(
            SimulationError::InvalidBurstTime { id: 2, burst_time: 0 }.to_string(),
            "Process 2 has non-positive burst time 0"
        );
    }

    #[test]
    fn test_workload_error_classification() {
        assert!(SimulationError::DuplicateProcessId(1).is_workload_error());
        assert!(SimulationError::InvalidArrivalTime {
            id: 1,
            arrival_time: -1
        }
        .is_workload_error());
        assert!(SimulationError::TimeOverflow { id: 4 }.is_workload_error());
        assert!(!SimulationError::InvalidQuantum { quantum: -2 }.is_workload_error());
        assert!(!SimulationError::UnknownAlgorithm("EDF".into()).is_workload_error());
    }
}
