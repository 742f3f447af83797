//! Input validation for workloads.
//!
//! Checks structural integrity of a process list before it is scheduled.
//! Detects:
//! - Duplicate process IDs
//! - Zero process IDs
//! - Negative arrival times
//! - Non-positive burst times
//! - Workloads whose latest arrival plus total burst overflows `i64`
//!
//! Out-of-range priorities are not errors; MLFQ clamps them.

use std::collections::HashSet;

use crate::error::{SimResult, SimulationError};
use crate::models::Process;

/// Collects every problem in a process list.
///
/// Checks, per process in order:
/// 1. ID is positive
/// 2. ID was not seen before
/// 3. Arrival time is non-negative
/// 4. Burst time is positive
/// 5. Latest arrival plus total burst so far still fits in `i64`
///    (reported once, at the first process that overflows)
///
/// # Returns
/// All detected issues. Empty when the list is valid.
pub fn check_workload(processes: &[Process]) -> Vec<SimulationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();
    let mut latest_arrival: i64 = 0;
    let mut total_burst: i64 = 0;
    let mut overflowed = false;

    for p in processes {
        if p.id == 0 {
            errors.push(SimulationError::InvalidProcessId(p.id));
        }
        if !seen.insert(p.id) {
            errors.push(SimulationError::DuplicateProcessId(p.id));
        }
        if p.arrival_time < 0 {
            errors.push(SimulationError::InvalidArrivalTime {
                id: p.id,
                arrival_time: p.arrival_time,
            });
        }
        if p.burst_time <= 0 {
            errors.push(SimulationError::InvalidBurstTime {
                id: p.id,
                burst_time: p.burst_time,
            });
        }

        if overflowed || p.arrival_time < 0 || p.burst_time <= 0 {
            continue;
        }
        latest_arrival = latest_arrival.max(p.arrival_time);
        let horizon = total_burst
            .checked_add(p.burst_time)
            .and_then(|total| total.checked_add(latest_arrival).map(|_| total));
        match horizon {
            Some(total) => total_burst = total,
            None => {
                errors.push(SimulationError::TimeOverflow { id: p.id });
                overflowed = true;
            }
        }
    }

    errors
}

/// Validates a process list, returning the first problem found.
pub fn validate_workload(processes: &[Process]) -> SimResult<()> {
    match check_workload(processes).into_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Validates a time quantum.
pub fn validate_quantum(quantum: i64) -> SimResult<()> {
    if quantum <= 0 {
        return Err(SimulationError::InvalidQuantum { quantum });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new(1, 0, 5),
            Process::new(2, 1, 3).with_priority(2),
            Process::new(3, 2, 1).with_priority(3),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_workload(&sample_processes()).is_ok());
        assert!(check_workload(&sample_processes()).is_empty());
    }

    #[test]
    fn test_empty_input_is_valid() {
        assert!(validate_workload(&[]).is_ok());
    }

    #[test]
    fn test_duplicate_id() {
        let mut processes = sample_processes();
        processes.push(Process::new(2, 7, 1));

        let err = validate_workload(&processes).unwrap_err();
        assert_eq!(err, SimulationError::DuplicateProcessId(2));
    }

    #[test]
    fn test_zero_id() {
        let errors = check_workload(&[Process::new(0, 0, 1)]);
        assert_eq!(errors, vec![SimulationError::InvalidProcessId(0)]);
    }

    #[test]
    fn test_negative_arrival() {
        let err = validate_workload(&[Process::new(1, -3, 2)]).unwrap_err();
        assert_eq!(
            err,
            SimulationError::InvalidArrivalTime {
                id: 1,
                arrival_time: -3
            }
        );
    }

    #[test]
    fn test_non_positive_burst() {
        let errors = check_workload(&[Process::new(1, 0, 0), Process::new(2, 0, -1)]);
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| matches!(e, SimulationError::InvalidBurstTime { .. })));
    }

    #[test]
    fn test_out_of_range_priority_accepted() {
        let processes = vec![
            Process::new(1, 0, 1).with_priority(0),
            Process::new(2, 0, 1).with_priority(9),
        ];
        assert!(validate_workload(&processes).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        let processes = vec![
            Process::new(1, -1, 0), // Negative arrival + zero burst
            Process::new(1, 0, 1),  // Duplicate
        ];
        let errors = check_workload(&processes);
        assert_eq!(errors.len(), 3);
        // First reported error follows process order
        assert!(matches!(
            validate_workload(&processes),
            Err(SimulationError::InvalidArrivalTime { id: 1, .. })
        ));
    }

    #[test]
    fn test_horizon_overflow() {
        let err = validate_workload(&[Process::new(1, i64::MAX - 1, 5)]).unwrap_err();
        assert_eq!(err, SimulationError::TimeOverflow { id: 1 });

        // Total burst alone overflows; reported once at the tipping process
        let processes = vec![
            Process::new(1, 0, i64::MAX / 2),
            Process::new(2, 0, i64::MAX / 2),
            Process::new(3, 0, 10),
            Process::new(4, 0, 10),
        ];
        assert_eq!(
            check_workload(&processes),
            vec![SimulationError::TimeOverflow { id: 3 }]
        );

        // Right at the edge is still fine
        assert!(validate_workload(&[Process::new(1, i64::MAX - 5, 5)]).is_ok());
    }

    #[test]
    fn test_quantum() {
        assert!(validate_quantum(1).is_ok());
        assert_eq!(
            validate_quantum(0),
            Err(SimulationError::InvalidQuantum { quantum: 0 })
        );
        assert_eq!(
            validate_quantum(-5),
            Err(SimulationError::InvalidQuantum { quantum: -5 })
        );
    }
}
