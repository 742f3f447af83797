//! Shortest Job First (non-preemptive).
//!
//! # Algorithm
//!
//! 1. Among arrived, unfinished processes pick the smallest burst
//!    (ties: earlier arrival, then smaller id).
//! 2. Run it to completion.
//! 3. If nothing has arrived yet, jump the clock to the next arrival.
//!
//! # Complexity
//! O(n²).

use tracing::{debug, trace};

use super::by_arrival_then_id;
use crate::models::{Process, Schedule};

/// Schedules the shortest ready job first, never preempting.
///
/// # Preconditions
/// Does not validate its input. Ids must be unique and positive, arrivals
/// non-negative, bursts positive, and the latest arrival plus the total burst
/// must fit in an `i64`. [`Algorithm::run`](super::Algorithm::run) checks all
/// of this before dispatching here.
pub fn sjf(processes: &[Process]) -> Schedule {
    let mut pool = processes.to_vec();
    debug!(algorithm = "SJF", processes = pool.len(), "schedule start");

    let mut schedule = Schedule::new();
    let mut time = 0;

    while !pool.is_empty() {
        let ready = pool
            .iter()
            .enumerate()
            .filter(|(_, p)| p.arrival_time <= time)
            .min_by(|(_, a), (_, b)| {
                a.burst_time
                    .cmp(&b.burst_time)
                    .then_with(|| by_arrival_then_id(a, b))
            })
            .map(|(idx, _)| idx);

        let idx = match ready {
            Some(idx) => idx,
            None => {
                // Idle jump to the next arrival
                if let Some(next) = pool.iter().map(|p| p.arrival_time).min() {
                    time = next;
                }
                continue;
            }
        };

        let p = pool.swap_remove(idx);
        let start = time;
        time += p.burst_time;
        trace!(process = p.id, start, end = time, "dispatch");
        schedule.record_slice(p.id, start, time, None);
        schedule.record_completion(p.id, time);
    }

    debug!(algorithm = "SJF", makespan = time, "schedule complete");
    schedule
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sjf_short_job_jumps_queue() {
        let processes = vec![
            Process::new(1, 0, 5),
            Process::new(2, 1, 3),
            Process::new(3, 2, 1),
        ];
        let s = sjf(&processes);
        assert_eq!(s.completion_order(), vec![1, 3, 2]);
        assert_eq!(s.completion_time(1), Some(5));
        assert_eq!(s.completion_time(3), Some(6));
        assert_eq!(s.completion_time(2), Some(9));
    }

    #[test]
    fn test_sjf_idle_jump() {
        let processes = vec![Process::new(1, 5, 2), Process::new(2, 7, 1)];
        let s = sjf(&processes);
        // Clock jumps to 5, runs P1 to 7, then P2 to 8
        assert_eq!(s.completion_time(1), Some(7));
        assert_eq!(s.completion_time(2), Some(8));
        assert_eq!(s.first_start(1), Some(5));
    }

    #[test]
    fn test_sjf_tie_break() {
        // Equal bursts: earlier arrival wins, then smaller id
        let processes = vec![
            Process::new(1, 0, 4),
            Process::new(4, 1, 2),
            Process::new(3, 2, 2),
            Process::new(2, 1, 2),
        ];
        let s = sjf(&processes);
        assert_eq!(s.completion_order(), vec![1, 2, 4, 3]);
    }

    #[test]
    fn test_sjf_non_preemptive() {
        // P2 arrives shorter while P1 runs but must wait
        let processes = vec![Process::new(1, 0, 10), Process::new(2, 1, 1)];
        let s = sjf(&processes);
        assert_eq!(s.completion_time(1), Some(10));
        assert_eq!(s.completion_time(2), Some(11));
    }

    #[test]
    fn test_sjf_empty() {
        assert!(sjf(&[]).is_empty());
    }
}
