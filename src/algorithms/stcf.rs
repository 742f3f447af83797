//! Shortest Time-to-Completion First (preemptive SJF).
//!
//! # Algorithm
//!
//! Unit-tick simulation. Each tick the arrived process with the least
//! remaining time (ties: earlier arrival, then smaller id) runs for one
//! tick. A tick with no arrived process is idle.
//!
//! # Complexity
//! O(T · n) where T is the makespan.

use tracing::{debug, trace};

use super::by_arrival_then_id;
use crate::models::{snapshot, Process, Schedule};

/// Schedules by least remaining time, re-deciding every tick.
///
/// # Preconditions
/// Does not validate its input. Ids must be unique and positive, arrivals
/// non-negative, bursts positive, and the latest arrival plus the total burst
/// must fit in an `i64`. [`Algorithm::run`](super::Algorithm::run) checks all
/// of this before dispatching here.
///
/// A process that arrives with no work left completes at the first tick
/// it is seen, without occupying the CPU.
pub fn stcf(processes: &[Process]) -> Schedule {
    let mut pool = snapshot(processes);
    debug!(algorithm = "STCF", processes = pool.len(), "schedule start");

    let mut schedule = Schedule::new();
    let mut time = 0;

    while !pool.is_empty() {
        if let Some(idx) = pool
            .iter()
            .position(|p| p.arrival_time <= time && p.is_finished())
        {
            let p = pool.swap_remove(idx);
            trace!(process = p.id, completion = time, "complete without work");
            schedule.record_completion(p.id, time);
            continue;
        }

        let candidate = pool
            .iter()
            .enumerate()
            .filter(|(_, p)| p.arrival_time <= time && !p.is_finished())
            .min_by(|(_, a), (_, b)| {
                a.remaining_time()
                    .cmp(&b.remaining_time())
                    .then_with(|| by_arrival_then_id(a, b))
            })
            .map(|(idx, _)| idx);

        let idx = match candidate {
            Some(idx) => idx,
            None => {
                time += 1;
                continue;
            }
        };

        let id = pool[idx].id;
        pool[idx].consume(1);
        schedule.record_slice(id, time, time + 1, None);
        time += 1;

        if pool[idx].is_finished() {
            pool.swap_remove(idx);
            trace!(process = id, completion = time, "complete");
            schedule.record_completion(id, time);
        }
    }

    debug!(algorithm = "STCF", makespan = time, "schedule complete");
    schedule
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stcf_preempts_for_shorter_job() {
        let processes = vec![Process::new(1, 0, 8), Process::new(2, 1, 4)];
        let s = stcf(&processes);
        // P1 runs tick 0, P2 (4 < 7) takes over at t=1 and finishes at 5
        assert_eq!(s.completion_order(), vec![2, 1]);
        assert_eq!(s.completion_time(2), Some(5));
        assert_eq!(s.completion_time(1), Some(12));
    }

    #[test]
    fn test_stcf_ticks_merge_into_runs() {
        let processes = vec![Process::new(1, 0, 8), Process::new(2, 1, 4)];
        let s = stcf(&processes);
        let runs: Vec<(u32, i64, i64)> = s
            .slices
            .iter()
            .map(|sl| (sl.process_id, sl.start, sl.end))
            .collect();
        assert_eq!(runs, vec![(1, 0, 1), (2, 1, 5), (1, 5, 12)]);
    }

    #[test]
    fn test_stcf_idle_ticks() {
        let processes = vec![Process::new(1, 3, 2)];
        let s = stcf(&processes);
        assert_eq!(s.completion_time(1), Some(5));
        assert_eq!(s.idle_time(), 3);
    }

    #[test]
    fn test_stcf_tie_break_on_remaining() {
        // Both have 3 remaining at t=2: P1 arrived earlier, keeps running
        let processes = vec![Process::new(1, 0, 5), Process::new(2, 2, 3)];
        let s = stcf(&processes);
        assert_eq!(s.completion_order(), vec![1, 2]);
        assert_eq!(s.completion_time(1), Some(5));
        assert_eq!(s.completion_time(2), Some(8));
    }

    #[test]
    fn test_stcf_ignores_caller_remaining_time() {
        let mut p = Process::new(1, 0, 4);
        p.consume(3);
        let s = stcf(&[p.clone()]);
        assert_eq!(s.completion_time(1), Some(4));
        assert_eq!(p.remaining_time(), 1);
    }

    #[test]
    fn test_stcf_zero_burst_terminates() {
        let s = stcf(&[Process::new(1, 0, 0)]);
        assert_eq!(s.completion_time(1), Some(0));
        assert!(s.slices.is_empty());

        // Mixed with real work, and arriving after an idle stretch
        let s = stcf(&[Process::new(1, 0, 2), Process::new(2, 5, 0)]);
        assert_eq!(s.completion_order(), vec![1, 2]);
        assert_eq!(s.completion_time(1), Some(2));
        assert_eq!(s.completion_time(2), Some(5));
    }

    #[test]
    fn test_stcf_sjf_scenario() {
        let processes = vec![
            Process::new(1, 0, 5),
            Process::new(2, 1, 3),
            Process::new(3, 2, 1),
        ];
        let s = stcf(&processes);
        // t=1: P2(3) < P1(4) → P2; t=2: P3(1) → done at 3; P2 done at 5; P1 at 9
        assert_eq!(s.completion_order(), vec![3, 2, 1]);
        assert_eq!(s.completion_time(3), Some(3));
        assert_eq!(s.completion_time(2), Some(5));
        assert_eq!(s.completion_time(1), Some(9));
    }
}
