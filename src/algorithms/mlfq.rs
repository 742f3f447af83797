//! Multi-Level Feedback Queue.
//!
//! # Algorithm
//!
//! Three FIFO queues, level 0 (highest) to level 2 (lowest), with quanta
//! `[2, 4, 8]` by default.
//!
//! 1. Each process starts at level `clamp(priority - 1, 0, 2)`.
//! 2. Each round, scan levels from highest to lowest and take the first
//!    arrived process in the first level that has one.
//! 3. Run it for `min(remaining, quantum[level])` ticks.
//! 4. Unfinished processes drop one level (the lowest level re-queues at
//!    its own tail). Processes are never promoted.
//! 5. When no queued process has arrived, the clock advances one idle tick.
//!
//! A queue's head is taken whenever it has arrived; a later entry is only
//! taken ahead of it while the head is still in the future.

use std::collections::VecDeque;

use tracing::{debug, trace, warn};

use super::by_arrival_then_id;
use crate::error::SimResult;
use crate::models::{snapshot, Process, Schedule};
use crate::validation::validate_quantum;

/// Number of feedback levels.
pub const MLFQ_LEVELS: usize = 3;

/// Default per-level quanta, highest level first.
pub const DEFAULT_MLFQ_QUANTA: [i64; MLFQ_LEVELS] = [2, 4, 8];

/// Schedules with the default `[2, 4, 8]` quanta.
///
/// # Preconditions
/// Does not validate its input. Ids must be unique and positive, arrivals
/// non-negative, bursts positive, and the latest arrival plus the total burst
/// must fit in an `i64`. [`Algorithm::run`](super::Algorithm::run) checks all
/// of this before dispatching here.
pub fn mlfq(processes: &[Process]) -> Schedule {
    run_levels(processes, &DEFAULT_MLFQ_QUANTA)
}

/// Schedules with custom per-level quanta.
///
/// # Preconditions
/// Does not validate its input. Ids must be unique and positive, arrivals
/// non-negative, bursts positive, and the latest arrival plus the total burst
/// must fit in an `i64`. [`Algorithm::run`](super::Algorithm::run) checks all
/// of this before dispatching here.
///
/// # Errors
/// [`SimulationError::InvalidQuantum`](crate::SimulationError::InvalidQuantum)
/// when any quantum is `<= 0`.
pub fn mlfq_with_quanta(processes: &[Process], quanta: [i64; MLFQ_LEVELS]) -> SimResult<Schedule> {
    for &quantum in &quanta {
        validate_quantum(quantum)?;
    }
    Ok(run_levels(processes, &quanta))
}

fn run_levels(processes: &[Process], quanta: &[i64; MLFQ_LEVELS]) -> Schedule {
    let mut ordered = snapshot(processes);
    ordered.sort_by(by_arrival_then_id);
    debug!(algorithm = "MLFQ", processes = ordered.len(), ?quanta, "schedule start");

    let mut queues: [VecDeque<Process>; MLFQ_LEVELS] = Default::default();
    for p in ordered {
        if p.priority_out_of_range() {
            warn!(process = p.id, priority = p.priority, level = p.mlfq_level(), "priority clamped");
        }
        queues[p.mlfq_level()].push_back(p);
    }

    let mut schedule = Schedule::new();
    let mut time = 0;

    while queues.iter().any(|q| !q.is_empty()) {
        let picked = next_runnable(&queues, time)
            .and_then(|(level, pos)| queues[level].remove(pos).map(|p| (level, p)));

        let (level, mut p) = match picked {
            Some(found) => found,
            None => {
                time += 1;
                continue;
            }
        };

        let start = time;
        time += p.consume(quanta[level]);
        trace!(process = p.id, level, start, end = time, remaining = p.remaining_time(), "dispatch");
        schedule.record_slice(p.id, start, time, Some(level));

        if p.is_finished() {
            schedule.record_completion(p.id, time);
            continue;
        }

        let next = (level + 1).min(MLFQ_LEVELS - 1);
        if next != level {
            schedule.record_demotion(p.id, level, next, time);
        }
        queues[next].push_back(p);
    }

    debug!(
        algorithm = "MLFQ",
        makespan = time,
        demotions = schedule.demotions.len(),
        "schedule complete"
    );
    schedule
}

/// First arrived process of the highest non-idle level, as `(level, position)`.
fn next_runnable(queues: &[VecDeque<Process>; MLFQ_LEVELS], time: i64) -> Option<(usize, usize)> {
    for (level, queue) in queues.iter().enumerate() {
        if let Some(pos) = queue.iter().position(|p| p.arrival_time <= time) {
            return Some((level, pos));
        }
    }
    None
}
