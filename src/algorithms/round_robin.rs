//! Round Robin.
//!
//! # Algorithm
//!
//! 1. Seed a FIFO queue once with every process, sorted by arrival
//!    (ties: smaller id first).
//! 2. Pop the head; if it has not arrived yet, jump the clock to its arrival.
//! 3. Run it for `min(remaining, quantum)` ticks.
//! 4. Push it back to the tail if work remains, otherwise record completion.
//!
//! The queue is seeded once. Processes are not admitted dynamically as
//! they arrive, so a late arrival at the head of the queue makes the clock
//! jump even when earlier processes are still waiting behind it.

use std::collections::VecDeque;

use tracing::{debug, trace};

use super::by_arrival_then_id;
use crate::error::SimResult;
use crate::models::{snapshot, Process, Schedule};
use crate::validation::validate_quantum;

/// Schedules processes in fixed-quantum rotation.
///
/// # Preconditions
/// Does not validate its input. Ids must be unique and positive, arrivals
/// non-negative, bursts positive, and the latest arrival plus the total burst
/// must fit in an `i64`. [`Algorithm::run`](super::Algorithm::run) checks all
/// of this before dispatching here.
///
/// # Errors
/// [`SimulationError::InvalidQuantum`](crate::SimulationError::InvalidQuantum)
/// when `quantum <= 0`.
pub fn round_robin(processes: &[Process], quantum: i64) -> SimResult<Schedule> {
    validate_quantum(quantum)?;

    let mut seeded = snapshot(processes);
    seeded.sort_by(by_arrival_then_id);
    let mut queue: VecDeque<Process> = seeded.into();
    debug!(algorithm = "RR", processes = queue.len(), quantum, "schedule start");

    let mut schedule = Schedule::new();
    let mut time = 0;

    while let Some(mut p) = queue.pop_front() {
        if time < p.arrival_time {
            time = p.arrival_time;
        }
        let start = time;
        time += p.consume(quantum);
        trace!(process = p.id, start, end = time, remaining = p.remaining_time(), "dispatch");
        schedule.record_slice(p.id, start, time, None);

        if p.is_finished() {
            schedule.record_completion(p.id, time);
        } else {
            queue.push_back(p);
        }
    }

    debug!(algorithm = "RR", makespan = time, "schedule complete");
    Ok(schedule)
}
