//! First-In-First-Out.
//!
//! # Algorithm
//!
//! 1. Sort by arrival (ties: smaller id first).
//! 2. Run each process to completion in that order, jumping the clock
//!    forward over idle gaps.
//!
//! # Complexity
//! O(n log n).

use tracing::{debug, trace};

use super::by_arrival_then_id;
use crate::models::{Process, Schedule};

/// Schedules processes in arrival order, non-preemptively.
///
/// # Preconditions
/// Does not validate its input. Ids must be unique and positive, arrivals
/// non-negative, bursts positive, and the latest arrival plus the total burst
/// must fit in an `i64`. [`Algorithm::run`](super::Algorithm::run) checks all
/// of this before dispatching here.
pub fn fifo(processes: &[Process]) -> Schedule {
    let mut order = processes.to_vec();
    order.sort_by(by_arrival_then_id);
    debug!(algorithm = "FIFO", processes = order.len(), "schedule start");

    let mut schedule = Schedule::new();
    let mut time = 0;

    for p in &order {
        if time < p.arrival_time {
            time = p.arrival_time;
        }
        let start = time;
        time += p.burst_time;
        trace!(process = p.id, start, end = time, "dispatch");
        schedule.record_slice(p.id, start, time, None);
        schedule.record_completion(p.id, time);
    }

    debug!(algorithm = "FIFO", makespan = time, "schedule complete");
    schedule
}
