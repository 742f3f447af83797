//! Schedule quality metrics.
//!
//! Derives per-process and aggregate timing figures from a completed
//! schedule and the processes it was produced from.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//! | Response | first dispatch - arrival |
//! | Makespan | Latest completion time |
//! | Throughput | Completed processes per tick of makespan |
//! | CPU Utilization | Busy ticks / makespan |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2:
//! Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::models::{Process, ProcessId, Schedule, ScheduleEntry};

/// Turnaround time: `completion - arrival`.
#[inline]
pub fn turnaround_time(arrival_time: i64, completion_time: i64) -> i64 {
    completion_time - arrival_time
}

/// Waiting time: `turnaround - burst`.
#[inline]
pub fn waiting_time(turnaround_time: i64, burst_time: i64) -> i64 {
    turnaround_time - burst_time
}

/// Timing figures for one completed process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    pub process_id: ProcessId,
    pub arrival_time: i64,
    pub burst_time: i64,
    pub completion_time: i64,
    pub turnaround_time: i64,
    pub waiting_time: i64,
    /// `None` when the schedule carries no timeline for the process.
    pub response_time: Option<i64>,
}

impl ProcessMetrics {
    /// Derives metrics for `process` from its completion entry.
    pub fn from_entry(process: &Process, entry: &ScheduleEntry, first_start: Option<i64>) -> Self {
        let turnaround = turnaround_time(process.arrival_time, entry.completion_time);
        Self {
            process_id: process.id,
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            completion_time: entry.completion_time,
            turnaround_time: turnaround,
            waiting_time: waiting_time(turnaround, process.burst_time),
            response_time: first_start.map(|start| start - process.arrival_time),
        }
    }

    /// Whether the row is achievable (no negative waiting or response).
    pub fn is_consistent(&self) -> bool {
        self.waiting_time >= 0 && self.response_time.map_or(true, |r| r >= 0)
    }
}

/// Aggregate metrics for one schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleMetrics {
    /// Per-process rows, in completion order.
    pub processes: Vec<ProcessMetrics>,
    /// Latest completion time.
    pub makespan: i64,
    pub average_turnaround: f64,
    pub average_waiting: f64,
    /// Mean over the processes that have a response time.
    pub average_response: f64,
    /// Completed processes per tick (0.0 when makespan is zero).
    pub throughput: f64,
    /// Busy ticks / makespan (0.0..1.0).
    pub cpu_utilization: f64,
}

impl ScheduleMetrics {
    /// Computes metrics from a schedule and its input processes.
    ///
    /// Entries whose id matches no process are skipped.
    pub fn calculate(schedule: &Schedule, processes: &[Process]) -> Self {
        let rows: Vec<ProcessMetrics> = schedule
            .entries
            .iter()
            .filter_map(|entry| {
                processes
                    .iter()
                    .find(|p| p.id == entry.process_id)
                    .map(|p| ProcessMetrics::from_entry(p, entry, schedule.first_start(p.id)))
            })
            .collect();

        let makespan = schedule.makespan();
        let count = rows.len();

        let average_turnaround = mean(rows.iter().map(|m| m.turnaround_time), count);
        let average_waiting = mean(rows.iter().map(|m| m.waiting_time), count);

        let responses: Vec<i64> = rows.iter().filter_map(|m| m.response_time).collect();
        let average_response = mean(responses.iter().copied(), responses.len());

        let (throughput, cpu_utilization) = if makespan > 0 {
            (
                count as f64 / makespan as f64,
                schedule.busy_time() as f64 / makespan as f64,
            )
        } else {
            (0.0, 0.0)
        };

        Self {
            processes: rows,
            makespan,
            average_turnaround,
            average_waiting,
            average_response,
            throughput,
            cpu_utilization,
        }
    }

    /// Metrics row for a process.
    pub fn for_process(&self, process_id: ProcessId) -> Option<&ProcessMetrics> {
        self.processes.iter().find(|m| m.process_id == process_id)
    }

    /// Sum of all waiting times.
    pub fn total_waiting(&self) -> i64 {
        self.processes.iter().map(|m| m.waiting_time).sum()
    }

    /// Largest single waiting time.
    pub fn max_waiting(&self) -> i64 {
        self.processes
            .iter()
            .map(|m| m.waiting_time)
            .max()
            .unwrap_or(0)
    }

    /// Whether every row is consistent.
    pub fn is_consistent(&self) -> bool {
        self.processes.iter().all(ProcessMetrics::is_consistent)
    }
}

fn mean(values: impl Iterator<Item = i64>, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    values.sum::<i64>() as f64 / count as f64
}
