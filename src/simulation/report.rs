//! Simulation results.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::algorithms::Algorithm;
use crate::metrics::ScheduleMetrics;
use crate::models::{Schedule, Workload};

/// One algorithm's schedule and its derived metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmResult {
    pub algorithm: Algorithm,
    pub schedule: Schedule,
    pub metrics: ScheduleMetrics,
}

/// Headline figures for one algorithm, for side-by-side comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmSummary {
    pub name: String,
    pub makespan: i64,
    pub average_turnaround: f64,
    pub average_waiting: f64,
    pub average_response: f64,
}

/// Results of running several algorithms against the same workload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// The workload every algorithm was given a snapshot of.
    pub workload: Workload,
    /// Results keyed by algorithm name ("FIFO", "SJF", ...).
    pub results: BTreeMap<String, AlgorithmResult>,
}

impl AlgorithmResult {
    /// Algorithm name.
    pub fn name(&self) -> &'static str {
        self.algorithm.name()
    }

    /// Headline figures.
    pub fn summary(&self) -> AlgorithmSummary {
        AlgorithmSummary {
            name: self.name().to_string(),
            makespan: self.metrics.makespan,
            average_turnaround: self.metrics.average_turnaround,
            average_waiting: self.metrics.average_waiting,
            average_response: self.metrics.average_response,
        }
    }
}

impl SimulationReport {
    /// Creates an empty report for a workload.
    pub fn new(workload: Workload) -> Self {
        Self {
            workload,
            results: BTreeMap::new(),
        }
    }

    /// Adds (or replaces) an algorithm's result.
    pub fn insert(&mut self, result: AlgorithmResult) {
        self.results.insert(result.name().to_string(), result);
    }

    /// Result for an algorithm name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&AlgorithmResult> {
        self.results.get(&name.trim().to_ascii_uppercase())
    }

    /// Number of algorithms in the report.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether no algorithm has been run.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Results in canonical order (FIFO, SJF, STCF, RR, MLFQ).
    pub fn ordered(&self) -> Vec<&AlgorithmResult> {
        let mut ordered: Vec<&AlgorithmResult> = self.results.values().collect();
        ordered.sort_by_key(|r| r.algorithm.canonical_index());
        ordered
    }

    /// Algorithms in canonical order.
    pub fn algorithms(&self) -> Vec<Algorithm> {
        self.ordered().into_iter().map(|r| r.algorithm).collect()
    }

    /// Headline figures in canonical order.
    pub fn summaries(&self) -> Vec<AlgorithmSummary> {
        self.ordered().into_iter().map(AlgorithmResult::summary).collect()
    }

    /// Algorithm with the lowest average waiting time.
    ///
    /// Ties go to the earlier algorithm in canonical order.
    pub fn best_by_average_waiting(&self) -> Option<&AlgorithmResult> {
        self.best_by(|m| m.average_waiting)
    }

    /// Algorithm with the lowest average turnaround time.
    ///
    /// Ties go to the earlier algorithm in canonical order.
    pub fn best_by_average_turnaround(&self) -> Option<&AlgorithmResult> {
        self.best_by(|m| m.average_turnaround)
    }

    fn best_by(&self, key: impl Fn(&ScheduleMetrics) -> f64) -> Option<&AlgorithmResult> {
        // `ordered` is canonical and `min_by` keeps the first minimum
        self.ordered().into_iter().min_by(|a, b| {
            key(&a.metrics)
                .partial_cmp(&key(&b.metrics))
                .unwrap_or(Ordering::Equal)
        })
    }
}
