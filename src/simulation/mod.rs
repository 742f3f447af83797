//! Simulation runner and reports.
//!
//! Orchestrates running one or all disciplines against the same workload.
//! Each run gets its own snapshot of the workload, so no discipline can
//! observe another's sorting or remaining-time bookkeeping.
//!
//! # Report
//!
//! `SimulationReport` keys results by algorithm name and offers
//! side-by-side summaries and best-by-metric lookups.

mod report;
mod runner;

pub use report::{AlgorithmResult, AlgorithmSummary, SimulationReport};
pub use runner::Simulator;
