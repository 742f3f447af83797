//! Simulation runner.
//!
//! # Algorithm
//! 1. Snapshot the workload (deep copy, remaining times reset).
//! 2. Run each requested discipline on its own snapshot.
//! 3. Derive metrics against the untouched workload.
//! 4. Collect results keyed by algorithm name.

use tracing::info;

use super::{AlgorithmResult, SimulationReport};
use crate::algorithms::Algorithm;
use crate::config::SimulationConfig;
use crate::error::SimResult;
use crate::generator::WorkloadGenerator;
use crate::metrics::ScheduleMetrics;
use crate::models::Workload;

/// Runs scheduling disciplines against workloads.
///
/// Holds only configuration; every call is independent and replayable.
///
/// # Example
///
/// ```
/// use u_cpusched::simulation::Simulator;
/// use u_cpusched::config::SimulationConfig;
/// use u_cpusched::models::{Process, Workload};
///
/// let simulator = Simulator::new(SimulationConfig::default().with_quantum(2)).unwrap();
/// let workload = Workload::new(vec![
///     Process::new(1, 0, 5),
///     Process::new(2, 1, 3),
///     Process::new(3, 2, 1),
/// ]).unwrap();
///
/// let report = simulator.run_all(&workload).unwrap();
/// assert_eq!(report.len(), 5);
/// assert_eq!(report.get("SJF").unwrap().schedule.completion_order(), vec![1, 3, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct Simulator {
    config: SimulationConfig,
    generator: WorkloadGenerator,
}

impl Simulator {
    /// Creates a simulator after validating the configuration.
    pub fn new(config: SimulationConfig) -> SimResult<Self> {
        config.validate()?;
        let generator = WorkloadGenerator::new(config.generator.clone())?;
        Ok(Self { config, generator })
    }

    /// The active configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// The five disciplines with the configured parameters, in canonical order.
    pub fn algorithms(&self) -> [Algorithm; 5] {
        Algorithm::all(self.config.quantum, self.config.mlfq_quanta)
    }

    /// Generates a workload, seeded when the configuration has a seed.
    pub fn generate_workload(&self) -> Workload {
        match self.config.seed {
            Some(seed) => self.generator.generate_seeded(seed),
            None => self.generator.generate_random(),
        }
    }

    /// Runs one discipline against a snapshot of `workload`.
    pub fn run(&self, workload: &Workload, algorithm: Algorithm) -> SimResult<AlgorithmResult> {
        let snapshot = workload.snapshot();
        let schedule = algorithm.run(&snapshot)?;
        let metrics = ScheduleMetrics::calculate(&schedule, workload.processes());

        info!(
            algorithm = algorithm.name(),
            processes = workload.len(),
            makespan = metrics.makespan,
            average_waiting = metrics.average_waiting,
            "simulation complete"
        );

        Ok(AlgorithmResult {
            algorithm,
            schedule,
            metrics,
        })
    }

    /// Runs a discipline by name ("FIFO", "SJF", "STCF", "RR", "MLFQ").
    pub fn run_named(&self, workload: &Workload, name: &str) -> SimResult<AlgorithmResult> {
        let algorithm = Algorithm::from_name(name, self.config.quantum, self.config.mlfq_quanta)?;
        self.run(workload, algorithm)
    }

    /// Runs all five disciplines against the same workload.
    pub fn run_all(&self, workload: &Workload) -> SimResult<SimulationReport> {
        self.run_selected(workload, &self.algorithms())
    }

    /// Runs the given disciplines against the same workload.
    pub fn run_selected(
        &self,
        workload: &Workload,
        algorithms: &[Algorithm],
    ) -> SimResult<SimulationReport> {
        let mut report = SimulationReport::new(workload.clone());
        for &algorithm in algorithms {
            report.insert(self.run(workload, algorithm)?);
        }

        info!(
            algorithms = report.len(),
            processes = workload.len(),
            "comparison complete"
        );
        Ok(report)
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self {
            config: SimulationConfig::default(),
            generator: WorkloadGenerator::default(),
        }
    }
}
