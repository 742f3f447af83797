//! Synthetic workload generation.
//!
//! Produces process descriptors with ids `1..=n`, a uniformly random burst
//! and priority, and either random or evenly staggered arrivals. Passing a
//! seed makes the workload reproducible.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::generator::{GeneratorConfig, WorkloadGenerator};
//!
//! let generator = WorkloadGenerator::new(GeneratorConfig::default().with_process_count(4)).unwrap();
//! let a = generator.generate_seeded(7);
//! let b = generator.generate_seeded(7);
//! assert_eq!(a, b);
//! assert_eq!(a.len(), 4);
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{SimResult, SimulationError};
use crate::models::{Process, ProcessId, Workload, PRIORITY_LEVELS};

/// How arrival times are assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrivalPattern {
    /// Uniform in `0..max_arrival`.
    Random,
    /// `arrival = index * interval` (0, interval, 2·interval, ...).
    Staggered { interval: i64 },
}

/// Workload generator settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of processes to generate.
    pub process_count: usize,
    /// Exclusive upper bound for random arrivals.
    pub max_arrival: i64,
    /// Inclusive upper bound for bursts (lower bound is 1).
    pub max_burst: i64,
    /// Priorities are drawn from `1..=priority_levels`.
    pub priority_levels: i32,
    pub arrival: ArrivalPattern,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            process_count: 5,
            max_arrival: 10,
            max_burst: 10,
            priority_levels: PRIORITY_LEVELS,
            arrival: ArrivalPattern::Random,
        }
    }
}

impl GeneratorConfig {
    /// Sets the number of processes.
    pub fn with_process_count(mut self, count: usize) -> Self {
        self.process_count = count;
        self
    }

    /// Sets the exclusive arrival bound.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the inclusive burst bound.
    pub fn with_max_burst(mut self, max_burst: i64) -> Self {
        self.max_burst = max_burst;
        self
    }

    /// Sets the number of priority levels.
    pub fn with_priority_levels(mut self, levels: i32) -> Self {
        self.priority_levels = levels;
        self
    }

    /// Uses staggered arrivals.
    pub fn staggered(mut self, interval: i64) -> Self {
        self.arrival = ArrivalPattern::Staggered { interval };
        self
    }

    /// Checks that every bound can produce a valid process.
    pub fn validate(&self) -> SimResult<()> {
        if self.max_arrival < 1 {
            return Err(SimulationError::InvalidConfig(format!(
                "max_arrival must be >= 1, got {}",
                self.max_arrival
            )));
        }
        if self.max_burst < 1 {
            return Err(SimulationError::InvalidConfig(format!(
                "max_burst must be >= 1, got {}",
                self.max_burst
            )));
        }
        if self.priority_levels < 1 {
            return Err(SimulationError::InvalidConfig(format!(
                "priority_levels must be >= 1, got {}",
                self.priority_levels
            )));
        }
        if let ArrivalPattern::Staggered { interval } = self.arrival {
            if interval < 0 {
                return Err(SimulationError::InvalidConfig(format!(
                    "stagger interval must be >= 0, got {interval}"
                )));
            }
        }
        if self.process_count > ProcessId::MAX as usize {
            return Err(SimulationError::InvalidConfig(format!(
                "process_count {} exceeds the id space",
                self.process_count
            )));
        }
        Ok(())
    }
}

/// Generates workloads from a validated [`GeneratorConfig`].
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    config: GeneratorConfig,
}

impl WorkloadGenerator {
    /// Creates a generator.
    pub fn new(config: GeneratorConfig) -> SimResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The generator's settings.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates a workload from the given RNG.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Workload {
        let cfg = &self.config;
        let processes: Vec<Process> = (0..cfg.process_count)
            .map(|index| {
                let arrival = match cfg.arrival {
                    ArrivalPattern::Random => rng.random_range(0..cfg.max_arrival),
                    ArrivalPattern::Staggered { interval } => index as i64 * interval,
                };
                let burst = rng.random_range(1..=cfg.max_burst);
                let priority = rng.random_range(1..=cfg.priority_levels);
                Process::new(index as ProcessId + 1, arrival, burst).with_priority(priority)
            })
            .collect();

        debug!(processes = processes.len(), arrival = ?cfg.arrival, "workload generated");
        Workload::from_valid(processes)
    }

    /// Generates a reproducible workload.
    pub fn generate_seeded(&self, seed: u64) -> Workload {
        let mut rng = StdRng::seed_from_u64(seed);
        self.generate(&mut rng)
    }

    /// Generates a workload from the thread-local RNG.
    pub fn generate_random(&self) -> Workload {
        self.generate(&mut rand::rng())
    }
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self {
            config: GeneratorConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;

    #[test]
    fn test_generate_bounds() {
        let generator = WorkloadGenerator::new(GeneratorConfig::default().with_process_count(50))
            .unwrap();
        let mut rng = SmallRng::seed_from_u64(42);
        let w = generator.generate(&mut rng);

        assert_eq!(w.len(), 50);
        for (i, p) in w.processes().iter().enumerate() {
            assert_eq!(p.id, i as u32 + 1);
            assert!((0..10).contains(&p.arrival_time));
            assert!((1..=10).contains(&p.burst_time));
            assert!((1..=3).contains(&p.priority));
            assert_eq!(p.remaining_time(), p.burst_time);
        }
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let generator = WorkloadGenerator::default();
        assert_eq!(generator.generate_seeded(9), generator.generate_seeded(9));
    }

    #[test]
    fn test_different_seeds_differ() {
        let generator =
            WorkloadGenerator::new(GeneratorConfig::default().with_process_count(20)).unwrap();
        assert_ne!(generator.generate_seeded(1), generator.generate_seeded(2));
    }

    #[test]
    fn test_staggered_arrivals() {
        let generator =
            WorkloadGenerator::new(GeneratorConfig::default().staggered(2)).unwrap();
        let w = generator.generate_seeded(3);
        let arrivals: Vec<i64> = w.processes().iter().map(|p| p.arrival_time).collect();
        assert_eq!(arrivals, vec![0, 2, 4, 6, 8]);
    }

    #[test]
    fn test_random_generation_valid() {
        let w = WorkloadGenerator::default().generate_random();
        assert_eq!(w.len(), 5);
        assert!(crate::validation::validate_workload(w.processes()).is_ok());
    }

    #[test]
    fn test_zero_count() {
        let generator =
            WorkloadGenerator::new(GeneratorConfig::default().with_process_count(0)).unwrap();
        assert!(generator.generate_seeded(1).is_empty());
    }

    #[test]
    fn test_invalid_config() {
        assert!(WorkloadGenerator::new(GeneratorConfig::default().with_max_arrival(0)).is_err());
        assert!(WorkloadGenerator::new(GeneratorConfig::default().with_max_burst(0)).is_err());
        assert!(WorkloadGenerator::new(GeneratorConfig::default().with_priority_levels(0)).is_err());
        assert!(WorkloadGenerator::new(GeneratorConfig::default().staggered(-1)).is_err());
    }

    #[test]
    fn test_config_deserialize_defaults() {
        let cfg: GeneratorConfig = serde_json::from_str(r#"{"process_count": 8}"#).unwrap();
        assert_eq!(cfg.process_count, 8);
        assert_eq!(cfg.max_burst, 10);
        assert_eq!(cfg.arrival, ArrivalPattern::Random);
    }
}
