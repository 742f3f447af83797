//! Simulation settings.

use serde::{Deserialize, Serialize};

use crate::algorithms::{DEFAULT_MLFQ_QUANTA, DEFAULT_QUANTUM, MLFQ_LEVELS};
use crate::error::{SimResult, SimulationError};
use crate::generator::GeneratorConfig;
use crate::validation::validate_quantum;

/// Settings for one simulation session.
///
/// Every field has a default, so a partial JSON document deserializes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Round Robin quantum.
    pub quantum: i64,
    /// MLFQ per-level quanta, highest level first.
    pub mlfq_quanta: [i64; MLFQ_LEVELS],
    /// Workload generator settings.
    pub generator: GeneratorConfig,
    /// Seed for workload generation. `None` draws from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
            mlfq_quanta: DEFAULT_MLFQ_QUANTA,
            generator: GeneratorConfig::default(),
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Sets the Round Robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }

    /// Sets the MLFQ quanta.
    pub fn with_mlfq_quanta(mut self, quanta: [i64; MLFQ_LEVELS]) -> Self {
        self.mlfq_quanta = quanta;
        self
    }

    /// Sets the number of generated processes.
    pub fn with_process_count(mut self, count: usize) -> Self {
        self.generator.process_count = count;
        self
    }

    /// Sets the generator settings.
    pub fn with_generator(mut self, generator: GeneratorConfig) -> Self {
        self.generator = generator;
        self
    }

    /// Sets the generation seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates quanta and generator bounds.
    pub fn validate(&self) -> SimResult<()> {
        validate_quantum(self.quantum)?;
        for &quantum in &self.mlfq_quanta {
            validate_quantum(quantum)?;
        }
        if self.generator.process_count == 0 {
            return Err(SimulationError::InvalidConfig(
                "process_count must be >= 1".into(),
            ));
        }
        self.generator.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = SimulationConfig::default();
        assert_eq!(cfg.quantum, 2);
        assert_eq!(cfg.mlfq_quanta, [2, 4, 8]);
        assert_eq!(cfg.generator.process_count, 5);
        assert_eq!(cfg.seed, None);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let cfg = SimulationConfig::default()
            .with_quantum(3)
            .with_mlfq_quanta([1, 2, 4])
            .with_process_count(12)
            .with_seed(99);
        assert_eq!(cfg.quantum, 3);
        assert_eq!(cfg.mlfq_quanta, [1, 2, 4]);
        assert_eq!(cfg.generator.process_count, 12);
        assert_eq!(cfg.seed, Some(99));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert_eq!(
            SimulationConfig::default().with_quantum(0).validate(),
            Err(SimulationError::InvalidQuantum { quantum: 0 })
        );
        assert!(SimulationConfig::default()
            .with_mlfq_quanta([2, -1, 8])
            .validate()
            .is_err());
        assert!(matches!(
            SimulationConfig::default().with_process_count(0).validate(),
            Err(SimulationError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_partial_json() {
        let cfg: SimulationConfig =
            serde_json::from_str(r#"{"quantum": 4, "seed": 11}"#).unwrap();
        assert_eq!(cfg.quantum, 4);
        assert_eq!(cfg.seed, Some(11));
        assert_eq!(cfg.mlfq_quanta, DEFAULT_MLFQ_QUANTA);
    }
}
