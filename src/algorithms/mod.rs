//! CPU scheduling disciplines.
//!
//! Five independent, pure scheduling functions. Each takes a process
//! slice, works on a private clone, and returns a [`Schedule`] whose
//! entries are in completion order.
//!
//! | Function | Discipline | Preemptive |
//! |----------|-----------|------------|
//! | [`fifo`] | First-In-First-Out | no |
//! | [`sjf`] | Shortest Job First | no |
//! | [`stcf`] | Shortest Time-to-Completion First | yes (per tick) |
//! | [`round_robin`] | Round Robin | yes (quantum) |
//! | [`mlfq`] | Multi-Level Feedback Queue | yes (per-level quantum) |
//!
//! # Tie-Breaking
//! Whenever a selection key ties, the earlier arrival wins, then the
//! smaller id. Every discipline uses [`by_arrival_then_id`].
//!
//! # Usage
//!
//! ```
//! use u_cpusched::algorithms::{Algorithm, DEFAULT_MLFQ_QUANTA};
//! use u_cpusched::models::Process;
//!
//! let processes = vec![Process::new(1, 0, 5), Process::new(2, 1, 3)];
//! let schedule = Algorithm::Fifo.run(&processes).unwrap();
//! assert_eq!(schedule.completion_time(2), Some(8));
//!
//! let algorithms = Algorithm::all(2, DEFAULT_MLFQ_QUANTA);
//! assert_eq!(algorithms.len(), 5);
//! ```
//!
//! # Reference
//! Arpaci-Dusseau & Arpaci-Dusseau (2018), "Operating Systems: Three Easy
//! Pieces", Ch. 7-8

mod fifo;
mod mlfq;
mod round_robin;
mod sjf;
mod stcf;

pub use fifo::fifo;
pub use mlfq::{mlfq, mlfq_with_quanta, DEFAULT_MLFQ_QUANTA, MLFQ_LEVELS};
pub use round_robin::round_robin;
pub use sjf::sjf;
pub use stcf::stcf;

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{SimResult, SimulationError};
use crate::models::{Process, Schedule};
use crate::validation::{validate_quantum, validate_workload};

/// Default Round Robin quantum.
pub const DEFAULT_QUANTUM: i64 = 2;

/// Canonical algorithm names, in canonical order.
pub const ALGORITHM_NAMES: [&str; 5] = ["FIFO", "SJF", "STCF", "RR", "MLFQ"];

/// Tie-break ordering: earlier arrival first, then smaller id.
pub fn by_arrival_then_id(a: &Process, b: &Process) -> Ordering {
    a.arrival_time
        .cmp(&b.arrival_time)
        .then_with(|| a.id.cmp(&b.id))
}

/// A scheduling discipline together with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Fifo,
    Sjf,
    Stcf,
    RoundRobin { quantum: i64 },
    Mlfq { quanta: [i64; MLFQ_LEVELS] },
}

impl Algorithm {
    /// Round Robin with the given quantum.
    pub fn round_robin(quantum: i64) -> Self {
        Self::RoundRobin { quantum }
    }

    /// MLFQ with the default `[2, 4, 8]` quanta.
    pub fn mlfq() -> Self {
        Self::Mlfq {
            quanta: DEFAULT_MLFQ_QUANTA,
        }
    }

    /// All five disciplines in canonical order (FIFO, SJF, STCF, RR, MLFQ).
    pub fn all(quantum: i64, mlfq_quanta: [i64; MLFQ_LEVELS]) -> [Self; 5] {
        [
            Self::Fifo,
            Self::Sjf,
            Self::Stcf,
            Self::RoundRobin { quantum },
            Self::Mlfq {
                quanta: mlfq_quanta,
            },
        ]
    }

    /// Parses a name ("FIFO", "SJF", "STCF", "RR", "MLFQ"; case-insensitive).
    pub fn from_name(
        name: &str,
        quantum: i64,
        mlfq_quanta: [i64; MLFQ_LEVELS],
    ) -> SimResult<Self> {
        match name.trim().to_ascii_uppercase().as_str() {
            "FIFO" | "FCFS" => Ok(Self::Fifo),
            "SJF" => Ok(Self::Sjf),
            "STCF" | "SRTF" => Ok(Self::Stcf),
            "RR" | "ROUND_ROBIN" => Ok(Self::RoundRobin { quantum }),
            "MLFQ" => Ok(Self::Mlfq {
                quanta: mlfq_quanta,
            }),
            _ => Err(SimulationError::UnknownAlgorithm(name.to_string())),
        }
    }

    /// Short display name.
    pub fn name(&self) -> &'static str {
        ALGORITHM_NAMES[self.canonical_index()]
    }

    /// Position in the canonical order.
    pub fn canonical_index(&self) -> usize {
        match self {
            Self::Fifo => 0,
            Self::Sjf => 1,
            Self::Stcf => 2,
            Self::RoundRobin { .. } => 3,
            Self::Mlfq { .. } => 4,
        }
    }

    /// Whether a running process can be interrupted before it finishes.
    pub fn is_preemptive(&self) -> bool {
        !matches!(self, Self::Fifo | Self::Sjf)
    }

    /// Checks the discipline's own parameters.
    pub fn validate(&self) -> SimResult<()> {
        match self {
            Self::RoundRobin { quantum } => validate_quantum(*quantum),
            Self::Mlfq { quanta } => quanta.iter().try_for_each(|&q| validate_quantum(q)),
            _ => Ok(()),
        }
    }

    /// Runs the discipline over `processes`.
    ///
    /// The slice is validated (duplicate ids, bad times) and never mutated.
    pub fn run(&self, processes: &[Process]) -> SimResult<Schedule> {
        self.validate()?;
        validate_workload(processes)?;

        match *self {
            Self::Fifo => Ok(fifo(processes)),
            Self::Sjf => Ok(sjf(processes)),
            Self::Stcf => Ok(stcf(processes)),
            Self::RoundRobin { quantum } => round_robin(processes, quantum),
            Self::Mlfq { quanta } => mlfq_with_quanta(processes, quanta),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
