//! Discrete-time CPU scheduling simulation.
//!
//! Computes, for a fixed workload of synthetic process descriptors, the
//! schedule produced by five classic disciplines and the turnaround and
//! waiting times derived from it.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `Workload`, `Schedule`,
//!   `ScheduleEntry`, `Slice`, `Demotion`
//! - **`algorithms`**: FIFO, SJF, STCF, Round Robin, MLFQ and the
//!   `Algorithm` selector
//! - **`metrics`**: Turnaround, waiting and response times, utilization
//! - **`generator`**: Seeded synthetic workload generation
//! - **`simulation`**: Runs one or all disciplines and collects results
//! - **`validation`**: Workload integrity checks (duplicate ids, bad times)
//! - **`config`**: Session settings
//!
//! # Example
//!
//! ```
//! use u_cpusched::models::{Process, Workload};
//! use u_cpusched::simulation::Simulator;
//!
//! let workload = Workload::new(vec![
//!     Process::new(1, 0, 4),
//!     Process::new(2, 0, 3),
//! ]).unwrap();
//!
//! let result = Simulator::default().run_named(&workload, "RR").unwrap();
//! assert_eq!(result.schedule.completion_time(1), Some(6));
//! assert_eq!(result.metrics.for_process(2).unwrap().waiting_time, 4);
//! ```
//!
//! # Determinism
//!
//! For a fixed workload and parameters every schedule is exactly
//! reproducible. Ties are broken by earliest arrival, then smallest id.
//!
//! # References
//!
//! - Arpaci-Dusseau & Arpaci-Dusseau (2018), "Operating Systems: Three Easy Pieces"
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

pub mod algorithms;
pub mod config;
pub mod error;
pub mod generator;
pub mod metrics;
pub mod models;
pub mod simulation;
pub mod validation;

pub use error::{SimResult, SimulationError};
