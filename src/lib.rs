/*!
 * CPU Scheduling Simulator Library
 * Predicts completion, turnaround and waiting times for a workload under
 * FCFS, SJF, Priority with aging, Round-Robin and SRTF
 */

pub mod config;
pub mod core;
pub mod memory;
pub mod monitoring;
pub mod process;
pub mod scheduler;

// Re-exports
pub use config::{OutputFormat, SimConfig};
pub use crate::core::errors::SimError;
pub use crate::core::types::{Pid, Priority, SimResult, Time};
pub use monitoring::{init_tracing, TimelineEvent};
pub use process::{ProcessOutcome, ProcessSpec};
pub use scheduler::{
    IdleAdvance, SchedulingPolicy, SimulationReport, Simulator, SimulatorBuilder, Summary,
};
