/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use super::types::Pid;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-export AllocError from memory module
pub use crate::memory::AllocError;

/// Simulation errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SimError {
    #[error("Process {pid} has negative arrival time {value}")]
    #[diagnostic(
        code(sim::negative_arrival),
        help("Arrival times are measured in ticks from zero and must be non-negative.")
    )]
    NegativeArrival { pid: Pid, value: i64 },

    #[error("Process {pid} has negative burst time {value}")]
    #[diagnostic(
        code(sim::negative_burst),
        help("Burst times must be non-negative. Use 0 for a process that needs no CPU.")
    )]
    NegativeBurst { pid: Pid, value: i64 },

    #[error("Workload too large: {count} processes (limit {limit})")]
    #[diagnostic(
        code(sim::workload_too_large),
        help("Split the workload into several runs.")
    )]
    WorkloadTooLarge { count: usize, limit: usize },

    #[error("Workload timeline overflows at process {pid}")]
    #[diagnostic(
        code(sim::time_overflow),
        help("The latest arrival plus the total burst of all processes must fit in an unsigned 64-bit clock.")
    )]
    TimeOverflow { pid: Pid },

    #[error("Invalid time quantum: {0}")]
    #[diagnostic(
        code(sim::invalid_quantum),
        help("Round-Robin and SRTF need a quantum of at least one tick.")
    )]
    InvalidQuantum(i64),

    #[error("Invalid age increment: {0}")]
    #[diagnostic(
        code(sim::invalid_age_increment),
        help("Aging may only raise priority. Use 0 to disable aging.")
    )]
    InvalidAgeIncrement(i64),

    #[error("Invalid scheduling policy: {0}")]
    #[diagnostic(
        code(sim::invalid_policy),
        help("Use fcfs, sjf, priority, round_robin or srtf.")
    )]
    InvalidPolicy(String),

    #[error("Invalid idle advance mode: {0}")]
    #[diagnostic(code(sim::invalid_idle_advance), help("Use tick or jump."))]
    InvalidIdleAdvance(String),

    #[error("Invalid configuration: {0}")]
    #[diagnostic(
        code(sim::invalid_config),
        help("Check the workload file and SIM_* environment variables.")
    )]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SimError::NegativeBurst { pid: 3, value: -2 };
        assert_eq!(err.to_string(), "Process 3 has negative burst time -2");
    }

    #[test]
    fn test_error_serialization() {
        let err = SimError::InvalidQuantum(0);
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, r#"{"error_type":"invalid_quantum","details":0}"#);

        let back: SimError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, err);
    }
}
