/*!
 * Process Types
 * Workload input records and per-process simulation outcomes
 */

use crate::core::limits::DEFAULT_PRIORITY;
use crate::core::types::{Pid, Priority, Time};
use serde::{Deserialize, Serialize};

/// Process descriptor as supplied by callers
///
/// Fields are signed so malformed input reaches validation instead of
/// failing inside the deserializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessSpec {
    pub arrival_time: i64,
    pub burst_time: i64,
    #[serde(default = "default_priority")]
    pub priority: i64,
}

fn default_priority() -> i64 {
    DEFAULT_PRIORITY
}

impl ProcessSpec {
    pub fn new(arrival_time: i64, burst_time: i64) -> Self {
        Self {
            arrival_time,
            burst_time,
            priority: DEFAULT_PRIORITY,
        }
    }

    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }
}

/// Validated, immutable process record
///
/// Only [`validate_workload`](super::validate_workload) builds these, so a
/// validated slice always has `pid == index`, which the run state relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Process {
    pub(crate) pid: Pid,
    pub(crate) arrival: Time,
    pub(crate) burst: Time,
    pub(crate) priority: Priority,
}

impl Process {
    #[inline]
    pub fn pid(&self) -> Pid {
        self.pid
    }

    #[inline]
    pub fn arrival(&self) -> Time {
        self.arrival
    }

    #[inline]
    pub fn burst(&self) -> Time {
        self.burst
    }

    #[inline]
    pub fn priority(&self) -> Priority {
        self.priority
    }
}

/// Timing results for one finished process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessOutcome {
    pub pid: Pid,
    pub arrival_time: Time,
    pub burst_time: Time,
    pub priority: Priority,
    pub completion_time: Time,
    pub turnaround_time: Time,
    pub waiting_time: Time,
}
