/*!
 * Core Types
 * Common types used across the simulator
 */

/// Process ID type (position of the process in the input workload)
pub type Pid = u32;

/// Simulated time in abstract ticks
pub type Time = u64;

/// Static priority level (higher is more important, may be negative)
pub type Priority = i64;

/// Common result type for simulator operations
pub type SimResult<T> = Result<T, super::errors::SimError>;

/// Convert a pid into an arena index
#[inline(always)]
pub(crate) const fn slot(pid: Pid) -> usize {
    pid as usize
}
