/*!
 * Simulator Limits and Defaults
 *
 * Centralized location for defaults and bounds used by the engine,
 * the configuration layer and the supplementary primitives.
 */

use super::types::Time;

// =============================================================================
// SCHEDULING DEFAULTS
// =============================================================================

/// Default time quantum for Round-Robin and SRTF (ticks)
pub const DEFAULT_TIME_QUANTUM: Time = 2;

/// Default aging step for Priority scheduling
pub const DEFAULT_AGE_INCREMENT: i64 = 1;

/// Default static priority when a process omits one
pub const DEFAULT_PRIORITY: i64 = 0;

/// Maximum number of processes in one workload
/// Pids are u32, and the engine keeps O(n) scratch state per run
pub const MAX_WORKLOAD_PROCESSES: usize = 1_000_000;

// =============================================================================
// MEMORY DEFAULTS
// =============================================================================

/// Default page size for the sub-page allocator (4KB)
pub const DEFAULT_PAGE_SIZE: usize = 4 * 1024;

/// Default sub-page granularity (256B, 16 sub-pages per page)
pub const DEFAULT_SUB_PAGE_SIZE: usize = 256;
