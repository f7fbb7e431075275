/*!
 * Process Module
 * Workload records, validation and per-process outcomes
 */

pub mod types;
pub mod validation;

// Re-export for convenience
pub use types::{Process, ProcessOutcome, ProcessSpec};
pub use validation::validate_workload;
