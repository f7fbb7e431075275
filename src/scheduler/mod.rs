/*!
 * Scheduler Module
 * Scheduling policies, the simulation engine and run statistics
 */

pub mod engine;
pub mod policies;
pub mod simulator;
pub mod state;
pub mod stats;
pub mod traits;
pub mod types;

// Re-export public API
pub use engine::{simulate, SimulationReport};
pub use policies::build_policy;
pub use simulator::{Simulator, SimulatorBuilder};
pub use state::{RunState, Step};
pub use stats::Summary;
pub use traits::Policy;
pub use types::{AgeIncrement, IdleAdvance, PolicyParams, SchedulingPolicy, TimeQuantum};
