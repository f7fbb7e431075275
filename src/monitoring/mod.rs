/*!
 * Monitoring Module
 * Structured tracing setup and simulation timelines
 */

pub mod events;
pub mod tracer;

pub use events::{Timeline, TimelineEvent};
pub use tracer::init_tracing;
