/*!
 * Memory Module
 * Fixed-size sub-page allocation
 */

pub mod subpage;
pub mod types;

// Re-export for convenience
pub use subpage::SubPageAllocator;
pub use types::*;
