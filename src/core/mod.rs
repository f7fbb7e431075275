/*!
 * Core Module
 * Fundamental simulator types, error handling and sync primitives
 */

pub mod errors;
pub mod limits;
pub mod sync;
pub mod types;

// Re-export for convenience
pub use errors::*;
pub use types::*;
