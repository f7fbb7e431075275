/*!
 * Synchronization Primitives
 *
 * Blocking primitives built on parking_lot:
 * - Counting semaphore with RAII permits
 * - Task-fair reader/writer lock (no writer starvation)
 *
 * The scheduling engine itself is single-threaded; these are standalone
 * utilities for callers that model mutual exclusion alongside a simulation.
 */

mod rwlock;
mod semaphore;

pub use rwlock::{FairRwLock, FairRwLockReadGuard, FairRwLockWriteGuard};
pub use semaphore::{Semaphore, SemaphorePermit};
