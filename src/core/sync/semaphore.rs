/*!
 * Counting Semaphore
 * Bounded permit pool on parking_lot::{Mutex, Condvar}
 */

use parking_lot::{Condvar, Mutex};
use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

/// Counting semaphore
///
/// `acquire` blocks while every permit is taken; each released permit
/// wakes exactly one waiter. A capacity of one gives a binary semaphore.
pub struct Semaphore {
    capacity: usize,
    in_use: Mutex<usize>,
    available: Condvar,
}

impl Semaphore {
    /// Create a semaphore with `capacity` permits
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            capacity: capacity.get(),
            in_use: Mutex::new(0),
            available: Condvar::new(),
        }
    }

    /// Binary semaphore (single permit)
    pub fn binary() -> Self {
        Self::new(NonZeroUsize::MIN)
    }

    /// Block until a permit is available
    pub fn acquire(&self) -> SemaphorePermit<'_> {
        let mut in_use = self.in_use.lock();
        while *in_use == self.capacity {
            self.available.wait(&mut in_use);
        }
        *in_use += 1;
        SemaphorePermit { semaphore: self }
    }

    /// Take a permit only if one is free right now
    pub fn try_acquire(&self) -> Option<SemaphorePermit<'_>> {
        let mut in_use = self.in_use.lock();
        if *in_use == self.capacity {
            return None;
        }
        *in_use += 1;
        Some(SemaphorePermit { semaphore: self })
    }

    /// Wait up to `timeout` in total for a permit
    pub fn acquire_timeout(&self, timeout: Duration) -> Option<SemaphorePermit<'_>> {
        let Some(deadline) = Instant::now().checked_add(timeout) else {
            return Some(self.acquire());
        };
        let mut in_use = self.in_use.lock();
        while *in_use == self.capacity {
            if self.available.wait_until(&mut in_use, deadline).timed_out()
                && *in_use == self.capacity
            {
                return None;
            }
        }
        *in_use += 1;
        Some(SemaphorePermit { semaphore: self })
    }

    /// Total number of permits
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Permits currently held
    pub fn in_use(&self) -> usize {
        *self.in_use.lock()
    }

    /// Permits currently free
    pub fn available(&self) -> usize {
        self.capacity - self.in_use()
    }

    fn release(&self) {
        let mut in_use = self.in_use.lock();
        *in_use -= 1;
        drop(in_use);
        self.available.notify_one();
    }
}

/// RAII permit, released on drop
#[must_use = "dropping the permit releases it immediately"]
pub struct SemaphorePermit<'a> {
    semaphore: &'a Semaphore,
}

impl Drop for SemaphorePermit<'_> {
    fn drop(&mut self) {
        self.semaphore.release();
    }
}
