/*!
 * Fair Reader/Writer Lock
 * Readers queue behind any pending writer so writers cannot starve
 */

use parking_lot::RwLock;

pub type FairRwLockReadGuard<'a, T> = parking_lot::RwLockReadGuard<'a, T>;
pub type FairRwLockWriteGuard<'a, T> = parking_lot::RwLockWriteGuard<'a, T>;

/// Reader/writer lock with writer preference
///
/// Backed by `parking_lot::RwLock`, whose task-fair policy blocks a new
/// reader whenever a writer holds the lock or is waiting for it. A writer
/// request is granted once the current readers drain, even under continuous
/// reader arrival.
#[derive(Debug, Default)]
pub struct FairRwLock<T> {
    inner: RwLock<T>,
}

impl<T> FairRwLock<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: RwLock::new(value),
        }
    }

    /// Acquire shared access
    #[inline]
    pub fn read(&self) -> FairRwLockReadGuard<'_, T> {
        self.inner.read()
    }

    /// Acquire exclusive access
    #[inline]
    pub fn write(&self) -> FairRwLockWriteGuard<'_, T> {
        self.inner.write()
    }

    /// Shared access without blocking; fails while a writer holds or awaits the lock
    #[inline]
    pub fn try_read(&self) -> Option<FairRwLockReadGuard<'_, T>> {
        self.inner.try_read()
    }

    #[inline]
    pub fn try_write(&self) -> Option<FairRwLockWriteGuard<'_, T>> {
        self.inner.try_write()
    }

    /// Held by a reader or writer
    pub fn is_locked(&self) -> bool {
        self.inner.is_locked()
    }

    /// A writer holds the lock or has claimed it and waits for readers to drain
    pub fn is_write_pending(&self) -> bool {
        self.inner.is_locked_exclusive()
    }

    pub fn into_inner(self) -> T {
        self.inner.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiple_readers() {
        let lock = FairRwLock::new(5);
        let a = lock.read();
        let b = lock.read();
        assert_eq!(*a + *b, 10);
        assert!(lock.is_locked());
        assert!(!lock.is_write_pending());
        assert!(lock.try_write().is_none());
    }

    #[test]
    fn test_write_then_read() {
        let lock = FairRwLock::new(Vec::new());
        lock.write().push(1);
        lock.write().push(2);
        assert_eq!(*lock.read(), vec![1, 2]);
        assert_eq!(lock.into_inner(), vec![1, 2]);
    }

    #[test]
    fn test_try_read_blocked_by_writer() {
        let lock = FairRwLock::new(0);
        let guard = lock.write();
        assert!(lock.is_write_pending());
        assert!(lock.try_read().is_none());
        drop(guard);
        assert!(lock.try_read().is_some());
    }
}
