//! Process-wide document scroll lock.
//!
//! Holders acquire a [`ScrollLockGuard`]; the marker is applied when the
//! first guard is taken and removed when the last one is dropped. Dropping a
//! guard is the release, so the marker cannot outlive its owners on any exit
//! path, unwinding included.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::traits::ScrollSurface;

struct LockState {
    holders: usize,
    surface: Box<dyn ScrollSurface>,
}

/// Reference-counted scroll lock. Clones share the same counter.
#[derive(Clone)]
pub struct ScrollLock {
    state: Arc<Mutex<LockState>>,
}

impl ScrollLock {
    pub fn new(surface: impl ScrollSurface + 'static) -> Self {
        Self {
            state: Arc::new(Mutex::new(LockState {
                holders: 0,
                surface: Box::new(surface),
            })),
        }
    }

    /// Take a hold on the lock, applying the marker if this is the first.
    pub fn acquire(&self) -> ScrollLockGuard {
        let mut state = self.state.lock();
        state.holders += 1;
        if state.holders == 1 {
            tracing::debug!("scroll lock applied");
            state.surface.set_locked(true);
        }
        ScrollLockGuard { lock: self.clone() }
    }

    /// Make sure the marker is off when nobody holds the lock.
    ///
    /// Safe to call when the lock was never taken. Outstanding guards keep
    /// the marker applied; only dropping them releases it.
    pub fn clear(&self) {
        let state = self.state.lock();
        if state.holders == 0 {
            state.surface.set_locked(false);
        }
    }

    pub fn is_locked(&self) -> bool {
        self.state.lock().holders > 0
    }

    pub fn holders(&self) -> usize {
        self.state.lock().holders
    }

    fn release(&self) {
        let mut state = self.state.lock();
        if state.holders == 0 {
            return;
        }
        state.holders -= 1;
        if state.holders == 0 {
            tracing::debug!("scroll lock released");
            state.surface.set_locked(false);
        }
    }
}

impl fmt::Debug for ScrollLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("ScrollLock")
            .field("holders", &state.holders)
            .finish()
    }
}

/// A single hold on a [`ScrollLock`]. Dropping it releases the hold.
#[must_use = "dropping the guard releases the scroll lock immediately"]
#[derive(Debug)]
pub struct ScrollLockGuard {
    lock: ScrollLock,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.lock.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::FlagSurface;

    #[test]
    fn test_marker_follows_holders() {
        let surface = FlagSurface::new();
        let lock = ScrollLock::new(surface.clone());
        assert!(!surface.is_set());

        let first = lock.acquire();
        assert!(surface.is_set());
        let second = lock.acquire();
        assert_eq!(lock.holders(), 2);

        drop(first);
        assert!(surface.is_set());
        drop(second);
        assert!(!surface.is_set());
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_clear_without_acquire() {
        let surface = FlagSurface::new();
        let lock = ScrollLock::new(surface.clone());
        lock.clear();
        lock.clear();
        assert!(!surface.is_set());
        assert_eq!(lock.holders(), 0);
    }

    #[test]
    fn test_clear_keeps_held_marker() {
        let surface = FlagSurface::new();
        let lock = ScrollLock::new(surface.clone());

        let guard = lock.acquire();
        lock.clear();
        assert!(surface.is_set(), "clear must not strip a held marker");
        assert_eq!(lock.holders(), 1);

        drop(guard);
        assert!(!surface.is_set());
        lock.clear();
        assert!(!surface.is_set());
    }

    #[test]
    fn test_guard_released_on_unwind() {
        let surface = FlagSurface::new();
        let lock = ScrollLock::new(surface.clone());

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = lock.acquire();
            panic!("render failed");
        }));

        assert!(result.is_err());
        assert!(!surface.is_set());
    }
}
