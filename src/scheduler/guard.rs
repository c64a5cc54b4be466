use std::sync::atomic::{AtomicBool, Ordering};

/// Prevents polling cycles from overlapping.
///
/// A tick that finds a cycle still running is skipped rather than queued.
#[derive(Debug, Default)]
pub struct CycleGuard {
    running: AtomicBool,
}

impl CycleGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a cycle as running.
    ///
    /// # Returns
    /// - `Some(CycleToken)` - No cycle was running; it is released when the token drops
    /// - `None` - Another cycle holds the guard
    pub fn try_acquire(&self) -> Option<CycleToken<'_>> {
        self.running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| CycleToken { guard: self })
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }
}

/// Held for the duration of one cycle.
#[derive(Debug)]
pub struct CycleToken<'a> {
    guard: &'a CycleGuard,
}

impl Drop for CycleToken<'_> {
    fn drop(&mut self) {
        self.guard.running.store(false, Ordering::Release);
    }
}
