use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Counts asynchronous requests that are currently in flight.
///
/// The count is raised by [`InFlightCounter::enter`] and lowered when the
/// returned guard drops, so it is released whether the request succeeds,
/// fails or unwinds.
#[derive(Debug, Clone, Default)]
pub struct InFlightCounter {
    count: Arc<AtomicUsize>,
}

impl InFlightCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks one request as started until the guard is dropped
    pub fn enter(&self) -> InFlightGuard {
        self.count.fetch_add(1, Ordering::SeqCst);
        InFlightGuard {
            count: Arc::clone(&self.count),
        }
    }

    pub fn in_flight(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight() > 0
    }
}

/// Scoped release for [`InFlightCounter`]
#[derive(Debug)]
pub struct InFlightGuard {
    count: Arc<AtomicUsize>,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.count.fetch_sub(1, Ordering::SeqCst);
    }
}
