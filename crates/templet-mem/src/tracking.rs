//! Lightweight lease/peak tracking hooks.
//!
//! Keep this optional and cheap. Downstream can wire to metrics if desired.

use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Default)]
pub struct LeaseTracker {
    outstanding: AtomicUsize,
    peak: AtomicUsize,
}

impl LeaseTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new lease; updates peak if higher.
    pub fn lease_started(&self) {
        let now = self.outstanding.fetch_add(1, Ordering::AcqRel) + 1;
        let mut cur = self.peak.load(Ordering::Relaxed);
        while now > cur {
            match self
                .peak
                .compare_exchange(cur, now, Ordering::AcqRel, Ordering::Relaxed)
            {
                Ok(_) => break,
                Err(observed) => cur = observed,
            }
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(outstanding = now, peak = self.peak(), "buffer leased");
    }

    pub fn lease_ended(&self) {
        let prev = self.outstanding.fetch_sub(1, Ordering::AcqRel);
        debug_assert!(prev > 0, "lease_ended without matching lease_started");
        #[cfg(feature = "tracing")]
        tracing::trace!(outstanding = prev.saturating_sub(1), "buffer returned");
    }

    pub fn outstanding(&self) -> usize {
        self.outstanding.load(Ordering::Relaxed)
    }

    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::Relaxed)
    }
}
