//! Concurrent free-list pool of render buffers.
//!
//! Acquire never fails and never blocks beyond a short critical section on the
//! free list. There is no cap on outstanding leases; the only shrinking is
//! opportunistic (oversized buffers are dropped on return, the idle list may be
//! capped, and `shrink` empties it on demand).

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use templet_core::config::RuntimeConfig;

use crate::guard::PooledBuf;
use crate::tracking::LeaseTracker;

/// Point-in-time view of pool activity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Buffers created because the free list was empty.
    pub allocated: u64,
    /// Acquisitions served from the free list.
    pub recycled: u64,
    /// Returned buffers dropped instead of kept (too large or idle list full).
    pub discarded: u64,
    pub outstanding: usize,
    pub peak_outstanding: usize,
    pub idle: usize,
}

/// Shareable buffer pool handle. Clones share one free list.
#[derive(Clone)]
pub struct BufferPool {
    inner: Arc<PoolInner>,
}

impl Default for BufferPool {
    fn default() -> Self {
        Self::with_config(&RuntimeConfig::default())
    }
}

impl std::fmt::Debug for BufferPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BufferPool")
            .field("stats", &self.stats())
            .finish()
    }
}

impl BufferPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(cfg: &RuntimeConfig) -> Self {
        Self {
            inner: Arc::new(PoolInner {
                free: Mutex::new(Vec::new()),
                initial_capacity: cfg.pool_initial_capacity,
                max_retained_capacity: cfg.pool_max_retained_capacity,
                max_idle: cfg.pool_max_idle,
                tracker: LeaseTracker::new(),
                allocated: AtomicU64::new(0),
                recycled: AtomicU64::new(0),
                discarded: AtomicU64::new(0),
            }),
        }
    }

    /// Lease an empty buffer, recycled when one is idle.
    pub fn acquire(&self) -> PooledBuf {
        let buf = self.inner.take_or_allocate();
        self.inner.tracker.lease_started();
        PooledBuf::new(buf, Arc::clone(&self.inner))
    }

    /// Give a lease back. Equivalent to dropping it.
    pub fn release(&self, buf: PooledBuf) {
        buf.release();
    }

    /// Drop every idle buffer; returns how many were freed.
    pub fn shrink(&self) -> usize {
        let mut free = self.inner.free_list();
        let freed = free.len();
        free.clear();
        free.shrink_to_fit();
        freed
    }

    pub fn stats(&self) -> PoolStats {
        let inner = &self.inner;
        PoolStats {
            allocated: inner.allocated.load(Ordering::Relaxed),
            recycled: inner.recycled.load(Ordering::Relaxed),
            discarded: inner.discarded.load(Ordering::Relaxed),
            outstanding: inner.tracker.outstanding(),
            peak_outstanding: inner.tracker.peak(),
            idle: inner.free_list().len(),
        }
    }

    /// True when both handles share the same free list.
    pub fn same_pool(&self, other: &BufferPool) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

pub(crate) struct PoolInner {
    free: Mutex<Vec<Vec<u8>>>,
    initial_capacity: usize,
    max_retained_capacity: Option<usize>,
    max_idle: Option<usize>,
    tracker: LeaseTracker,
    allocated: AtomicU64,
    recycled: AtomicU64,
    discarded: AtomicU64,
}

impl PoolInner {
    // A panic while holding the lock cannot leave a half-written Vec<Vec<u8>>
    // behind, so poisoning is ignored.
    fn free_list(&self) -> MutexGuard<'_, Vec<Vec<u8>>> {
        self.free.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn take_or_allocate(&self) -> Vec<u8> {
        let reused = self.free_list().pop();
        match reused {
            Some(mut buf) => {
                buf.clear();
                self.recycled.fetch_add(1, Ordering::Relaxed);
                #[cfg(feature = "tracing")]
                tracing::trace!(capacity = buf.capacity(), "reusing pooled buffer");
                buf
            }
            None => {
                self.allocated.fetch_add(1, Ordering::Relaxed);
                Vec::with_capacity(self.initial_capacity)
            }
        }
    }

    /// Called exactly once per lease, from `PooledBuf`'s drop path.
    /// `None` means the borrower detached the bytes with `into_vec`.
    pub(crate) fn reclaim(&self, buf: Option<Vec<u8>>) {
        self.tracker.lease_ended();
        let Some(mut buf) = buf else {
            return;
        };
        if self
            .max_retained_capacity
            .is_some_and(|max| buf.capacity() > max)
        {
            self.discarded.fetch_add(1, Ordering::Relaxed);
            return;
        }
        buf.clear();
        let mut free = self.free_list();
        if self.max_idle.is_some_and(|max| free.len() >= max) {
            drop(free);
            self.discarded.fetch_add(1, Ordering::Relaxed);
            return;
        }
        free.push(buf);
    }
}
