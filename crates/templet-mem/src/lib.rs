#![forbid(unsafe_code)]
//! templet-mem: render-buffer pool.
//!
//! Every render pass that batches output should take its buffer from a
//! `BufferPool` so steady-state rendering does not allocate. Leases are RAII:
//! dropping or releasing a `PooledBuf` clears it and hands it back.
//!
//! The pool is an explicit handle. Build one at startup and pass it (or a
//! clone, which shares the same free list) to every render call site.

pub mod guard;
pub mod pool;
pub mod tracking;

pub use guard::PooledBuf;
pub use pool::{BufferPool, PoolStats};
pub use tracking::LeaseTracker;
