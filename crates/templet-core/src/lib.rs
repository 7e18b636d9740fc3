#![forbid(unsafe_code)]
//! templet-core: the contracts every other templet crate builds on.
//!
//! - `Template`: render into a byte sink given a `Context`.
//! - `Context`: immutable, hierarchically scoped carrier for request values and
//!   cancellation, plus the pending-children cell used by the slot pattern.
//! - `children`: initialize / push / pop for that cell.
//!
//! No pooling and no HTML helpers live here; see `templet-mem` and
//! `templet-html`.

pub mod children;
pub mod config;
pub mod context;
pub mod error;
pub mod prelude;
pub mod template;

pub use children::{initialize, pop_children, push_children, scope_children};
pub use config::RuntimeConfig;
pub use context::{CancelHandle, Context};
pub use error::{Error, Result};
pub use template::{from_fn, noop, FnTemplate, Noop, Template};
