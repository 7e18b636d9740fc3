//! Convenient re-exports for downstream crates and generated template code.

pub use crate::children::{initialize, pop_children, push_children, scope_children};
pub use crate::config::RuntimeConfig;
pub use crate::context::{CancelHandle, Context};
pub use crate::error::{Error, Result};
pub use crate::template::{from_fn, noop, Noop, Template};
