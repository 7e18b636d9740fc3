#![forbid(unsafe_code)]
//! templet-render: drive templates into sinks.
//!
//! `Renderer` owns a `BufferPool` and runs one render pass per call: the
//! template writes into a pooled buffer, the finished bytes go to the sink in
//! a single write, and the buffer is returned on every path. `compose` holds
//! the templates generated code uses to wire parents to their children.

pub mod compose;
pub mod metrics;
pub mod renderer;

pub use compose::{Children, Fragment, WithChildren};
pub use renderer::Renderer;
