//! The template contract.
//!
//! Generated template code implements `Template` once per component. The
//! context is threaded explicitly through every call so nested components see
//! the same request values, cancellation flag, and pending children.

use std::fmt;
use std::io::Write;
use std::sync::Arc;

use crate::context::Context;
use crate::error::Result;

/// Anything that can render itself into a byte sink.
///
/// Invariants:
/// - `render` may be called any number of times.
/// - Implementations must not assume exclusive access to `ctx`; they may be
///   running as the children of another template.
/// - Failures writing to `sink` are returned as-is; there is no retry.
pub trait Template: Send + Sync {
    fn render(&self, ctx: &Context, sink: &mut dyn Write) -> Result<()>;
}

impl<T: Template + ?Sized> Template for &T {
    fn render(&self, ctx: &Context, sink: &mut dyn Write) -> Result<()> {
        (**self).render(ctx, sink)
    }
}

impl<T: Template + ?Sized> Template for Box<T> {
    fn render(&self, ctx: &Context, sink: &mut dyn Write) -> Result<()> {
        (**self).render(ctx, sink)
    }
}

impl<T: Template + ?Sized> Template for Arc<T> {
    fn render(&self, ctx: &Context, sink: &mut dyn Write) -> Result<()> {
        (**self).render(ctx, sink)
    }
}

/// Renders nothing and always succeeds. Stands in for absent children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Noop;

impl Template for Noop {
    fn render(&self, _ctx: &Context, _sink: &mut dyn Write) -> Result<()> {
        Ok(())
    }
}

/// Shared handle to the no-op template.
pub fn noop() -> Arc<dyn Template> {
    Arc::new(Noop)
}

/// Adapter turning a plain function or closure into a `Template`.
#[derive(Clone, Copy)]
pub struct FnTemplate<F> {
    f: F,
}

impl<F> fmt::Debug for FnTemplate<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnTemplate").finish_non_exhaustive()
    }
}

impl<F> Template for FnTemplate<F>
where
    F: Fn(&Context, &mut dyn Write) -> Result<()> + Send + Sync,
{
    fn render(&self, ctx: &Context, sink: &mut dyn Write) -> Result<()> {
        (self.f)(ctx, sink)
    }
}

/// Wrap any function with the render signature as a template.
pub fn from_fn<F>(f: F) -> FnTemplate<F>
where
    F: Fn(&Context, &mut dyn Write) -> Result<()> + Send + Sync,
{
    FnTemplate { f }
}
