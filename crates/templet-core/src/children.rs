//! Pending-children cell: the slot/children protocol.
//!
//! A parent template renders "whatever children it was given" without a
//! children parameter in its signature. The caller installs a cell with
//! `initialize`, stores the children with `push_children`, and the parent
//! takes them with `pop_children`.
//!
//! Discipline: exactly one push precedes exactly one pop per nested render.
//! The mutex only makes the cell `Sync`; it does not order pushes and pops
//! issued by different renders sharing one context.

use std::sync::{Arc, Mutex, PoisonError};

use crate::context::Context;
use crate::template::{noop, Template};

/// Single-slot holder for a child template awaiting its parent's render.
#[derive(Default)]
pub(crate) struct ChildrenCell {
    pending: Mutex<Option<Arc<dyn Template>>>,
}

impl ChildrenCell {
    fn put(&self, children: Arc<dyn Template>) {
        *self.pending.lock().unwrap_or_else(PoisonError::into_inner) = Some(children);
    }

    fn take(&self) -> Option<Arc<dyn Template>> {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

/// Return a context that carries a children cell.
///
/// Idempotent: a context that already carries one is returned as-is, so a
/// nested initialize never clobbers children that are still in flight.
pub fn initialize(ctx: &Context) -> Context {
    if ctx.children_cell().is_some() {
        return ctx.clone();
    }
    ctx.with_value(ChildrenCell::default())
}

/// Child context with a fresh cell already holding `children`.
///
/// The new cell shadows any cell further up the chain for everything rendered
/// with the returned context, so a nested component cannot overwrite children
/// an enclosing parent has not consumed yet. The cell goes away with the
/// returned context; unconsumed children never reach siblings.
pub fn scope_children(ctx: &Context, children: Arc<dyn Template>) -> Context {
    ctx.with_value(ChildrenCell {
        pending: Mutex::new(Some(children)),
    })
}

/// Store `children` in the context's cell, replacing anything pending.
///
/// # Panics
///
/// If `ctx` was never passed through `initialize`. That is a bug in the
/// calling (usually generated) code, not a runtime condition.
pub fn push_children(ctx: &Context, children: Arc<dyn Template>) -> Context {
    expect_cell(ctx, "push_children").put(children);
    ctx.clone()
}

/// Take the pending children, leaving the cell empty.
///
/// An empty cell yields the no-op template, so callers can render the result
/// unconditionally.
///
/// # Panics
///
/// If `ctx` was never passed through `initialize`.
pub fn pop_children(ctx: &Context) -> (Context, Arc<dyn Template>) {
    let children = expect_cell(ctx, "pop_children").take().unwrap_or_else(noop);
    (ctx.clone(), children)
}

fn expect_cell<'a>(ctx: &'a Context, op: &str) -> &'a ChildrenCell {
    match ctx.children_cell() {
        Some(cell) => cell,
        None => panic!("templet: {op} called on a context that was not initialized"),
    }
}
