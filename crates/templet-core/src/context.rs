//! Execution context threaded through every render call.
//!
//! A `Context` is an immutable chain of nodes. Deriving a child context
//! (`with_value`, `with_cancel`) pushes a node in front of the parent chain and
//! never touches the parent, so clones handed to concurrent renders stay
//! isolated. Clones share nodes through `Arc`, which is how the
//! pending-children cell installed by `children::initialize` is reached by
//! nested templates.

use std::any::Any;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::children::ChildrenCell;

enum Slot {
    Value(Box<dyn Any + Send + Sync>),
    Cancel(Arc<AtomicBool>),
}

struct Node {
    slot: Slot,
    parent: Option<Arc<Node>>,
}

/// Request-scoped carrier for typed values, cancellation, and pending children.
#[derive(Clone, Default)]
pub struct Context {
    head: Option<Arc<Node>>,
}

impl Context {
    /// Empty root context: no values, never cancelled, no children cell.
    pub fn background() -> Self {
        Self::default()
    }

    fn derive(&self, slot: Slot) -> Self {
        Self {
            head: Some(Arc::new(Node {
                slot,
                parent: self.head.clone(),
            })),
        }
    }

    fn nodes(&self) -> impl Iterator<Item = &Node> {
        std::iter::successors(self.head.as_deref(), |node| node.parent.as_deref())
    }

    /// Child context carrying `value`. Lookups by type see the newest value
    /// first, shadowing any older value of the same type.
    pub fn with_value<T: Any + Send + Sync>(&self, value: T) -> Self {
        self.derive(Slot::Value(Box::new(value)))
    }

    /// Nearest value of type `T` in this context chain.
    pub fn value<T: Any + Send + Sync>(&self) -> Option<&T> {
        self.nodes().find_map(|node| match &node.slot {
            Slot::Value(v) => v.downcast_ref::<T>(),
            Slot::Cancel(_) => None,
        })
    }

    /// Child context that can be cancelled through the returned handle.
    ///
    /// Cancelling affects this child and everything derived from it, never
    /// the parent.
    pub fn with_cancel(&self) -> (Self, CancelHandle) {
        let flag = Arc::new(AtomicBool::new(false));
        let ctx = self.derive(Slot::Cancel(Arc::clone(&flag)));
        (ctx, CancelHandle { flag })
    }

    /// True once any cancel handle in the chain has fired.
    ///
    /// The render runtime never checks this itself; templates or sinks that
    /// want to stop early consult it.
    pub fn is_cancelled(&self) -> bool {
        self.nodes().any(|node| match &node.slot {
            Slot::Cancel(flag) => flag.load(Ordering::Acquire),
            Slot::Value(_) => false,
        })
    }

    pub(crate) fn children_cell(&self) -> Option<&ChildrenCell> {
        self.value::<ChildrenCell>()
    }

    /// Number of nodes in the chain (diagnostics only).
    pub fn depth(&self) -> usize {
        self.nodes().count()
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("depth", &self.depth())
            .field("cancelled", &self.is_cancelled())
            .field("children_cell", &self.children_cell().is_some())
            .finish()
    }
}

/// Fires cancellation for the context returned alongside it by `with_cancel`.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    flag: Arc<AtomicBool>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }
}
