//! Composition templates: sequences and the parent/children wiring.

use std::io::Write;
use std::sync::Arc;

use templet_core::children::{pop_children, scope_children};
use templet_core::{Context, Result, Template};

/// Renders its parts in order, stopping at the first error.
#[derive(Clone, Default)]
pub struct Fragment {
    parts: Vec<Arc<dyn Template>>,
}

impl Fragment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, part: impl Template + 'static) -> Self {
        self.parts.push(Arc::new(part));
        self
    }

    pub fn push_shared(mut self, part: Arc<dyn Template>) -> Self {
        self.parts.push(part);
        self
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl FromIterator<Arc<dyn Template>> for Fragment {
    fn from_iter<I: IntoIterator<Item = Arc<dyn Template>>>(iter: I) -> Self {
        Self {
            parts: iter.into_iter().collect(),
        }
    }
}

impl Template for Fragment {
    fn render(&self, ctx: &Context, sink: &mut dyn Write) -> Result<()> {
        for part in &self.parts {
            part.render(ctx, sink)?;
        }
        Ok(())
    }
}

/// Placeholder for "whatever children I was given".
///
/// Pops the pending children of the context and renders them inline. With
/// nothing pending it renders nothing.
///
/// # Panics
///
/// When rendered with a context that was never initialized.
#[derive(Debug, Clone, Copy, Default)]
pub struct Children;

impl Template for Children {
    fn render(&self, ctx: &Context, sink: &mut dyn Write) -> Result<()> {
        let (ctx, children) = pop_children(ctx);
        children.render(&ctx, sink)
    }
}

/// Renders `parent` with `children` pending in its context.
///
/// Each render gets its own children cell scoped to the parent's render:
/// components nested inside `parent` cannot overwrite these children, children
/// the parent never renders do not leak to siblings, and rendering the same
/// `WithChildren` again hands the children over again. Works as a top-level
/// template as well as nested inside another render.
#[derive(Clone)]
pub struct WithChildren {
    parent: Arc<dyn Template>,
    children: Arc<dyn Template>,
}

impl WithChildren {
    pub fn new(parent: impl Template + 'static, children: impl Template + 'static) -> Self {
        Self {
            parent: Arc::new(parent),
            children: Arc::new(children),
        }
    }

    pub fn shared(parent: Arc<dyn Template>, children: Arc<dyn Template>) -> Self {
        Self { parent, children }
    }
}

impl Template for WithChildren {
    fn render(&self, ctx: &Context, sink: &mut dyn Write) -> Result<()> {
        let scoped = scope_children(ctx, Arc::clone(&self.children));
        self.parent.render(&scoped, sink)
    }
}
