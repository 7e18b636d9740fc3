#![forbid(unsafe_code)]
//! templet: runtime support for server-side HTML templates.
//!
//! Generated template code implements [`Template`] and leans on this crate
//! for everything around it: the render [`Context`] and its children slot,
//! pooled output buffers, and the class/attribute helpers.
//!
//! ```
//! use std::io::Write;
//! use templet::{from_fn, Children, Context, Fragment, Renderer, Text, WithChildren};
//!
//! let layout = Fragment::new()
//!     .push(from_fn(|_: &Context, w: &mut dyn Write| {
//!         w.write_all(b"<body>")?;
//!         Ok(())
//!     }))
//!     .push(Children)
//!     .push(from_fn(|_: &Context, w: &mut dyn Write| {
//!         w.write_all(b"</body>")?;
//!         Ok(())
//!     }));
//! let page = WithChildren::new(layout, Text::new("Tom & Jerry"));
//!
//! let html = Renderer::default()
//!     .render_to_string(&Context::background(), &page)
//!     .unwrap();
//! assert_eq!(html, "<body>Tom &amp; Jerry</body>");
//! ```

pub use templet_core::{
    from_fn, initialize, noop, pop_children, push_children, scope_children, CancelHandle,
    Context, Error, FnTemplate, Noop, Result, RuntimeConfig, Template,
};
pub use templet_html::{
    attribute_list, attribute_list_from_values, class_list, class_list_from_values, escape_html,
    join_errors, json_string, AttrValue, Attributes, Built, ClassInput, HtmlError, Raw, Text,
};
pub use templet_mem::{BufferPool, PoolStats, PooledBuf};
pub use templet_render::{Children, Fragment, Renderer, WithChildren};

/// Version of the runtime, as published.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
