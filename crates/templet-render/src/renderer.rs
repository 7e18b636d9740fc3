//! Render driver: one pooled buffer per pass.

use std::io::Write;

use templet_core::children::initialize;
use templet_core::config::RuntimeConfig;
use templet_core::{Context, Error, Result, Template};
use templet_mem::BufferPool;

use crate::metrics::emit_render;

/// Runs templates against sinks, batching output through a shared pool.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    pool: BufferPool,
}

impl Renderer {
    pub fn new(pool: BufferPool) -> Self {
        Self { pool }
    }

    pub fn from_config(cfg: &RuntimeConfig) -> Self {
        Self::new(BufferPool::with_config(cfg))
    }

    pub fn pool(&self) -> &BufferPool {
        &self.pool
    }

    /// Render `template` and write the output to `sink`.
    ///
    /// The context is initialized first (a no-op if the caller already did),
    /// so children pushed by the caller are still visible. Output is buffered
    /// and written with one `write_all`; if the template fails, nothing reaches
    /// the sink and the template's error is returned unchanged.
    pub fn render(
        &self,
        ctx: &Context,
        template: &dyn Template,
        sink: &mut dyn Write,
    ) -> Result<()> {
        let ctx = initialize(ctx);
        let mut buf = self.pool.acquire();
        let result = template
            .render(&ctx, &mut buf)
            .and_then(|()| sink.write_all(&buf).map_err(Error::from));
        emit_render(buf.len(), result.is_ok());
        buf.release();
        result
    }

    /// Render into an owned string.
    pub fn render_to_string(&self, ctx: &Context, template: &dyn Template) -> Result<String> {
        let mut out = Vec::new();
        self.render(ctx, template, &mut out)?;
        Ok(String::from_utf8(out)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use templet_core::from_fn;

    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "client went away"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn sink_failures_surface_as_io_errors() {
        let renderer = Renderer::default();
        let page = from_fn(|_: &Context, w: &mut dyn Write| {
            w.write_all(b"<html></html>")?;
            Ok(())
        });
        let err = renderer
            .render(&Context::background(), &page, &mut FailingSink)
            .unwrap_err();
        match err {
            Error::Io(e) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("expected io error, got {other:?}"),
        }
        assert_eq!(renderer.pool().stats().outstanding, 0);
    }

    #[test]
    fn failed_template_writes_nothing() {
        let renderer = Renderer::default();
        let broken = from_fn(|_: &Context, w: &mut dyn Write| {
            w.write_all(b"half a page")?;
            Err(Error::Render("template blew up".into()))
        });
        let mut sink = Vec::new();
        assert!(renderer
            .render(&Context::background(), &broken, &mut sink)
            .is_err());
        assert!(sink.is_empty());
        assert_eq!(renderer.pool().stats().idle, 1);
    }
}
