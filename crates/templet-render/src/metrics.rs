//! Tracing hooks for render passes.
//!
//! Compiled to no-ops unless the `tracing` feature is on. The core never logs
//! errors; these only report that a pass happened.

#[cfg(feature = "tracing")]
pub fn emit_render(bytes: usize, ok: bool) {
    tracing::trace!(bytes, ok, "render pass");
}

#[cfg(not(feature = "tracing"))]
pub fn emit_render(_bytes: usize, _ok: bool) { /* no-op */
}
