//! Shared OpenGL context handle
//!
//! The loaded `glow::Context` is only a table of driver entry points; it
//! does not keep the native context alive. [`GlContext`] pairs that table
//! with a liveness flag the owning [`Window`](super::Window) clears when
//! it is dropped, so handles that outlive the window turn into no-ops
//! instead of calling into a terminated driver.

use std::cell::Cell;

/// OpenGL entry points plus the liveness of the context they belong to
pub struct GlContext {
    pub(crate) raw: glow::Context,
    alive: Cell<bool>,
}

impl GlContext {
    pub(crate) const fn new(raw: glow::Context) -> Self {
        Self { raw, alive: Cell::new(true) }
    }

    /// Whether the owning window, and with it the context, still exists
    pub fn is_alive(&self) -> bool {
        self.alive.get()
    }

    /// The entry points, or `None` once the owning window is gone
    pub fn live(&self) -> Option<&glow::Context> {
        self.alive.get().then_some(&self.raw)
    }

    pub(crate) fn invalidate(&self) {
        self.alive.set(false);
    }
}

impl std::fmt::Debug for GlContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlContext").field("alive", &self.alive.get()).finish_non_exhaustive()
    }
}
