//! Window construction parameters

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use super::aspect::AspectRatio;
use crate::config::Config;

bitflags! {
    /// Buffers cleared by [`Window::clear`](super::Window::clear)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ClearMask: u32 {
        /// Color buffer
        const COLOR = glow::COLOR_BUFFER_BIT;
        /// Depth buffer
        const DEPTH = glow::DEPTH_BUFFER_BIT;
        /// Stencil buffer
        const STENCIL = glow::STENCIL_BUFFER_BIT;
    }
}

impl Default for ClearMask {
    fn default() -> Self {
        Self::COLOR
    }
}

/// How the native window is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Decorated, non-resizable window
    #[default]
    Windowed,
    /// Fullscreen on the primary monitor at its current video mode width
    Fullscreen,
}

/// Everything needed to construct a [`Window`](super::Window)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Title bar text
    pub title: String,
    /// Requested width in screen coordinates; ignored in fullscreen
    pub width: u32,
    /// Ratio used to derive the requested height
    pub aspect: AspectRatio,
    /// Windowed or fullscreen
    pub display: DisplayMode,
    /// OpenGL context version `(major, minor)`, always a core profile
    pub gl_version: (u32, u32),
    /// RGBA clear color
    pub clear_color: [f32; 4],
    /// Buffers cleared each frame
    pub clear_mask: ClearMask,
    /// Start in wireframe polygon mode
    pub wireframe: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "glwrap".to_string(),
            width: 800,
            aspect: AspectRatio::Ratio4x3,
            display: DisplayMode::Windowed,
            gl_version: (3, 3),
            clear_color: [0.0, 0.0, 0.0, 1.0],
            clear_mask: ClearMask::COLOR,
            wireframe: false,
        }
    }
}

impl Config for WindowConfig {}

impl WindowConfig {
    /// Windowed configuration
    pub fn windowed(title: impl Into<String>, width: u32, aspect: AspectRatio) -> Self {
        Self {
            title: title.into(),
            width,
            aspect,
            ..Self::default()
        }
    }

    /// Fullscreen configuration on the primary monitor
    pub fn fullscreen(title: impl Into<String>, aspect: AspectRatio) -> Self {
        Self {
            title: title.into(),
            aspect,
            display: DisplayMode::Fullscreen,
            ..Self::default()
        }
    }

    /// Set the clear color
    #[must_use]
    pub fn with_clear_color(mut self, r: f32, g: f32, b: f32, a: f32) -> Self {
        self.clear_color = [r, g, b, a];
        self
    }

    /// Set the buffers cleared each frame
    #[must_use]
    pub fn with_clear_mask(mut self, mask: ClearMask) -> Self {
        self.clear_mask = mask;
        self
    }

    /// Set the OpenGL context version
    #[must_use]
    pub fn with_gl_version(mut self, major: u32, minor: u32) -> Self {
        self.gl_version = (major, minor);
        self
    }

    /// Start in wireframe or fill polygon mode
    #[must_use]
    pub fn with_wireframe(mut self, wireframe: bool) -> Self {
        self.wireframe = wireframe;
        self
    }

    /// Height requested for a window of `width`
    pub const fn requested_height(&self, width: u32) -> u32 {
        self.aspect.height_for(width)
    }
}
