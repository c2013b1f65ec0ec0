//! # glwrap
//!
//! A thin convenience layer over an OpenGL context.
//!
//! ## Features
//!
//! - **Windows**: GLFW window plus OpenGL 3.3 core context, windowed or fullscreen
//! - **Shader Programs**: load, compile and link `vertex.shd` / `geometry.shd` / `fragment.shd`
//! - **Uniforms**: one `set_uniform` entry point over a tagged value type
//! - **Cross-Platform Paths**: `|`-delimited path templates resolved per platform
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use glwrap::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     glwrap::foundation::logging::init();
//!
//!     let mut window = Window::new(&WindowConfig::windowed("Example", 800, AspectRatio::Ratio4x3))?;
//!     let program = ShaderProgram::new(window.gl(), "resources|shaders|shader1", StageSet::VertexFragment);
//!     program.activate();
//!
//!     while window.is_running() {
//!         window.clear();
//!         // issue draw calls here
//!         window.swap_buffers();
//!         window.wait_events();
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod foundation;
pub mod render;

/// Common imports for glwrap users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError},
        foundation::{
            fileio::{extension_of, read_text_file, to_platform_dir, to_platform_path},
            math::{Mat4, Vec2, Vec3},
            platform::{Platform, PLATFORM},
        },
        render::{
            context::GlContext,
            shader::{ShaderProgram, ShaderStage, StageSet, UniformValue},
            window::{AspectRatio, ClearMask, DisplayMode, Window, WindowConfig, WindowError},
        },
    };
}
