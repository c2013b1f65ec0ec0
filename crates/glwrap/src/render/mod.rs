//! Rendering module
//!
//! Window/context lifecycle and shader program management.

pub mod context;
pub mod shader;
pub mod window;

pub use context::GlContext;
pub use shader::{ShaderBackend, ShaderProgram, ShaderStage, StageSet, UniformValue};
pub use window::{Window, WindowConfig, WindowError};
