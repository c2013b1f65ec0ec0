//! Shader program pipeline
//!
//! Reads stage sources from a shader directory, compiles each stage, links
//! the program and uploads uniforms. A shader directory contains
//! `vertex.shd`, `fragment.shd` and optionally `geometry.shd`.
//!
//! Failures are logged and degrade to a best-effort handle; nothing in this
//! module panics or returns an error to the caller.

pub mod backend;
pub mod compile;
pub mod program;
pub mod stage;
pub mod uniform;

#[cfg(test)]
pub(crate) mod mock;

pub use backend::ShaderBackend;
pub use compile::{
    compile_stage, link_program, link_program_checked, load_program, load_program_checked, load_program_vf,
    load_program_vgf, LinkOutcome,
};
pub use program::ShaderProgram;
pub use stage::{ShaderStage, StageSet};
pub use uniform::{UniformKind, UniformValue};
