//! GL entry points used by the shader pipeline
//!
//! [`ShaderBackend`] is the narrow seam between the pipeline and the
//! driver. It is implemented for [`GlContext`]; tests implement it for a
//! recording mock so the pipeline can be exercised without a GPU.
//!
//! Once the owning window is gone every [`GlContext`] call is a no-op that
//! reports failure: object creation errs, status queries return `false` and
//! limits read as zero.

use std::fmt::Debug;

use glow::HasContext;

use super::uniform::UniformValue;
use crate::render::context::GlContext;

/// Shader-related subset of the OpenGL API
///
/// All methods must be called on the thread that owns the current context.
pub trait ShaderBackend {
    /// Shader object handle
    type Shader: Copy + Debug;
    /// Program object handle
    type Program: Copy + Debug;
    /// Uniform slot inside a program
    type UniformLocation: Debug;

    /// Create a shader object of the given GL type enum
    fn create_shader(&self, kind: u32) -> Result<Self::Shader, String>;
    /// Replace the shader's source text
    fn shader_source(&self, shader: Self::Shader, source: &str);
    /// Compile the shader
    fn compile_shader(&self, shader: Self::Shader);
    /// Whether the last compile succeeded
    fn shader_compile_status(&self, shader: Self::Shader) -> bool;
    /// Compiler log
    fn shader_info_log(&self, shader: Self::Shader) -> String;
    /// Delete a shader object
    fn delete_shader(&self, shader: Self::Shader);

    /// Create a program object
    fn create_program(&self) -> Result<Self::Program, String>;
    /// Attach a shader to a program
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    /// Link the program
    fn link_program(&self, program: Self::Program);
    /// Whether the last link succeeded
    fn program_link_status(&self, program: Self::Program) -> bool;
    /// Linker log
    fn program_info_log(&self, program: Self::Program) -> String;
    /// Delete a program object
    fn delete_program(&self, program: Self::Program);
    /// Bind a program as current, or unbind with `None`
    fn use_program(&self, program: Option<Self::Program>);

    /// Location of a named uniform, `None` if it is not an active uniform
    fn uniform_location(&self, program: Self::Program, name: &str) -> Option<Self::UniformLocation>;
    /// Upload a value to the bound program; a `None` location is ignored by GL
    fn set_uniform(&self, location: Option<&Self::UniformLocation>, value: &UniformValue);

    /// `GL_MAX_COMBINED_TEXTURE_IMAGE_UNITS`
    fn max_texture_units(&self) -> u32;
    /// `GL_MAX_UNIFORM_LOCATIONS`
    fn max_uniform_locations(&self) -> u32;

    /// Whether the context behind this backend still exists
    fn is_context_alive(&self) -> bool;
}

const CONTEXT_LOST: &str = "OpenGL context is gone";

fn parameter_u32(gl: &glow::Context, parameter: u32) -> u32 {
    let value = unsafe { gl.get_parameter_i32(parameter) };
    u32::try_from(value).unwrap_or(0)
}

impl ShaderBackend for GlContext {
    type Shader = <glow::Context as HasContext>::Shader;
    type Program = <glow::Context as HasContext>::Program;
    type UniformLocation = <glow::Context as HasContext>::UniformLocation;

    fn create_shader(&self, kind: u32) -> Result<Self::Shader, String> {
        let gl = self.live().ok_or_else(|| CONTEXT_LOST.to_string())?;
        unsafe { gl.create_shader(kind) }
    }

    fn shader_source(&self, shader: Self::Shader, source: &str) {
        if let Some(gl) = self.live() {
            unsafe { gl.shader_source(shader, source) }
        }
    }

    fn compile_shader(&self, shader: Self::Shader) {
        if let Some(gl) = self.live() {
            unsafe { gl.compile_shader(shader) }
        }
    }

    fn shader_compile_status(&self, shader: Self::Shader) -> bool {
        self.live().is_some_and(|gl| unsafe { gl.get_shader_compile_status(shader) })
    }

    fn shader_info_log(&self, shader: Self::Shader) -> String {
        self.live().map_or_else(
            || CONTEXT_LOST.to_string(),
            |gl| unsafe { gl.get_shader_info_log(shader) },
        )
    }

    fn delete_shader(&self, shader: Self::Shader) {
        if let Some(gl) = self.live() {
            unsafe { gl.delete_shader(shader) }
        }
    }

    fn create_program(&self) -> Result<Self::Program, String> {
        let gl = self.live().ok_or_else(|| CONTEXT_LOST.to_string())?;
        unsafe { gl.create_program() }
    }

    fn attach_shader(&self, program: Self::Program, shader: Self::Shader) {
        if let Some(gl) = self.live() {
            unsafe { gl.attach_shader(program, shader) }
        }
    }

    fn link_program(&self, program: Self::Program) {
        if let Some(gl) = self.live() {
            unsafe { gl.link_program(program) }
        }
    }

    fn program_link_status(&self, program: Self::Program) -> bool {
        self.live().is_some_and(|gl| unsafe { gl.get_program_link_status(program) })
    }

    fn program_info_log(&self, program: Self::Program) -> String {
        self.live().map_or_else(
            || CONTEXT_LOST.to_string(),
            |gl| unsafe { gl.get_program_info_log(program) },
        )
    }

    fn delete_program(&self, program: Self::Program) {
        if let Some(gl) = self.live() {
            unsafe { gl.delete_program(program) }
        }
    }

    fn use_program(&self, program: Option<Self::Program>) {
        if let Some(gl) = self.live() {
            unsafe { gl.use_program(program) }
        }
    }

    fn uniform_location(&self, program: Self::Program, name: &str) -> Option<Self::UniformLocation> {
        let gl = self.live()?;
        unsafe { gl.get_uniform_location(program, name) }
    }

    fn set_uniform(&self, location: Option<&Self::UniformLocation>, value: &UniformValue) {
        let Some(gl) = self.live() else { return };
        unsafe {
            match value {
                UniformValue::Bool(b) => gl.uniform_1_u32(location, u32::from(*b)),
                UniformValue::Int(i) => gl.uniform_1_i32(location, *i),
                UniformValue::UInt(u) => gl.uniform_1_u32(location, *u),
                UniformValue::Float(f) => gl.uniform_1_f32(location, *f),
                UniformValue::Vec2(v) => gl.uniform_2_f32_slice(location, v.as_slice()),
                UniformValue::Vec3(v) => gl.uniform_3_f32_slice(location, v.as_slice()),
                // nalgebra storage is column-major, as GL expects
                UniformValue::Mat4(m) => gl.uniform_matrix_4_f32_slice(location, false, m.as_slice()),
                UniformValue::Texture(unit) => {
                    gl.uniform_1_i32(location, i32::try_from(*unit).unwrap_or(i32::MAX));
                }
            }
        }
    }

    fn max_texture_units(&self) -> u32 {
        self.live().map_or(0, |gl| parameter_u32(gl, glow::MAX_COMBINED_TEXTURE_IMAGE_UNITS))
    }

    fn max_uniform_locations(&self) -> u32 {
        self.live().map_or(0, |gl| parameter_u32(gl, glow::MAX_UNIFORM_LOCATIONS))
    }

    fn is_context_alive(&self) -> bool {
        self.is_alive()
    }
}
