//! Owned shader program with uniform upload helpers

use std::rc::Rc;

use super::backend::ShaderBackend;
use super::compile::load_program_checked;
use super::stage::StageSet;
use super::uniform::{UniformKind, UniformValue};
use crate::foundation::math::{Mat4, Vec2, Vec3};
use crate::render::context::GlContext;

/// A linked (or failed-to-link) program that is deleted on drop
///
/// Loading never fails hard: if compilation or linking fails the program is
/// kept but [`is_linked`](Self::is_linked) reports `false`, and drawing with
/// it produces nothing. Once the owning window is dropped the program
/// becomes inert: binding, uploads and its own drop issue no GL calls.
pub struct ShaderProgram<B: ShaderBackend = GlContext> {
    gl: Rc<B>,
    program: Option<B::Program>,
    linked: bool,
}

impl<B: ShaderBackend> ShaderProgram<B> {
    /// Load the program in the `|`-delimited directory `dir`
    pub fn new(gl: Rc<B>, dir: &str, set: StageSet) -> Self {
        let outcome = load_program_checked(gl.as_ref(), dir, set);
        let (program, linked) = outcome.map_or((None, false), |o| (Some(o.program), o.linked));
        if linked {
            log::info!("[SHADER] Program '{}' ready", dir);
        }
        Self { gl, program, linked }
    }

    /// Whether the driver reported a successful link
    pub const fn is_linked(&self) -> bool {
        self.linked
    }

    /// Raw program handle, `None` if no program object could be created
    pub fn handle(&self) -> Option<B::Program> {
        self.program
    }

    /// Bind as the current program
    pub fn activate(&self) {
        if self.gl.is_context_alive() {
            self.gl.use_program(self.program);
        }
    }

    /// Unbind any current program
    pub fn deactivate(&self) {
        if self.gl.is_context_alive() {
            self.gl.use_program(None);
        }
    }

    /// Look up a uniform slot by name
    ///
    /// The lookup is repeated on every call. `None` means the name is not an
    /// active uniform; a warning is logged.
    pub fn uniform_location(&self, name: &str) -> Option<B::UniformLocation> {
        let location = self.program.and_then(|p| self.gl.uniform_location(p, name));
        if location.is_none() {
            log::warn!("[SHADER] Could not find uniform variable '{}'", name);
        }
        location
    }

    /// Upload `value` to the uniform `name` of this program
    ///
    /// The program must be active. Missing uniforms and out-of-range texture
    /// units are reported but the update is still issued.
    pub fn set_uniform(&self, name: &str, value: impl Into<UniformValue>) {
        let value = value.into();
        if !self.gl.is_context_alive() {
            log::warn!("[SHADER] Ignoring update of '{}': OpenGL context is gone", name);
            return;
        }

        if let UniformValue::Texture(unit) = value {
            let max = self.gl.max_texture_units();
            if unit >= max {
                log::error!("[SHADER] Invalid texture unit {} for '{}' (max {})", unit, name, max);
            }
        }

        let location = self.program.and_then(|p| self.gl.uniform_location(p, name));
        self.gl.set_uniform(location.as_ref(), &value);

        if location.is_none() {
            report_missing_uniform(name, value.kind());
        }
    }

    /// Set a `bool` uniform
    pub fn set_bool(&self, name: &str, value: bool) {
        self.set_uniform(name, UniformValue::Bool(value));
    }

    /// Set an `int` uniform
    pub fn set_int(&self, name: &str, value: i32) {
        self.set_uniform(name, UniformValue::Int(value));
    }

    /// Set a `uint` uniform
    pub fn set_uint(&self, name: &str, value: u32) {
        self.set_uniform(name, UniformValue::UInt(value));
    }

    /// Set a `float` uniform
    pub fn set_float(&self, name: &str, value: f32) {
        self.set_uniform(name, UniformValue::Float(value));
    }

    /// Set a `vec2` uniform
    pub fn set_vec2(&self, name: &str, value: Vec2) {
        self.set_uniform(name, UniformValue::Vec2(value));
    }

    /// Set a `vec3` uniform
    pub fn set_vec3(&self, name: &str, value: Vec3) {
        self.set_uniform(name, UniformValue::Vec3(value));
    }

    /// Set a `mat4` uniform
    pub fn set_mat4(&self, name: &str, value: &Mat4) {
        self.set_uniform(name, UniformValue::Mat4(*value));
    }

    /// Point a sampler uniform at texture `unit`
    pub fn set_texture(&self, name: &str, unit: u32) {
        self.set_uniform(name, UniformValue::Texture(unit));
    }

    /// Maximum uniform locations per program, at least 1024
    pub fn max_uniform_locations(&self) -> u32 {
        self.gl.max_uniform_locations()
    }
}

fn report_missing_uniform(name: &str, kind: UniformKind) {
    log::warn!(
        "[SHADER] '{}' of type '{}' does not correspond to an active uniform variable, \
         or it is associated with a named uniform block",
        name,
        kind
    );
}

impl<B: ShaderBackend> Drop for ShaderProgram<B> {
    fn drop(&mut self) {
        if !self.gl.is_context_alive() {
            if let Some(program) = self.program.take() {
                log::warn!("[SHADER] Program {:?} outlived its window, not deleting it", program);
            }
            return;
        }
        self.gl.use_program(None);
        if let Some(program) = self.program.take() {
            log::debug!("[SHADER] Dropping program {:?}", program);
            self.gl.delete_program(program);
        }
    }
}
