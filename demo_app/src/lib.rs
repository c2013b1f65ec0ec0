//! Shared setup for the demo binaries
//!
//! Demos are run from the workspace root so the `resources|shaders|...`
//! templates resolve.

use std::rc::Rc;

use glow::HasContext;
use glwrap::config::Config;
use glwrap::render::window::{AspectRatio, WindowConfig};
use glwrap::render::GlContext;

/// Optional window settings shared by all demos
pub const WINDOW_CONFIG_PATH: &str = "demo_app/window.toml";

/// Load [`WINDOW_CONFIG_PATH`], falling back to an 800 pixel wide 4:3 window
pub fn load_window_config(title: &str) -> WindowConfig {
    let mut config = if std::path::Path::new(WINDOW_CONFIG_PATH).exists() {
        WindowConfig::load_or_default(WINDOW_CONFIG_PATH)
    } else {
        log::info!("No {} found, using built-in window settings", WINDOW_CONFIG_PATH);
        WindowConfig::windowed(title, 800, AspectRatio::Ratio4x3)
    };
    config.title = title.to_string();
    config
}

/// Interleaved `vec2 position, vec3 color` vertices of one triangle
pub type TriangleVertices = [f32; 15];

/// A single colored triangle in its own vertex array
///
/// Drawing and cleanup are skipped once the window that owns `gl` is gone.
pub struct Triangle {
    gl: Rc<GlContext>,
    vao: glow::VertexArray,
    vbo: glow::Buffer,
}

impl Triangle {
    /// Upload `vertices` and describe attributes 0 (position) and 1 (color)
    pub fn new(context: Rc<GlContext>, vertices: &TriangleVertices) -> Result<Self, String> {
        const FLOAT_SIZE: i32 = std::mem::size_of::<f32>() as i32;
        let stride = 5 * FLOAT_SIZE;
        let gl = context.live().ok_or("OpenGL context is gone")?;

        let (vao, vbo) = unsafe {
            let vao = gl.create_vertex_array()?;
            let vbo = gl.create_buffer()?;

            gl.bind_vertex_array(Some(vao));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(glow::ARRAY_BUFFER, bytemuck::cast_slice(vertices), glow::STATIC_DRAW);

            gl.vertex_attrib_pointer_f32(0, 2, glow::FLOAT, false, stride, 0);
            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(1, 3, glow::FLOAT, false, stride, 2 * FLOAT_SIZE);
            gl.enable_vertex_attrib_array(1);

            (vao, vbo)
        };

        Ok(Self { gl: context, vao, vbo })
    }

    /// Draw with the currently active program
    pub fn draw(&self) {
        let Some(gl) = self.gl.live() else { return };
        unsafe {
            gl.bind_vertex_array(Some(self.vao));
            gl.draw_arrays(glow::TRIANGLES, 0, 3);
        }
    }
}

impl Drop for Triangle {
    fn drop(&mut self) {
        let Some(gl) = self.gl.live() else {
            log::warn!("Triangle outlived its window, not deleting its buffers");
            return;
        };
        unsafe {
            gl.delete_buffer(self.vbo);
            gl.delete_vertex_array(self.vao);
        }
    }
}
