//! Static triangle demo
//!
//! Draws a red/green/blue triangle and only redraws when an event arrives.
//! Escape closes the window.

use demo_app::{load_window_config, Triangle, TriangleVertices};
use glfw::{Action, Key};
use glwrap::render::{ShaderProgram, StageSet, Window};

const VERTICES: TriangleVertices = [
    // position    color
    -1.0, -1.0, 1.0, 0.0, 0.0, //
    -1.0, 1.0, 0.0, 1.0, 0.0, //
    1.0, 1.0, 0.0, 0.0, 1.0,
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    glwrap::foundation::logging::init();

    let mut window = Window::new(&load_window_config("Example 1"))?;
    window.set_key_callback(|win, key, _scancode, action, _mods| {
        if action == Action::Press && key == Key::Escape {
            win.set_should_close(true);
        }
    });

    let shader = ShaderProgram::new(window.gl(), "resources|shaders|shader1", StageSet::VertexFragment);
    shader.activate();

    let triangle = Triangle::new(window.gl(), &VERTICES)?;

    while window.is_running() {
        window.clear();
        triangle.draw();
        window.swap_buffers();
        window.wait_events();
    }

    log::info!("Example 1 finished");
    Ok(())
}
