//! Animated triangle demo
//!
//! The triangle circles the origin along `(cos t, sin t)` with `t` taken
//! from the GLFW clock. Releasing Space pauses the animation until the next
//! key event; Escape closes the window.

use std::cell::Cell;
use std::rc::Rc;

use demo_app::{load_window_config, Triangle, TriangleVertices};
use glfw::{Action, Key};
use glwrap::prelude::*;

const VERTICES: TriangleVertices = [
    // position    color
    -0.5, -0.5, 1.0, 0.0, 0.0, //
    -0.5, 0.5, 0.0, 1.0, 0.0, //
    0.5, 0.5, 0.0, 0.0, 1.0,
];

#[derive(Default)]
struct Pause {
    paused: Cell<bool>,
    resumed: Cell<bool>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    glwrap::foundation::logging::init();

    let mut window = Window::new(&load_window_config("Example 2"))?;

    let pause = Rc::new(Pause::default());
    let state = Rc::clone(&pause);
    window.set_key_callback(move |win, key, _scancode, action, _mods| {
        // any key event ends a pause
        if state.paused.replace(false) {
            state.resumed.set(true);
            return;
        }
        match (key, action) {
            (Key::Escape, Action::Press) => win.set_should_close(true),
            (Key::Space, Action::Release) => state.paused.set(true),
            _ => {}
        }
    });

    let shader = ShaderProgram::new(window.gl(), "resources|shaders|shader2", StageSet::VertexFragment);
    shader.activate();

    let triangle = Triangle::new(window.gl(), &VERTICES)?;
    let mut timer = 0.0_f64;

    while window.is_running() {
        if pause.resumed.replace(false) {
            window.set_time(timer);
            log::debug!("Resumed at {:.2}s", timer);
        }
        if !pause.paused.get() {
            timer = window.time();
        }

        #[allow(clippy::cast_possible_truncation)]
        let t = timer as f32;
        shader.set_vec2("xytime", Vec2::new(t.cos(), t.sin()));

        window.clear();
        triangle.draw();
        window.swap_buffers();

        if pause.paused.get() {
            window.wait_events();
        } else {
            window.poll_events();
        }
    }

    log::info!("Example 2 finished after {:.2}s", timer);
    Ok(())
}
