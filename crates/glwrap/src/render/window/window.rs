//! GLFW window with an OpenGL context
//!
//! Lifecycle: construct (context current, viewport set) → run the
//! poll/wait loop → [`Window::request_close`] → drop. All methods must be
//! called from the thread that created the window.

use std::rc::Rc;

use glfw::{Action, Context as _, Key, Modifiers, OpenGlProfileHint, Scancode, WindowEvent, WindowHint};
use glow::HasContext;
use thiserror::Error;

use super::aspect::AspectRatio;
use super::config::{ClearMask, DisplayMode, WindowConfig};
use super::session::WindowingSession;
use crate::render::context::GlContext;
use crate::foundation::platform::PLATFORM;

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    #[error("GLFW initialization failed: {0}")]
    InitializationFailed(String),

    #[error("a windowing session is already active")]
    SessionActive,

    #[error("failed to create GLFW {0} window")]
    CreationFailed(&'static str),

    #[error("no primary monitor available for fullscreen")]
    NoPrimaryMonitor,
}

pub type WindowResult<T> = Result<T, WindowError>;

/// Key handler: `(window, key, scancode, action, modifiers)`
pub type KeyCallback = Box<dyn FnMut(&mut glfw::Window, Key, Scancode, Action, Modifiers)>;

type NativeWindow = (glfw::PWindow, glfw::GlfwReceiver<(f64, WindowEvent)>);

/// Native window, its OpenGL context and per-frame state
///
/// Only one `Window` may be alive at a time, see [`WindowingSession`].
pub struct Window {
    gl: Rc<GlContext>,
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, WindowEvent)>,
    key_callback: Option<KeyCallback>,
    title: String,
    width: u32,
    height: u32,
    aspect: AspectRatio,
    display: DisplayMode,
    wireframe: bool,
    clear_mask: ClearMask,
    // dropped last so GLFW outlives the native window
    session: WindowingSession,
}

impl Window {
    /// Create the window, make its context current and load OpenGL
    pub fn new(config: &WindowConfig) -> WindowResult<Self> {
        let mut session = WindowingSession::acquire()?;
        apply_context_hints(session.glfw(), config);

        // on failure `session` drops here and terminates GLFW
        let (mut window, events) = match config.display {
            DisplayMode::Windowed => create_windowed(session.glfw(), config),
            DisplayMode::Fullscreen => create_fullscreen(session.glfw(), config),
        }
        .inspect_err(|e| log::error!("[WINDOW] {}", e))?;

        window.make_current();
        window.set_key_polling(true);
        window.set_framebuffer_size_polling(true);

        // the framebuffer may differ from the requested size, e.g. on HiDPI displays
        let (width, height) = framebuffer_extent(window.get_framebuffer_size());

        let gl = unsafe { glow::Context::from_loader_function(|name| window.get_proc_address(name) as *const _) };
        log::info!(
            "[WINDOW] '{}' created: {}x{} framebuffer, OpenGL {}",
            config.title,
            width,
            height,
            unsafe { gl.get_parameter_string(glow::VERSION) }
        );

        let [r, g, b, a] = config.clear_color;
        unsafe {
            gl.viewport(0, 0, to_gl_size(width), to_gl_size(height));
            gl.clear_color(r, g, b, a);
            gl.polygon_mode(glow::FRONT_AND_BACK, polygon_mode_for(config.wireframe));
        }

        Ok(Self {
            gl: Rc::new(GlContext::new(gl)),
            window,
            events,
            key_callback: None,
            title: config.title.clone(),
            width,
            height,
            aspect: config.aspect,
            display: config.display,
            wireframe: config.wireframe,
            clear_mask: config.clear_mask,
            session,
        })
    }

    /// Shared handle to the OpenGL context
    ///
    /// The handle goes dead when the window is dropped; see [`GlContext::live`].
    pub fn gl(&self) -> Rc<GlContext> {
        Rc::clone(&self.gl)
    }

    /// Underlying GLFW window
    pub fn native(&mut self) -> &mut glfw::Window {
        &mut *self.window
    }

    /// Current title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Change the title bar text
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.window.set_title(&self.title);
    }

    /// Framebuffer width in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Framebuffer height in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Aspect ratio the window was created with
    pub const fn aspect(&self) -> AspectRatio {
        self.aspect
    }

    /// Windowed or fullscreen
    pub const fn display_mode(&self) -> DisplayMode {
        self.display
    }

    /// True until a close has been requested by the user or [`request_close`](Self::request_close)
    pub fn is_running(&self) -> bool {
        !self.window.should_close()
    }

    /// Mark the window as ready to close; resources stay alive until drop
    pub fn request_close(&mut self) {
        self.window.set_should_close(true);
    }

    // --- RENDERING --- //

    /// Present the back buffer; call once at the end of every frame
    pub fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    /// Clear the buffers selected by the clear mask
    pub fn clear(&self) {
        unsafe { self.gl.raw.clear(self.clear_mask.bits()) };
    }

    /// Set an opaque clear color
    pub fn set_clear_color(&self, r: f32, g: f32, b: f32) {
        self.set_clear_color_rgba(r, g, b, 1.0);
    }

    /// Set the clear color including alpha
    pub fn set_clear_color_rgba(&self, r: f32, g: f32, b: f32, a: f32) {
        unsafe { self.gl.raw.clear_color(r, g, b, a) };
    }

    /// Buffers cleared by [`clear`](Self::clear)
    pub const fn clear_mask(&self) -> ClearMask {
        self.clear_mask
    }

    /// Select the buffers cleared by [`clear`](Self::clear)
    pub fn set_clear_mask(&mut self, mask: ClearMask) {
        self.clear_mask = mask;
    }

    /// Whether polygons are drawn as lines
    pub const fn is_wireframe(&self) -> bool {
        self.wireframe
    }

    /// Switch between line and fill polygon mode
    pub fn toggle_wireframe(&mut self) {
        self.wireframe = !self.wireframe;
        unsafe { self.gl.raw.polygon_mode(glow::FRONT_AND_BACK, polygon_mode_for(self.wireframe)) };
        log::debug!("[WINDOW] Wireframe {}", if self.wireframe { "on" } else { "off" });
    }

    // --- EVENT HANDLING --- //

    /// Process pending events without blocking; call once per frame
    pub fn poll_events(&mut self) {
        self.session.glfw().poll_events();
        self.dispatch_events();
    }

    /// Block the calling thread until at least one event arrives, then process it
    pub fn wait_events(&mut self) {
        self.session.glfw().wait_events();
        self.dispatch_events();
    }

    /// Register the key handler, replacing any previous one
    pub fn set_key_callback<F>(&mut self, callback: F)
    where
        F: FnMut(&mut glfw::Window, Key, Scancode, Action, Modifiers) + 'static,
    {
        self.key_callback = Some(Box::new(callback));
    }

    /// Seconds on the GLFW clock
    pub fn time(&self) -> f64 {
        self.session.time()
    }

    /// Reset the GLFW clock
    pub fn set_time(&mut self, seconds: f64) {
        self.session.set_time(seconds);
    }

    /// Resize the window to `aspect` at its current width
    ///
    /// Main thread only, and a fullscreen window may refuse the new size.
    #[cfg(feature = "window-unsafe")]
    pub fn change_aspect_ratio(&mut self, aspect: AspectRatio) {
        self.aspect = aspect;
        self.height = aspect.height_for(self.width);
        self.window.set_size(to_gl_size(self.width), to_gl_size(self.height));
    }

    fn dispatch_events(&mut self) {
        let events: Vec<_> = glfw::flush_messages(&self.events).map(|(_, event)| event).collect();

        for event in events {
            match event {
                WindowEvent::Key(key, scancode, action, mods) => {
                    if let Some(callback) = self.key_callback.as_mut() {
                        callback(&mut *self.window, key, scancode, action, mods);
                    }
                }
                WindowEvent::FramebufferSize(w, h) => {
                    (self.width, self.height) = framebuffer_extent((w, h));
                    unsafe { self.gl.raw.viewport(0, 0, w, h) };
                    log::debug!("[WINDOW] Framebuffer resized to {}x{}", self.width, self.height);
                }
                _ => {}
            }
        }
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        log::debug!("[WINDOW] Destroying '{}'", self.title);
        // before any field drops, so outstanding handles stop calling into the driver
        self.gl.invalidate();
    }
}

fn apply_context_hints(glfw: &mut glfw::Glfw, config: &WindowConfig) {
    let (major, minor) = config.gl_version;
    glfw.window_hint(WindowHint::ContextVersion(major, minor));
    glfw.window_hint(WindowHint::OpenGlProfile(OpenGlProfileHint::Core));
    if PLATFORM.is_macos() {
        glfw.window_hint(WindowHint::OpenGlForwardCompat(true));
    }
    glfw.window_hint(WindowHint::Resizable(false));
}

fn create_windowed(glfw: &mut glfw::Glfw, config: &WindowConfig) -> WindowResult<NativeWindow> {
    let width = config.width;
    let height = config.requested_height(width);
    log::debug!("[WINDOW] Requesting {}x{} windowed ({})", width, height, config.aspect);

    glfw.create_window(width, height, &config.title, glfw::WindowMode::Windowed)
        .ok_or(WindowError::CreationFailed("windowed"))
}

fn create_fullscreen(glfw: &mut glfw::Glfw, config: &WindowConfig) -> WindowResult<NativeWindow> {
    glfw.with_primary_monitor(|glfw, monitor| {
        let monitor = monitor.ok_or(WindowError::NoPrimaryMonitor)?;
        let mode = monitor.get_video_mode().ok_or(WindowError::NoPrimaryMonitor)?;

        let width = mode.width;
        let height = config.requested_height(width);
        log::debug!("[WINDOW] Requesting {}x{} fullscreen ({})", width, height, config.aspect);

        glfw.create_window(width, height, &config.title, glfw::WindowMode::FullScreen(&*monitor))
            .ok_or(WindowError::CreationFailed("fullscreen"))
    })
}

const fn polygon_mode_for(wireframe: bool) -> u32 {
    if wireframe {
        glow::LINE
    } else {
        glow::FILL
    }
}

fn framebuffer_extent((width, height): (i32, i32)) -> (u32, u32) {
    (u32::try_from(width).unwrap_or(0), u32::try_from(height).unwrap_or(0))
}

fn to_gl_size(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
