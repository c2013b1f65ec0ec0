//! Window management subsystem
//!
//! One concrete [`Window`] type covers both windowed and fullscreen
//! presentation; the difference is a [`DisplayMode`] in the
//! [`WindowConfig`] and only matters during construction.
//!
//! # Module Organization
//!
//! - **`window`**: the window/context wrapper and its errors
//! - **`session`**: exclusive ownership of GLFW's global state
//! - **`config`**: construction parameters and clear masks
//! - **`aspect`**: aspect ratios used to derive window heights

pub mod aspect;
pub mod config;
pub mod session;
#[allow(clippy::module_inception)]
pub mod window;

pub use aspect::{AspectRatio, ParseAspectRatioError};
pub use config::{ClearMask, DisplayMode, WindowConfig};
pub use session::WindowingSession;
pub use window::{KeyCallback, Window, WindowError, WindowResult};
