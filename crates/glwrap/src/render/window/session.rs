//! Process-wide GLFW ownership
//!
//! GLFW keeps global state: initializing it twice and terminating it while a
//! window is alive both break the other owner. [`WindowingSession`] is the
//! single owner of that state. Only one session can exist at a time, and
//! dropping it terminates GLFW.

use std::sync::atomic::{AtomicBool, Ordering};

use super::window::{WindowError, WindowResult};

static SESSION_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Claim on the single session slot, released on drop
#[derive(Debug)]
struct SessionSlot(());

impl SessionSlot {
    fn claim() -> WindowResult<Self> {
        SESSION_ACTIVE
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| Self(()))
            .map_err(|_| WindowError::SessionActive)
    }
}

impl Drop for SessionSlot {
    fn drop(&mut self) {
        SESSION_ACTIVE.store(false, Ordering::Release);
    }
}

#[allow(clippy::needless_pass_by_value)]
fn log_glfw_error(error: glfw::Error, description: String) {
    log::error!("[SESSION] GLFW error {:?}: {}", error, description);
}

/// Initialized GLFW library, exclusively owned
///
/// Must be created and dropped on the main thread.
pub struct WindowingSession {
    // field order: GLFW terminates before the slot is released
    glfw: glfw::Glfw,
    _slot: SessionSlot,
}

impl WindowingSession {
    /// Initialize GLFW
    ///
    /// Fails with [`WindowError::SessionActive`] while another session is alive.
    pub fn acquire() -> WindowResult<Self> {
        let slot = SessionSlot::claim()?;

        let glfw = glfw::init(log_glfw_error).map_err(|e| {
            log::error!("[SESSION] Could not initialize GLFW: {:?}", e);
            WindowError::InitializationFailed(format!("{e:?}"))
        })?;

        log::debug!("[SESSION] GLFW initialized");
        Ok(Self { glfw, _slot: slot })
    }

    /// Whether a session is currently alive in this process
    pub fn is_active() -> bool {
        SESSION_ACTIVE.load(Ordering::Acquire)
    }

    /// GLFW library handle
    pub fn glfw(&mut self) -> &mut glfw::Glfw {
        &mut self.glfw
    }

    /// Seconds since GLFW was initialized, or since the last [`set_time`](Self::set_time)
    pub fn time(&self) -> f64 {
        self.glfw.get_time()
    }

    /// Reset the GLFW clock
    pub fn set_time(&mut self, seconds: f64) {
        self.glfw.set_time(seconds);
    }
}

impl Drop for WindowingSession {
    fn drop(&mut self) {
        // `glfw` terminates the library when its last handle drops, then the slot is released
        log::debug!("[SESSION] Terminating GLFW");
    }
}

/// Serializes unit tests that touch the process-wide session slot
///
/// Any test that claims the slot or acquires a session must hold it.
#[cfg(test)]
pub(crate) static SLOT_TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
