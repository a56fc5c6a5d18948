//! Platform-specific implementations.
//!
//! The window layer (overlay window, control panel, hotkeys, pointer hook)
//! is implemented for Windows. The styling capability below is the seam
//! between the window-creation code and the OS flags that make the overlay
//! click-through and topmost.

use crate::error::PlatformError;

#[cfg(target_os = "windows")]
pub mod windows;

/// OS window flags the overlay needs after creation.
pub trait WindowStyler {
    /// Native window handle.
    type Handle: Copy;

    /// Let pointer input pass through the window to whatever is below it.
    fn set_click_through(&self, window: Self::Handle) -> Result<(), PlatformError>;

    /// Keep the window above all non-topmost windows.
    fn set_always_on_top(&self, window: Self::Handle) -> Result<(), PlatformError>;
}

/// Outcome of [`apply_overlay_styles`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleReport {
    pub click_through: bool,
    pub always_on_top: bool,
}

/// Apply both overlay flags, best-effort.
///
/// A failure is logged and the other flag is still attempted; the overlay
/// keeps working, only without that behavior.
pub fn apply_overlay_styles<S: WindowStyler>(styler: &S, window: S::Handle) -> StyleReport {
    let click_through = match styler.set_click_through(window) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("could not make overlay click-through: {}", e);
            false
        }
    };
    let always_on_top = match styler.set_always_on_top(window) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("could not keep overlay on top: {}", e);
            false
        }
    };
    StyleReport {
        click_through,
        always_on_top,
    }
}
