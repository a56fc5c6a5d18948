//! Process-level setup: DPI awareness, screen metrics, cursor placement.

use windows::Win32::UI::HiDpi::{
    SetProcessDpiAwarenessContext, DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2,
};
use windows::Win32::UI::WindowsAndMessaging::{
    GetSystemMetrics, SetCursorPos, SM_CXSCREEN, SM_CYSCREEN,
};

use crate::error::PlatformError;
use crate::overlay::geometry::{screen_center, Point};

/// Opt into per-monitor DPI awareness so coordinates are physical pixels.
///
/// Best-effort: older systems or a manifest that already set the mode make
/// this fail, and the app runs with the default awareness.
pub fn enable_dpi_awareness() {
    if let Err(e) = unsafe { SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2) }
    {
        log::warn!(
            "{}",
            PlatformError::call("SetProcessDpiAwarenessContext", e)
        );
    }
}

/// Center of the primary screen.
pub fn primary_screen_center() -> Result<Point, PlatformError> {
    let (w, h) = unsafe { (GetSystemMetrics(SM_CXSCREEN), GetSystemMetrics(SM_CYSCREEN)) };
    if w <= 0 || h <= 0 {
        return Err(PlatformError::NoScreen);
    }
    Ok(screen_center(w, h))
}

/// Park the mouse cursor at `at`.
pub fn move_cursor_to(at: Point) {
    if let Err(e) = unsafe { SetCursorPos(at.x, at.y) } {
        log::warn!("{}", PlatformError::call("SetCursorPos", e));
    }
}
