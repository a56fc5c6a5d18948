//! Overlay window creation.

use windows::core::w;
use windows::Win32::Foundation::{HINSTANCE, HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DefWindowProcW, LoadCursorW, RegisterClassW, CS_HREDRAW, CS_VREDRAW,
    IDC_ARROW, WNDCLASSW, WS_EX_LAYERED, WS_EX_NOACTIVATE, WS_EX_TOOLWINDOW, WS_EX_TOPMOST,
    WS_POPUP,
};

use crate::error::PlatformError;
use crate::overlay::Rect;

/// Create the frameless, layered, topmost overlay window at `frame`.
///
/// The window starts hidden. Click-through is applied separately through
/// the `WindowStyler` capability.
pub fn create_overlay_window(instance: HINSTANCE, frame: Rect) -> Result<HWND, PlatformError> {
    let class_name = w!("ReticleOverlay");

    unsafe {
        let wc = WNDCLASSW {
            style: CS_HREDRAW | CS_VREDRAW,
            lpfnWndProc: Some(overlay_wnd_proc),
            hInstance: instance,
            hCursor: LoadCursorW(None, IDC_ARROW).unwrap_or_default(),
            lpszClassName: class_name,
            ..Default::default()
        };
        if RegisterClassW(&wc) == 0 {
            return Err(PlatformError::call("RegisterClassW", "overlay class"));
        }

        // Layered windows with per-pixel alpha need no background brush
        let ex_style = WS_EX_LAYERED | WS_EX_TOPMOST | WS_EX_TOOLWINDOW | WS_EX_NOACTIVATE;

        CreateWindowExW(
            ex_style,
            class_name,
            w!("Crosshair Overlay"),
            WS_POPUP,
            frame.x,
            frame.y,
            frame.width,
            frame.height,
            None,
            None,
            Some(instance),
            None,
        )
        .map_err(|e| PlatformError::call("CreateWindowExW", e))
    }
}

unsafe extern "system" fn overlay_wnd_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    DefWindowProcW(hwnd, msg, wparam, lparam)
}
