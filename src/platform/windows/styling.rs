//! Win32 implementation of the overlay's window flags.

use windows::Win32::Foundation::{GetLastError, HWND};
use windows::Win32::UI::WindowsAndMessaging::{
    GetWindowLongPtrW, SetWindowLongPtrW, SetWindowPos, GWL_EXSTYLE, HWND_TOPMOST, SWP_NOACTIVATE,
    SWP_NOMOVE, SWP_NOSIZE, WS_EX_LAYERED, WS_EX_TRANSPARENT,
};

use crate::error::PlatformError;
use crate::platform::WindowStyler;

/// Sets extended window styles through `SetWindowLongPtrW`.
pub struct Win32Styler;

impl WindowStyler for Win32Styler {
    type Handle = HWND;

    fn set_click_through(&self, window: HWND) -> Result<(), PlatformError> {
        let wanted = (WS_EX_LAYERED.0 | WS_EX_TRANSPARENT.0) as isize;
        unsafe {
            let current = GetWindowLongPtrW(window, GWL_EXSTYLE);
            SetWindowLongPtrW(window, GWL_EXSTYLE, current | wanted);
            // SetWindowLongPtrW's return value is ambiguous; read back instead
            if GetWindowLongPtrW(window, GWL_EXSTYLE) & wanted != wanted {
                return Err(PlatformError::call(
                    "SetWindowLongPtrW",
                    format!("error code {}", GetLastError().0),
                ));
            }
        }
        Ok(())
    }

    fn set_always_on_top(&self, window: HWND) -> Result<(), PlatformError> {
        unsafe {
            SetWindowPos(
                window,
                Some(HWND_TOPMOST),
                0,
                0,
                0,
                0,
                SWP_NOMOVE | SWP_NOSIZE | SWP_NOACTIVATE,
            )
        }
        .map_err(|e| PlatformError::call("SetWindowPos", e))
    }
}
