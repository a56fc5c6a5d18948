//! Low-level mouse hook feeding the resize gesture.
//!
//! The overlay is click-through, so it never receives mouse messages itself.
//! The hook sees every left-button and move event system-wide and publishes
//! them; the dispatcher decides whether they start or continue a resize.
//! Events are always passed on to the next hook.

use windows::Win32::Foundation::{LPARAM, LRESULT, WPARAM};
use windows::Win32::UI::Input::KeyboardAndMouse::{GetAsyncKeyState, VK_CONTROL};
use windows::Win32::UI::WindowsAndMessaging::{
    CallNextHookEx, PostMessageW, SetWindowsHookExW, UnhookWindowsHookEx, HC_ACTION, HHOOK,
    MSLLHOOKSTRUCT, WH_MOUSE_LL, WM_LBUTTONDOWN, WM_LBUTTONUP, WM_MOUSEMOVE, WM_NULL,
};

use crate::error::PlatformError;
use crate::events::{self, AppEvent, PointerButton};

/// Install the hook on the calling (UI) thread.
pub fn install_mouse_hook() -> Result<HHOOK, PlatformError> {
    unsafe { SetWindowsHookExW(WH_MOUSE_LL, Some(mouse_hook_proc), None, 0) }
        .map_err(|e| PlatformError::call("SetWindowsHookExW", e))
}

pub fn remove_mouse_hook(hook: HHOOK) {
    if let Err(e) = unsafe { UnhookWindowsHookEx(hook) } {
        log::debug!("UnhookWindowsHookEx failed: {}", e);
    }
}

fn resize_modifier_held() -> bool {
    // High bit set: key is down right now
    unsafe { GetAsyncKeyState(i32::from(VK_CONTROL.0)) } < 0
}

/// Low-level mouse hook procedure.
extern "system" fn mouse_hook_proc(ncode: i32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    if ncode == HC_ACTION as i32 {
        // SAFETY: for WH_MOUSE_LL with HC_ACTION, lparam points to an MSLLHOOKSTRUCT
        let info = unsafe { &*(lparam.0 as *const MSLLHOOKSTRUCT) };
        let (x, y) = (info.pt.x, info.pt.y);

        let event = match wparam.0 as u32 {
            WM_LBUTTONDOWN => Some(AppEvent::PointerPressed {
                button: PointerButton::Left,
                x,
                y,
                modifier: resize_modifier_held(),
            }),
            WM_MOUSEMOVE => Some(AppEvent::PointerMoved { x, y }),
            WM_LBUTTONUP => Some(AppEvent::PointerReleased {
                button: PointerButton::Left,
            }),
            _ => None,
        };

        if let Some(event) = event {
            events::publish(event);
            // Hook calls do not make GetMessageW return; wake the loop so
            // the event is drained now.
            unsafe {
                let _ = PostMessageW(None, WM_NULL, WPARAM(0), LPARAM(0));
            }
        }
    }

    unsafe { CallNextHookEx(None, ncode, wparam, lparam) }
}
