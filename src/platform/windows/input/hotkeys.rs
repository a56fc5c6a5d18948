//! Global hotkeys for Windows.
//!
//! Hotkeys are registered against the control-panel window, so `WM_HOTKEY`
//! arrives there even while the panel is hidden.

use windows::Win32::Foundation::HWND;
use windows::Win32::UI::Input::KeyboardAndMouse::{
    RegisterHotKey, UnregisterHotKey, HOT_KEY_MODIFIERS, MOD_ALT, MOD_CONTROL, MOD_NOREPEAT,
    MOD_SHIFT,
};

use crate::error::PlatformError;
use crate::events::AppEvent;
use crate::model::constants::{HotkeyBinding, HOTKEY_TOGGLE_OVERLAY, HOTKEY_TOGGLE_PANEL};

// Hotkey IDs
pub const HOTKEY_OVERLAY: i32 = 1;
pub const HOTKEY_PANEL: i32 = 2;

/// Every hotkey with its id and the event it publishes.
const HOTKEYS: [(i32, HotkeyBinding, AppEvent); 2] = [
    (HOTKEY_OVERLAY, HOTKEY_TOGGLE_OVERLAY, AppEvent::ToggleOverlay),
    (HOTKEY_PANEL, HOTKEY_TOGGLE_PANEL, AppEvent::TogglePanel),
];

/// Event for a `WM_HOTKEY` id, if it is one of ours.
pub fn event_for_hotkey(id: i32) -> Option<AppEvent> {
    HOTKEYS
        .iter()
        .find(|(hotkey_id, _, _)| *hotkey_id == id)
        .map(|(_, _, event)| event.clone())
}

fn modifiers(binding: &HotkeyBinding) -> HOT_KEY_MODIFIERS {
    let mut mods = MOD_NOREPEAT;
    if binding.modifiers.ctrl {
        mods |= MOD_CONTROL;
    }
    if binding.modifiers.shift {
        mods |= MOD_SHIFT;
    }
    if binding.modifiers.alt {
        mods |= MOD_ALT;
    }
    mods
}

/// Register all hotkeys on `hwnd`. Returns the ids that succeeded.
///
/// A hotkey already taken by another program fails to register; that is
/// logged and the rest are still registered.
pub fn register_hotkeys(hwnd: HWND) -> Vec<i32> {
    let mut registered = Vec::with_capacity(HOTKEYS.len());
    for (id, binding, _) in &HOTKEYS {
        let result = unsafe { RegisterHotKey(Some(hwnd), *id, modifiers(binding), binding.key as u32) }
            .map_err(|e| PlatformError::call("RegisterHotKey", e));
        match result {
            Ok(()) => {
                log::debug!("registered hotkey {}", binding.label());
                registered.push(*id);
            }
            Err(e) => log::warn!("hotkey {} unavailable: {}", binding.label(), e),
        }
    }
    registered
}

/// Unregister the given hotkey ids.
pub fn unregister_hotkeys(hwnd: HWND, ids: &[i32]) {
    for id in ids {
        if let Err(e) = unsafe { UnregisterHotKey(Some(hwnd), *id) } {
            log::debug!("UnregisterHotKey({}) failed: {}", id, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hotkey_ids_map_to_events() {
        assert_eq!(event_for_hotkey(HOTKEY_OVERLAY), Some(AppEvent::ToggleOverlay));
        assert_eq!(event_for_hotkey(HOTKEY_PANEL), Some(AppEvent::TogglePanel));
        assert_eq!(event_for_hotkey(99), None);
    }
}
