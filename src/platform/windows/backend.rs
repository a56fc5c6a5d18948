//! Win32 side of the dispatcher: the two windows and the global hooks.

use windows::Win32::Foundation::HWND;
use windows::Win32::Graphics::Direct2D::ID2D1Factory;
use windows::Win32::UI::WindowsAndMessaging::{
    DestroyWindow, PostQuitMessage, SetForegroundWindow, SetWindowPos, ShowWindow, HHOOK,
    HWND_TOPMOST, SWP_NOACTIVATE, SW_HIDE, SW_SHOW, SW_SHOWNOACTIVATE,
};

use crate::handlers::WindowBackend;
use crate::overlay::{Rect, Scene};
use crate::platform::windows::input::{remove_mouse_hook, unregister_hotkeys};
use crate::platform::windows::ui::update_overlay;

/// Handles owned by the running app.
pub struct Win32Backend {
    pub overlay: Option<HWND>,
    pub panel: HWND,
    pub factory: ID2D1Factory,
    /// Last frame passed to `place_overlay`.
    pub frame: Rect,
    /// Hotkey ids registered on `panel`.
    pub hotkeys: Vec<i32>,
    pub mouse_hook: Option<HHOOK>,
}

impl Win32Backend {
    pub fn new(overlay: HWND, panel: HWND, factory: ID2D1Factory, frame: Rect) -> Self {
        Self {
            overlay: Some(overlay),
            panel,
            factory,
            frame,
            hotkeys: Vec::new(),
            mouse_hook: None,
        }
    }
}

impl WindowBackend for Win32Backend {
    fn place_overlay(&mut self, frame: Rect) {
        self.frame = frame;
        let Some(hwnd) = self.overlay else { return };
        let placed = unsafe {
            SetWindowPos(
                hwnd,
                Some(HWND_TOPMOST),
                frame.x,
                frame.y,
                frame.width,
                frame.height,
                SWP_NOACTIVATE,
            )
        };
        if let Err(e) = placed {
            log::warn!("SetWindowPos failed: {}", e);
        }
    }

    fn redraw_overlay(&mut self, scene: &Scene) {
        let Some(hwnd) = self.overlay else { return };
        if let Err(e) = update_overlay(hwnd, &self.factory, self.frame, scene) {
            log::warn!("overlay redraw failed: {}", e);
        }
    }

    fn show_overlay(&mut self) {
        if let Some(hwnd) = self.overlay {
            unsafe {
                let _ = ShowWindow(hwnd, SW_SHOWNOACTIVATE);
            }
        }
    }

    fn close_overlay(&mut self) {
        if let Some(hwnd) = self.overlay.take() {
            if let Err(e) = unsafe { DestroyWindow(hwnd) } {
                log::debug!("DestroyWindow(overlay) failed: {}", e);
            }
        }
    }

    fn show_panel(&mut self, activate: bool) {
        unsafe {
            let _ = ShowWindow(self.panel, SW_SHOW);
            if activate {
                let _ = SetForegroundWindow(self.panel);
            }
        }
    }

    fn hide_panel(&mut self) {
        unsafe {
            let _ = ShowWindow(self.panel, SW_HIDE);
        }
    }

    fn release_global_hooks(&mut self) {
        unregister_hotkeys(self.panel, &self.hotkeys);
        self.hotkeys.clear();
        if let Some(hook) = self.mouse_hook.take() {
            remove_mouse_hook(hook);
        }
    }

    fn accept_close(&mut self) {
        unsafe {
            if let Err(e) = DestroyWindow(self.panel) {
                log::debug!("DestroyWindow(panel) failed: {}", e);
            }
            PostQuitMessage(0);
        }
    }
}
