//! Configuration constants and default values.
//!
//! Everything the overlay is configured with lives here: visual defaults,
//! validation limits, resize tuning and the global hotkey bindings. None of
//! it is user-configurable at runtime.

use super::shape::Shape;

// === Visual Defaults ===

/// Default crosshair shape.
pub const DEFAULT_SHAPE: Shape = Shape::Cross;

/// Default overlay side length in pixels.
pub const DEFAULT_SIZE: u32 = 50;

/// Default palette index (light blue).
pub const DEFAULT_COLOR_INDEX: usize = 0;

/// Stroke width used for every shape, in pixels.
pub const PEN_WIDTH: f32 = 2.0;

// === Validation Limits ===

/// Smallest overlay side length. Holds for drag-resize as well as the slider.
pub const MIN_SIZE: u32 = 10;

/// Largest value the size slider offers. Drag-resize is not bounded by it.
pub const MAX_SLIDER_SIZE: u32 = 200;

// === Resize Gesture ===

/// Pointer travel (px) per pixel of size change while drag-resizing.
pub const RESIZE_DAMPING: f64 = 5.0;

// === Global Hotkeys ===

/// Modifier keys for a global hotkey binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

/// A global key combination: modifiers plus one ASCII letter key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HotkeyBinding {
    pub modifiers: Modifiers,
    /// Uppercase ASCII letter. Doubles as the Win32 virtual-key code.
    pub key: char,
}

impl HotkeyBinding {
    /// Human-readable form, e.g. `Ctrl+Shift+O`.
    pub fn label(&self) -> String {
        let mut parts = Vec::with_capacity(4);
        if self.modifiers.ctrl {
            parts.push("Ctrl".to_string());
        }
        if self.modifiers.shift {
            parts.push("Shift".to_string());
        }
        if self.modifiers.alt {
            parts.push("Alt".to_string());
        }
        parts.push(self.key.to_string());
        parts.join("+")
    }
}

/// Toggle crosshair visibility (Ctrl+Shift+O).
pub const HOTKEY_TOGGLE_OVERLAY: HotkeyBinding = HotkeyBinding {
    modifiers: Modifiers {
        ctrl: true,
        shift: true,
        alt: false,
    },
    key: 'O',
};

/// Show/hide the control panel (Ctrl+O).
pub const HOTKEY_TOGGLE_PANEL: HotkeyBinding = HotkeyBinding {
    modifiers: Modifiers {
        ctrl: true,
        shift: false,
        alt: false,
    },
    key: 'O',
};
