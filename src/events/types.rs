//! Application events for inter-module communication.
//!
//! Every input source (global hotkeys, panel controls, the pointer hook and
//! the panel's close button) turns what it saw into an `AppEvent`. The
//! dispatcher is the only place they are acted on.
//! This module is pure Rust with no FFI dependencies, making it fully testable.

use crate::model::Shape;

/// Mouse buttons the overlay cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
}

/// Application-level events, queued on the `EventBus` in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    // === Hotkey Events ===
    /// Flip crosshair visibility (Ctrl+Shift+O)
    ToggleOverlay,

    /// Show or hide the control panel (Ctrl+O)
    TogglePanel,

    // === Control Panel Events ===
    /// A shape selector was picked
    SetShape(Shape),

    /// Size slider moved
    SetSize(u32),

    /// Color slider moved
    SetColorIndex(usize),

    /// The panel window was closed; shut down
    PanelClosed,

    // === Pointer Events (global coordinates) ===
    /// Button pressed; `modifier` is whether the resize modifier (Ctrl) was held
    PointerPressed {
        button: PointerButton,
        x: i32,
        y: i32,
        modifier: bool,
    },

    /// Pointer moved
    PointerMoved { x: i32, y: i32 },

    /// Button released
    PointerReleased { button: PointerButton },
}

impl AppEvent {
    /// Returns true for events that originate from the pointer hook.
    ///
    /// These arrive at mouse-move rate, so the dispatcher does not log them.
    pub fn is_pointer(&self) -> bool {
        matches!(
            self,
            AppEvent::PointerPressed { .. }
                | AppEvent::PointerMoved { .. }
                | AppEvent::PointerReleased { .. }
        )
    }

    /// Returns a human-readable description of the event for debugging.
    pub fn description(&self) -> &'static str {
        match self {
            AppEvent::ToggleOverlay => "Toggle crosshair visibility",
            AppEvent::TogglePanel => "Toggle control panel",
            AppEvent::SetShape(_) => "Select shape",
            AppEvent::SetSize(_) => "Set size",
            AppEvent::SetColorIndex(_) => "Select color",
            AppEvent::PanelClosed => "Control panel closed",
            AppEvent::PointerPressed { .. } => "Pointer pressed",
            AppEvent::PointerMoved { .. } => "Pointer moved",
            AppEvent::PointerReleased { .. } => "Pointer released",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_events_are_flagged() {
        assert!(AppEvent::PointerMoved { x: 0, y: 0 }.is_pointer());
        assert!(AppEvent::PointerReleased {
            button: PointerButton::Left
        }
        .is_pointer());
        assert!(AppEvent::PointerPressed {
            button: PointerButton::Left,
            x: 1,
            y: 2,
            modifier: true
        }
        .is_pointer());
    }

    #[test]
    fn test_control_events_are_not_pointer_events() {
        assert!(!AppEvent::ToggleOverlay.is_pointer());
        assert!(!AppEvent::TogglePanel.is_pointer());
        assert!(!AppEvent::SetSize(20).is_pointer());
        assert!(!AppEvent::PanelClosed.is_pointer());
    }

    #[test]
    fn test_event_equality_includes_payload() {
        assert_eq!(AppEvent::SetSize(20), AppEvent::SetSize(20));
        assert_ne!(AppEvent::SetSize(20), AppEvent::SetSize(21));
        assert_ne!(
            AppEvent::SetShape(Shape::Circle),
            AppEvent::SetShape(Shape::Square)
        );
    }

    #[test]
    fn test_all_events_have_descriptions() {
        let events = [
            AppEvent::ToggleOverlay,
            AppEvent::TogglePanel,
            AppEvent::SetShape(Shape::Triangle),
            AppEvent::SetSize(10),
            AppEvent::SetColorIndex(7),
            AppEvent::PanelClosed,
            AppEvent::PointerMoved { x: 0, y: 0 },
        ];

        for event in events {
            assert!(!event.description().is_empty());
        }
    }
}
