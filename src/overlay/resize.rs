//! Ctrl+drag resize gesture.
//!
//! ```text
//!            press (modifier held)
//!   Idle ─────────────────────────▶ Resizing { anchor_x }
//!    ▲                                  │  move: size += round(dx / 5),
//!    │          release                 │        anchor_x = x
//!    └──────────────────────────────────┘
//! ```
//!
//! Each move re-anchors, so an event only contributes the distance travelled
//! since the previous one.

use crate::model::constants::RESIZE_DAMPING;

/// Gesture phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragResize {
    #[default]
    Idle,
    /// A drag is in progress; `anchor_x` is the global X of the last event.
    Resizing { anchor_x: i32 },
}

impl DragResize {
    pub fn is_active(&self) -> bool {
        matches!(self, DragResize::Resizing { .. })
    }

    pub fn anchor_x(&self) -> Option<i32> {
        match self {
            DragResize::Idle => None,
            DragResize::Resizing { anchor_x } => Some(*anchor_x),
        }
    }

    /// Left-button press at global `x`. Starts a drag only when the resize
    /// modifier is held; returns whether it did.
    pub fn press(&mut self, x: i32, modifier_held: bool) -> bool {
        if !modifier_held {
            return false;
        }
        *self = DragResize::Resizing { anchor_x: x };
        true
    }

    /// Pointer moved to global `x`. While resizing, returns the size delta
    /// for this step and re-anchors; `None` when idle.
    pub fn drag_to(&mut self, x: i32) -> Option<i64> {
        let DragResize::Resizing { anchor_x } = *self else {
            return None;
        };
        *self = DragResize::Resizing { anchor_x: x };
        Some(size_step(i64::from(x) - i64::from(anchor_x)))
    }

    /// Left-button release. Always returns to `Idle`.
    pub fn release(&mut self) {
        *self = DragResize::Idle;
    }
}

/// Size change for a horizontal pointer travel of `delta` pixels:
/// `round(delta / RESIZE_DAMPING)`, halves rounded away from zero.
pub fn size_step(delta: i64) -> i64 {
    (delta as f64 / RESIZE_DAMPING).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_without_modifier_stays_idle() {
        let mut drag = DragResize::default();
        assert!(!drag.press(100, false));
        assert_eq!(drag, DragResize::Idle);
    }

    #[test]
    fn press_with_modifier_records_anchor() {
        let mut drag = DragResize::default();
        assert!(drag.press(100, true));
        assert_eq!(drag.anchor_x(), Some(100));
    }

    #[test]
    fn drag_to_reanchors() {
        let mut drag = DragResize::Resizing { anchor_x: 100 };
        assert_eq!(drag.drag_to(125), Some(5));
        assert_eq!(drag.anchor_x(), Some(125));
        assert_eq!(drag.drag_to(115), Some(-2));
        assert_eq!(drag.anchor_x(), Some(115));
    }

    #[test]
    fn drag_while_idle_does_nothing() {
        let mut drag = DragResize::Idle;
        assert_eq!(drag.drag_to(500), None);
        assert_eq!(drag, DragResize::Idle);
    }

    #[test]
    fn release_clears_anchor() {
        let mut drag = DragResize::Resizing { anchor_x: 7 };
        drag.release();
        assert!(!drag.is_active());
        assert_eq!(drag.anchor_x(), None);
    }

    #[test]
    fn size_step_rounds_half_away_from_zero() {
        assert_eq!(size_step(0), 0);
        assert_eq!(size_step(2), 0);
        assert_eq!(size_step(3), 1);
        assert_eq!(size_step(-3), -1);
        assert_eq!(size_step(25), 5);
        assert_eq!(size_step(-27), -5);
    }
}
