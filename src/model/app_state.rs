//! Overlay state (pure Rust, no FFI).
//!
//! `OverlayState` is everything the overlay needs to draw itself. The
//! dispatcher is its only writer; every setter keeps the invariants
//! (`size >= MIN_SIZE`, `color_index` within the palette).

use super::constants::*;
use super::palette::{self, Rgb, MAX_COLOR_INDEX};
use super::shape::Shape;

/// Why a state change was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejected {
    /// Color index past the end of the palette.
    ColorIndexOutOfRange(usize),
}

/// Crosshair appearance and visibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayState {
    /// Which shape to draw.
    pub shape: Shape,
    /// Side of the square overlay window, in pixels. Never below `MIN_SIZE`.
    size: u32,
    /// Index into `PALETTE`.
    color_index: usize,
    /// Is the crosshair drawn? The window stays open either way.
    pub visible: bool,
}

impl Default for OverlayState {
    fn default() -> Self {
        Self {
            shape: DEFAULT_SHAPE,
            size: DEFAULT_SIZE,
            color_index: DEFAULT_COLOR_INDEX,
            visible: true,
        }
    }
}

impl OverlayState {
    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn color_index(&self) -> usize {
        self.color_index
    }

    /// Current stroke color.
    pub fn color(&self) -> Rgb {
        // color_index is validated on every write
        palette::PALETTE[self.color_index].color
    }

    /// Set the size, raising anything below `MIN_SIZE` to it.
    pub fn set_size(&mut self, size: u32) {
        self.size = size.max(MIN_SIZE);
    }

    /// Set the size from the panel slider, which only offers
    /// `MIN_SIZE..=MAX_SLIDER_SIZE`.
    pub fn set_size_from_slider(&mut self, size: u32) {
        self.size = size.clamp(MIN_SIZE, MAX_SLIDER_SIZE);
    }

    /// Grow or shrink by `delta` pixels, never going below `MIN_SIZE`.
    pub fn adjust_size(&mut self, delta: i64) {
        let next = (i64::from(self.size) + delta).max(i64::from(MIN_SIZE));
        self.size = u32::try_from(next).unwrap_or(u32::MAX);
    }

    /// Select a palette entry. Out-of-range indices leave the state untouched.
    pub fn set_color_index(&mut self, index: usize) -> Result<(), Rejected> {
        if index > MAX_COLOR_INDEX {
            return Err(Rejected::ColorIndexOutOfRange(index));
        }
        self.color_index = index;
        Ok(())
    }

    /// Flip visibility and return the new value.
    pub fn toggle_visible(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjust_size_saturates_at_minimum() {
        let mut state = OverlayState::default();
        state.adjust_size(-1_000);
        assert_eq!(state.size(), MIN_SIZE);
    }

    #[test]
    fn adjust_size_is_unbounded_above_slider_max() {
        let mut state = OverlayState::default();
        state.adjust_size(1_000);
        assert_eq!(state.size(), DEFAULT_SIZE + 1_000);
    }

    #[test]
    fn rejected_color_keeps_previous_index() {
        let mut state = OverlayState::default();
        state.set_color_index(3).unwrap();
        assert_eq!(
            state.set_color_index(8),
            Err(Rejected::ColorIndexOutOfRange(8))
        );
        assert_eq!(state.color_index(), 3);
    }
}
