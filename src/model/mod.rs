//! Application domain model.
//!
//! This module contains pure business logic (no FFI dependencies):
//! the overlay state, the palette, shapes and configuration constants.

pub mod app_state;
pub mod constants;
pub mod palette;
pub mod shape;

pub use app_state::{OverlayState, Rejected};
pub use constants::*;
pub use palette::{PaletteEntry, Rgb, PALETTE};
pub use shape::Shape;
