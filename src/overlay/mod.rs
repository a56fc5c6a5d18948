//! Overlay surface logic: geometry, the resize gesture and shape drawing.
//!
//! No FFI here; the platform layer owns the actual window.

pub mod drawing;
pub mod geometry;
pub mod resize;

pub use drawing::{scene, DrawCommand, Scene};
pub use geometry::{Point, Rect};
pub use resize::DragResize;
