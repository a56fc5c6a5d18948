//! Overlay window and its renderer.

pub mod renderer;
pub mod window;

pub use renderer::update_overlay;
pub use window::create_overlay_window;
