//! Control panel window module.

pub mod window;

pub use window::create_panel_window;
