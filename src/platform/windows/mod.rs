//! Windows implementation using Win32 and Direct2D.
//!
//! - UI components (layered overlay window, control panel)
//! - Input handling (global hotkeys, low-level mouse hook)
//! - Window styling (click-through, topmost)
//! - Process setup (DPI awareness, screen metrics, cursor)

pub mod backend;
pub mod input;
pub mod styling;
pub mod system;
pub mod ui;

pub use backend::Win32Backend;
pub use styling::Win32Styler;
