//! Input handling for Windows (global hotkeys, mouse hook).

pub mod hotkeys;
pub mod mouse_hook;

pub use hotkeys::{event_for_hotkey, register_hotkeys, unregister_hotkeys};
pub use mouse_hook::{install_mouse_hook, remove_mouse_hook};
