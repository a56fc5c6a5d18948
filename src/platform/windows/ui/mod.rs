//! UI components for Windows.

pub mod overlay;
pub mod panel;

pub use overlay::*;
pub use panel::*;

/// NUL-terminated UTF-16 copy of `text` for Win32 string parameters.
pub(crate) fn wide(text: &str) -> Vec<u16> {
    text.encode_utf16().chain(std::iter::once(0)).collect()
}
