//! Event handlers.
//!
//! The dispatcher processes events from the event bus and drives the
//! window layer through the `WindowBackend` trait.

pub mod dispatcher;

pub use dispatcher::{Dispatcher, Flow, WindowBackend};
