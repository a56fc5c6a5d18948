//! Click-through crosshair overlay for the center of the screen.
//!
//! Everything outside [`platform`] is pure Rust so tests run as normal
//! integration tests on any host.

pub mod error;
pub mod events;
pub mod handlers;
pub mod model;
pub mod overlay;
pub mod platform;

pub use error::{AppError, EventBusError, PlatformError};
pub use events::{AppEvent, EventBus, EventPublisher};
pub use handlers::{Dispatcher, Flow, WindowBackend};
pub use model::{OverlayState, Shape};
