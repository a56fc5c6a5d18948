//! Process-wide access to the application event bus.
//!
//! Win32 window procedures and hook callbacks are plain `extern "system"`
//! functions with no user data, so they reach the queue through here.
//! The bus is initialized once at startup via `init_event_bus()`.
//!
//! - `Sender` is stored in `OnceLock`, it is `Send + Sync`
//! - `Receiver` is stored in `Mutex`, only the UI thread locks it
//!
//! # Example
//!
//! ```ignore
//! // In main at startup:
//! events::init_event_bus()?;
//!
//! // In a window procedure:
//! events::publish(AppEvent::TogglePanel);
//!
//! // In the message loop:
//! for event in events::drain_events() { /* dispatch */ }
//! ```

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Mutex, OnceLock};

use super::bus::EventPublisher;
use super::types::AppEvent;
use crate::error::EventBusError;

static SENDER: OnceLock<Sender<AppEvent>> = OnceLock::new();

static RECEIVER: OnceLock<Mutex<Receiver<AppEvent>>> = OnceLock::new();

/// Initialize the global event bus. Only the first call succeeds.
pub fn init_event_bus() -> Result<(), EventBusError> {
    let (sender, receiver) = mpsc::channel();

    SENDER
        .set(sender)
        .map_err(|_| EventBusError::AlreadyInitialized)?;
    RECEIVER
        .set(Mutex::new(receiver))
        .map_err(|_| EventBusError::AlreadyInitialized)?;
    Ok(())
}

/// Get a publisher handle for the global event bus.
pub fn publisher() -> Result<EventPublisher, EventBusError> {
    SENDER
        .get()
        .map(|sender| EventPublisher::from_sender(sender.clone()))
        .ok_or(EventBusError::NotInitialized)
}

/// Publish an event to the global event bus.
///
/// Before `init_event_bus()` the event is dropped with a warning.
pub fn publish(event: AppEvent) {
    match SENDER.get() {
        Some(sender) => {
            // Receiver lives in a static, so this only fails during teardown
            let _ = sender.send(event);
        }
        None => log::warn!("event bus not initialized, dropping {:?}", event),
    }
}

/// Drain all pending events from the global event bus, oldest first.
///
/// Returns nothing before `init_event_bus()`.
pub fn drain_events() -> Vec<AppEvent> {
    let Some(receiver) = RECEIVER.get() else {
        return Vec::new();
    };

    // A poisoned lock still holds a usable receiver
    let receiver = receiver.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

    let mut events = Vec::new();
    while let Ok(event) = receiver.try_recv() {
        events.push(event);
    }
    events
}
