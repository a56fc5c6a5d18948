//! Error types.

use thiserror::Error;

/// Failure of an operating-system call in the platform layer.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// A named OS call returned an error.
    #[error("{call} failed: {message}")]
    Call { call: &'static str, message: String },

    /// The primary screen reported no usable size.
    #[error("no primary screen available")]
    NoScreen,
}

impl PlatformError {
    /// Wrap the error of a failed OS call.
    pub fn call(call: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Call {
            call,
            message: err.to_string(),
        }
    }
}

/// Misuse of the process-wide event bus.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EventBusError {
    #[error("event bus already initialized")]
    AlreadyInitialized,

    #[error("event bus not initialized")]
    NotInitialized,
}

/// Anything that stops the app from starting.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    EventBus(#[from] EventBusError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_error_names_the_call() {
        let err = PlatformError::call("SetWindowLongPtrW", "access denied");
        assert_eq!(err.to_string(), "SetWindowLongPtrW failed: access denied");
    }

    #[test]
    fn app_error_is_transparent() {
        let err = AppError::from(EventBusError::AlreadyInitialized);
        assert_eq!(err.to_string(), "event bus already initialized");
    }
}
