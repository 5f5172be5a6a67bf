//! Application error types.
//!
//! All errors use `thiserror` for automatic Error trait derivation and provide
//! clear error messages with context.

use thiserror::Error;

/// Application result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error enum for the virtwatch adapter.
#[derive(Error, Debug)]
pub enum Error {
    /// Instance was deleted between event delivery and identifier lookup.
    /// Recovered locally by dropping the event.
    #[error("instance not found: {0}")]
    InstanceNotFound(String),

    /// Power-state listener acquisition or startup failure. Fatal to the
    /// call that triggered it; not retried at this layer.
    #[error("listener error: {0}")]
    Listener(String),

    /// Console-worker collaborator failure.
    #[error("console worker error: {0}")]
    Console(String),

    /// Internal errors.
    #[error("internal error: {0}")]
    Internal(String),

    /// I/O errors.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

// Convenience constructors
impl Error {
    pub fn instance_not_found(msg: impl Into<String>) -> Self {
        Self::InstanceNotFound(msg.into())
    }

    pub fn listener(msg: impl Into<String>) -> Self {
        Self::Listener(msg.into())
    }

    pub fn console(msg: impl Into<String>) -> Self {
        Self::Console(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
