//! # Notification Errors
//!
//! Error types for the operator notification channel.
//!
//! These errors never propagate past the submission orchestrator: a
//! failed notification is logged and the submission still succeeds.
//!
//! # Examples
//!
//! ```
//! use studio_quote::infrastructure::notifications::error::NotificationError;
//!
//! let err = NotificationError::transport("connection refused");
//! assert!(err.to_string().contains("refused"));
//! ```

use thiserror::Error;

/// Error type for notification dispatch.
#[derive(Debug, Error)]
pub enum NotificationError {
    /// Transport-level failure (SMTP unreachable, rejected, timed out).
    #[error("notification transport error: {0}")]
    Transport(String),

    /// The message could not be constructed.
    #[error("invalid notification message: {0}")]
    InvalidMessage(String),

    /// The channel is misconfigured (bad addresses, bad relay host).
    #[error("notification configuration error: {0}")]
    Configuration(String),
}

impl NotificationError {
    /// Creates a transport error.
    #[must_use]
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Creates an invalid message error.
    #[must_use]
    pub fn invalid_message(msg: impl Into<String>) -> Self {
        Self::InvalidMessage(msg.into())
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }
}

/// Result type for notification operations.
pub type NotificationResult<T> = Result<T, NotificationError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn transport_error_display() {
        let err = NotificationError::transport("smtp timeout");
        assert!(err.to_string().contains("transport"));
        assert!(err.to_string().contains("smtp timeout"));
    }

    #[test]
    fn configuration_error_display() {
        let err = NotificationError::configuration("bad from address");
        assert!(err.to_string().contains("configuration"));
    }
}
