//! Notification error types.

use thiserror::Error;

/// Errors that can occur while delivering a desktop notification.
///
/// Delivery is fire-and-forget; these errors are logged by the dispatcher
/// and never reach the timer.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The platform notification service rejected or dropped the request.
    #[error("failed to send notification: {0}")]
    SendFailed(String),

    /// No notification service is reachable on this system.
    #[error("notification service unavailable")]
    Unavailable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NotifyError::SendFailed("no session bus".to_string());
        assert_eq!(
            err.to_string(),
            "failed to send notification: no session bus"
        );

        let err = NotifyError::Unavailable;
        assert_eq!(err.to_string(), "notification service unavailable");
    }
}
