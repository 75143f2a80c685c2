//! Desktop notification delivery.
//!
//! Mode switches are announced through the platform notification service.
//! This module provides:
//!
//! - A [`Notifier`] trait so tests can substitute a recording mock
//! - [`DesktopNotifier`], the notify-rust backed implementation
//! - [`dispatch`], which applies the fire-and-forget policy: delivery
//!   failures are logged and swallowed, never propagated into the timer
//!
//! # Example
//!
//! ```rust,ignore
//! use tomatui::notify::{dispatch, transition_notice, DesktopNotifier};
//! use tomatui::types::{Mode, TimerConfig};
//!
//! let notifier = DesktopNotifier::new();
//! let notice = transition_notice(Mode::Break, &TimerConfig::default());
//! dispatch(&notifier, &notice);
//! ```

mod content;
pub mod error;

use notify_rust::{Notification, Timeout};

pub use self::content::{transition_notice, Notice};
pub use self::error::NotifyError;

/// Sender label attached to every notification.
const APP_NAME: &str = "Pomodoro Timer";

/// How long a notification stays on screen, in milliseconds.
const DISPLAY_TIMEOUT_MS: u32 = 10_000;

// ============================================================================
// Notifier
// ============================================================================

/// Sends desktop notifications.
pub trait Notifier {
    /// Delivers one notice. Fire-and-forget; no acknowledgement is tracked.
    fn notify(&self, notice: &Notice) -> Result<(), NotifyError>;
}

/// Delivers a notice, logging failures instead of propagating them.
pub fn dispatch<N: Notifier>(notifier: &N, notice: &Notice) {
    if let Err(e) = notifier.notify(notice) {
        tracing::warn!(error = %e, title = %notice.title, "notification delivery failed");
    }
}

// ============================================================================
// DesktopNotifier
// ============================================================================

/// Notifier backed by the platform notification service.
#[derive(Debug, Default)]
pub struct DesktopNotifier;

impl DesktopNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&self, notice: &Notice) -> Result<(), NotifyError> {
        Notification::new()
            .appname(APP_NAME)
            .summary(&notice.title)
            .body(&notice.message)
            .timeout(Timeout::Milliseconds(DISPLAY_TIMEOUT_MS))
            .show()
            .map(|_| ())
            .map_err(|e| NotifyError::SendFailed(e.to_string()))
    }
}

// ============================================================================
// MockNotifier
// ============================================================================

/// Recording notifier for tests.
///
/// Stores every delivered notice and can be told to fail on demand.
#[derive(Debug, Default)]
pub struct MockNotifier {
    notices: std::sync::Mutex<Vec<Notice>>,
    should_fail: std::sync::atomic::AtomicBool,
}

impl MockNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self {
            notices: std::sync::Mutex::new(Vec::new()),
            should_fail: std::sync::atomic::AtomicBool::new(false),
        }
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail
            .store(should_fail, std::sync::atomic::Ordering::SeqCst);
    }

    #[must_use]
    pub fn sent_notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    #[must_use]
    pub fn notification_count(&self) -> usize {
        self.notices.lock().unwrap().len()
    }
}

impl Notifier for MockNotifier {
    fn notify(&self, notice: &Notice) -> Result<(), NotifyError> {
        if self.should_fail.load(std::sync::atomic::Ordering::SeqCst) {
            return Err(NotifyError::Unavailable);
        }
        self.notices.lock().unwrap().push(notice.clone());
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
