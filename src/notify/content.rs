//! Notification content construction.
//!
//! Builds the title/message pair announced when the timer switches modes.
//! The wording is derived from the configured durations so the text stays
//! accurate when sessions are lengthened or shortened on the command line.

use crate::types::{Mode, TimerConfig};

/// A title/message pair ready to be delivered as a desktop notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Short headline, e.g. "Work session completed!"
    pub title: String,
    /// One-sentence body naming the next session's length
    pub message: String,
}

/// Creates the notice announcing a switch into `new_mode`.
///
/// Switching into a break announces the completed work session; switching
/// into work announces the completed break.
#[must_use]
pub fn transition_notice(new_mode: Mode, config: &TimerConfig) -> Notice {
    match new_mode {
        Mode::Break => Notice {
            title: "Work session completed!".to_string(),
            message: format!("Time for a {}-minute break.", config.minutes(Mode::Break)),
        },
        Mode::Work => Notice {
            title: "Break completed!".to_string(),
            message: format!(
                "Time to get back to work for {} minutes.",
                config.minutes(Mode::Work)
            ),
        },
    }
}
