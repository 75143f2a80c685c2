//! Pomodoro Timer Library
//!
//! This library provides the core functionality for the tomatui terminal
//! Pomodoro timer. It includes:
//! - Timer engine with mode switching and countdown logic
//! - Desktop notification delivery for session transitions
//! - Full-screen terminal UI built on ratatui
//! - CLI argument parsing for session durations
//! - Type definitions for configuration and state

pub mod cli;
pub mod notify;
pub mod timer;
pub mod tui;
pub mod types;

// Re-export commonly used types for convenience
pub use types::{Mode, TimerConfig, TimerState};

// Re-export timer engine types
pub use timer::{run_ticker, TimerEngine, TimerEvent};

// Re-export notification types
pub use notify::{
    dispatch, transition_notice, DesktopNotifier, MockNotifier, Notice, Notifier, NotifyError,
};
