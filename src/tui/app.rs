//! Application state and message handling for the TUI.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::timer::TimerEngine;

// ============================================================================
// Message
// ============================================================================

/// Messages produced by key handling and applied to the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Start the timer if paused, pause it if running.
    ToggleRunning,
    /// Reset the timer to a stopped work session.
    Reset,
    /// Show or hide the help overlay.
    ToggleHelp,
    /// Exit the application.
    Quit,
}

// ============================================================================
// App
// ============================================================================

/// UI-local state. Timer state lives in the shared [`TimerEngine`].
#[derive(Debug, Default)]
pub struct App {
    /// Set when the user asks to exit; the event loop checks it each pass.
    pub should_quit: bool,
    /// Whether the help overlay is currently visible.
    pub show_help: bool,
}

impl App {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a message, forwarding timer commands to the shared engine.
    pub async fn update(&mut self, msg: Message, engine: &Arc<Mutex<TimerEngine>>) {
        match msg {
            Message::ToggleRunning => engine.lock().await.toggle_running(),
            Message::Reset => engine.lock().await.reset(),
            Message::ToggleHelp => self.show_help = !self.show_help,
            Message::Quit => self.should_quit = true,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
