//! Timer engine for the Pomodoro timer.
//!
//! This module provides the core timer functionality:
//! - The three user-facing operations (toggle, reset, tick)
//! - Mode switching when a session's countdown expires
//! - Event firing for the UI and for notifications
//! - The background ticking loop

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::{mpsc, Mutex};
use tokio::time::{interval, Duration, MissedTickBehavior};

use crate::notify::{transition_notice, Notice};
use crate::types::{Mode, TimerConfig, TimerState};

// ============================================================================
// TimerEvent
// ============================================================================

/// Timer events consumed by the UI loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    /// One second elapsed while running
    Tick {
        /// Remaining seconds after the decrement
        remaining_seconds: u32,
    },
    /// A session expired and the timer switched modes
    ModeSwitched {
        /// The mode the timer switched into
        mode: Mode,
        /// The notification announcing the switch
        notice: Notice,
    },
}

// ============================================================================
// TimerEngine
// ============================================================================

/// Owns the timer state and applies every mutation to it.
///
/// The engine is the single writer: user commands and the ticking loop both
/// go through it, serialized by the mutex it is shared under.
pub struct TimerEngine {
    /// Current timer state
    state: TimerState,
    /// Event sender channel
    event_tx: mpsc::UnboundedSender<TimerEvent>,
}

impl TimerEngine {
    /// Creates a new engine with a full, stopped work session.
    pub fn new(config: TimerConfig, event_tx: mpsc::UnboundedSender<TimerEvent>) -> Self {
        Self {
            state: TimerState::new(config),
            event_tx,
        }
    }

    /// Starts or pauses the countdown. Total; no error conditions.
    pub fn toggle_running(&mut self) {
        self.state.toggle_running();
    }

    /// Stops the timer and returns to a full work session.
    ///
    /// Emits no event; in particular, no notification fires.
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Counts down one second, switching modes on expiry.
    ///
    /// Does nothing while the timer is not running, so the ticking loop can
    /// call it unconditionally.
    ///
    /// # Errors
    ///
    /// Returns an error only if the event channel is closed.
    pub fn tick(&mut self) -> Result<()> {
        if !self.state.running {
            return Ok(());
        }

        let expired = self.state.tick();

        self.event_tx
            .send(TimerEvent::Tick {
                remaining_seconds: self.state.remaining_seconds,
            })
            .context("Failed to send tick event")?;

        if expired {
            self.switch_mode()?;
        }

        Ok(())
    }

    /// Flips the mode, refills the countdown, and emits the notification event.
    fn switch_mode(&mut self) -> Result<()> {
        self.state.switch_mode();

        let notice = transition_notice(self.state.mode, &self.state.config);

        self.event_tx
            .send(TimerEvent::ModeSwitched {
                mode: self.state.mode,
                notice,
            })
            .context("Failed to send mode switch event")?;

        Ok(())
    }

    /// Returns a reference to the current timer state.
    pub fn state(&self) -> &TimerState {
        &self.state
    }
}

// ============================================================================
// Ticking loop
// ============================================================================

/// Runs the background ticking loop.
///
/// Ticks once per second for the life of the process; the engine ignores
/// ticks while it is not running. Spawned as a tokio task and cancelled
/// implicitly when the runtime drops on process exit.
///
/// # Errors
///
/// Returns an error if the event channel closes, which only happens while
/// the UI is shutting down.
pub async fn run_ticker(engine: Arc<Mutex<TimerEngine>>) -> Result<()> {
    let mut ticker = interval(Duration::from_secs(1));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        ticker.tick().await;
        engine.lock().await.tick()?;
    }
}

// ============================================================================
// Tests
// ============================================================================
