//! Core data types for the Pomodoro timer.
//!
//! This module defines the data structures used for:
//! - The work/break mode enumeration
//! - Session durations fixed at startup
//! - Timer state with its three operations (toggle, reset, tick)

// ============================================================================
// Mode
// ============================================================================

/// The interval type the timer is currently counting down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// A work session
    Work,
    /// A break between work sessions
    Break,
}

impl Mode {
    /// Returns the label shown in the UI.
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Work => "Work",
            Mode::Break => "Break",
        }
    }

    /// Returns the mode the timer switches to when this one expires.
    pub fn next(&self) -> Mode {
        match self {
            Mode::Work => Mode::Break,
            Mode::Break => Mode::Work,
        }
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Work
    }
}

// ============================================================================
// TimerConfig
// ============================================================================

/// Session durations in seconds.
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerConfig {
    /// Length of a work session in seconds
    pub work_secs: u32,
    /// Length of a break in seconds
    pub break_secs: u32,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            work_secs: 25 * 60,
            break_secs: 5 * 60,
        }
    }
}

impl TimerConfig {
    /// Creates a configuration from whole minutes, as given on the command line.
    pub fn from_minutes(work_minutes: u32, break_minutes: u32) -> Self {
        Self {
            work_secs: work_minutes * 60,
            break_secs: break_minutes * 60,
        }
    }

    /// Returns the configured duration for a mode, in seconds.
    pub fn duration_secs(&self, mode: Mode) -> u32 {
        match mode {
            Mode::Work => self.work_secs,
            Mode::Break => self.break_secs,
        }
    }

    /// Returns the configured duration for a mode, in whole minutes.
    ///
    /// Used to word the transition notifications.
    pub fn minutes(&self, mode: Mode) -> u32 {
        self.duration_secs(mode) / 60
    }
}

// ============================================================================
// TimerState
// ============================================================================

/// The complete state of the timer at one point in time.
///
/// Owned by the engine; the UI only ever sees clones, so a render always
/// works from one consistent snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    /// Current mode
    pub mode: Mode,
    /// Seconds left in the current mode, never above the configured duration
    pub remaining_seconds: u32,
    /// Whether the countdown is active
    pub running: bool,
    /// Session durations
    pub config: TimerConfig,
}

impl TimerState {
    /// Creates the startup state: a full, not yet running work session.
    pub fn new(config: TimerConfig) -> Self {
        Self {
            mode: Mode::Work,
            remaining_seconds: config.work_secs,
            running: false,
            config,
        }
    }

    /// Flips the running flag. Mode and remaining time are untouched.
    pub fn toggle_running(&mut self) {
        self.running = !self.running;
    }

    /// Returns to the startup state: a full, stopped work session.
    pub fn reset(&mut self) {
        self.mode = Mode::Work;
        self.remaining_seconds = self.config.work_secs;
        self.running = false;
    }

    /// Counts down one second.
    ///
    /// Returns true if the session has expired and the mode must switch.
    pub fn tick(&mut self) -> bool {
        if self.remaining_seconds > 0 {
            self.remaining_seconds -= 1;
        }
        self.remaining_seconds == 0
    }

    /// Flips the mode and refills the countdown with the new mode's duration.
    pub fn switch_mode(&mut self) {
        self.mode = self.mode.next();
        self.remaining_seconds = self.config.duration_secs(self.mode);
    }

    /// Fraction of the current session still remaining, as a percentage.
    ///
    /// Always within [0, 100].
    pub fn progress_percent(&self) -> f64 {
        let total = self.config.duration_secs(self.mode);
        if total == 0 {
            return 0.0;
        }
        f64::from(self.remaining_seconds) / f64::from(total) * 100.0
    }
}

// ============================================================================
// Tests
// ============================================================================
