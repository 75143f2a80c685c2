//! Timer module for the Pomodoro timer.
//!
//! This module contains the countdown machinery:
//! - `engine`: the state-owning engine and the background ticking loop

pub mod engine;

pub use engine::{run_ticker, TimerEngine, TimerEvent};
