//! CLI module for the Pomodoro timer.
//!
//! This module provides the command-line interface:
//! - `commands`: flag definitions using clap derive

pub mod commands;

pub use commands::Cli;
