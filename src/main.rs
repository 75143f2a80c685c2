//! tomatui - A terminal Pomodoro timer
//!
//! This tool helps you stay focused using the Pomodoro Technique:
//! - 25 minutes of focused work
//! - 5 minutes of break
//! - Desktop notifications on every transition

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tokio::sync::{mpsc, Mutex};

use tomatui::cli::Cli;
use tomatui::notify::DesktopNotifier;
use tomatui::timer::{self, TimerEngine};
use tomatui::tui;

/// Main entry point
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize logging
    init_tracing();

    // Parse command line arguments
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber for logging.
///
/// Logs go to stderr so they never corrupt the alternate screen.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

/// Wires up the engine, the background ticker, and the UI.
async fn run(cli: Cli) -> Result<()> {
    let config = cli.timer_config();
    let notify_enabled = !cli.no_notify;

    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let engine = Arc::new(Mutex::new(TimerEngine::new(config, event_tx)));

    // The ticker runs for the life of the process; dropping the runtime on
    // exit tears it down
    tokio::spawn(timer::run_ticker(Arc::clone(&engine)));

    tui::run(engine, event_rx, DesktopNotifier::new(), notify_enabled).await
}
