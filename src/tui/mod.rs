//! Terminal user interface.
//!
//! Elm-style split: `app` owns UI-local state and message handling, `event`
//! maps key presses to messages, `ui` renders frames. This module owns the
//! terminal lifecycle and the async event loop.

pub mod app;
pub mod event;
pub mod ui;

use std::io;
use std::sync::Arc;

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures_util::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::{mpsc, Mutex};
use tokio::time::{interval, Duration, MissedTickBehavior};

use crate::notify::{self, Notifier};
use crate::timer::{TimerEngine, TimerEvent};

use app::App;

// ============================================================================
// Entry Point
// ============================================================================

/// Main entry point for the UI.
///
/// Sets up the terminal, runs the event loop until the user quits, and
/// restores the terminal on the way out, including when the loop fails.
pub async fn run<N: Notifier>(
    engine: Arc<Mutex<TimerEngine>>,
    event_rx: mpsc::UnboundedReceiver<TimerEvent>,
    notifier: N,
    notify_enabled: bool,
) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new();

    // Main loop
    let result = run_app(
        &mut terminal,
        &mut app,
        &engine,
        event_rx,
        &notifier,
        notify_enabled,
    )
    .await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to restore cursor")?;

    result
}

// ============================================================================
// Event Loop
// ============================================================================

async fn run_app<N: Notifier>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    engine: &Arc<Mutex<TimerEngine>>,
    mut event_rx: mpsc::UnboundedReceiver<TimerEvent>,
    notifier: &N,
    notify_enabled: bool,
) -> Result<()> {
    let mut input = EventStream::new();

    // Heartbeat redraw so the countdown stays current even between events
    let mut redraw = interval(Duration::from_millis(250));
    redraw.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        // Render from a snapshot; the lock is never held across a draw
        let state = engine.lock().await.state().clone();
        terminal
            .draw(|frame| ui::draw(frame, app, &state))
            .context("Failed to draw frame")?;

        tokio::select! {
            maybe_event = input.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) => {
                        if let Some(msg) = event::handle_key(key, app) {
                            app.update(msg, engine).await;
                        }
                    }
                    // Resize and mouse events fall through to the redraw
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        return Err(e).context("Failed to read terminal input");
                    }
                    None => return Ok(()),
                }
            }
            timer_event = event_rx.recv() => {
                if let Some(event) = timer_event {
                    handle_timer_event(event, notifier, notify_enabled);
                }
            }
            _ = redraw.tick() => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Reacts to engine events. Ticks only trigger the redraw; mode switches
/// additionally log and fire a desktop notification.
fn handle_timer_event<N: Notifier>(event: TimerEvent, notifier: &N, notify_enabled: bool) {
    match event {
        TimerEvent::Tick { .. } => {}
        TimerEvent::ModeSwitched { mode, notice } => {
            tracing::info!(mode = mode.label(), "mode switched");
            if notify_enabled {
                notify::dispatch(notifier, &notice);
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
