//! Rendering for the terminal UI.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap},
};

use crate::types::{Mode, TimerState};

use super::app::App;

// ============================================================================
// Drawing
// ============================================================================

/// Renders a full frame from a snapshot of the timer state.
pub fn draw(frame: &mut Frame, app: &App, state: &TimerState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Timer body
            Constraint::Length(3), // Key hints
        ])
        .split(frame.area());

    draw_header(frame, chunks[0]);
    draw_timer(frame, state, chunks[1]);
    draw_footer(frame, state, chunks[2]);

    // Overlay goes on top of everything else
    if app.show_help {
        draw_help_overlay(frame);
    }
}

fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Block::default()
        .borders(Borders::ALL)
        .title(" Pomodoro Timer ")
        .title_alignment(Alignment::Center);

    frame.render_widget(header, area);
}

fn draw_timer(frame: &mut Frame, state: &TimerState, area: Rect) {
    let color = mode_color(state.mode);

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(15),
            Constraint::Length(1), // Mode label
            Constraint::Length(1),
            Constraint::Length(1), // Countdown
            Constraint::Length(1),
            Constraint::Length(1), // Running status
            Constraint::Length(1),
            Constraint::Length(3), // Progress gauge
            Constraint::Percentage(15),
        ])
        .split(area);

    let mode_label = Paragraph::new(Line::from(Span::styled(
        state.mode.label(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(mode_label, sections[1]);

    let countdown = Paragraph::new(Line::from(Span::styled(
        format_mmss(state.remaining_seconds),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(countdown, sections[3]);

    let (status_text, status_color) = if state.running {
        ("RUNNING", Color::Green)
    } else {
        ("PAUSED", Color::Yellow)
    };
    let status = Paragraph::new(Line::from(Span::styled(
        status_text,
        Style::default()
            .fg(status_color)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(status, sections[5]);

    // The bar drains with the countdown: full at session start, empty at zero
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(color).bg(Color::Black))
        .percent(state.progress_percent() as u16);
    frame.render_widget(gauge, sections[7]);
}

fn draw_footer(frame: &mut Frame, state: &TimerState, area: Rect) {
    let space_hint = if state.running { "pause" } else { "start" };
    let hints = format!("space: {space_hint} | r: reset | ?: help | q: quit");

    let footer = Paragraph::new(Line::from(Span::styled(
        hints,
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(footer, area);
}

fn draw_help_overlay(frame: &mut Frame) {
    let area = centered_rect(50, 50, frame.area());

    let help_text = vec![
        Line::from(Span::styled(
            "Pomodoro Timer - Help",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("  space    - Start or pause the timer"),
        Line::from("  r        - Reset to a stopped work session"),
        Line::from("  ?        - Toggle this help"),
        Line::from("  q / Esc  - Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "Press ?, q or Esc to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help ")
                .style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, area);
    frame.render_widget(help, area);
}

// ============================================================================
// Helpers
// ============================================================================

fn mode_color(mode: Mode) -> Color {
    match mode {
        Mode::Work => Color::Red,
        Mode::Break => Color::Green,
    }
}

/// Formats a second count as zero-padded mm:ss.
fn format_mmss(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Helper to create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

// ============================================================================
// Tests
// ============================================================================
