//! TUI rendering with ratatui
//!
//! Tile board, on-screen keyboard, messages and status bar.

use super::app::{App, MessageStyle};
use crate::core::Outcome;
use crate::output::formatters::{KEYBOARD_ROWS, create_progress_bar};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let board_height = row_count(app.rules.max_attempts())
        .saturating_mul(2)
        .saturating_add(1);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),         // Header
            Constraint::Min(board_height), // Board and messages
            Constraint::Length(5),         // Keyboard
            Constraint::Length(3),         // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board
            Constraint::Percentage(40), // Messages and guesses
        ])
        .split(chunks[1]);

    let distribution_height = row_count(app.rules.max_attempts()).saturating_add(2);
    let side_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),                      // Messages
            Constraint::Length(distribution_height), // Guesses
        ])
        .split(main_chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_messages(f, app, side_chunks[0]);
    render_distribution(f, app, side_chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

/// Terminal rows needed for `count` lines, clamped to what a layout can hold
fn row_count(count: usize) -> u16 {
    u16::try_from(count).unwrap_or(u16::MAX)
}

/// Colours for a tile or key
fn outcome_style(outcome: Option<Outcome>) -> Style {
    match outcome {
        Some(Outcome::ExactMatch) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(Outcome::PresentElsewhere) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(Outcome::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let word_length = app.rules.word_length();
    let active = app.active_row();

    let mut lines = Vec::with_capacity(app.board.len() * 2);
    for row in &app.board {
        let mut spans = Vec::with_capacity(word_length * 2);
        for i in 0..word_length {
            let letter = row.letters().get(i).map_or('·', char::to_ascii_uppercase);
            let mut style = outcome_style(row.outcomes().get(i).copied());
            if active == Some(row.ordinal()) && row.outcomes().is_empty() {
                style = style.fg(Color::Yellow);
            }
            spans.push(Span::styled(format!(" {letter} "), style));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let last = KEYBOARD_ROWS.len() - 1;

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut spans: Vec<Span> = Vec::new();
            if i == last {
                spans.push(Span::styled(" ↵ ", outcome_style(None)));
                spans.push(Span::raw(" "));
            }
            for key in row.chars() {
                spans.push(Span::styled(
                    format!(" {} ", key.to_ascii_uppercase()),
                    outcome_style(app.hints.get(key)),
                ));
                spans.push(Span::raw(" "));
            }
            if i == last {
                spans.push(Span::styled(" ← ", outcome_style(None)));
            }
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL),
    );

    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

/// Wins by number of attempts used
fn render_distribution(f: &mut Frame, app: &App, area: Rect) {
    let distribution = &app.stats.guess_distribution;
    let most = distribution.iter().copied().max().unwrap_or(0);

    let lines: Vec<Line> = distribution
        .iter()
        .enumerate()
        .map(|(i, &wins)| {
            Line::from(vec![
                Span::raw(format!("{:>2} ", i + 1)),
                Span::styled(
                    create_progress_bar(wins, most, 12),
                    Style::default().fg(Color::Green),
                ),
                Span::raw(format!(" {wins}")),
            ])
        })
        .collect();

    let panel =
        Paragraph::new(lines).block(Block::default().title(" Guesses ").borders(Borders::ALL));
    f.render_widget(panel, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let attempt_text = match app.active_row() {
        Some(row) => format!("Attempt: {}/{}", row + 1, app.rules.max_attempts()),
        None => "Game over".to_string(),
    };
    let attempt = Paragraph::new(attempt_text).alignment(Alignment::Center);
    f.render_widget(attempt, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = if app.game.is_over() {
        "Ctrl+N: New Game | Esc: Quit"
    } else {
        "Enter: Submit | Backspace: Delete | Ctrl+N: New Game | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
