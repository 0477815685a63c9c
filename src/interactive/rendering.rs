//! TUI rendering with ratatui
//!
//! Paints the engine's render-state snapshot: masked word, attempt gauge,
//! missed letters, stats, and the message log.

use super::app::{App, InputMode, MessageStyle};
use crate::core::MAX_ATTEMPTS;
use crate::engine::RenderState;
use crate::store::WordStore;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<S: WordStore>(f: &mut Frame, app: &App<S>) {
    let state = app.engine.render_state();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    // Header
    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Word + attempts
            Constraint::Percentage(40), // Stats + messages
        ])
        .split(chunks[1]);

    render_word_panel(f, &state, main_chunks[0]);
    render_info_panel(f, app, &state, main_chunks[1]);

    // Input area
    render_input(f, app, chunks[2]);

    // Status bar
    render_status(f, &state, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪢 HANGMAN")
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

fn render_word_panel(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Masked word
            Constraint::Length(3), // Attempts gauge
            Constraint::Length(4), // Missed letters
        ])
        .split(area);

    render_masked_word(f, state, chunks[0]);
    render_attempts(f, state, chunks[1]);
    render_missed(f, state, chunks[2]);
}

fn render_masked_word(f: &mut Frame, state: &RenderState, area: Rect) {
    let word = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            state.masked_word.to_uppercase(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .title(" Word ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(word, area);
}

fn render_attempts(f: &mut Frame, state: &RenderState, area: Rect) {
    let remaining = state.attempts_remaining;
    let pct = u16::from(remaining) * 100 / u16::from(MAX_ATTEMPTS);
    let color = match remaining {
        0..=2 => Color::Red,
        3..=4 => Color::Yellow,
        _ => Color::Green,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(pct)
        .label(format!("{remaining}/{MAX_ATTEMPTS} remaining"));

    f.render_widget(gauge, area);
}

fn render_missed(f: &mut Frame, state: &RenderState, area: Rect) {
    let missed: String = state
        .incorrect_letters
        .iter()
        .map(|c| c.to_ascii_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(" ");

    let content = if missed.is_empty() {
        Line::from(Span::styled("none yet", Style::default().fg(Color::DarkGray)))
    } else {
        Line::from(Span::styled(
            missed,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
    };

    let paragraph = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(" Missed Letters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_info_panel<S: WordStore>(
    f: &mut Frame,
    app: &App<S>,
    state: &RenderState,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Stats
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_stats(f, state, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_stats(f: &mut Frame, state: &RenderState, area: Rect) {
    let stats = state.stats;
    let content = vec![
        Line::from(format!("Games played: {}", stats.games_played)),
        Line::from(format!("Games won:    {}", stats.games_won)),
        Line::from(format!("Win rate:     {:.0}%", stats.win_rate())),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(paragraph, area);
}

fn render_messages<S: WordStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
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

fn render_input<S: WordStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let (title, color) = match app.input_mode {
        InputMode::Guess => (
            " Guess a Letter | Enter: Submit | TAB: Add Word ",
            Color::Yellow,
        ),
        InputMode::AddWord => (
            " Enter New Word | Enter: Submit | ESC: Cancel ",
            Color::Cyan,
        ),
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    let attempts_text = format!("Attempts: {}/{}", state.attempts_remaining, MAX_ATTEMPTS);
    let attempts = Paragraph::new(attempts_text).alignment(Alignment::Center);
    f.render_widget(attempts, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        state.stats.games_played,
        state.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help = Paragraph::new("ESC: Quit | TAB: Add Word | Enter: Submit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
