//! TUI rendering with ratatui
//!
//! Gallows-free hangman: the revealed word, a lives gauge and the alphabet.

use super::app::{App, MessageStyle};
use crate::core::contracts::State;
use crate::core::{ALPHABET, Status};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪢 HANGMAN - Interactive Mode")
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
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40), // Word
            Constraint::Length(3),      // Lives
            Constraint::Min(4),         // Alphabet
        ])
        .split(area);

    render_word(f, app, chunks[0]);
    render_lives(f, app, chunks[1]);
    render_alphabet(f, app, chunks[2]);
}

fn render_word(f: &mut Frame, app: &App, area: Rect) {
    let (text, color) = match app.game.status() {
        Status::Active => (app.game.pattern().to_string(), Color::Yellow),
        Status::Won => (app.game.pattern().to_string(), Color::Green),
        Status::Lost => (spaced_upper(app.game.word().text()), Color::Red),
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            text,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!(
            "{} letters, {} hidden",
            app.game.word().len(),
            app.game.hidden()
        )),
    ];

    let paragraph = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(" Word ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn spaced_upper(text: &str) -> String {
    text.chars()
        .map(|c| c.to_ascii_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_lives(f: &mut Frame, app: &App, area: Rect) {
    let lives = app.game.lives();
    let starting = app.game.starting_lives().max(1);
    let percent = (u64::from(lives) * 100 / u64::from(starting)).min(100) as u16;
    let color = match lives {
        0 => Color::Red,
        1 | 2 => Color::Yellow,
        _ => Color::Green,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Lives ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{lives}/{}", app.game.starting_lives()));
    f.render_widget(gauge, area);
}

fn render_alphabet(f: &mut Frame, app: &App, area: Rect) {
    let hinted = app.hint.map(|hint| hint.choice.letter());

    let letters: Vec<Span> = ALPHABET
        .iter()
        .map(|&letter| {
            let label = format!(" {} ", char::from(letter).to_ascii_uppercase());
            let style = if !app.game.has_attempted(letter) {
                if hinted == Some(letter) {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                }
            } else if app.game.word().has_letter(letter) {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::CROSSED_OUT)
            };
            Span::styled(label, style)
        })
        .collect();

    let (first, second) = letters.split_at(13);
    let content = vec![Line::from(first.to_vec()), Line::from(second.to_vec())];

    let paragraph = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(" Alphabet ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(5)])
        .split(area);

    render_hint(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_hint(f: &mut Frame, app: &App, area: Rect) {
    let content = if let Some(hint) = app.hint {
        vec![
            Line::from(vec![
                Span::raw("Suggested: "),
                Span::styled(
                    hint.choice.as_char().to_ascii_uppercase().to_string(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(format!("Value:     {:.3}", hint.value)),
            Line::from(format!("Then:      {}", runners_up(app))),
        ]
    } else {
        vec![Line::from("Press '?' for a hint")]
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Agent ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

/// The next best letters after the hinted one
fn runners_up(app: &App) -> String {
    app.policy
        .ranked(&app.game)
        .into_iter()
        .filter(|(choice, _)| app.hint.is_none_or(|hint| hint.choice != *choice))
        .take(3)
        .map(|(choice, value)| format!("{} {value:.1}", choice.as_char().to_ascii_uppercase()))
        .collect::<Vec<_>>()
        .join(", ")
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

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let hints_text = format!("Hints: {}", app.stats.hints_used);
    let hints = Paragraph::new(hints_text).alignment(Alignment::Center);
    f.render_widget(hints, chunks[1]);

    let help_text = if app.game.is_complete() {
        "n: New Game | Esc: Quit"
    } else {
        "a-z: Guess | ?: Hint | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
