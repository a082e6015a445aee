//! TUI rendering with ratatui
//!
//! Gallows, revealed pattern, hint matches and message log.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{STARTING_LIVES, STARTING_WARNINGS};
use crate::output::formatters::{format_matches, gallows, lives_bar};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("HANGMAN")
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
    let game = &app.game;
    let missed = game.guessed().difference(game.secret().letters());

    let mut lines: Vec<Line> = gallows(game.lives())
        .into_iter()
        .map(|row| Line::from(Span::styled(row, Style::default().fg(Color::White))))
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        game.pattern().to_string().to_uppercase(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("Available: "),
        Span::styled(game.available_letters(), Style::default().fg(Color::Cyan)),
    ]));
    lines.push(Line::from(vec![
        Span::raw("Missed:    "),
        Span::styled(missed.to_string(), Style::default().fg(Color::Red)),
    ]));

    let board = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Lives gauge
            Constraint::Percentage(45), // Hints
            Constraint::Min(4),         // Messages
        ])
        .split(area);

    render_lives(f, app, chunks[0]);
    render_hints(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_lives(f: &mut Frame, app: &App, area: Rect) {
    let lives = app.game.lives();
    let color = match lives {
        0..=1 => Color::Red,
        2..=3 => Color::Yellow,
        _ => Color::Green,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Guesses Left ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(u16::from(lives) * 100 / u16::from(STARTING_LIVES))
        .label(format!(
            "{} {lives}/{STARTING_LIVES} | warnings {}/{STARTING_WARNINGS}",
            lives_bar(lives),
            app.game.warnings()
        ));

    f.render_widget(gauge, area);
}

fn render_hints(f: &mut Frame, app: &App, area: Rect) {
    let content = match &app.hints {
        None => "Type * for a hint".to_string(),
        Some(matches) => format_matches(matches),
    };

    let hints = Paragraph::new(content)
        .style(Style::default().fg(Color::Green))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Possible Matches ")
                .borders(Borders::ALL),
        );
    f.render_widget(hints, area);
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
                MessageStyle::Warning => Style::default().fg(Color::Yellow),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Guessing => (
            " Guess a letter or * for a hint ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
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

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[0],
    );

    let best_text = match app.stats.best_score {
        Some(score) => format!("Best score: {score}"),
        None => "Best score: -".to_string(),
    };
    f.render_widget(
        Paragraph::new(best_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = match app.input_mode {
        InputMode::GameOver => "q: Quit | n: New Game",
        InputMode::Guessing => "Enter: Submit | Esc: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
