//! Main UI rendering logic

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::color::gradient_colors;

use super::app::{App, AppMode};
use super::grid;
use super::utils::get_message_style;

/// Main draw function
pub fn draw(f: &mut Frame, app: &App) {
    let size = f.size();

    // Create main layout
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Gradient header with current activity
            Constraint::Length(3), // Filter bar
            Constraint::Min(6),    // Activity grid
            Constraint::Length(2), // Messages
            Constraint::Length(3), // Footer
        ])
        .split(size);

    render_header(f, app, chunks[0]);
    render_filter_bar(f, app, chunks[1]);

    match app.mode {
        AppMode::Help => render_help(f, chunks[2]),
        AppMode::Normal => grid::render(f, app, chunks[2]),
    }

    render_messages(f, app, chunks[3]);
    render_footer(f, app, chunks[4]);
}

/// Render the gradient band with the current-activity label
///
/// The band fades from the selection's tint at the top towards white, the
/// same fade the original screen painted behind its title label.
fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let snapshot = app.snapshot();
    let hue = snapshot.current.as_ref().map(|o| o.hue()).unwrap_or(0.0);
    let colors = gradient_colors(hue, area.height as usize);
    let width = area.width as usize;

    let label = match &snapshot.current {
        Some(option) => format!(" {} ", option.code()),
        None => " nothing yet ".to_string(),
    };

    let lines: Vec<Line> = colors
        .iter()
        .enumerate()
        .map(|(row, color)| {
            let band = Style::default().bg(*color);
            if row == 1 {
                let pad = width.saturating_sub(label.width()) / 2;
                Line::from(vec![
                    Span::styled(" ".repeat(pad), band),
                    Span::styled(
                        label.clone(),
                        band.fg(Color::Black).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        " ".repeat(width.saturating_sub(pad + label.width())),
                        band,
                    ),
                ])
            } else {
                Line::from(Span::styled(" ".repeat(width), band))
            }
        })
        .collect();

    f.render_widget(Paragraph::new(lines), area);
}

/// Render the filter input; its title doubles as the add button
fn render_filter_bar(f: &mut Frame, app: &App, area: Rect) {
    let snapshot = app.snapshot();
    let inner_width = area.width.saturating_sub(2) as usize;
    let scroll = app.input.visual_scroll(inner_width);

    let title = if snapshot.show_add {
        Line::from(vec![
            Span::raw(" Filter "),
            Span::styled(
                format!("[ Ctrl+N: add \"{}\" ] ", app.input.value()),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    } else {
        Line::from(" Filter ")
    };

    let input = Paragraph::new(app.input.value())
        .scroll((0, scroll as u16))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(input, area);

    if app.mode == AppMode::Normal {
        let cursor_x = area.x + 1 + (app.input.visual_cursor().saturating_sub(scroll)) as u16;
        f.set_cursor(cursor_x.min(area.x + area.width.saturating_sub(2)), area.y + 1);
    }
}

/// Render the help screen
fn render_help(f: &mut Frame, area: Rect) {
    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(Color::Cyan),
        )),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Filtering:",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  (type)        Filter activities as you type"),
        Line::from("  Esc           Clear the filter (quit when empty)"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Selection:",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  Tab/Shift+Tab Move between tiles"),
        Line::from("  ↑/↓           Move between rows"),
        Line::from("  Enter         Select the highlighted activity"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Actions:",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  Ctrl+N        Add the filter text as a new activity"),
        Line::from("  Ctrl+C        Quit"),
        Line::from("  F1            Toggle this help"),
    ];

    let help = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(help, area);
}

/// Render recent messages
fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app
        .messages
        .iter()
        .rev()
        .take(area.height as usize)
        .rev()
        .map(|m| {
            Line::from(Span::styled(
                format!("{} {}", m.icon(), m.text),
                get_message_style(m.message_type),
            ))
        })
        .collect();

    f.render_widget(Paragraph::new(lines), area);
}

/// Render the footer with key hints
fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let hints = match app.mode {
        AppMode::Normal => {
            "Type to filter | Tab ↑ ↓: move | Enter: select | Ctrl+N: add | Esc: clear/quit | F1: help"
        }
        AppMode::Help => "Esc, q or F1 to go back",
    };

    let footer = Paragraph::new(hints)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(footer, area);
}
