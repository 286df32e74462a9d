//! Activity tile grid rendering

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::color::tile_color;

use super::app::App;
use super::utils::truncate_str;

const TILE_WIDTH: u16 = 20;
const TILE_HEIGHT: u16 = 3;

/// Render the activity grid
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let snapshot = app.snapshot();
    let columns = (area.width / TILE_WIDTH).max(1) as usize;
    // Recorded so Up/Down know how far a "row" is.
    app.grid_columns.set(columns);

    if snapshot.display.is_empty() {
        render_empty(f, app, area);
        return;
    }

    let max_rows = (area.height / TILE_HEIGHT).max(1) as usize;
    let visible = columns * max_rows;

    for (i, option) in snapshot.display.iter().take(visible).enumerate() {
        let row = (i / columns) as u16;
        let col = (i % columns) as u16;
        // Clipped so a cramped terminal never pushes a tile off the buffer.
        let tile = Rect {
            x: area.x + col * TILE_WIDTH,
            y: area.y + row * TILE_HEIGHT,
            width: TILE_WIDTH,
            height: TILE_HEIGHT,
        }
        .intersection(area);
        if tile.width < 3 || tile.height < 3 {
            continue;
        }

        let is_cursor = i == app.cursor;
        let is_current = snapshot.current.as_ref() == Some(option);

        let border_style = if is_cursor {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let label = truncate_str(option.code(), TILE_WIDTH as usize - 4);
        let text = if is_current {
            format!("✓ {}", label)
        } else {
            label
        };

        let paragraph = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .bg(tile_color(option.hue()))
                    .fg(Color::Black),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style),
            );
        f.render_widget(paragraph, tile);
    }

    // Overflow note on the last grid line.
    let hidden = snapshot.display.len().saturating_sub(visible);
    if hidden > 0 && area.height > 0 {
        let note_area = Rect {
            x: area.x,
            y: area.y + area.height - 1,
            width: area.width,
            height: 1,
        };
        let note = Paragraph::new(format!("+{} more, narrow the filter", hidden))
            .alignment(Alignment::Right)
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(note, note_area);
    }
}

/// Placeholder for a filter with no matches
fn render_empty(f: &mut Frame, app: &App, area: Rect) {
    let snapshot = app.snapshot();
    let filter = app.board.catalog().filter_text();

    let text = if snapshot.show_add {
        format!("No activities match \"{}\" - Ctrl+N adds it", filter)
    } else {
        "No activities yet".to_string()
    };

    let placeholder = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(placeholder, area);
}
