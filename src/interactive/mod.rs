//! Interactive terminal UI module for the activity board
//!
//! One screen: a debounced filter bar over a grid of hue-tinted activity
//! tiles, with the current selection painted into a gradient header band.

pub mod app;
pub mod events;
pub mod grid;
pub mod messages;
pub mod ui;
pub mod utils;

pub use app::App;
pub use events::EventHandler;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::config::Config;

/// Run the interactive UI application
pub fn run_interactive(config: &Config, preselect: Option<&str>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(config, preselect);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Main application loop
fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    let event_handler = EventHandler::new();

    loop {
        // Draw UI
        terminal.draw(|f| ui::draw(f, app))?;

        // Handle events; ticks drive the filter debounce
        if !app.handle_event(event_handler.next()?)? {
            break;
        }
    }

    Ok(())
}
