//! Codenames board generator
//!
//! Draws a 5×5 board of word cards from a CSV word list. Cards can be
//! marked with team colors, replaced one at a time, or reshuffled.

mod board;
mod catalog;
mod config;
mod error;
mod logging;
mod models;
mod session;
mod ui;

use std::io;

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use catalog::Catalog;
use config::Config;
use session::Session;
use ui::App;

// ══════════════════════════════════════════════════════════════════════════
// Main Entry Point
// ══════════════════════════════════════════════════════════════════════════

fn main() -> Result<()> {
    let log_path = logging::init();
    tracing::info!(log = ?log_path, "starting");

    // Load config
    let (config, config_path) = Config::load_or_default(Config::default_path());

    // Load the word list before touching the terminal so errors stay readable
    let words_path = config.words_path();
    let catalog = Catalog::load(&words_path)
        .with_context(|| format!("Failed to load word list {:?}", words_path))?;

    let mut rng = rand::rng();
    let session = Session::new(catalog, &mut rng);
    let app = App::new(session, config, config_path, Box::new(rng));

    run_tui(app)
}

fn run_tui(mut app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        tracing::error!("exiting after error: {err:#}");
        eprintln!("Error: {}", err);
        return Err(err);
    }

    tracing::info!("bye");
    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|frame| app.render(frame))?;
        app.handle_events()?;
    }
    Ok(())
}
