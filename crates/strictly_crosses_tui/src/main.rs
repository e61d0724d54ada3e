//! Strictly Crosses - terminal frontend
//!
//! Plays crosses and toes against a saved board: every key press is one
//! read → update → save → redraw cycle.

#![warn(missing_docs)]

mod app;
mod cli;
mod config;
mod input;
mod ui;

use anyhow::Result;
use app::App;
use clap::Parser;
use cli::Cli;
use config::CrossesConfig;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::path::Path;
use strictly_crosses::{FileStore, Game, KeyValueStore, MemoryStore, StateStore};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = CrossesConfig::load(cli.config.as_deref())?.with_overrides(&cli);

    init_tracing(config.log_file())?;
    info!(?config, memory = cli.memory, "Starting Strictly Crosses");

    if cli.memory {
        run(StateStore::with_key(MemoryStore::new(), config.storage_key().clone()))
    } else {
        let backend = FileStore::open(config.store_dir())?;
        run(StateStore::with_key(backend, config.storage_key().clone()))
    }
}

/// Sends logs to a file since stdout belongs to the UI.
fn init_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Opens the game and runs the UI until the user quits.
#[instrument(skip(store), fields(key = %store.key()))]
fn run<B: KeyValueStore>(store: StateStore<B>) -> Result<()> {
    let game = Game::open(store)?;
    let mut app = App::new(game, input::key_bindings())?;

    enable_raw_mode()?;
    let mut terminal = restore_on_error(enter_terminal(), restore_terminal)?;

    let res = run_app(&mut terminal, &mut app);

    restore_terminal()?;
    terminal.show_cursor()?;

    info!("Exiting");
    res
}

fn enter_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)
}

/// Runs `restore` before handing back a failed setup step.
fn restore_on_error<T, E: Into<anyhow::Error>>(
    result: std::result::Result<T, E>,
    restore: impl FnOnce() -> io::Result<()>,
) -> Result<T> {
    match result {
        Ok(value) => Ok(value),
        Err(e) => {
            if let Err(restore_err) = restore() {
                warn!(error = %restore_err, "Failed to restore terminal");
            }
            Err(e.into())
        }
    }
}

fn run_app<B: KeyValueStore>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App<B>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code)?;
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
